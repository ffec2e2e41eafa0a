//! Display tokens used when rendering geometric values as text.
//!
//! Rendering methods either take a [`FormatTokens`] explicitly or read the
//! process-wide value through [`tokens`]. The global can be set once with
//! [`install`]; until then the defaults apply.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{OperationError, Result};

static TOKENS: OnceLock<FormatTokens> = OnceLock::new();

/// Brackets, separator and type labels used by `render`/`to_text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatTokens {
    /// Opening bracket, `(` by default.
    pub open: String,
    /// Separator between coordinates, `, ` by default.
    pub separator: String,
    /// Closing bracket, `)` by default.
    pub close: String,
    pub point_label: String,
    pub line_label: String,
    pub circle_label: String,
    /// Renders numbers with `{:?}` instead of `{}`, so integral values keep
    /// their trailing `.0`.
    pub debug: bool,
}

impl Default for FormatTokens {
    fn default() -> Self {
        Self {
            open: "(".into(),
            separator: ", ".into(),
            close: ")".into(),
            point_label: "Point".into(),
            line_label: "Line".into(),
            circle_label: "Circle".into(),
            debug: false,
        }
    }
}

impl FormatTokens {
    /// Renders `label(v0, v1, ...)` with these tokens.
    #[must_use]
    pub fn tuple(&self, label: &str, values: &[f64]) -> String {
        let mut out = String::with_capacity(label.len() + values.len() * 8);
        out.push_str(label);
        out.push_str(&self.open);
        for (i, v) in values.iter().enumerate() {
            if i > 0 {
                out.push_str(&self.separator);
            }
            self.push_number(&mut out, *v);
        }
        out.push_str(&self.close);
        out
    }

    /// Appends a single number honoring the `debug` flag.
    pub(crate) fn push_number(&self, out: &mut String, v: f64) {
        let text = if self.debug {
            format!("{v:?}")
        } else {
            format!("{v}")
        };
        out.push_str(&text);
    }
}

/// Installs the process-wide tokens.
///
/// # Errors
///
/// Returns `OperationError::Failed` if tokens were already installed or
/// already read through [`tokens`].
pub fn install(tokens: FormatTokens) -> Result<()> {
    TOKENS
        .set(tokens)
        .map_err(|_| OperationError::Failed("format tokens already installed".into()).into())
}

/// Returns the process-wide tokens, initializing them to the defaults on
/// first access.
#[must_use]
pub fn tokens() -> &'static FormatTokens {
    TOKENS.get_or_init(FormatTokens::default)
}
