use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{OperationError, Result};

/// A plain labeled value handed to a presentation layer.
///
/// Holds caller-supplied identifiers without validating them beyond
/// parsing the numeric id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub id: i32,
    pub name: String,
    pub description: String,
}

impl Label {
    #[must_use]
    pub fn new(id: i32, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
        }
    }

    /// Builds a label from a textual id, as received from a request.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if `id` is not an integer.
    pub fn parse(
        id: &str,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self> {
        let id = id
            .trim()
            .parse::<i32>()
            .map_err(|e| OperationError::InvalidInput(format!("label id {id:?}: {e}")))?;
        Ok(Self::new(id, name, description))
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}: {}", self.id, self.name, self.description)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::PlangeoError;

    #[test]
    fn parse_echoes_input() {
        let label = Label::parse("42", "Name", "circle demo").unwrap();
        assert_eq!(label, Label::new(42, "Name", "circle demo"));
        assert_eq!(label.to_string(), "#42 Name: circle demo");
    }

    #[test]
    fn parse_accepts_surrounding_whitespace() {
        assert_eq!(Label::parse(" -7 ", "n", "d").unwrap().id, -7);
    }

    #[test]
    fn parse_rejects_non_integer() {
        let err = Label::parse("seven", "n", "d").unwrap_err();
        assert!(matches!(
            err,
            PlangeoError::Operation(OperationError::InvalidInput(_))
        ));
    }

    #[test]
    fn serde_round_trip() {
        let label = Label::new(1, "a", "b");
        let json = serde_json::to_string(&label).unwrap();
        assert_eq!(json, r#"{"id":1,"name":"a","description":"b"}"#);
        let back: Label = serde_json::from_str(&json).unwrap();
        assert_eq!(back, label);
    }
}
