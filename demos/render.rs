//! Renders a handful of geometric queries as text, the way a presentation
//! layer would.
//!
//! Usage:
//! ```text
//! cargo run --example render                       # default label
//! cargo run --example render -- 7 "two circles"    # id and description
//! RUST_LOG=plangeo=debug cargo run --example render
//! ```

use plangeo::geometry::{AXIS_X, AXIS_Y};
use plangeo::operations::{cross_circle_and_line, cross_circles, cross_lines};
use plangeo::{Circle, FormatTokens, Label, Point, Result};

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for plangeo.
    // Override with RUST_LOG env var (e.g. RUST_LOG=plangeo=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("render=info".parse().unwrap_or_default())
        .add_directive("plangeo=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    plangeo::format::install(FormatTokens::default())?;

    let mut args = std::env::args().skip(1);
    let id = args.next().unwrap_or_else(|| "1".into());
    let description = args.next().unwrap_or_else(|| "intersections".into());
    let label = Label::parse(&id, "Name", description)?;
    tracing::info!(%label, "rendering");
    println!("{label}");

    println!("{AXIS_X} x {AXIS_Y}: {}", show(cross_lines(&AXIS_X, &AXIS_Y))?);

    let circle = Circle::from_coords(0.0, 0.0, 5.0);
    println!(
        "{circle} x {AXIS_X}: {}",
        show_pair(cross_circle_and_line(&circle, &AXIS_X)?)?
    );

    let near = Circle::from_coords(8.0, 0.0, 5.0);
    let far = Circle::from_coords(30.0, 0.0, 1.0);
    println!("{circle} x {near}: {}", show_pair(cross_circles(&circle, &near)?)?);
    println!("{circle} x {far}: {}", show_pair(cross_circles(&circle, &far)?)?);

    Ok(())
}

fn show(p: Option<Point>) -> Result<String> {
    match p {
        Some(p) => p.to_text(),
        None => Ok("none".into()),
    }
}

fn show_pair(pair: Option<(Point, Point)>) -> Result<String> {
    match pair {
        Some((a, b)) => Ok(format!("{}, {}", a.to_text()?, b.to_text()?)),
        None => Ok("none".into()),
    }
}
