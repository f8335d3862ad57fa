//! Public-facing crate root – re-exports + one-shot helper.

pub mod cli;
pub mod core;
pub mod render;

pub use core::{
    color::{AnsiCode, ColorError, colorize},
    config::{Config, ConfigBuilder, Palette},
    data::{Dataset, ParseError, Point, Series, read_csv, read_json},
    error::{ConfigError, GraphError},
};

pub use render::{Canvas, Renderer, render};

/// Render anything that converts into a [`Dataset`]: one series as
/// `Vec<(f64, f64)>` / `Vec<[f64; 2]>`, or several as nested vectors.
///
/// ```
/// let chart = ascii_graph::plot(vec![(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)], &Default::default())?;
/// assert!(chart.contains('┓'));
/// # Ok::<(), ascii_graph::GraphError>(())
/// ```
pub fn plot(data: impl Into<Dataset>, config: &Config) -> Result<String, GraphError> {
    render(&data.into(), config)
}
