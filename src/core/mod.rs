//! Data model, configuration and the lookup tables the renderer consumes.

pub mod bounds;
pub mod color;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod rng;

// re-export frequently-used items for convenience
pub use bounds::{Axis, Ranges};
pub use color::{AnsiCode, ColorError, colorize, paint};
pub use config::{Config, ConfigBuilder, Palette};
pub use constants::{AXIS, AxisChars, CHART, ChartChars, EMPTY};
pub use data::{Dataset, ParseError, Point, Series};
pub use error::{ConfigError, GraphError};
