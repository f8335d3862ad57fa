//! Centralised error types used across the crate.

use std::io;

use thiserror::Error;

use crate::core::{color::ColorError, data::ParseError};

/// Precise configuration faults.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{axis} must be a positive number of cells, got {value}")]
    InvalidDimension { axis: &'static str, value: usize },
    #[error(transparent)]
    Color(#[from] ColorError),
}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Color(#[from] ColorError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("data set is empty")]
    EmptyData,
    #[error("series {series}, point {index}: coordinates must be finite")]
    NonFinite { series: usize, index: usize },
    #[error("plot area of {width}x{height} cells is too large; set an explicit width / height")]
    PlotTooLarge { width: usize, height: usize },
}
