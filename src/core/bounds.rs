//! Geometry helpers: axis ranges, default plot size + terminal size plumbing.

use terminal_size::{Height, Width, terminal_size};

use crate::core::{
    config::Config,
    constants::{BORDER, FALLBACK_TERMINAL, MIN_AUTO_HEIGHT},
    data::{Dataset, Point},
    error::GraphError,
};

/// Which axis we’re measuring.
#[derive(Clone, Copy, Debug)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Inclusive `(min, max)` over `points`, `None` when there are none.
    #[must_use]
    pub fn bounds<'a>(self, points: impl IntoIterator<Item = &'a Point>) -> Option<(f64, f64)> {
        points
            .into_iter()
            .map(|p| match self {
                Self::X => p.x,
                Self::Y => p.y,
            })
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((low, high)) => Some((low.min(v), high.max(v))),
            })
    }
}

/// Joint extent of every series in a data set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ranges {
    pub x: (f64, f64),
    pub y: (f64, f64),
}

impl Ranges {
    /// Scan the whole data set.
    ///
    /// Fails with `EmptyData` when there is not a single point, and with
    /// `NonFinite` on the first NaN / infinite coordinate.
    pub fn of(data: &Dataset) -> Result<Self, GraphError> {
        for (series, s) in data.iter().enumerate() {
            if let Some(index) = s.points().iter().position(|p| !p.is_finite()) {
                return Err(GraphError::NonFinite { series, index });
            }
        }
        match (Axis::X.bounds(data.points()), Axis::Y.bounds(data.points())) {
            (Some(x), Some(y)) => Ok(Self { x, y }),
            _ => Err(GraphError::EmptyData),
        }
    }

    /// Plot area in cells, honouring explicit sizes from `cfg`.
    ///
    /// * width defaults to the length of the first series;
    /// * height defaults to one row per unit of y, or one row per point when
    ///   that would leave fewer than three rows.
    #[must_use]
    pub fn plot_size(&self, data: &Dataset, cfg: &Config) -> (usize, usize) {
        let width = cfg
            .width
            .unwrap_or_else(|| data.series().first().map_or(1, |s| s.len().max(1)));

        let height = cfg.height.unwrap_or_else(|| {
            let rows = (self.y.1 - self.y.0 + 1.0).round() as usize;
            if rows < MIN_AUTO_HEIGHT {
                data.total_points()
            } else {
                rows
            }
        });
        (width, height)
    }

    /// Characters taken by the widest labels: `(x_shift, y_shift)`.
    #[must_use]
    pub fn label_widths(&self) -> (usize, usize) {
        (
            format_value(self.x.1).chars().count(),
            format_value(self.y.1).chars().count(),
        )
    }
}

/// Shortest round-trip text for an axis label.
///
/// Magnitudes in `[1e-6, 1e21)` print in plain decimal, everything else in
/// exponent form with an explicit sign (`1e+21`, `2.5e-8`).  Negative zero
/// prints as `0`.
#[must_use]
pub fn format_value(v: f64) -> String {
    if v == 0.0 {
        return "0".to_owned();
    }
    let magnitude = v.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return v.to_string();
    }
    let text = format!("{v:e}");
    match text.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => text,
    }
}

/// Current terminal geometry (80×30 fallback).
#[inline]
#[must_use]
pub fn terminal_geometry() -> (Width, Height) {
    terminal_size().unwrap_or((Width(FALLBACK_TERMINAL.0), Height(FALLBACK_TERMINAL.1)))
}

/// Largest plot area that fits the terminal once the border, the y label
/// margin and the label rows are accounted for.
#[inline]
#[must_use]
pub fn graph_dims((w, h): (Width, Height), ranges: &Ranges) -> (usize, usize) {
    let (_, y_shift) = ranges.label_widths();
    let x_chars = usize::from(w.0).saturating_sub(2 * BORDER + y_shift + 1);
    // two border rows, two label rows, a spare for crowded x labels and the prompt
    let y_chars = usize::from(h.0).saturating_sub(2 * BORDER + 4);
    (x_chars.max(1), y_chars.max(1))
}
