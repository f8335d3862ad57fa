//! One-shot chart renderer.
//!
//! Every call owns a fresh canvas and runs the stages in order:
//! rasterise each series → overlay axes → place labels → serialise.

use std::io::Write;

use tracing::{debug, trace};

use crate::{
    core::{
        bounds::Ranges,
        config::Config,
        constants::{BORDER, MAX_PLOT_CELLS},
        data::Dataset,
        error::GraphError,
    },
    render::{
        axis,
        canvas::Canvas,
        labels,
        raster::{self, Connectors},
        transform::{Anchor, Transform},
    },
};

pub struct Renderer<'a> {
    config: &'a Config,
}

impl<'a> Renderer<'a> {
    #[inline]
    #[must_use]
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Build the finished canvas, labels included.
    pub fn draw(&self, data: &Dataset) -> Result<Canvas, GraphError> {
        let ranges = Ranges::of(data)?;
        let (width, height) = ranges.plot_size(data, self.config);
        let anchor = Anchor::from(self.config.axis_center);
        debug!(
            width,
            height,
            series = data.series().len(),
            ?anchor,
            "plot area"
        );

        let too_large = || GraphError::PlotTooLarge { width, height };
        let (canvas_w, canvas_h) = width
            .checked_add(2 * BORDER)
            .zip(height.checked_add(2 * BORDER))
            .ok_or_else(too_large)?;
        if canvas_w
            .checked_mul(canvas_h)
            .is_none_or(|cells| cells > MAX_PLOT_CELLS)
        {
            return Err(too_large());
        }

        let t = Transform::new(&ranges, width, height, anchor);
        let mut canvas = Canvas::new(canvas_w, canvas_h);

        let mut cells = Vec::new();
        for (index, series) in data.iter().enumerate() {
            let color = self
                .config
                .palette
                .as_ref()
                .and_then(|p| p.for_series(index));
            let glyphs = Connectors::new(color);
            cells = raster::draw_series(&mut canvas, &t, series, &glyphs);
            trace!(index, points = series.len(), "series drawn");
        }

        axis::overlay(&mut canvas, &t);

        // label spacing follows the last series drawn
        let step = raster::min_step(&cells, width);
        labels::place(&mut canvas, &t, data, &ranges, step);
        Ok(canvas)
    }

    /// Render to text: rows joined by `\n`, wrapped in a leading and a
    /// trailing newline.
    pub fn render(&self, data: &Dataset) -> Result<String, GraphError> {
        Ok(self.draw(data)?.to_string())
    }

    /// Render straight into `out`.
    pub fn print<W: Write>(&self, data: &Dataset, out: &mut W) -> Result<(), GraphError> {
        let canvas = self.draw(data)?;
        write!(out, "{canvas}")?;
        out.flush()?;
        Ok(())
    }
}

/// Render `data` with `config`.
pub fn render(data: &Dataset, config: &Config) -> Result<String, GraphError> {
    Renderer::new(config).render(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{color::AnsiCode, data::Point};

    #[test]
    fn test_print_matches_render() {
        let data = Dataset::from(vec![(0.0, 1.0), (1.0, 3.0), (2.0, 2.0)]);
        let cfg = Config::default();
        let mut out = Vec::new();
        Renderer::new(&cfg).print(&data, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), render(&data, &cfg).unwrap());
    }

    #[test]
    fn test_each_series_gets_its_colour() {
        let data = Dataset::from(vec![vec![(0.0, 0.0), (2.0, 0.0)], vec![(0.0, 2.0), (2.0, 2.0)]]);
        let cfg = Config::builder().colors(["red", "blue"]).build().unwrap();
        let canvas = Renderer::new(&cfg).draw(&data).unwrap();
        let colors: Vec<_> = canvas
            .rows()
            .flatten()
            .filter_map(|g| g.color)
            .collect();
        assert!(colors.contains(&AnsiCode::RED));
        assert!(colors.contains(&AnsiCode::BLUE));
    }

    #[test]
    fn test_oversized_plot_is_an_error() {
        // one row per unit of y would need ~1e9 rows
        let tall = Dataset::from(vec![(0.0, 0.0), (1.0, 1e9)]);
        assert!(matches!(
            render(&tall, &Config::default()),
            Err(GraphError::PlotTooLarge { width: 2, .. })
        ));

        let huge = Dataset::from(vec![(0.0, 0.0), (1.0, 1e300)]);
        assert!(matches!(
            render(&huge, &Config::default()),
            Err(GraphError::PlotTooLarge { .. })
        ));

        let cfg = Config::builder().height(usize::MAX).build().unwrap();
        assert!(matches!(
            render(&tall, &cfg),
            Err(GraphError::PlotTooLarge { .. })
        ));

        // an explicit height makes the same data drawable
        let cfg = Config::builder().height(10).build().unwrap();
        assert!(render(&huge, &cfg).is_ok());
    }

    #[test]
    fn test_empty_data_is_an_error() {
        let data = Dataset::from(Vec::<Point>::new());
        assert!(matches!(
            render(&data, &Config::default()),
            Err(GraphError::EmptyData)
        ));
    }
}
