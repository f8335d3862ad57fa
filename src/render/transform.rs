//! Data space ↔ plot grid mapping.
//!
//! Scaling is linear: x into `[0, width-1]` columns, y into
//! `[0, height-1]` levels counted from the bottom.  Rows are levels flipped
//! so that larger y lands nearer the top.  Canvas positions add the
//! one-cell border reserved for the axes.

use tracing::debug;

use crate::core::{bounds::Ranges, constants::BORDER, data::Point};

/// Where the axes are drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Anchor {
    /// Left column and bottom row of the canvas.
    Border,
    /// Through the cell holding this data-space point.
    Origin(Point),
}

impl From<Option<Point>> for Anchor {
    fn from(p: Option<Point>) -> Self {
        p.map_or(Self::Border, Self::Origin)
    }
}

/// Plot-area cell, without the border.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub col: usize,
    pub row: usize,
}

/// One axis: `low..=high` onto `0..=extent`.
#[derive(Clone, Copy, Debug)]
struct Scale {
    low: f64,
    span: f64,
    extent: f64,
}

impl Scale {
    fn new((low, high): (f64, f64), cells: usize) -> Self {
        let span = (high - low).abs();
        Self {
            low,
            // a single-valued range maps every value onto the first cell
            span: if span == 0.0 { 1.0 } else { span },
            extent: cells.saturating_sub(1) as f64,
        }
    }

    #[inline]
    fn forward(&self, v: f64) -> f64 {
        self.extent * (v - self.low) / self.span
    }

    #[inline]
    fn inverse(&self, s: f64) -> f64 {
        if self.extent == 0.0 {
            self.low
        } else {
            self.low + s * self.span / self.extent
        }
    }

    /// Nearest whole step, clamped into the grid.
    #[inline]
    fn snap(&self, s: f64) -> usize {
        s.round().clamp(0.0, self.extent) as usize
    }
}

#[derive(Clone, Debug)]
pub struct Transform {
    x: Scale,
    y: Scale,
    height: usize,
    anchor: Anchor,
    origin: Option<Cell>,
}

impl Transform {
    #[must_use]
    pub fn new(ranges: &Ranges, width: usize, height: usize, anchor: Anchor) -> Self {
        let mut t = Self {
            x: Scale::new(ranges.x, width),
            y: Scale::new(ranges.y, height),
            height,
            anchor,
            origin: None,
        };
        if let Anchor::Origin(p) = anchor {
            let (sx, sy) = t.scale(p);
            let cell = t.cell_at(sx, sy);
            if (sx.round(), sy.round()) != (cell.col as f64, t.level_of(cell.row) as f64) {
                debug!(requested = ?p, used = ?t.data_at(cell), "axis origin outside plot, clamped");
            }
            t.origin = Some(cell);
        }
        t
    }

    #[inline]
    #[must_use]
    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// Continuous grid coordinates `(column, level)`, before rounding.
    #[inline]
    #[must_use]
    pub fn scale(&self, p: Point) -> (f64, f64) {
        (self.x.forward(p.x), self.y.forward(p.y))
    }

    /// Whole column of a scaled x value.
    #[inline]
    #[must_use]
    pub fn column(&self, scaled_x: f64) -> usize {
        self.x.snap(scaled_x)
    }

    /// Whole level of a scaled y value (0 is the bottom row).
    #[inline]
    #[must_use]
    pub fn level(&self, scaled_y: f64) -> usize {
        self.y.snap(scaled_y)
    }

    /// Plot row of a level.
    #[inline]
    #[must_use]
    pub fn row_of(&self, level: usize) -> usize {
        self.height.saturating_sub(1).saturating_sub(level)
    }

    #[inline]
    fn level_of(&self, row: usize) -> usize {
        self.height.saturating_sub(1).saturating_sub(row)
    }

    fn cell_at(&self, sx: f64, sy: f64) -> Cell {
        Cell {
            col: self.x.snap(sx),
            row: self.row_of(self.y.snap(sy)),
        }
    }

    /// Cell a data point is drawn in.
    #[inline]
    #[must_use]
    pub fn cell(&self, p: Point) -> Cell {
        let (sx, sy) = self.scale(p);
        self.cell_at(sx, sy)
    }

    /// Data-space estimate for the centre of `cell`.
    #[must_use]
    pub fn data_at(&self, cell: Cell) -> Point {
        Point::new(
            self.x.inverse(cell.col as f64),
            self.y.inverse(self.level_of(cell.row) as f64),
        )
    }

    /// Resolved axis origin, `None` in border mode.
    #[inline]
    #[must_use]
    pub fn origin(&self) -> Option<Cell> {
        self.origin
    }

    /// Canvas `(row, column)` of a plot cell.
    #[inline]
    #[must_use]
    pub fn to_canvas(&self, cell: Cell) -> (usize, usize) {
        (cell.row + BORDER, cell.col + BORDER)
    }

    /// Canvas row of the x axis and canvas column of the y axis.
    #[must_use]
    pub fn axis_lines(&self) -> (usize, usize) {
        match self.origin {
            None => (self.height + 2 * BORDER - 1, 0),
            Some(cell) => self.to_canvas(cell),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranges(x: (f64, f64), y: (f64, f64)) -> Ranges {
        Ranges { x, y }
    }

    #[test]
    fn test_cells_flip_y() {
        let t = Transform::new(&ranges((0.0, 2.0), (0.0, 1.0)), 3, 3, Anchor::Border);
        assert_eq!(t.scale(Point::new(1.0, 1.0)), (1.0, 2.0));
        assert_eq!(t.cell(Point::new(0.0, 0.0)), Cell { col: 0, row: 2 });
        assert_eq!(t.cell(Point::new(2.0, 1.0)), Cell { col: 2, row: 0 });
        assert_eq!(t.to_canvas(Cell { col: 2, row: 0 }), (1, 3));
    }

    #[test]
    fn test_degenerate_range_does_not_divide_by_zero() {
        let t = Transform::new(&ranges((4.0, 4.0), (7.0, 7.0)), 5, 5, Anchor::Border);
        let (sx, sy) = t.scale(Point::new(4.0, 7.0));
        assert!(sx.is_finite() && sy.is_finite());
        assert_eq!(t.cell(Point::new(4.0, 7.0)), Cell { col: 0, row: 4 });
    }

    #[test]
    fn test_inverse_recovers_grid_values() {
        let t = Transform::new(&ranges((0.0, 10.0), (-5.0, 5.0)), 11, 11, Anchor::Border);
        for p in [Point::new(0.0, -5.0), Point::new(3.0, 1.0), Point::new(10.0, 5.0)] {
            assert_eq!(t.data_at(t.cell(p)), p);
        }
    }

    #[test]
    fn test_origin_at_min_corner_matches_border_cell() {
        let r = ranges((0.0, 4.0), (0.0, 8.0));
        let border = Transform::new(&r, 5, 9, Anchor::Border);
        let centred = Transform::new(&r, 5, 9, Anchor::Origin(Point::new(0.0, 0.0)));
        assert_eq!(
            centred.axis_lines(),
            border.to_canvas(border.cell(Point::new(0.0, 0.0)))
        );
        assert_eq!(border.axis_lines(), (10, 0));
    }

    #[test]
    fn test_origin_outside_range_is_clamped() {
        let t = Transform::new(
            &ranges((0.0, 4.0), (0.0, 4.0)),
            5,
            5,
            Anchor::Origin(Point::new(-10.0, 10.0)),
        );
        assert_eq!(t.origin(), Some(Cell { col: 0, row: 0 }));
        assert_eq!(t.axis_lines(), (1, 1));
    }
}
