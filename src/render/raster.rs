//! Staircase rasterisation of one series.
//!
//! Between two consecutive points (sorted by x) the line is drawn in two
//! phases: a vertical run in the column just left of the later point, then
//! a flat run along the earlier point's row up to that column.  Each point
//! also leaves a tick on both axes, which the axis overlay preserves.

use std::cmp::Ordering;

use crate::{
    core::{
        color::AnsiCode,
        constants::{AXIS, BORDER, CHART},
        data::Series,
    },
    render::{
        canvas::{Canvas, Glyph},
        transform::{Cell, Transform},
    },
};

/// Connector glyphs for one series, coloured once before drawing it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Connectors {
    pub we: Glyph,
    pub wns: Glyph,
    pub ns: Glyph,
    pub nse: Glyph,
    pub wsn: Glyph,
    pub sne: Glyph,
}

impl Connectors {
    #[must_use]
    pub const fn new(color: Option<AnsiCode>) -> Self {
        Self {
            we: Glyph::painted(CHART.we, color),
            wns: Glyph::painted(CHART.wns, color),
            ns: Glyph::painted(CHART.ns, color),
            nse: Glyph::painted(CHART.nse, color),
            wsn: Glyph::painted(CHART.wsn, color),
            sne: Glyph::painted(CHART.sne, color),
        }
    }
}

impl Default for Connectors {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Draw `series` and return its cells in x order.
pub fn draw_series(
    canvas: &mut Canvas,
    t: &Transform,
    series: &Series,
    glyphs: &Connectors,
) -> Vec<Cell> {
    let sorted = series.sorted_by_x();
    let scaled: Vec<(f64, f64)> = sorted.iter().map(|p| t.scale(*p)).collect();
    let cells: Vec<Cell> = sorted.iter().map(|p| t.cell(*p)).collect();
    let (axis_row, axis_col) = t.axis_lines();

    for (i, &cell) in cells.iter().enumerate() {
        let (row, col) = t.to_canvas(cell);
        canvas.fill(axis_row, col, Glyph::plain(AXIS.x));
        canvas.fill(row, axis_col, Glyph::plain(AXIS.y));

        if i > 0 {
            let (prev_x, prev_y) = scaled[i - 1];
            let (curr_x, curr_y) = scaled[i];
            let from = t.level(prev_y);

            climb(canvas, row, cell.col, from, t.level(curr_y), glyphs);

            let flat_row = t.row_of(from) + BORDER;
            for c in t.column(prev_x) + 1..t.column(curr_x) {
                canvas.set(flat_row, c, glyphs.we);
            }
        }
    }

    if let Some(&last) = cells.last() {
        let (row, col) = t.to_canvas(last);
        canvas.set(row, col, glyphs.we);
    }
    cells
}

/// Vertical run in canvas column `col`, ending at canvas row `row` (the
/// later point's row) after `from.abs_diff(to)` steps.
fn climb(canvas: &mut Canvas, row: usize, col: usize, from: usize, to: usize, g: &Connectors) {
    match from.cmp(&to) {
        Ordering::Greater => {
            // falling: the run goes up from `row` to the earlier point
            let n = from - to;
            canvas.set(row, col, g.nse);
            for k in 1..n {
                canvas.set(row - k, col, g.ns);
            }
            canvas.set(row - n, col, g.wns);
        }
        Ordering::Less => {
            let n = to - from;
            canvas.set(row, col, g.sne);
            for k in 1..n {
                canvas.set(row + k, col, g.ns);
            }
            canvas.set(row + n, col, g.wsn);
        }
        Ordering::Equal => canvas.set(row, col, g.we),
    }
}

/// Smallest column gap between neighbouring cells, `width` if there is none.
#[must_use]
pub fn min_step(cells: &[Cell], width: usize) -> usize {
    cells
        .windows(2)
        .map(|w| w[1].col.saturating_sub(w[0].col))
        .fold(width, usize::min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::{bounds::Ranges, data::Dataset},
        render::transform::Anchor,
    };

    fn draw(points: Vec<(f64, f64)>, width: usize, height: usize) -> (Canvas, Vec<Cell>) {
        let data = Dataset::from(points);
        let ranges = Ranges::of(&data).unwrap();
        let t = Transform::new(&ranges, width, height, Anchor::Border);
        let mut canvas = Canvas::new(width + 2, height + 2);
        let cells = draw_series(&mut canvas, &t, &data.series()[0], &Connectors::default());
        (canvas, cells)
    }

    fn column(canvas: &Canvas, col: usize) -> String {
        canvas.rows().map(|r| r[col].ch).collect()
    }

    fn count(canvas: &Canvas, ch: char) -> usize {
        canvas.rows().flatten().filter(|g| g.ch == ch).count()
    }

    #[test]
    fn test_rising_run() {
        let (canvas, _) = draw(vec![(0.0, 0.0), (1.0, 5.0)], 2, 6);
        assert_eq!(column(&canvas, 1), " ┏┃┃┃┃┛┬");
        assert_eq!(count(&canvas, CHART.ns) + count(&canvas, CHART.wsn), 5);
        assert_eq!(count(&canvas, CHART.wns), 0);
    }

    #[test]
    fn test_falling_run() {
        let (canvas, _) = draw(vec![(0.0, 3.0), (1.0, 0.0)], 2, 4);
        assert_eq!(column(&canvas, 1), " ┓┃┃┗┬");
        assert_eq!(count(&canvas, CHART.sne), 0);
    }

    #[test]
    fn test_flat_run_fills_the_gap() {
        let (canvas, cells) = draw(vec![(0.0, 1.0), (4.0, 1.0)], 5, 3);
        let rows: Vec<String> = canvas.rows().map(|r| r.iter().map(|g| g.ch).collect()).collect();
        assert_eq!(rows[3], "┤━━━━━ ");
        assert_eq!(min_step(&cells, 5), 4);
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let (a, _) = draw(vec![(0.0, 0.0), (1.0, 2.0), (2.0, 1.0)], 3, 3);
        let (b, _) = draw(vec![(2.0, 1.0), (0.0, 0.0), (1.0, 2.0)], 3, 3);
        assert_eq!(a, b);
    }

    #[test]
    fn test_single_point_is_one_marker() {
        let (canvas, cells) = draw(vec![(3.0, 4.0)], 1, 1);
        assert_eq!(count(&canvas, CHART.we), 1);
        assert_eq!(count(&canvas, CHART.ns), 0);
        assert_eq!(min_step(&cells, 1), 1);
    }

    #[test]
    fn test_colored_connectors() {
        let g = Connectors::new(Some(AnsiCode::RED));
        assert_eq!(g.ns.color, Some(AnsiCode::RED));
        assert_eq!(g.we.ch, CHART.we);
    }
}
