//! Numeric labels in a margin around the plot.
//!
//! One blank row goes above the canvas and one below, plus a second row
//! below when neighbouring x labels would touch.  The left margin is as
//! wide as the largest y label plus one.  Every point then writes its y
//! value right-justified against the y axis and its x value under its own
//! column.  Labels that run off the canvas are clipped.

use tracing::debug;

use crate::{
    core::{
        bounds::{Ranges, format_value},
        data::Dataset,
    },
    render::{
        canvas::{Canvas, Glyph},
        transform::{Anchor, Transform},
    },
};

/// Whether the x label of the `index`-th point (in x order) takes the
/// second label row when labels are crowded.
#[inline]
fn second_row(anchor: Anchor, index: usize) -> bool {
    match anchor {
        Anchor::Border => index % 2 == 0,
        Anchor::Origin(_) => index % 2 == 1,
    }
}

/// Write `text` so that its last character lands in `end_col`.
fn write_right_aligned(canvas: &mut Canvas, row: usize, end_col: usize, text: &str) {
    for (i, ch) in text.chars().rev().enumerate() {
        if let Some(col) = end_col.checked_sub(i) {
            canvas.set(row, col, Glyph::plain(ch));
        }
    }
}

/// Grow `canvas` by the label margins and write every point's labels.
///
/// `step` is the smallest column gap between neighbouring points.
pub fn place(canvas: &mut Canvas, t: &Transform, data: &Dataset, ranges: &Ranges, step: usize) {
    let (x_shift, y_shift) = ranges.label_widths();
    let (axis_row, axis_col) = t.axis_lines();

    canvas.pad_top(1);
    canvas.pad_bottom(1);
    let crowded = step < x_shift;
    if crowded {
        debug!(step, x_shift, "x labels crowded, alternating rows");
        canvas.pad_bottom(1);
    }
    let margin = y_shift + 1;
    canvas.pad_left(margin);

    let axis_row = axis_row + 1;
    let axis_col = axis_col + margin;

    for series in data {
        for (index, p) in series.sorted_by_x().into_iter().enumerate() {
            let (row, col) = t.to_canvas(t.cell(p));

            write_right_aligned(canvas, row + 1, axis_col - 1, &format_value(p.y));

            let label_row = axis_row + 1 + usize::from(crowded && second_row(t.anchor(), index));
            write_right_aligned(canvas, label_row, col + margin, &format_value(p.x));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::Point;

    fn text(canvas: &Canvas) -> Vec<String> {
        canvas
            .rows()
            .map(|r| r.iter().map(|g| g.ch).collect())
            .collect()
    }

    fn labelled(points: Vec<(f64, f64)>, width: usize, height: usize, anchor: Anchor) -> Canvas {
        let data = Dataset::from(points);
        let ranges = Ranges::of(&data).unwrap();
        let t = Transform::new(&ranges, width, height, anchor);
        let cells: Vec<_> = data.series()[0].sorted_by_x().into_iter().map(|p| t.cell(p)).collect();
        let step = crate::render::raster::min_step(&cells, width);
        let mut canvas = Canvas::new(width + 2, height + 2);
        place(&mut canvas, &t, &data, &ranges, step);
        canvas
    }

    #[test]
    fn test_margins_and_positions() {
        let canvas = labelled(vec![(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)], 3, 3, Anchor::Border);
        assert_eq!((canvas.width(), canvas.height()), (7, 7));
        assert_eq!(
            text(&canvas),
            [
                "       ",
                "       ",
                " 1     ",
                "       ",
                " 0     ",
                "       ",
                "   012 ",
            ]
        );
    }

    #[test]
    fn test_crowded_labels_alternate_rows() {
        let canvas = labelled(vec![(8.0, 0.0), (9.0, 1.0), (10.0, 2.0)], 3, 3, Anchor::Border);
        let rows = text(&canvas);
        assert_eq!(rows.len(), 8);
        // even points drop to the last row, odd ones stay just under the axis
        assert_eq!(rows[6], "    9  ");
        assert_eq!(rows[7], "   810 ");
    }

    #[test]
    fn test_crowded_rows_follow_x_order_not_input_order() {
        let sorted = labelled(vec![(8.0, 0.0), (9.0, 1.0), (10.0, 2.0)], 3, 3, Anchor::Border);
        let shuffled = labelled(vec![(10.0, 2.0), (8.0, 0.0), (9.0, 1.0)], 3, 3, Anchor::Border);
        assert_eq!(text(&shuffled), text(&sorted));
    }

    #[test]
    fn test_centred_labels_hug_the_axes() {
        let canvas = labelled(
            vec![(-1.0, -1.0), (1.0, 1.0)],
            3,
            3,
            Anchor::Origin(Point::new(0.0, 0.0)),
        );
        let rows = text(&canvas);
        // y labels end just left of the y axis at canvas column 2 + margin 2
        assert_eq!(rows[2], "   1   ");
        // the x axis is on row 3 after padding, x labels go just under it
        assert_eq!(rows[4], "  -1 1 ");
    }

    #[test]
    fn test_second_row_policy() {
        assert!(second_row(Anchor::Border, 0));
        assert!(!second_row(Anchor::Border, 1));
        assert!(second_row(Anchor::Origin(Point::new(0.0, 0.0)), 1));
    }
}
