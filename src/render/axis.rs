//! Axis lines, stamped over a finished plot.

use crate::{
    core::constants::AXIS,
    render::{
        canvas::{Canvas, Glyph},
        transform::Transform,
    },
};

/// Draw the y axis down the anchor column and the x axis along the anchor
/// row.  Only blank cells are written, so data glyphs and the ticks left by
/// the rasteriser survive.
pub fn overlay(canvas: &mut Canvas, t: &Transform) {
    let (axis_row, axis_col) = t.axis_lines();
    let last_col = canvas.width().saturating_sub(1);
    let junction = if axis_col == 0 && axis_row + 1 == canvas.height() {
        AXIS.nse
    } else {
        AXIS.cross
    };

    for row in 0..canvas.height() {
        let ch = match row {
            0 => AXIS.n,
            r if r == axis_row => junction,
            _ => AXIS.ns,
        };
        canvas.fill(row, axis_col, Glyph::plain(ch));
    }

    for col in (0..canvas.width()).filter(|&c| c != axis_col) {
        let ch = if col == last_col { AXIS.e } else { AXIS.we };
        canvas.fill(axis_row, col, Glyph::plain(ch));
    }
}
