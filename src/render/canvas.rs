//! Character grid every render stage draws into.
//!
//! Row 0 is the top, column 0 the left.  Writes outside the grid are
//! dropped, so label text that does not fit is clipped instead of failing.

use std::fmt::{self, Write};

use crate::core::{color::AnsiCode, constants::EMPTY};

/// One cell: a single-width character and the colour it is printed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub color: Option<AnsiCode>,
}

impl Glyph {
    pub const BLANK: Self = Self::plain(EMPTY);

    #[inline]
    #[must_use]
    pub const fn plain(ch: char) -> Self {
        Self { ch, color: None }
    }

    #[inline]
    #[must_use]
    pub const fn painted(ch: char, color: Option<AnsiCode>) -> Self {
        Self { ch, color }
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.color {
            Some(c) => write!(f, "{c}{}{}", self.ch, AnsiCode::Reset),
            None => f.write_char(self.ch),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    rows: Vec<Vec<Glyph>>,
    width: usize,
}

impl Canvas {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            rows: vec![vec![Glyph::BLANK; width]; height],
            width,
        }
    }

    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Glyph> {
        self.rows.get(row)?.get(col).copied()
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, glyph: Glyph) {
        if let Some(cell) = self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = glyph;
        }
    }

    /// Write `glyph` only where nothing has been drawn yet.
    #[inline]
    pub fn fill(&mut self, row: usize, col: usize, glyph: Glyph) {
        if self.get(row, col) == Some(Glyph::BLANK) {
            self.set(row, col, glyph);
        }
    }

    pub fn pad_top(&mut self, n: usize) {
        let blank = vec![Glyph::BLANK; self.width];
        self.rows.splice(0..0, std::iter::repeat_n(blank, n));
    }

    pub fn pad_bottom(&mut self, n: usize) {
        let blank = vec![Glyph::BLANK; self.width];
        self.rows.extend(std::iter::repeat_n(blank, n));
    }

    pub fn pad_left(&mut self, n: usize) {
        for row in &mut self.rows {
            row.splice(0..0, std::iter::repeat_n(Glyph::BLANK, n));
        }
        self.width += n;
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Glyph]> {
        self.rows.iter().map(Vec::as_slice)
    }
}

/// Rows joined by `\n`, with one leading and one trailing newline.
impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('\n')?;
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_char('\n')?;
            }
            for glyph in row {
                write!(f, "{glyph}")?;
            }
        }
        f.write_char('\n')
    }
}
