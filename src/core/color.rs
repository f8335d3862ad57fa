//! ANSI colour escapes for chart glyphs.  No external deps.

use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("invalid hex colour digit")]
    InvalidHexDigit,
    #[error("hex colour must be exactly 6 digits")]
    InvalidHexLength,
    #[error("unknown colour `{0}`")]
    UnknownName(String),
}

// --- AnsiCode ---
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnsiCode {
    /// One of the eight basic foreground colours, `ESC[30m`..`ESC[37m`.
    Basic(u8),
    /// True-colour escape `ESC[38;2;R;G;Bm`.
    Rgb(u8, u8, u8),
    Reset,
}

impl AnsiCode {
    pub const BLACK: Self = Self::Basic(30);
    pub const RED: Self = Self::Basic(31);
    pub const GREEN: Self = Self::Basic(32);
    pub const YELLOW: Self = Self::Basic(33);
    pub const BLUE: Self = Self::Basic(34);
    pub const MAGENTA: Self = Self::Basic(35);
    pub const CYAN: Self = Self::Basic(36);
    pub const WHITE: Self = Self::Basic(37);

    /// Every named colour, in display order.
    pub const NAMED: [(&'static str, Self); 8] = [
        ("black", Self::BLACK),
        ("red", Self::RED),
        ("green", Self::GREEN),
        ("yellow", Self::YELLOW),
        ("blue", Self::BLUE),
        ("magenta", Self::MAGENTA),
        ("cyan", Self::CYAN),
        ("white", Self::WHITE),
    ];

    /// Parse colour names (`red`, `ansiRed`) or `#rrggbb`.
    pub fn from_name(s: &str) -> Result<Self, ColorError> {
        let s = s.trim();
        if s.starts_with('#') {
            return Self::from_hex(s);
        }
        let lower = s.to_ascii_lowercase();
        let name = lower.strip_prefix("ansi").unwrap_or(&lower);
        Self::NAMED
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, c)| *c)
            .ok_or_else(|| ColorError::UnknownName(s.to_owned()))
    }

    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let h = hex.trim_start_matches('#');
        if h.len() != 6 || !h.is_ascii() {
            return Err(ColorError::InvalidHexLength);
        }
        let byte = |s: &str| u8::from_str_radix(s, 16).map_err(|_| ColorError::InvalidHexDigit);
        Ok(Self::Rgb(byte(&h[..2])?, byte(&h[2..4])?, byte(&h[4..])?))
    }
}

impl fmt::Display for AnsiCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic(code) => write!(f, "\x1b[{code}m"),
            Self::Rgb(r, g, b) => write!(f, "\x1b[38;2;{r};{g};{b}m"),
            Self::Reset => f.write_str("\x1b[0m"),
        }
    }
}

/// Resolve a colour name into the `(prefix, suffix)` pair that wraps a glyph.
pub fn colorize(name: &str) -> Result<(AnsiCode, AnsiCode), ColorError> {
    Ok((AnsiCode::from_name(name)?, AnsiCode::Reset))
}

/// Wrap `text` in colour + reset sequence.
#[inline]
pub fn paint(c: AnsiCode, text: &str) -> String {
    format!("{c}{text}{}", AnsiCode::Reset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_colors() {
        assert_eq!(AnsiCode::from_name("red"), Ok(AnsiCode::RED));
        assert_eq!(AnsiCode::from_name("ansiRed"), Ok(AnsiCode::RED));
        assert_eq!(AnsiCode::from_name(" Cyan "), Ok(AnsiCode::CYAN));
        assert_eq!(
            AnsiCode::from_name("mauve"),
            Err(ColorError::UnknownName("mauve".into()))
        );
    }

    #[test]
    fn test_hex_colors() {
        assert_eq!(
            AnsiCode::from_name("#6048c1"),
            Ok(AnsiCode::Rgb(0x60, 0x48, 0xc1))
        );
        assert_eq!(AnsiCode::from_hex("#12345"), Err(ColorError::InvalidHexLength));
        assert_eq!(AnsiCode::from_hex("#12345z"), Err(ColorError::InvalidHexDigit));
    }

    #[test]
    fn test_colorize_wraps_with_reset() {
        let (prefix, suffix) = colorize("green").unwrap();
        assert_eq!(prefix.to_string(), "\x1b[32m");
        assert_eq!(suffix.to_string(), "\x1b[0m");
        assert_eq!(paint(AnsiCode::Rgb(1, 2, 3), "x"), "\x1b[38;2;1;2;3mx\x1b[0m");
    }
}
