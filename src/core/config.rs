//! Run-time configuration object + fluent builder.

use crate::core::{
    color::{AnsiCode, ColorError, colorize},
    data::Point,
    error::ConfigError,
};

/// Colour assignment for the plotted lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Palette {
    /// Same colour for every series.
    Uniform(AnsiCode),
    /// One colour per series index.  Series past the end stay uncoloured.
    PerSeries(Vec<AnsiCode>),
}

impl Palette {
    #[must_use]
    pub fn for_series(&self, index: usize) -> Option<AnsiCode> {
        match self {
            Self::Uniform(c) => Some(*c),
            Self::PerSeries(v) => v.get(index).copied(),
        }
    }
}

/// Immutable parameters handed to the renderer.  Every field is optional;
/// `Config::default()` sizes the chart from the data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub palette: Option<Palette>,
    /// Plot area columns, excluding axes and labels.
    pub width: Option<usize>,
    /// Plot area rows, excluding axes and labels.
    pub height: Option<usize>,
    /// Data-space point the axes cross at, instead of the bottom-left border.
    pub axis_center: Option<Point>,
}

impl Config {
    #[inline]
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

#[derive(Debug)]
enum ColorSpec {
    Uniform(String),
    PerSeries(Vec<String>),
}

/// Fluent builder; colour names are parsed in `build`.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    color: Option<ColorSpec>,
    width: Option<usize>,
    height: Option<usize>,
    axis_center: Option<Point>,
}

impl ConfigBuilder {
    /// One colour for all series.
    #[inline]
    #[must_use]
    pub fn color(mut self, name: impl Into<String>) -> Self {
        self.color = Some(ColorSpec::Uniform(name.into()));
        self
    }
    /// One colour per series, matched by index.
    #[inline]
    #[must_use]
    pub fn colors<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.color = Some(ColorSpec::PerSeries(
            names.into_iter().map(Into::into).collect(),
        ));
        self
    }
    #[inline]
    #[must_use]
    pub fn width(mut self, w: usize) -> Self {
        self.width = Some(w);
        self
    }
    #[inline]
    #[must_use]
    pub fn width_opt(mut self, w: Option<usize>) -> Self {
        self.width = w;
        self
    }
    #[inline]
    #[must_use]
    pub fn height(mut self, h: usize) -> Self {
        self.height = Some(h);
        self
    }
    #[inline]
    #[must_use]
    pub fn height_opt(mut self, h: Option<usize>) -> Self {
        self.height = h;
        self
    }
    #[inline]
    #[must_use]
    pub fn axis_center(mut self, p: impl Into<Point>) -> Self {
        self.axis_center = Some(p.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn axis_center_opt(mut self, p: Option<Point>) -> Self {
        self.axis_center = p;
        self
    }

    pub fn build(self) -> Result<Config, ConfigError> {
        for (axis, value) in [("width", self.width), ("height", self.height)] {
            if value == Some(0) {
                return Err(ConfigError::InvalidDimension { axis, value: 0 });
            }
        }
        let palette = match self.color {
            None => None,
            Some(ColorSpec::Uniform(name)) => Some(Palette::Uniform(resolve(&name)?)),
            Some(ColorSpec::PerSeries(names)) => Some(Palette::PerSeries(
                names
                    .iter()
                    .map(|n| resolve(n))
                    .collect::<Result<_, _>>()?,
            )),
        };
        Ok(Config {
            palette,
            width: self.width,
            height: self.height,
            axis_center: self.axis_center,
        })
    }
}

/// Escape prefix for a colour name.  Glyphs always close with a reset, the
/// suffix half of the pair.
fn resolve(name: &str) -> Result<AnsiCode, ColorError> {
    colorize(name).map(|(prefix, _)| prefix)
}

/// Ergonomic `?` on a builder chain.
impl From<ConfigBuilder> for Result<Config, ConfigError> {
    fn from(b: ConfigBuilder) -> Self {
        b.build()
    }
}
