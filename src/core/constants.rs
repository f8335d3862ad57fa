//! A collection of constants.

/// Fill character for every cell nothing has been drawn into.
pub const EMPTY: char = ' ';

/// Line connectors, named by the compass directions each glyph joins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChartChars {
    pub we: char,
    pub wns: char,
    pub ns: char,
    pub nse: char,
    pub wsn: char,
    pub sne: char,
}

pub const CHART: ChartChars = ChartChars {
    we: '━',
    wns: '┓',
    ns: '┃',
    nse: '┗',
    wsn: '┛',
    sne: '┏',
};

/// Axis lines, arrow heads and the tick markers left on them by data points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisChars {
    /// Top of the y axis
    pub n: char,
    pub ns: char,
    /// Tick on the y axis at the row of a data point
    pub y: char,
    /// Where the y axis meets the x axis at the bottom-left
    pub nse: char,
    /// Where the axes cross inside the plot
    pub cross: char,
    /// Tick on the x axis at the column of a data point
    pub x: char,
    pub we: char,
    /// Right end of the x axis
    pub e: char,
}

pub const AXIS: AxisChars = AxisChars {
    n: '▲',
    ns: '│',
    y: '┤',
    nse: '└',
    cross: '┼',
    x: '┬',
    we: '─',
    e: '▶',
};

/// One empty cell around the plot area on every side, reserved for the axes.
pub const BORDER: usize = 1;

/// Below this many rows an auto-sized chart is too flat to read.
pub const MIN_AUTO_HEIGHT: usize = 3;

/// Largest canvas, in cells, a single render may allocate.
pub const MAX_PLOT_CELLS: usize = 1 << 24;

/// Fallback terminal size when it cannot be queried.
pub const FALLBACK_TERMINAL: (u16, u16) = (80, 30);
