use clap::{Args, Parser, Subcommand};

use crate::core::data::Point;

/// Top-level CLI structure.
#[derive(Parser)]
#[command(
    name = "ascii-graph",
    version,
    about = "Unicode line charts in the terminal"
)]
pub struct Cli {
    /// Emit pipeline and timing diagnostics on stderr
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Plot `x,y[,series]` CSV rows or a JSON array of points
    Plot(PlotArgs),
    /// Plot seeded random walks
    Demo(DemoArgs),
    /// Show available color names / hex syntax
    Colors,
    /// Print example invocations
    Examples,
}

/// Size, color and axis options shared by every chart.
#[derive(Args, Clone, Debug, Default)]
pub struct ChartArgs {
    /// Plot columns (default: one per point of the first series)
    #[arg(short, long)]
    pub width: Option<usize>,

    /// Plot rows (default: one per unit of y)
    #[arg(long)]
    pub height: Option<usize>,

    /// Color (name or `#RRGGBB`); give several to color series one by one
    #[arg(short, long, value_delimiter = ',')]
    pub color: Vec<String>,

    /// Cross the axes at this data point instead of the bottom-left corner
    #[arg(long, value_name = "X,Y", value_parser = parse_point, allow_hyphen_values = true)]
    pub axis_center: Option<Point>,

    /// Shrink an unspecified width / height to fit the terminal
    #[arg(long)]
    pub fit: bool,
}

/// `ascii-graph plot …`
#[derive(Parser, Debug)]
pub struct PlotArgs {
    /// Data path (use `-` for stdin)
    #[arg(value_name = "FILE", default_value = "-")]
    pub file: String,

    /// Read JSON instead of CSV
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub chart: ChartArgs,
}

/// `ascii-graph demo …`
#[derive(Parser, Debug)]
pub struct DemoArgs {
    #[arg(long, default_value_t = 40)]
    pub points: usize,
    #[arg(long, default_value_t = 1)]
    pub series: usize,
    #[arg(long, default_value_t = 1.5)]
    pub sigma: f64,
    /// Seed for reproducible output (default: clock)
    #[arg(long)]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub chart: ChartArgs,
}

/// `X,Y` → `Point`.
pub fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got `{s}`"))?;
    let num = |v: &str| {
        v.trim()
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .ok_or_else(|| format!("`{v}` is not a finite number"))
    };
    Ok(Point::new(num(x)?, num(y)?))
}
