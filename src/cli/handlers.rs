use std::{io, time::Instant};

use tracing::debug;

use crate::{
    core::{
        bounds::{Ranges, graph_dims, terminal_geometry},
        color::{AnsiCode, paint},
        config::{Config, ConfigBuilder},
        data::{Dataset, read_from_path},
        error::GraphError,
        rng::Lcg,
    },
    render::Renderer,
};

use super::parse::{ChartArgs, DemoArgs, PlotArgs};

pub fn plot(a: &PlotArgs) -> Result<(), GraphError> {
    let t_ingest = Instant::now();
    let data = read_from_path(&a.file, a.json)?;
    debug!(
        series = data.series().len(),
        points = data.total_points(),
        elapsed_us = t_ingest.elapsed().as_micros(),
        "ingest"
    );
    draw(&data, &a.chart)
}

pub fn demo(a: &DemoArgs) -> Result<(), GraphError> {
    let mut rng = a.seed.map_or_else(Lcg::seed_from_time, Lcg::seed);
    let data: Dataset = (0..a.series.max(1))
        .map(|_| rng.walk(a.points.max(1), a.sigma))
        .collect();

    let mut chart = a.chart.clone();
    if chart.color.is_empty() {
        // cycle the palette, skipping black
        chart.color = AnsiCode::NAMED
            .iter()
            .skip(1)
            .cycle()
            .take(data.series().len())
            .map(|(n, _)| (*n).to_owned())
            .collect();
    }
    draw(&data, &chart)
}

/// Shared tail of `plot` and `demo`: config, then render to stdout.
fn draw(data: &Dataset, c: &ChartArgs) -> Result<(), GraphError> {
    let (mut width, mut height) = (c.width, c.height);
    if c.fit {
        let ranges = Ranges::of(data)?;
        let (max_w, max_h) = graph_dims(terminal_geometry(), &ranges);
        let (auto_w, auto_h) = ranges.plot_size(data, &Config::default());
        width = width.or((auto_w > max_w).then_some(max_w));
        height = height.or((auto_h > max_h).then_some(max_h));
        debug!(?width, ?height, max_w, max_h, "fit to terminal");
    }

    let cfg = with_colors(Config::builder(), &c.color)
        .width_opt(width)
        .height_opt(height)
        .axis_center_opt(c.axis_center)
        .build()?;

    let t_render = Instant::now();
    Renderer::new(&cfg).print(data, &mut io::stdout().lock())?;
    debug!(elapsed_us = t_render.elapsed().as_micros(), "render");
    Ok(())
}

fn with_colors(b: ConfigBuilder, names: &[String]) -> ConfigBuilder {
    match names {
        [] => b,
        [one] => b.color(one.as_str()),
        many => b.colors(many),
    }
}

/// Pretty-print available color names + an example hex code.
pub fn colors() {
    println!("\nPossible colors:");
    for (name, code) in AnsiCode::NAMED {
        println!("{}", paint(code, name));
    }
    println!(
        "{}  (#505050 or any other #RRGGBB)\n",
        paint(AnsiCode::Rgb(0x50, 0x50, 0x50), "#505050")
    );
}

/// Print handy invocations for new users.
pub fn examples() {
    let bin = "ascii-graph";
    println!(
        "
Example invocations
-------------------
• CSV file         : {bin} plot data.csv
• From stdin       : printf '0,0\\n1,1\\n2,0\\n' | {bin} plot
• JSON points      : echo '[[0,0],[1,1],[2,0]]' | {bin} plot --json
• Several series   : {bin} plot data.csv --color red,blue   (third CSV column names the series)
• Hex color        : {bin} plot data.csv --color '#6048c1'
• Fixed size       : {bin} plot data.csv --width 60 --height 15
• Fit the terminal : {bin} plot data.csv --fit
• Centred axes     : {bin} plot data.csv --axis-center 0,0
• Random walks     : {bin} demo --series 3 --points 30 --seed 7
• Debug mode       : {bin} plot data.csv --debug
"
    );
}
