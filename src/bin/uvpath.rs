use std::path::PathBuf;

use anyhow::Context as _;
use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(
    name = "uvpath",
    version,
    about = "Convert a CSV of UV coordinates into SVG polylines"
)]
struct Cli {
    /// Input CSV with `u` and `v` columns.
    input_csv: PathBuf,

    /// Output SVG path (defaults to the input path with an `.svg` extension).
    output_svg: Option<PathBuf>,

    /// Maximum gap between consecutive points of one path, as a fraction of the width.
    #[arg(long)]
    max_dist: Option<f64>,

    /// SVG width in device units.
    #[arg(long)]
    width: Option<u32>,

    /// SVG height in device units.
    #[arg(long)]
    height: Option<u32>,

    /// Flip the V axis (y = height * (1 - v)).
    #[arg(long, overrides_with = "no_flip_vertical")]
    flip_vertical: bool,

    /// Do not flip the V axis, even if the config file asks for it.
    #[arg(long, overrides_with = "flip_vertical")]
    no_flip_vertical: bool,

    /// Shift U from [1, 2) to [0, 1) before filtering.
    #[arg(long, overrides_with = "no_wrap_u")]
    wrap_u: bool,

    /// Do not shift U, even if the config file asks for it.
    #[arg(long, overrides_with = "wrap_u")]
    no_wrap_u: bool,

    /// JSON file with default settings; flags given on the command line win.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write an empty SVG when every row is filtered out instead of skipping the write.
    #[arg(long)]
    write_empty: bool,

    /// Print a JSON summary (drop counts, segments, warnings) on stdout.
    #[arg(long)]
    report: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let opts = resolve_opts(&cli)?;
    let output = cli
        .output_svg
        .clone()
        .unwrap_or_else(|| uvpath::default_output_path(&cli.input_csv));
    let policy = if cli.write_empty {
        uvpath::EmptyPolicy::Write
    } else {
        uvpath::EmptyPolicy::Skip
    };

    let summary = uvpath::convert_file(&cli.input_csv, &output, &opts, policy)
        .with_context(|| format!("convert '{}'", cli.input_csv.display()))?;

    match summary.warning {
        Some(uvpath::ConvertWarning::EmptyResult { rows_read }) => {
            eprintln!("warning: all {rows_read} rows were filtered out");
        }
        Some(uvpath::ConvertWarning::NoSegments { points }) => {
            eprintln!("warning: none of the {points} points had a neighbour within max-dist");
        }
        None => {}
    }

    if cli.report {
        let json = serde_json::to_string_pretty(&summary).context("serialize report")?;
        println!("{json}");
    }

    if summary.written {
        eprintln!("wrote {}", summary.output.display());
    } else {
        eprintln!("skipped {}", summary.output.display());
    }
    Ok(())
}

fn resolve_opts(cli: &Cli) -> anyhow::Result<uvpath::ConvertOpts> {
    let mut opts = match &cli.config {
        Some(path) => uvpath::ConvertOpts::from_json_path(path)?,
        None => uvpath::ConvertOpts::default(),
    };

    if let Some(max_dist) = cli.max_dist {
        opts.max_dist = max_dist;
    }
    if let Some(width) = cli.width {
        opts.width = width;
    }
    if let Some(height) = cli.height {
        opts.height = height;
    }
    opts.flip_vertical = switch(cli.flip_vertical, cli.no_flip_vertical, opts.flip_vertical);
    opts.wrap_u = switch(cli.wrap_u, cli.no_wrap_u, opts.wrap_u);

    opts.validate()?;
    Ok(opts)
}

/// `--flag` / `--no-flag` pair over a value from the config file. The last one given wins.
fn switch(on: bool, off: bool, current: bool) -> bool {
    match (on, off) {
        (true, _) => true,
        (_, true) => false,
        _ => current,
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
