use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use thumbstrip::{DeviceClass, LayoutMode, Point, RowLayoutConfig, RowLayoutEngine};

#[derive(Parser, Debug)]
#[command(name = "thumbstrip", version)]
struct Cli {
    /// Log layout passes to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Lay out a row and print its frames as JSON.
    Layout(LayoutArgs),
    /// Print the scroll offset that centers the target item.
    Center(CenterArgs),
}

#[derive(Args, Debug)]
struct RowArgs {
    /// Number of items in the row.
    #[arg(long)]
    count: usize,

    /// Focused (expanded) item; omit for a collapsed row.
    #[arg(long)]
    focus: Option<usize>,

    /// Container height in points.
    #[arg(long, default_value_t = 90.0)]
    height: f64,

    /// Layout config JSON; overrides `--regular` and `--wide-spacing`.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Use large-screen cell sizes.
    #[arg(long)]
    regular: bool,

    /// Use the wide gap between collapsed cells.
    #[arg(long)]
    wide_spacing: bool,
}

#[derive(Args, Debug)]
struct LayoutArgs {
    #[command(flatten)]
    row: RowArgs,
}

#[derive(Args, Debug)]
struct CenterArgs {
    #[command(flatten)]
    row: RowArgs,

    /// Viewport width in points.
    #[arg(long)]
    viewport_width: f64,

    /// Current horizontal scroll position.
    #[arg(long, default_value_t = 0.0)]
    scroll_x: f64,

    /// Proposed horizontal offset returned when no item can be centered.
    #[arg(long, default_value_t = 0.0)]
    proposed_x: f64,

    /// Proposed vertical offset (always preserved).
    #[arg(long, default_value_t = 0.0)]
    proposed_y: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::TRACE)
            .init();
    }
    match cli.cmd {
        Command::Layout(args) => cmd_layout(args),
        Command::Center(args) => cmd_center(args),
    }
}

fn prepare_row(row: &RowArgs) -> anyhow::Result<RowLayoutEngine> {
    let config = match &row.config {
        Some(path) => RowLayoutConfig::from_path(path)?,
        None => {
            let device_class = if row.regular {
                DeviceClass::Regular
            } else {
                DeviceClass::Compact
            };
            RowLayoutConfig::new(device_class, row.wide_spacing)
        }
    };
    let mode = row.focus.map_or(LayoutMode::Collapsed, LayoutMode::expanded);

    let mut engine = RowLayoutEngine::new(config);
    engine
        .prepare(row.count, mode, row.height)
        .with_context(|| format!("lay out {} items", row.count))?;
    Ok(engine)
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let engine = prepare_row(&args.row)?;
    let json = serde_json::to_string_pretty(&engine.snapshot()).context("serialize layout")?;
    println!("{json}");
    Ok(())
}

fn cmd_center(args: CenterArgs) -> anyhow::Result<()> {
    let engine = prepare_row(&args.row)?;
    let offset = engine.centered_scroll_offset(
        Point::new(args.proposed_x, args.proposed_y),
        args.viewport_width,
        args.scroll_x,
    );
    let json = serde_json::json!({ "x": offset.x, "y": offset.y });
    println!("{json}");
    Ok(())
}
