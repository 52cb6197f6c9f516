// File: crates/chart-cli/src/main.rs
// Summary: CLI that loads an event returns dataset and exports charts as SVG, PNG or an interactive HTML page.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use event_chart_core::{load_config, svg, ChartConfig, Session, ALL_EVENTS};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(author, version, about = "Cumulative returns around corporate events", long_about = None)]
struct Cli {
    /// Optional TOML file overriding chart settings (size, margins, theme, rank bands).
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the events contained in a dataset.
    List(ListArgs),
    /// Render one selection to an .svg or .png file.
    Render(RenderArgs),
    /// Write a self-contained interactive HTML page (selector, tooltips, legend).
    Page(PageArgs),
}

#[derive(Parser)]
struct ListArgs {
    /// Dataset JSON produced by the preprocessing step.
    data: PathBuf,
}

#[derive(Parser)]
struct RenderArgs {
    /// Dataset JSON produced by the preprocessing step.
    data: PathBuf,

    /// Event id to draw, or "all".
    #[arg(long, short, default_value = ALL_EVENTS)]
    event: String,

    /// Output file; the extension picks the format (.svg or .png).
    #[arg(long, short)]
    out: PathBuf,

    /// Leave the legend out of the image.
    #[arg(long)]
    no_legend: bool,
}

#[derive(Parser)]
struct PageArgs {
    /// Dataset JSON produced by the preprocessing step.
    data: PathBuf,

    /// Output HTML file.
    #[arg(long, short, default_value = "target/out/event_returns.html")]
    out: PathBuf,
}

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref()).context("loading chart configuration")?;

    match cli.command {
        Commands::List(args) => handle_list(args, config),
        Commands::Render(args) => handle_render(args, config),
        Commands::Page(args) => handle_page(args, config),
    }
}

/// Load the dataset into a fresh session, failing with the static load message.
fn ready_session(data: &Path, config: ChartConfig) -> Result<Session> {
    let session = Session::load(config, data);
    if let Some(message) = session.error_message() {
        let cause = session.error_cause().unwrap_or_default();
        return Err(anyhow::anyhow!("{cause}").context(format!("{message} (dataset: {})", data.display())));
    }
    Ok(session)
}

fn handle_list(args: ListArgs, config: ChartConfig) -> Result<()> {
    let session = ready_session(&args.data, config)?;
    let dataset = session.dataset().context("session has no dataset")?;
    for (opt, event) in session.options().iter().zip(&dataset.events) {
        let groups: Vec<&str> = event.series.iter().map(|s| s.name.as_str()).collect();
        println!("{:<16} {:<40} {}", opt.value, opt.label, groups.join(", "));
    }
    info!(events = session.options().len(), "listed events");
    Ok(())
}

fn handle_render(args: RenderArgs, config: ChartConfig) -> Result<()> {
    let mut session = ready_session(&args.data, config)?;
    let frame = session
        .select(&args.event)
        .cloned()
        .context("session is not ready for selection")?;
    if frame.is_placeholder() {
        warn!(event = %args.event, "selection has no data; writing placeholder chart");
    }

    let ext = args
        .out
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "svg" => svg::write_file(&args.out, &svg::frame_to_svg(&frame, !args.no_legend))?,
        #[cfg(feature = "png")]
        "png" => {
            let opts = event_chart_core::RasterOptions { legend: !args.no_legend, ..Default::default() };
            event_chart_core::raster::render_to_png(&frame, &opts, &args.out)?;
        }
        other => anyhow::bail!("unsupported output format '{other}' for {}", args.out.display()),
    }
    println!("Wrote {}", args.out.display());
    Ok(())
}

fn handle_page(args: PageArgs, config: ChartConfig) -> Result<()> {
    let session = Session::load(config, &args.data);
    if let Some(message) = session.error_message() {
        svg::write_file(&args.out, &svg::render_error_page(message))?;
        let cause = session.error_cause().unwrap_or_default();
        return Err(anyhow::anyhow!("{cause}").context(format!(
            "{message} (dataset: {}; error page written to {})",
            args.data.display(),
            args.out.display()
        )));
    }
    let dataset = session.dataset().context("session has no dataset")?;
    svg::write_file(&args.out, &svg::render_page(dataset, session.config()))?;
    println!("Wrote {}", args.out.display());
    Ok(())
}
