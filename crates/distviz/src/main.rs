use std::path::PathBuf;

use clap::Parser;
use distviz::{App, AppConfig, KeybindingsConfig, init_logging};
use distviz_core::Family;

#[derive(Parser, Debug)]
#[command(name = "distviz")]
#[command(about = "Interactive terminal plots of continuous probability distributions")]
struct Args {
    /// Path to the data directory (default: ~/.distviz/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Family shown at startup (normal, beta, chi2, f, ...)
    #[arg(short, long)]
    family: Option<Family>,

    /// Sample points per curve
    #[arg(short, long)]
    points: Option<usize>,
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".distviz")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    init_logging(&data_dir, &args.log_level)?;

    let mut config = AppConfig::load(&data_dir)?;
    if let Some(family) = args.family {
        config.initial_family = family;
    }
    if let Some(points) = args.points {
        config.grid_points = points;
    }
    let keybindings = KeybindingsConfig::load_or_default(&data_dir);

    let mut app = App::new(&config, keybindings)?;

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}
