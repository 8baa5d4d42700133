mod cli;
mod cli_modes;
mod render;

use anyhow::Result;
use cli::Cli;
use cli_modes::{CliModeResult, delete_mode, read_mode, record_mode};
use mood_core::{Config, MoodTracker};
use render::{RenderOptions, Renderer};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_logging();
    match run() {
        Ok(CliModeResult::Failed) => ExitCode::FAILURE,
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("mood: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr, filtered by `MOOD_LOG` (e.g. `MOOD_LOG=debug`).
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("MOOD_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<CliModeResult> {
    let cli = Cli::new();
    let renderer = Renderer::new(Some(RenderOptions {
        use_color: cli.color.use_color(),
    }));

    if cli.moods {
        renderer.print_palette();
        return Ok(CliModeResult::Finish);
    }

    let config = Config::load()?;
    if cli.path {
        renderer.print_info(&format!("{}", config.store_path().display()));
        return Ok(CliModeResult::Finish);
    }

    let tracker = MoodTracker::with_config(&config)?;

    match record_mode(&cli, &renderer, &tracker)? {
        CliModeResult::NothingToDo => {}
        done => return Ok(done),
    }
    match delete_mode(&cli, &renderer, &tracker)? {
        CliModeResult::NothingToDo => {}
        done => return Ok(done),
    }
    read_mode(&cli, &renderer, &tracker)
}
