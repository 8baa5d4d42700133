use super::CliModeResult;
use crate::{Cli, render::Renderer};
use anyhow::Result;
use mood_core::{MoodTracker, Views};

/// Shows the current views. This is the default when nothing else was asked.
pub fn read_mode(cli: &Cli, renderer: &Renderer, tracker: &MoodTracker) -> Result<CliModeResult> {
    print_views(cli, renderer, &tracker.views());
    Ok(CliModeResult::Finish)
}

/// Prints the panels selected by `--today`/`--history`, or both if neither.
pub fn print_views(cli: &Cli, renderer: &Renderer, views: &Views) {
    let both = !cli.today && !cli.history;
    if both || cli.today {
        renderer.print_today(&views.today);
    }
    if both {
        println!();
    }
    if both || cli.history {
        renderer.print_timeline(&views.timeline);
    }
}
