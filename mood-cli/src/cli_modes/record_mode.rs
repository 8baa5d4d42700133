use super::{CliModeResult, read_mode::print_views};
use crate::{Cli, render::Renderer};
use anyhow::Result;
use mood_core::MoodTracker;

pub fn record_mode(cli: &Cli, renderer: &Renderer, tracker: &MoodTracker) -> Result<CliModeResult> {
    let Some(mood) = cli.mood else {
        return Ok(CliModeResult::NothingToDo);
    };

    let outcome = tracker.select_mood(mood);
    renderer.print_feedback(&outcome.feedback);
    print_views(cli, renderer, &outcome.views);
    Ok(CliModeResult::from_feedback(&outcome.feedback))
}
