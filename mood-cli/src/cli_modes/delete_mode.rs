use super::{CliModeResult, prompt::confirm, read_mode::print_views};
use crate::{Cli, render::Renderer};
use anyhow::Result;
use mood_core::MoodTracker;

pub fn delete_mode(cli: &Cli, renderer: &Renderer, tracker: &MoodTracker) -> Result<CliModeResult> {
    let Some(timestamp) = cli.delete else {
        return Ok(CliModeResult::NothingToDo);
    };

    let outcome = tracker.request_delete(timestamp, || {
        cli.yes || confirm("Are you sure you want to delete this mood entry?")
    });
    renderer.print_feedback(&outcome.feedback);
    print_views(cli, renderer, &outcome.views);
    Ok(CliModeResult::from_feedback(&outcome.feedback))
}
