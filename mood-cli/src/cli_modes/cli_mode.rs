use mood_core::Feedback;

pub enum CliModeResult {
    Finish,
    /// The action ran but the store rejected it; the user has been told.
    Failed,
    NothingToDo,
}

impl CliModeResult {
    pub fn from_feedback(feedback: &Feedback) -> Self {
        match feedback {
            Feedback::Failed(_) => CliModeResult::Failed,
            _ => CliModeResult::Finish,
        }
    }
}
