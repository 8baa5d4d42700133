use std::io::{self, BufRead, Write};

/// Asks a yes/no question on the terminal. Anything but `y`/`yes` declines.
pub fn confirm(question: &str) -> bool {
    let stdin = io::stdin();
    confirm_with(question, &mut stdin.lock(), &mut io::stdout())
}

fn confirm_with(question: &str, input: &mut impl BufRead, output: &mut impl Write) -> bool {
    if write!(output, "{question} [y/N] ").and_then(|_| output.flush()).is_err() {
        return false;
    }
    let mut answer = String::new();
    match input.read_line(&mut answer) {
        Ok(_) => is_yes(&answer),
        Err(e) => {
            tracing::warn!(error = %e, "could not read confirmation, treating as no");
            false
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
