use clap::{ArgGroup, Parser};
use mood_core::{CatalogError, Mood};

use crate::render::ColorMode;

/// mood — Track how you feel, one mood per day
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    group(ArgGroup::new("read_mode").args(["today", "history"]).multiple(true)),
    group(ArgGroup::new("solo").args(["path", "moods"]).conflicts_with_all(["read_mode", "delete", "mood"])),
)]
pub struct Cli {
    /// Prints the path of the mood store file
    #[arg(long, short)]
    pub path: bool,
    /// Lists every mood you can record, with its glyph and color.
    #[arg(long)]
    pub moods: bool,
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, env = "MOOD_COLOR", default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Only show today's mood.
    #[arg(long, short)]
    pub today: bool,
    /// Only show the mood history.
    #[arg(long)]
    pub history: bool,

    /// Deletes the history entry with this key (shown next to each history row).
    /// Asks for confirmation first, e.g. `mood --delete 1704103200000`.
    #[arg(long, short, conflicts_with = "mood", allow_negative_numbers = true)]
    pub delete: Option<i64>,
    /// Don't ask for confirmation before deleting.
    #[arg(long, short, requires = "delete")]
    pub yes: bool,

    /// Mood to record for today (e.g., `mood happy`). See `mood --moods`.
    #[arg(value_parser = parse_mood)]
    pub mood: Option<Mood>,
}

impl Cli {
    pub fn new() -> Self {
        Cli::parse()
    }
}

fn parse_mood(s: &str) -> Result<Mood, CatalogError> {
    Mood::parse(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mood_positional() {
        let cli = Cli::try_parse_from(["mood", "Happy"]).unwrap();
        assert_eq!(cli.mood, Some(Mood::Happy));
        assert!(cli.delete.is_none());
    }

    #[test]
    fn rejects_unknown_mood() {
        assert!(Cli::try_parse_from(["mood", "grumpy"]).is_err());
    }

    #[test]
    fn delete_conflicts_with_mood() {
        assert!(Cli::try_parse_from(["mood", "calm", "--delete", "1"]).is_err());
    }

    #[test]
    fn delete_accepts_negative_key() {
        let cli = Cli::try_parse_from(["mood", "--delete", "-5"]).unwrap();
        assert_eq!(cli.delete, Some(-5));
        let cli = Cli::try_parse_from(["mood", "-d", "-5", "-y"]).unwrap();
        assert_eq!(cli.delete, Some(-5));
        assert!(cli.yes);
    }

    #[test]
    fn yes_requires_delete() {
        assert!(Cli::try_parse_from(["mood", "--yes"]).is_err());
        let cli = Cli::try_parse_from(["mood", "--delete", "42", "--yes"]).unwrap();
        assert_eq!(cli.delete, Some(42));
        assert!(cli.yes);
    }

    #[test]
    fn solo_flags_stand_alone() {
        assert!(Cli::try_parse_from(["mood", "--path", "--today"]).is_err());
        assert!(Cli::try_parse_from(["mood", "--moods"]).unwrap().moods);
    }
}
