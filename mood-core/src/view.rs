//! Pure projections from stored entries to what the user sees.
//!
//! Nothing here touches the store or the terminal; the CLI renderer consumes
//! these view models.

use std::fmt::{Display, Write};

use chrono::format::{Item, StrftimeItems};
use chrono::{Days, NaiveDate, TimeZone};

use crate::catalog::{MoodStyle, Rgb, style_or_placeholder};
use crate::entry::MoodEntry;

pub const NO_ENTRY_TODAY: &str = "No mood recorded for today yet";
pub const NO_HISTORY: &str = "No mood history yet. Start tracking your feelings!";
pub const UNKNOWN_TIME: &str = "--:--";
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M";
pub const DEFAULT_DATE_FORMAT: &str = "%B %-d, %Y";

/// chrono format strings used by the projections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayFormats {
    pub time_format: String,
    pub date_format: String,
}

impl Default for DisplayFormats {
    fn default() -> Self {
        Self {
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl DisplayFormats {
    /// Whether chrono understands every specifier in `format`.
    pub fn is_valid(format: &str) -> bool {
        !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodayPanel {
    Empty {
        message: &'static str,
    },
    Recorded {
        glyph: &'static str,
        mood: String,
        color: Rgb,
        time: String,
    },
}

impl TodayPanel {
    pub fn has_entry(&self) -> bool {
        matches!(self, TodayPanel::Recorded { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineRow {
    pub glyph: &'static str,
    pub mood: String,
    pub color: Rgb,
    pub date_label: String,
    pub time: String,
    /// Timestamp of the entry this row deletes.
    pub delete_key: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Timeline {
    Empty { message: &'static str },
    Rows(Vec<TimelineRow>),
}

impl Timeline {
    pub fn rows(&self) -> &[TimelineRow] {
        match self {
            Timeline::Empty { .. } => &[],
            Timeline::Rows(rows) => rows,
        }
    }
}

/// Success feedback after a mood is recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub glyph: &'static str,
    pub mood: String,
}

impl Toast {
    pub fn for_entry(entry: &MoodEntry) -> Self {
        Self {
            glyph: style_or_placeholder(&entry.mood).glyph,
            mood: entry.mood.clone(),
        }
    }

    pub fn message(&self) -> String {
        format!("Mood \"{}\" recorded!", self.mood)
    }
}

/// Generic, non-blocking failure feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: &'static str,
}

impl Notice {
    pub const SAVE_FAILED: Notice = Notice {
        message: "Sorry, there was an error saving your mood. Please try again.",
    };
    pub const DELETE_FAILED: Notice = Notice {
        message: "Sorry, there was an error deleting the entry. Please try again.",
    };
}

pub fn today_panel<Tz>(entry: Option<&MoodEntry>, tz: &Tz, formats: &DisplayFormats) -> TodayPanel
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match entry {
        None => TodayPanel::Empty {
            message: NO_ENTRY_TODAY,
        },
        Some(entry) => {
            let MoodStyle { glyph, color } = style_or_placeholder(&entry.mood);
            TodayPanel::Recorded {
                glyph,
                mood: entry.mood.clone(),
                color,
                time: time_of_day(entry.timestamp, tz, &formats.time_format),
            }
        }
    }
}

pub fn timeline<Tz>(
    entries: &[MoodEntry],
    today: NaiveDate,
    tz: &Tz,
    formats: &DisplayFormats,
) -> Timeline
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if entries.is_empty() {
        return Timeline::Empty {
            message: NO_HISTORY,
        };
    }

    let rows = entries
        .iter()
        .map(|entry| {
            let MoodStyle { glyph, color } = style_or_placeholder(&entry.mood);
            TimelineRow {
                glyph,
                mood: entry.mood.clone(),
                color,
                date_label: relative_date_label(entry.date, today, &formats.date_format),
                time: time_of_day(entry.timestamp, tz, &formats.time_format),
                delete_key: entry.timestamp,
            }
        })
        .collect();
    Timeline::Rows(rows)
}

/// "Today", "Yesterday", or `date` rendered with `date_format`.
/// Compares calendar days, not elapsed time.
pub fn relative_date_label(date: NaiveDate, today: NaiveDate, date_format: &str) -> String {
    if date == today {
        return "Today".to_string();
    }
    if today.checked_sub_days(Days::new(1)) == Some(date) {
        return "Yesterday".to_string();
    }
    render(date.format(date_format))
        .or_else(|| render(date.format(DEFAULT_DATE_FORMAT)))
        .unwrap_or_else(|| date.to_string())
}

/// Wall-clock time of `timestamp` (epoch milliseconds) in `tz`.
pub fn time_of_day<Tz>(timestamp: i64, tz: &Tz, time_format: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match tz.timestamp_millis_opt(timestamp).earliest() {
        Some(instant) => render(instant.format(time_format))
            .or_else(|| render(instant.format(DEFAULT_TIME_FORMAT)))
            .unwrap_or_else(|| UNKNOWN_TIME.to_string()),
        None => UNKNOWN_TIME.to_string(),
    }
}

/// `None` when chrono rejects the format instead of panicking in `to_string`.
fn render(formatted: impl Display) -> Option<String> {
    let mut out = String::new();
    write!(out, "{formatted}").ok().map(|_| out)
}
