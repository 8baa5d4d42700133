//! The `MoodTracker` ties the entry store, the clock and the view
//! projections together. Every user action goes through here and comes back
//! as freshly projected views plus feedback for the user.

use anyhow::{Context, Result};
use chrono::Local;
use std::fs;

use crate::{
    Config,
    catalog::Mood,
    clock::{Clock, SystemClock},
    storage::{FileSlot, Slot},
    store::EntryStore,
    view::{self, DisplayFormats, Notice, Timeline, Toast, TodayPanel},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Views {
    pub today: TodayPanel,
    pub timeline: Timeline,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Recorded(Toast),
    Deleted,
    /// Nothing had the requested timestamp.
    NotFound,
    /// The user declined the confirmation.
    Cancelled,
    Failed(Notice),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub views: Views,
    pub feedback: Feedback,
}

pub struct MoodTracker<S: Slot = FileSlot, C: Clock = SystemClock> {
    store: EntryStore<S>,
    clock: C,
    formats: DisplayFormats,
}

impl MoodTracker {
    /// Creates a tracker backed by the store file, loading configuration from
    /// standard paths.
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        Self::with_config(&config)
    }

    /// Creates a tracker for a specific `Config`.
    ///
    /// This also ensures that the data directory exists.
    pub fn with_config(config: &Config) -> Result<Self> {
        fs::create_dir_all(&config.data_dir)
            .with_context(|| format!("creating data dir {}", config.data_dir.display()))?;
        Ok(Self::with_parts(
            FileSlot::new(config.store_path()),
            SystemClock,
            config.display_formats(),
        ))
    }
}

impl<S: Slot, C: Clock> MoodTracker<S, C> {
    pub fn with_parts(slot: S, clock: C, formats: DisplayFormats) -> Self {
        Self {
            store: EntryStore::new(slot),
            clock,
            formats,
        }
    }

    pub fn store(&self) -> &EntryStore<S> {
        &self.store
    }

    /// Projects the today panel and the timeline from the current store.
    pub fn views(&self) -> Views {
        let today = self.clock.now().date_naive();
        let entry = self.store.today_entry(today);
        let entries = self.store.list_entries();
        Views {
            today: view::today_panel(entry.as_ref(), &Local, &self.formats),
            timeline: view::timeline(&entries, today, &Local, &self.formats),
        }
    }

    /// Records `mood` for the clock's current day.
    pub fn select_mood(&self, mood: Mood) -> Outcome {
        let now = self.clock.now();
        let feedback =
            match self
                .store
                .record_mood(mood, now.date_naive(), now.timestamp_millis())
            {
                Ok(entry) => {
                    tracing::info!(mood = %entry.mood, date = %entry.date, "mood recorded");
                    Feedback::Recorded(Toast::for_entry(&entry))
                }
                Err(e) => {
                    tracing::error!(error = %e, mood = %mood, "error saving mood entry");
                    Feedback::Failed(Notice::SAVE_FAILED)
                }
            };
        self.outcome(feedback)
    }

    /// Deletes the entry keyed by `timestamp` once `confirm` agrees.
    pub fn request_delete(&self, timestamp: i64, confirm: impl FnOnce() -> bool) -> Outcome {
        if !confirm() {
            return self.outcome(Feedback::Cancelled);
        }
        let feedback = match self.store.delete_entry(timestamp) {
            Ok(true) => {
                tracing::info!(timestamp, "mood entry deleted");
                Feedback::Deleted
            }
            Ok(false) => Feedback::NotFound,
            Err(e) => {
                tracing::error!(error = %e, timestamp, "error deleting mood entry");
                Feedback::Failed(Notice::DELETE_FAILED)
            }
        };
        self.outcome(feedback)
    }

    fn outcome(&self, feedback: Feedback) -> Outcome {
        Outcome {
            views: self.views(),
            feedback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::storage::MemorySlot;
    use crate::tests::mk_config;
    use chrono::{DateTime, TimeZone};
    use std::cell::Cell;
    use tempfile::tempdir;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, m, d, h, 0, 0).earliest().unwrap()
    }

    fn mk_tracker(now: DateTime<Local>, slot: &MemorySlot) -> MoodTracker<&MemorySlot, FixedClock> {
        MoodTracker::with_parts(slot, FixedClock(now), DisplayFormats::default())
    }

    #[test]
    fn empty_store_projects_empty_views() {
        let slot = MemorySlot::new();
        let views = mk_tracker(at(2024, 1, 1, 12), &slot).views();
        assert!(!views.today.has_entry());
        assert!(matches!(views.timeline, Timeline::Empty { .. }));
    }

    #[test]
    fn select_mood_records_and_reprojects() {
        let slot = MemorySlot::new();
        let tracker = mk_tracker(at(2024, 1, 1, 12), &slot);

        let outcome = tracker.select_mood(Mood::Happy);
        match &outcome.feedback {
            Feedback::Recorded(toast) => assert_eq!(toast.message(), "Mood \"happy\" recorded!"),
            other => panic!("unexpected feedback {other:?}"),
        }
        assert!(outcome.views.today.has_entry());
        let rows = outcome.views.timeline.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].date_label, "Today");
        assert_eq!(rows[0].delete_key, at(2024, 1, 1, 12).timestamp_millis());
    }

    #[test]
    fn yesterday_entry_is_not_today() {
        let slot = MemorySlot::new();
        mk_tracker(at(2024, 1, 1, 20), &slot).select_mood(Mood::Calm);

        let views = mk_tracker(at(2024, 1, 2, 9), &slot).views();
        assert!(!views.today.has_entry());
        assert_eq!(views.timeline.rows()[0].date_label, "Yesterday");
    }

    #[test]
    fn failed_save_reports_notice_and_keeps_views() {
        let slot = MemorySlot::new();
        let tracker = mk_tracker(at(2024, 1, 1, 12), &slot);
        tracker.select_mood(Mood::Calm);

        slot.fail_writes(true);
        let outcome = mk_tracker(at(2024, 1, 2, 12), &slot).select_mood(Mood::Excited);
        assert_eq!(outcome.feedback, Feedback::Failed(Notice::SAVE_FAILED));
        assert_eq!(outcome.views.timeline.rows().len(), 1);
        assert_eq!(outcome.views.timeline.rows()[0].mood, "calm");
    }

    #[test]
    fn unreadable_store_refuses_to_save_over_history() {
        let slot = MemorySlot::new();
        mk_tracker(at(2024, 1, 1, 12), &slot).select_mood(Mood::Calm);
        mk_tracker(at(2024, 1, 2, 12), &slot).select_mood(Mood::Happy);
        let before = slot.contents();

        slot.fail_reads(true);
        let outcome = mk_tracker(at(2024, 1, 3, 12), &slot).select_mood(Mood::Excited);
        assert_eq!(outcome.feedback, Feedback::Failed(Notice::SAVE_FAILED));
        assert!(!outcome.views.today.has_entry());
        assert!(matches!(outcome.views.timeline, Timeline::Empty { .. }));
        assert_eq!(slot.contents(), before);

        slot.fail_reads(false);
        let views = mk_tracker(at(2024, 1, 3, 12), &slot).views();
        assert_eq!(views.timeline.rows().len(), 2);
    }

    #[test]
    fn declined_delete_changes_nothing() {
        let slot = MemorySlot::new();
        let tracker = mk_tracker(at(2024, 1, 1, 12), &slot);
        tracker.select_mood(Mood::Calm);
        let before = slot.contents();

        let key = tracker.views().timeline.rows()[0].delete_key;
        let outcome = tracker.request_delete(key, || false);
        assert_eq!(outcome.feedback, Feedback::Cancelled);
        assert_eq!(slot.contents(), before);
        assert_eq!(outcome.views.timeline.rows().len(), 1);
    }

    #[test]
    fn confirmed_delete_removes_row() {
        let slot = MemorySlot::new();
        let tracker = mk_tracker(at(2024, 1, 1, 12), &slot);
        tracker.select_mood(Mood::Calm);
        let key = tracker.views().timeline.rows()[0].delete_key;

        let asked = Cell::new(false);
        let outcome = tracker.request_delete(key, || {
            asked.set(true);
            true
        });
        assert!(asked.get());
        assert_eq!(outcome.feedback, Feedback::Deleted);
        assert!(!outcome.views.today.has_entry());
        assert!(matches!(outcome.views.timeline, Timeline::Empty { .. }));

        let again = tracker.request_delete(key, || true);
        assert_eq!(again.feedback, Feedback::NotFound);
    }

    #[test]
    fn failed_delete_reports_notice() {
        let slot = MemorySlot::new();
        let tracker = mk_tracker(at(2024, 1, 1, 12), &slot);
        tracker.select_mood(Mood::Calm);
        let key = tracker.views().timeline.rows()[0].delete_key;

        slot.fail_writes(true);
        let outcome = tracker.request_delete(key, || true);
        assert_eq!(outcome.feedback, Feedback::Failed(Notice::DELETE_FAILED));
        assert_eq!(outcome.views.timeline.rows().len(), 1);
    }

    #[test]
    fn with_config_creates_data_dir_and_persists() {
        let tmp = tempdir().unwrap();
        let config = mk_config(tmp.path().join("mood"));
        let tracker = MoodTracker::with_config(&config).expect("tracker with config");
        assert!(config.data_dir.is_dir());

        tracker.select_mood(Mood::Inspired);
        assert!(config.store_path().exists());
        assert_eq!(tracker.store().list_entries()[0].mood, "inspired");
    }
}
