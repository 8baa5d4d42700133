//! The entry store: owns the persisted mood collection.
//!
//! Every mutation loads the whole collection, edits it, re-sorts it newest
//! first and writes it back. Listing degrades to an empty collection when the
//! slot cannot be read; mutations refuse to write in that case, and write
//! failures are returned so the caller can report them.

use chrono::NaiveDate;

use crate::catalog::Mood;
use crate::entry::MoodEntry;
use crate::storage::{Slot, StoreError};

#[derive(Debug)]
pub struct EntryStore<S: Slot> {
    slot: S,
}

impl<S: Slot> EntryStore<S> {
    pub fn new(slot: S) -> Self {
        Self { slot }
    }

    /// Reads the collection as stored. An empty or never-written slot is an
    /// empty collection; anything unparseable is an error.
    pub fn load(&self) -> Result<Vec<MoodEntry>, StoreError> {
        match self.slot.read()? {
            Some(raw) if !raw.trim().is_empty() => {
                serde_json::from_str(&raw).map_err(StoreError::Malformed)
            }
            _ => Ok(Vec::new()),
        }
    }

    /// Replaces the whole slot with `entries`.
    pub fn save(&self, entries: &[MoodEntry]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(entries).map_err(StoreError::Serialize)?;
        self.slot.write(&raw)
    }

    /// Records `mood` for `today`, replacing any entry already on that date.
    ///
    /// If `timestamp` is already held by an entry for another date it is moved
    /// past the newest one, keeping timestamps unique. A slot that cannot be
    /// read is an error and nothing is written.
    pub fn record_mood(
        &self,
        mood: Mood,
        today: NaiveDate,
        timestamp: i64,
    ) -> Result<MoodEntry, StoreError> {
        let mut entries = self.load_for_update()?;

        let clashes = entries
            .iter()
            .any(|e| e.timestamp == timestamp && e.date != today);
        let timestamp = if clashes {
            entries
                .iter()
                .map(|e| e.timestamp)
                .max()
                .and_then(|max| max.checked_add(1))
                .unwrap_or(timestamp)
        } else {
            timestamp
        };

        let entry = MoodEntry {
            mood: mood.id().to_string(),
            date: today,
            timestamp,
        };
        match entries.iter_mut().find(|e| e.date == today) {
            Some(existing) => {
                existing.mood = entry.mood.clone();
                existing.timestamp = entry.timestamp;
            }
            None => entries.push(entry.clone()),
        }
        sort_newest_first(&mut entries);

        self.save(&entries)?;
        tracing::debug!(mood = %entry.mood, date = %entry.date, "mood saved");
        Ok(entry)
    }

    pub fn today_entry(&self, today: NaiveDate) -> Option<MoodEntry> {
        self.list_entries().into_iter().find(|e| e.date == today)
    }

    /// All entries, newest first. Never fails: an unreadable slot is logged
    /// and reported as empty.
    pub fn list_entries(&self) -> Vec<MoodEntry> {
        self.load_or_empty()
    }

    /// Removes the entry with `timestamp`. Returns `false` without writing
    /// when there is no such entry.
    pub fn delete_entry(&self, timestamp: i64) -> Result<bool, StoreError> {
        let mut entries = self.load_for_update()?;
        let before = entries.len();
        entries.retain(|e| e.timestamp != timestamp);
        if entries.len() == before {
            return Ok(false);
        }

        self.save(&entries)?;
        tracing::debug!(timestamp, "mood entry deleted");
        Ok(true)
    }

    /// Collection to mutate and write back. Malformed contents start a fresh
    /// collection; any other read failure is returned so the durable copy is
    /// never overwritten from a partial view.
    fn load_for_update(&self) -> Result<Vec<MoodEntry>, StoreError> {
        match self.load() {
            Ok(mut entries) => {
                sort_newest_first(&mut entries);
                Ok(entries)
            }
            Err(StoreError::Malformed(e)) => {
                tracing::warn!(error = %e, "replacing malformed mood store");
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    fn load_or_empty(&self) -> Vec<MoodEntry> {
        match self.load() {
            Ok(mut entries) => {
                sort_newest_first(&mut entries);
                entries
            }
            Err(e) => {
                tracing::warn!(error = %e, "treating unreadable mood store as empty");
                Vec::new()
            }
        }
    }
}

fn sort_newest_first(entries: &mut [MoodEntry]) {
    entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
}
