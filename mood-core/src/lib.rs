pub mod catalog;
pub mod clock;
pub mod config;
pub mod entry;
pub mod paths;
pub mod storage;
pub mod store;
pub mod tracker;
pub mod view;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogError, Mood, MoodStyle, Rgb};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use entry::MoodEntry;
pub use storage::{FileSlot, MemorySlot, Slot, StoreError};
pub use store::EntryStore;
pub use tracker::{Feedback, MoodTracker, Outcome, Views};
pub use view::{DisplayFormats, Notice, Timeline, TimelineRow, Toast, TodayPanel};
