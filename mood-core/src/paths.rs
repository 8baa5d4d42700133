use std::path::{Path, PathBuf};

pub const STORE_FILE_NAME: &str = "moodEntries.json";

/// `{root}/moodEntries.json`
pub fn store_path(root: &Path) -> PathBuf {
    root.join(STORE_FILE_NAME)
}
