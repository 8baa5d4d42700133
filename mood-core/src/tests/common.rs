use crate::Config;
use crate::view::DisplayFormats;
use std::path::PathBuf;

/// Test helper to create a default `Config` for testing purposes.
///
/// This is the single source of truth for test configuration.
/// If you add a field to `Config`, you only need to update it here.
pub fn mk_config(data_dir: PathBuf) -> Config {
    let formats = DisplayFormats::default();
    Config {
        data_dir,
        time_format: formats.time_format,
        date_format: formats.date_format,
    }
}
