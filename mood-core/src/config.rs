use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::Deserialize;
use std::{fs, path::PathBuf};

use crate::paths::store_path;
use crate::view::DisplayFormats;

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding `moodEntries.json`.
    pub data_dir: PathBuf,
    /// chrono format for times of day. Default is "%H:%M".
    pub time_format: String,
    /// chrono format for dates older than yesterday. Default is "%B %-d, %Y".
    pub date_format: String,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    data_dir: Option<PathBuf>,
    time_format: Option<String>,
    date_format: Option<String>,
}

impl Config {
    /// Load config from disk (first XDG path, then native) and apply defaults.
    /// A missing or unreadable file leaves every setting at its default.
    pub fn load() -> Result<Self> {
        let file_config = match Self::read_file_config() {
            Ok(fc) => fc,
            Err(e) => {
                let error = format!("{e:#}");
                tracing::warn!(%error, "ignoring unreadable config");
                FileConfig::default()
            }
        };
        Ok(Self::from_file_config(file_config))
    }

    fn from_file_config(file_config: FileConfig) -> Self {
        let defaults = DisplayFormats::default();
        Self {
            data_dir: file_config.data_dir.unwrap_or_else(Self::default_data_dir),
            time_format: Self::valid_format("time_format", file_config.time_format)
                .unwrap_or(defaults.time_format),
            date_format: Self::valid_format("date_format", file_config.date_format)
                .unwrap_or(defaults.date_format),
        }
    }

    /// Drops formats chrono cannot render, so the default is used instead.
    fn valid_format(key: &str, format: Option<String>) -> Option<String> {
        let format = format?;
        if DisplayFormats::is_valid(&format) {
            Some(format)
        } else {
            tracing::warn!(key, format = %format, "ignoring invalid format in config");
            None
        }
    }

    pub fn store_path(&self) -> PathBuf {
        store_path(&self.data_dir)
    }

    pub fn display_formats(&self) -> DisplayFormats {
        DisplayFormats {
            time_format: self.time_format.clone(),
            date_format: self.date_format.clone(),
        }
    }

    /// Default data root: `{data_dir}/mood`
    /// - macOS:   `~/Library/Application Support/mood`
    /// - Linux:   `$XDG_DATA_HOME/mood` or `~/.local/share/mood`
    /// - Windows: `%APPDATA%\mood`
    fn default_data_dir() -> PathBuf {
        if let Some(base) = BaseDirs::new() {
            base.data_dir().join("mood")
        } else {
            PathBuf::from("./mood")
        }
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            v.push(b.home_dir().join(".config").join("mood").join("config.toml"));
            v.push(b.config_dir().join("mood").join("config.toml"));
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig::default())
    }

    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn candidates_prioritize_xdg_then_native() {
        if let Some(b) = BaseDirs::new() {
            let expected_xdg = b.home_dir().join(".config").join("mood").join("config.toml");
            let expected_native = b.config_dir().join("mood").join("config.toml");
            let c = Config::config_file_paths();
            assert_eq!(c.first(), Some(&expected_xdg));
            assert_eq!(c.get(1), Some(&expected_native));
        }
    }

    #[test]
    fn parse_file_accepts_all_keys() {
        let toml = r#"
            data_dir = "/tmp/my-moods"
            time_format = "%I:%M %p"
            date_format = "%d/%m/%Y"
        "#;
        let config = Config::from_file_config(Config::parse_file(toml).unwrap());
        assert_eq!(config.data_dir, Path::new("/tmp/my-moods"));
        assert_eq!(config.store_path(), Path::new("/tmp/my-moods/moodEntries.json"));
        assert_eq!(config.time_format, "%I:%M %p");
        assert_eq!(config.date_format, "%d/%m/%Y");
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = Config::from_file_config(Config::parse_file("").unwrap());
        assert_eq!(config.display_formats(), DisplayFormats::default());
        assert!(config.data_dir.ends_with("mood"));
    }

    #[test]
    fn invalid_formats_fall_back_to_defaults() {
        let toml = r#"
            time_format = "%Q"
            date_format = "%d/%m/%Y"
        "#;
        let config = Config::from_file_config(Config::parse_file(toml).unwrap());
        assert_eq!(config.time_format, "%H:%M");
        assert_eq!(config.date_format, "%d/%m/%Y");
    }

    #[test]
    fn parse_file_rejects_wrong_types() {
        assert!(Config::parse_file("data_dir = 3").is_err());
    }
}
