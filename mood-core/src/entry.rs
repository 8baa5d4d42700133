use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One recorded mood. `timestamp` is milliseconds since the Unix epoch and
/// identifies the entry for deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub mood: String,
    pub date: NaiveDate,
    pub timestamp: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_date_as_iso_day() {
        let entry = MoodEntry {
            mood: "happy".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            timestamp: 1_704_103_200_000,
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(
            json,
            r#"{"mood":"happy","date":"2024-01-01","timestamp":1704103200000}"#
        );
    }

    #[test]
    fn reads_entries_written_by_older_versions() {
        let json = r#"[{"mood":"calm","date":"2024-01-01","timestamp":5},{"mood":"retired","date":"2023-12-31","timestamp":4}]"#;
        let entries: Vec<MoodEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].mood, "retired");
    }
}
