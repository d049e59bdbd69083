//! Namespace snapshots: the only persisted-state contract.
//!
//! JSON shape:
//!
//! ```text
//! {
//!   "files": [["C:\\A.TXT", { "name": "A.TXT", ... }], ...],
//!   "directories": ["C:", "C:\\", "C:\\DOS", ...],
//!   "timestamp": "2024-05-01T12:30:00"
//! }
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::record::FileRecord;

/// A full copy of a namespace's file map and directory set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub files: Vec<(String, FileRecord)>,
    pub directories: Vec<String>,
    /// When the snapshot was taken (local time of the exporting clock).
    pub timestamp: NaiveDateTime,
}

impl Snapshot {
    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Parse a snapshot from JSON.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::FileKind;
    use chrono::NaiveDate;

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .and_then(|d| d.and_hms_opt(12, 30, 0))
            .unwrap()
    }

    #[test]
    fn files_serialize_as_pairs() {
        let record = FileRecord {
            name: "X.TXT".into(),
            path: r"C:\X.TXT".into(),
            content: b"a".to_vec(),
            kind: FileKind::Text,
            size: 1,
            date: "05/01/24".into(),
            time: "12:30".into(),
            extension: "TXT".into(),
        };
        let snapshot = Snapshot {
            files: vec![(record.path.clone(), record)],
            directories: vec!["C:".into(), r"C:\".into()],
            timestamp: timestamp(),
        };

        let json: serde_json::Value = serde_json::from_str(&snapshot.to_json().unwrap()).unwrap();
        assert_eq!(json["files"][0][0], r"C:\X.TXT");
        assert_eq!(json["files"][0][1]["name"], "X.TXT");
        assert_eq!(json["directories"][1], r"C:\");
        assert_eq!(json["timestamp"], "2024-05-01T12:30:00");

        let back = Snapshot::from_json(&snapshot.to_json().unwrap()).unwrap();
        assert_eq!(back, snapshot);
    }
}
