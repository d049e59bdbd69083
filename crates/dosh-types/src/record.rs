//! File records: the only objects stored in the namespace.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of a stored file, derived from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Text,
    Executable,
    Binary,
}

const EXECUTABLE_EXTENSIONS: &[&str] = &["exe", "com", "bat"];
const TEXT_EXTENSIONS: &[&str] = &["txt", "bat", "sys", "ini", "cfg"];

impl FileKind {
    /// Classify an extension (without the dot), case-insensitively.
    ///
    /// Executable extensions are checked first, so `BAT` is executable even
    /// though it also appears in the text table.
    ///
    /// ```
    /// use dosh_types::FileKind;
    ///
    /// assert_eq!(FileKind::from_extension("EXE"), FileKind::Executable);
    /// assert_eq!(FileKind::from_extension("bat"), FileKind::Executable);
    /// assert_eq!(FileKind::from_extension("Sys"), FileKind::Text);
    /// assert_eq!(FileKind::from_extension(""), FileKind::Binary);
    /// ```
    pub fn from_extension(extension: &str) -> Self {
        let ext = extension.to_ascii_lowercase();
        if EXECUTABLE_EXTENSIONS.contains(&ext.as_str()) {
            FileKind::Executable
        } else if TEXT_EXTENSIONS.contains(&ext.as_str()) {
            FileKind::Text
        } else {
            FileKind::Binary
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileKind::Text => "text",
            FileKind::Executable => "executable",
            FileKind::Binary => "binary",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A file stored in the namespace.
///
/// `size` always equals `content.len()`; the namespace recomputes it on
/// every write. `date` is `MM/DD/YY`, `time` is `HH:MM`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Final path component, e.g. `SNAKE.EXE`.
    pub name: String,
    /// Normalized key, e.g. `C:\GAMES\SNAKE.EXE`.
    pub path: String,
    #[serde(with = "content_repr")]
    pub content: Vec<u8>,
    #[serde(rename = "type")]
    pub kind: FileKind,
    pub size: u64,
    pub date: String,
    pub time: String,
    /// Extension without the dot, empty when the name has none.
    pub extension: String,
}

impl FileRecord {
    /// Content as text, replacing invalid UTF-8 sequences.
    pub fn text(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.content)
    }

    pub fn is_executable(&self) -> bool {
        self.kind == FileKind::Executable
    }
}

/// Content is written as a JSON string when it is UTF-8 and as a byte array
/// otherwise, so binary payloads survive a snapshot round-trip.
mod content_repr {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        match std::str::from_utf8(bytes) {
            Ok(text) => serializer.serialize_str(text),
            Err(_) => serializer.collect_seq(bytes),
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Text(String),
        Bytes(Vec<u8>),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        Ok(match Repr::deserialize(deserializer)? {
            Repr::Text(text) => text.into_bytes(),
            Repr::Bytes(bytes) => bytes,
        })
    }
}
