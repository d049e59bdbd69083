//! Directory listing entries.

use crate::record::{FileKind, FileRecord};

/// Kind of directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirEntryKind {
    Directory,
    File(FileKind),
}

/// One row of a directory listing.
///
/// Directories have no record of their own, so their `size` is 0 and their
/// date/time is the moment the listing was taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// Name of the entry (not full path).
    pub name: String,
    /// Normalized key of the entry.
    pub path: String,
    pub kind: DirEntryKind,
    /// Size in bytes (0 for directories).
    pub size: u64,
    pub date: String,
    pub time: String,
}

impl DirEntry {
    /// Create a directory entry stamped with the given date and time.
    pub fn directory(
        name: impl Into<String>,
        path: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            kind: DirEntryKind::Directory,
            size: 0,
            date: date.into(),
            time: time.into(),
        }
    }

    /// Returns true if this entry is a directory.
    pub fn is_dir(&self) -> bool {
        self.kind == DirEntryKind::Directory
    }

    /// Returns true if this entry is a file.
    pub fn is_file(&self) -> bool {
        matches!(self.kind, DirEntryKind::File(_))
    }

    /// The file kind, or `None` for directories.
    pub fn file_kind(&self) -> Option<FileKind> {
        match self.kind {
            DirEntryKind::File(kind) => Some(kind),
            DirEntryKind::Directory => None,
        }
    }
}

impl From<&FileRecord> for DirEntry {
    fn from(record: &FileRecord) -> Self {
        Self {
            name: record.name.clone(),
            path: record.path.clone(),
            kind: DirEntryKind::File(record.kind),
            size: record.size,
            date: record.date.clone(),
            time: record.time.clone(),
        }
    }
}
