//! The virtual volume.
//!
//! A flat map from normalized key to [`FileRecord`] plus a set of directory
//! keys. Directories are not objects: a directory exists when its key is in
//! the set, and containment is worked out at query time from key prefixes.
//! Listings, searches and emptiness checks are linear scans.
//!
//! Two root keys per drive (`C:` and `C:\`) are inserted on construction
//! and after every import, and can never be removed.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use chrono::NaiveDateTime;
use dosh_glob::GlobMatcher;
use dosh_types::{DirEntry, FileKind, FileRecord, NamespaceError, NamespaceResult, Snapshot};

use crate::clock::{Clock, SystemClock, dos_date, dos_time};
use crate::path::{
    self, DRIVE_MARKER, containing_directory, drive_root, file_name, is_drive, is_root_key,
    is_within, normalize,
};

/// Totals returned by [`VirtualNamespace::directory_size`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectorySize {
    /// Sum of the sizes of every file beneath the directory.
    pub bytes: u64,
    /// Number of files beneath the directory, at any depth.
    pub files: usize,
}

/// In-memory DOS volume.
///
/// Single-writer: every method is one complete update of the maps, so no
/// operation can be observed half-applied.
#[derive(Debug)]
pub struct VirtualNamespace {
    files: BTreeMap<String, FileRecord>,
    directories: BTreeSet<String>,
    drive: String,
    clock: Arc<dyn Clock>,
}

impl Default for VirtualNamespace {
    fn default() -> Self {
        Self::new('C')
    }
}

impl VirtualNamespace {
    /// Create an empty volume for `drive`, stamped by the system clock.
    pub fn new(drive: char) -> Self {
        Self::with_clock(drive, Arc::new(SystemClock))
    }

    /// Create an empty volume with an explicit time source.
    pub fn with_clock(drive: char, clock: Arc<dyn Clock>) -> Self {
        let mut namespace = Self {
            files: BTreeMap::new(),
            directories: BTreeSet::new(),
            drive: format!("{}{}", drive.to_ascii_uppercase(), DRIVE_MARKER),
            clock,
        };
        namespace.ensure_roots();
        namespace
    }

    fn ensure_roots(&mut self) {
        self.directories.insert(self.drive.clone());
        self.directories.insert(drive_root(&self.drive));
    }

    /// The drive designator, e.g. `C:`.
    pub fn drive(&self) -> &str {
        &self.drive
    }

    /// The drive root key, e.g. `C:\`.
    pub fn root(&self) -> String {
        drive_root(&self.drive)
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    fn stamp(&self) -> (String, String) {
        let now = self.clock.now();
        (dos_date(&now), dos_time(&now))
    }

    // ═══════════════════════════════════════════════════════════════════
    // Files
    // ═══════════════════════════════════════════════════════════════════

    /// Create a file whose kind is derived from its extension.
    ///
    /// If the containing directory key is missing it is created (one level
    /// only; its own ancestors are not).
    pub fn create_file(&mut self, path: &str, content: impl Into<Vec<u8>>) -> NamespaceResult<()> {
        self.create_file_as(path, content, None)
    }

    /// Create a file, overriding the extension-derived kind when `kind` is set.
    ///
    /// A key with no containing directory (no drive, such as `LOOSE.TXT`)
    /// is refused with `NotFound`.
    pub fn create_file_as(
        &mut self,
        path: &str,
        content: impl Into<Vec<u8>>,
        kind: Option<FileKind>,
    ) -> NamespaceResult<()> {
        let key = normalize(path);
        if self.files.contains_key(&key) || self.directories.contains(&key) {
            tracing::debug!(path = %key, "create refused: already exists");
            return Err(NamespaceError::AlreadyExists(key));
        }

        let Some(parent) = containing_directory(&key) else {
            tracing::debug!(path = %key, "create refused: no containing directory");
            return Err(NamespaceError::NotFound(key));
        };
        if !self.directories.contains(&parent) {
            tracing::debug!(directory = %parent, "creating missing parent directory");
            self.directories.insert(parent);
        }

        let name = file_name(&key).to_string();
        let extension = path::extension(&name).to_string();
        let content = content.into();
        let (date, time) = self.stamp();
        let record = FileRecord {
            kind: kind.unwrap_or_else(|| FileKind::from_extension(&extension)),
            size: content.len() as u64,
            path: key.clone(),
            name,
            content,
            date,
            time,
            extension,
        };

        tracing::debug!(path = %key, size = record.size, kind = %record.kind, "created file");
        self.files.insert(key, record);
        Ok(())
    }

    /// Content of a file, `None` if there is no file at `path`.
    pub fn read_file(&self, path: &str) -> Option<&[u8]> {
        self.file(path).map(|record| record.content.as_slice())
    }

    /// The full record of a file.
    pub fn file(&self, path: &str) -> Option<&FileRecord> {
        self.files.get(&normalize(path))
    }

    /// Replace the content of an existing file, restamping it.
    pub fn write_file(&mut self, path: &str, content: impl Into<Vec<u8>>) -> NamespaceResult<()> {
        let key = normalize(path);
        let (date, time) = self.stamp();
        let record = self
            .files
            .get_mut(&key)
            .ok_or_else(|| NamespaceError::NotFound(key.clone()))?;

        record.content = content.into();
        record.size = record.content.len() as u64;
        record.date = date;
        record.time = time;
        tracing::debug!(path = %key, size = record.size, "wrote file");
        Ok(())
    }

    /// Remove a file.
    pub fn delete_file(&mut self, path: &str) -> NamespaceResult<()> {
        let key = normalize(path);
        match self.files.remove(&key) {
            Some(_) => {
                tracing::debug!(path = %key, "deleted file");
                Ok(())
            }
            None => Err(NamespaceError::NotFound(key)),
        }
    }

    /// Copy a file by creating `dst` with the content of `src`.
    ///
    /// Fails with `NotFound` if `src` is missing and with `AlreadyExists` if
    /// `dst` is taken, exactly like [`create_file`](Self::create_file).
    pub fn copy_file(&mut self, src: &str, dst: &str) -> NamespaceResult<()> {
        let content = self
            .read_file(src)
            .ok_or_else(|| NamespaceError::NotFound(normalize(src)))?
            .to_vec();
        self.create_file(dst, content)
    }

    pub fn file_exists(&self, path: &str) -> bool {
        self.files.contains_key(&normalize(path))
    }

    // ═══════════════════════════════════════════════════════════════════
    // Directories
    // ═══════════════════════════════════════════════════════════════════

    /// Add a directory key. Missing ancestors are not created.
    pub fn create_directory(&mut self, path: &str) -> NamespaceResult<()> {
        let key = normalize(path);
        if self.directories.contains(&key) || self.files.contains_key(&key) {
            return Err(NamespaceError::AlreadyExists(key));
        }
        tracing::debug!(path = %key, "created directory");
        self.directories.insert(key);
        Ok(())
    }

    /// Remove a directory key if no file lies beneath it.
    ///
    /// Only files count: an empty nested directory does not block removal
    /// and is left behind as an unreachable key.
    pub fn remove_directory(&mut self, path: &str) -> NamespaceResult<()> {
        let key = normalize(path);
        if is_root_key(&key) {
            return Err(NamespaceError::ProtectedRoot(key));
        }
        if self.files.keys().any(|file| is_within(file, &key)) {
            tracing::debug!(path = %key, "remove refused: not empty");
            return Err(NamespaceError::NotEmpty(key));
        }
        if self.directories.remove(&key) {
            tracing::debug!(path = %key, "removed directory");
            Ok(())
        } else {
            Err(NamespaceError::NotFound(key))
        }
    }

    pub fn directory_exists(&self, path: &str) -> bool {
        self.directories.contains(&normalize(path))
    }

    /// Entries directly inside a directory: subdirectories first, then
    /// files, each group sorted by name.
    ///
    /// `None` when `path` is not a directory key; an empty directory gives
    /// an empty listing. A bare drive lists its root.
    pub fn list_directory(&self, path: &str) -> Option<Vec<DirEntry>> {
        let key = normalize(path);
        if !self.directories.contains(&key) {
            return None;
        }
        let dir = if is_drive(&key) { drive_root(&key) } else { key };
        let (date, time) = self.stamp();
        let directly_in = |key: &str| containing_directory(key).as_deref() == Some(dir.as_str());

        let mut entries: Vec<DirEntry> = self
            .directories
            .iter()
            .filter(|key| directly_in(key))
            .map(|key| DirEntry::directory(file_name(key), key.clone(), date.clone(), time.clone()))
            .chain(
                self.files
                    .iter()
                    .filter(|(key, _)| directly_in(key))
                    .map(|(_, record)| DirEntry::from(record)),
            )
            .collect();

        entries.sort_by(|a, b| b.is_dir().cmp(&a.is_dir()).then_with(|| collate(&a.name, &b.name)));
        Some(entries)
    }

    /// Files anywhere beneath `root` whose name matches a wildcard pattern.
    pub fn search_files(&self, pattern: &str, root: &str) -> Vec<&FileRecord> {
        let root = self.scan_root(root);
        let matcher = GlobMatcher::compile(pattern);
        self.files
            .iter()
            .filter(|(key, record)| is_within(key, &root) && matcher.test(&record.name))
            .map(|(_, record)| record)
            .collect()
    }

    /// Total size and count of every file beneath `path`, at any depth.
    pub fn directory_size(&self, path: &str) -> DirectorySize {
        let root = self.scan_root(path);
        self.files
            .iter()
            .filter(|(key, _)| is_within(key, &root))
            .fold(DirectorySize::default(), |acc, (_, record)| DirectorySize {
                bytes: acc.bytes + record.size,
                files: acc.files + 1,
            })
    }

    fn scan_root(&self, path: &str) -> String {
        let key = normalize(path);
        if is_drive(&key) { drive_root(&key) } else { key }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Whole-store access
    // ═══════════════════════════════════════════════════════════════════

    /// Every file record, ordered by key.
    pub fn files(&self) -> impl Iterator<Item = &FileRecord> {
        self.files.values()
    }

    /// Every directory key, roots included, in key order.
    pub fn directories(&self) -> impl Iterator<Item = &str> {
        self.directories.iter().map(String::as_str)
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Copy the whole store, stamped with the current time.
    pub fn export(&self) -> Snapshot {
        Snapshot {
            files: self
                .files
                .iter()
                .map(|(key, record)| (key.clone(), record.clone()))
                .collect(),
            directories: self.directories.iter().cloned().collect(),
            timestamp: self.clock.now(),
        }
    }

    /// Replace the whole store with a snapshot. No merge.
    ///
    /// Root keys are re-inserted and sizes recomputed from content.
    pub fn import(&mut self, snapshot: Snapshot) {
        self.files = snapshot
            .files
            .into_iter()
            .map(|(key, mut record)| {
                record.size = record.content.len() as u64;
                (key, record)
            })
            .collect();
        self.directories = snapshot.directories.into_iter().collect();
        self.ensure_roots();
        tracing::info!(
            files = self.files.len(),
            directories = self.directories.len(),
            taken = %snapshot.timestamp,
            "imported snapshot"
        );
    }
}

/// Symbols in dictionary order; all of them sort before digits.
const SYMBOLS: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

/// Primary weight of a character: whitespace, symbols, digits, then
/// letters compared without case.
fn weight(c: char) -> (u8, u32) {
    if c.is_whitespace() {
        (0, c as u32)
    } else if let Some(rank) = SYMBOLS.find(c) {
        (1, rank as u32)
    } else if c.is_numeric() {
        (3, c as u32)
    } else if c.is_alphabetic() {
        (4, c.to_lowercase().next().unwrap_or(c) as u32)
    } else if !c.is_alphanumeric() {
        (2, c as u32)
    } else {
        (5, c as u32)
    }
}

/// Listing order for names: dictionary order, lower case before upper
/// case on a tie, raw bytes last.
fn collate(a: &str, b: &str) -> Ordering {
    a.chars()
        .map(weight)
        .cmp(b.chars().map(weight))
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}
