//! dosh-kernel: the core of dosh.
//!
//! This crate provides:
//!
//! - **Path**: normalization of raw path strings into namespace keys, and
//!   resolution of user tokens against a current directory
//! - **Namespace**: the virtual volume (flat file map + directory key set)
//! - **Tools**: Tool trait, registry, and builtin DOS commands
//! - **History**: bounded command history with cursor recall
//! - **Shell**: the line-at-a-time command loop tying it all together
//! - **Clock**: the time source used for file stamps
//!
//! # Data flow
//!
//! ```text
//! Shell ──tokens──▶ ToolRegistry ──▶ Tool::execute
//!   │                                   │
//!   └── cwd ──▶ path::resolve ──────────┴──▶ VirtualNamespace
//! ```

pub mod clock;
pub mod config;
pub mod history;
pub mod namespace;
pub mod path;
pub mod seed;
pub mod shell;
pub mod tools;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::ShellConfig;
pub use history::{CommandHistory, RecallDirection, DEFAULT_HISTORY_LIMIT};
pub use namespace::{DirectorySize, VirtualNamespace};
pub use shell::{OutputSink, Shell, ShellAction, Transcript};

pub use dosh_types::{
    DirEntry, DirEntryKind, ExecResult, FileKind, FileRecord, NamespaceError, NamespaceResult,
    Snapshot,
};
