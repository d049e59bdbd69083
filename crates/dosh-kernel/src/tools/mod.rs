//! Tool system for dosh.
//!
//! Every command the shell understands is a tool implementing the same
//! [`Tool`] trait. The registry maps names and aliases to tools; names
//! that miss the registry fall through to executable lookup in the
//! namespace.
//!
//! # Architecture
//!
//! ```text
//! ToolRegistry
//! ├── Namespace commands (dir, cd, type, copy, del, md, rd, find, tree, ...)
//! ├── Text utilities (grep, sort, uniq, wc, head, tail, diff, ...)
//! └── Session commands (cls, ver, date, time, exit, help)
//! ```

mod builtin;
mod context;
mod registry;
mod traits;

pub use builtin::{register_builtins, resolve_executable};
pub use context::ExecContext;
pub use registry::ToolRegistry;
pub use traits::{ParamSchema, Tool, ToolArgs, ToolSchema};
