//! dosh-glob: DOS-style wildcard matching.
//!
//! Provides:
//! - **GlobMatcher**: a compiled `*`/`?` pattern, anchored at both ends and
//!   case-insensitive
//! - **glob_match**: one-shot convenience over `GlobMatcher`
//! - **contains_glob**: detect whether an argument is a pattern
//!
//! There are no character classes, no brace expansion and no escapes: a
//! literal `*` or `?` cannot be matched. Every other character, `.`
//! included, matches itself.

pub mod glob;

pub use glob::{GlobMatcher, contains_glob, glob_match};
