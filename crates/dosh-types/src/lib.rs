//! Pure data types for dosh: file records, listings, snapshots, results.
//!
//! This crate is a leaf dependency with no async runtime and no I/O. It
//! exists so that front-ends and persistence code can work with the
//! namespace's data model without pulling in the kernel.

pub mod dir_entry;
pub mod error;
pub mod record;
pub mod result;
pub mod snapshot;
pub mod tool;

// Flat re-exports for convenience
pub use dir_entry::*;
pub use error::*;
pub use record::*;
pub use result::*;
pub use snapshot::*;
pub use tool::*;
