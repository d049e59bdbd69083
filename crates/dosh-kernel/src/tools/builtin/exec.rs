//! Executable lookup for names that are not built-in commands.

use dosh_types::FileRecord;

use crate::path::is_directory_like;
use crate::tools::ExecContext;

/// Suffixes probed, in DOS order, when a bare name is typed.
const EXECUTABLE_SUFFIXES: &[&str] = &["COM", "EXE", "BAT"];

/// Find the executable file a command name refers to.
///
/// The name is resolved against the current directory. If that is not an
/// executable and the name has no extension, `NAME.COM`, `NAME.EXE` and
/// `NAME.BAT` are tried in turn.
pub fn resolve_executable<'a>(ctx: &'a ExecContext, name: &str) -> Option<&'a FileRecord> {
    let direct = ctx.file(name).filter(|record| record.is_executable());
    if direct.is_some() || !is_directory_like(name) {
        return direct;
    }
    EXECUTABLE_SUFFIXES.iter().find_map(|suffix| {
        ctx.file(&format!("{name}.{suffix}"))
            .filter(|record| record.is_executable())
    })
}
