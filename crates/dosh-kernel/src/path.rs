//! Path normalization and resolution for the virtual volume.
//!
//! Keys are strings like `C:\GAMES\SNAKE.EXE`: one separator character,
//! upper case throughout, no trailing separator except on a drive root
//! (`C:\`). The bare drive designator `C:` is also a key.
//!
//! Resolution is a minimal DOS-style resolver. `.` and `..` are only
//! recognized as the whole token, never as segments inside a longer path:
//! `A\..\B` is kept verbatim as a three-segment key.

/// The canonical separator.
pub const SEPARATOR: char = '\\';

/// Marks a drive designator (`C:`).
pub const DRIVE_MARKER: char = ':';

fn is_separator(c: char) -> bool {
    c == '\\' || c == '/'
}

/// Canonicalize a raw path into a key.
///
/// Runs of `/` and `\` collapse into one `\`, the string is upper-cased,
/// and a trailing separator is dropped unless the path is a drive root.
/// Total over all inputs and idempotent.
///
/// ```
/// use dosh_kernel::path::normalize;
///
/// assert_eq!(normalize("c:/games//snake.exe"), r"C:\GAMES\SNAKE.EXE");
/// assert_eq!(normalize(r"C:\DOS\"), r"C:\DOS");
/// assert_eq!(normalize(r"c:\\"), r"C:\");
/// ```
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut last_was_separator = false;
    for c in raw.chars() {
        if is_separator(c) {
            if !last_was_separator {
                out.push(SEPARATOR);
            }
            last_was_separator = true;
        } else {
            out.extend(c.to_uppercase());
            last_was_separator = false;
        }
    }

    if out.len() > 1 && out.ends_with(SEPARATOR) && !is_drive_root(&out) {
        out.pop();
    }
    out
}

/// The directory-like heuristic of DOS 8.3 naming: a path that ends in a
/// separator, or whose final component has no `.`, names a directory.
///
/// Directories with a dot in their name are misclassified; callers rely on
/// the rule exactly as stated.
///
/// ```
/// use dosh_kernel::path::is_directory_like;
///
/// assert!(is_directory_like(r"C:\GAMES"));
/// assert!(is_directory_like(r"C:\GAMES\"));
/// assert!(!is_directory_like(r"C:\GAMES\SNAKE.EXE"));
/// assert!(!is_directory_like(r"C:\OLD.DIR"));
/// ```
pub fn is_directory_like(path: &str) -> bool {
    path.ends_with(is_separator) || !file_name(path).contains('.')
}

/// True for a bare drive designator such as `C:`.
pub fn is_drive(path: &str) -> bool {
    path.ends_with(DRIVE_MARKER) && !path.contains(is_separator)
}

/// True for a drive root such as `C:\`.
pub fn is_drive_root(path: &str) -> bool {
    path.strip_suffix(SEPARATOR).is_some_and(is_drive)
}

/// True for either of the two root keys of a drive.
pub fn is_root_key(path: &str) -> bool {
    is_drive(path) || is_drive_root(path)
}

/// The drive designator of a key: everything before the first separator.
///
/// ```
/// use dosh_kernel::path::drive_of;
///
/// assert_eq!(drive_of(r"C:\GAMES\SNAKE.EXE"), "C:");
/// assert_eq!(drive_of(r"C:\"), "C:");
/// ```
pub fn drive_of(path: &str) -> &str {
    path.split(SEPARATOR).next().unwrap_or_default()
}

/// The root key of a drive designator: `C:` becomes `C:\`.
pub fn drive_root(drive: &str) -> String {
    format!("{drive}{SEPARATOR}")
}

/// The final component of a key (the whole key if it has no separator).
pub fn file_name(path: &str) -> &str {
    match path.rfind(is_separator) {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

/// The extension of a file name, without the dot; empty if there is none.
///
/// ```
/// use dosh_kernel::path::extension;
///
/// assert_eq!(extension("AUTOEXEC.BAT"), "BAT");
/// assert_eq!(extension("ARCHIVE.TAR.GZ"), "GZ");
/// assert_eq!(extension("README"), "");
/// ```
pub fn extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) => &name[idx + 1..],
        None => "",
    }
}

/// The key of the directory a file or directory key lives in.
///
/// Entries directly under a drive live in the drive root (`C:\`). Returns
/// `None` for the root keys themselves and for keys with no separator.
///
/// ```
/// use dosh_kernel::path::containing_directory;
///
/// assert_eq!(containing_directory(r"C:\A\B.TXT").as_deref(), Some(r"C:\A"));
/// assert_eq!(containing_directory(r"C:\X.TXT").as_deref(), Some(r"C:\"));
/// assert_eq!(containing_directory(r"C:\"), None);
/// ```
pub fn containing_directory(path: &str) -> Option<String> {
    if is_root_key(path) {
        return None;
    }
    let idx = path.rfind(SEPARATOR)?;
    let head = &path[..idx];
    if head.is_empty() {
        None
    } else if is_drive(head) {
        Some(drive_root(head))
    } else {
        Some(head.to_string())
    }
}

/// The parent used by `..`: split on the separator, and if at most two
/// components remain return the drive root, otherwise drop the last one.
///
/// ```
/// use dosh_kernel::path::parent_of;
///
/// assert_eq!(parent_of(r"C:\GAMES\ARCADE"), r"C:\GAMES");
/// assert_eq!(parent_of(r"C:\GAMES"), r"C:\");
/// assert_eq!(parent_of(r"C:\"), r"C:\");
/// ```
pub fn parent_of(path: &str) -> String {
    let parts: Vec<&str> = path.split(SEPARATOR).collect();
    if parts.len() <= 2 {
        return drive_root(parts[0]);
    }
    parts[..parts.len() - 1].join(&SEPARATOR.to_string())
}

/// True if `key` lies strictly beneath `dir` by prefix containment.
pub fn is_within(key: &str, dir: &str) -> bool {
    let prefix = if dir.ends_with(SEPARATOR) {
        dir.to_string()
    } else {
        format!("{dir}{SEPARATOR}")
    };
    key.len() > prefix.len() && key.starts_with(&prefix)
}

/// Append a child name to a directory key.
pub fn join(dir: &str, name: &str) -> String {
    normalize(&format!("{dir}{SEPARATOR}{name}"))
}

/// Resolve a user token against the current directory.
///
/// First matching rule wins:
/// 1. contains `:` → absolute, normalized (a bare drive means its root)
/// 2. starts with a separator → relative to the current drive's root
/// 3. empty or `.` → `current`, returned as-is
/// 4. `..` → [`parent_of`] `current`
/// 5. otherwise → `current` + separator + `target`, normalized
///
/// ```
/// use dosh_kernel::path::resolve;
///
/// assert_eq!(resolve(r"C:\GAMES", "snake.exe"), r"C:\GAMES\SNAKE.EXE");
/// assert_eq!(resolve(r"C:\GAMES", r"\dos"), r"C:\DOS");
/// assert_eq!(resolve(r"C:\GAMES", ".."), r"C:\");
/// assert_eq!(resolve(r"C:\GAMES", "d:/tmp"), r"D:\TMP");
/// ```
pub fn resolve(current: &str, target: &str) -> String {
    if target.contains(DRIVE_MARKER) {
        let absolute = normalize(target);
        return if is_drive(&absolute) {
            drive_root(&absolute)
        } else {
            absolute
        };
    }

    if target.starts_with(is_separator) {
        return normalize(&format!("{}{}", drive_of(current), target));
    }

    match target {
        "" | "." => current.to_string(),
        ".." => parent_of(current),
        _ => normalize(&format!("{current}{SEPARATOR}{target}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_mixed_separators() {
        assert_eq!(normalize(r"c:\/\dos/\//himem.sys"), r"C:\DOS\HIMEM.SYS");
    }

    #[test]
    fn normalize_keeps_bare_drive_and_lone_separator() {
        assert_eq!(normalize("c:"), "C:");
        assert_eq!(normalize("/"), r"\");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn normalize_is_idempotent_on_awkward_inputs() {
        for raw in ["", "/", "//", "c:", "c:/", "a/b/", "x.y/", "ß/é.txt", r"C:\A\..\B"] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once, "input {raw:?}");
        }
    }

    #[test]
    fn root_keys() {
        assert!(is_drive("C:"));
        assert!(is_drive_root(r"C:\"));
        assert!(!is_drive_root(r"C:\DOS"));
        assert!(!is_drive(r"C:\"));
        assert!(is_root_key("C:") && is_root_key(r"C:\"));
    }

    #[test]
    fn containing_directory_of_nested_dirs() {
        assert_eq!(containing_directory(r"C:\A\B").as_deref(), Some(r"C:\A"));
        assert_eq!(containing_directory("C:"), None);
        assert_eq!(containing_directory("LOOSE.TXT"), None);
    }

    #[test]
    fn within_uses_separator_boundary() {
        assert!(is_within(r"C:\GAMES\SNAKE.EXE", r"C:\GAMES"));
        assert!(!is_within(r"C:\GAMESX\SNAKE.EXE", r"C:\GAMES"));
        assert!(!is_within(r"C:\GAMES", r"C:\GAMES"));
        assert!(is_within(r"C:\AUTOEXEC.BAT", r"C:\"));
    }

    #[test]
    fn dot_segments_are_not_decomposed() {
        assert_eq!(resolve(r"C:\", r"A\..\B"), r"C:\A\..\B");
        assert_eq!(resolve(r"C:\A", r".\B"), r"C:\A\.\B");
    }

    #[test]
    fn dot_returns_current_unchanged() {
        // Not re-normalized, even if the cursor is odd.
        assert_eq!(resolve("c:/weird", "."), "c:/weird");
        assert_eq!(resolve(r"C:\A", ""), r"C:\A");
    }

    #[test]
    fn bare_drive_resolves_to_its_root() {
        assert_eq!(resolve(r"C:\GAMES", "d:"), r"D:\");
    }

    #[test]
    fn join_adds_one_separator() {
        assert_eq!(join(r"C:\", "dos"), r"C:\DOS");
        assert_eq!(join(r"C:\DOS", "edit.com"), r"C:\DOS\EDIT.COM");
    }
}
