//! The default volume a fresh shell boots into.

use dosh_types::NamespaceResult;

use crate::namespace::VirtualNamespace;
use crate::path::join;

const AUTOEXEC_BAT: &str = "@echo off
echo Starting DOS Emulator v1.0
echo Loading system files...
echo.
echo Welcome to DOS Emulator!
echo Type 'help' for available commands
echo.
prompt $p$g
path=C:\\DOS;C:\\UTILS;C:\\GAMES
";

const CONFIG_SYS: &str = "DEVICE=C:\\DOS\\HIMEM.SYS
DEVICE=C:\\DOS\\EMM386.EXE
BUFFERS=20
FILES=40
DOS=HIGH,UMB
";

const DIRECTORIES: &[&str] = &["DOS", "GAMES", "UTILS", "TEMP"];

const FILES: &[(&str, &str)] = &[
    ("AUTOEXEC.BAT", AUTOEXEC_BAT),
    ("CONFIG.SYS", CONFIG_SYS),
    ("COMMAND.COM", "DOS Command Interpreter"),
    (r"UTILS\EDIT.COM", "Simple Text Editor"),
    (r"UTILS\FORMAT.COM", "Disk Format Utility"),
    (r"UTILS\CHKDSK.COM", "Check Disk Utility"),
    (r"GAMES\SNAKE.EXE", "Snake Game"),
    (r"GAMES\TETRIS.EXE", "Tetris Game"),
    (r"GAMES\PACMAN.EXE", "Pac-Man Game"),
];

/// Populate the standard directories and files under the drive root.
///
/// Fails with `AlreadyExists` if any of them is already present.
pub fn seed_default_volume(namespace: &mut VirtualNamespace) -> NamespaceResult<()> {
    let root = namespace.root();
    for dir in DIRECTORIES {
        namespace.create_directory(&join(&root, dir))?;
    }
    for (path, content) in FILES {
        namespace.create_file(&join(&root, path), *content)?;
    }
    tracing::debug!(
        directories = DIRECTORIES.len(),
        files = FILES.len(),
        "seeded default volume"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dosh_types::FileKind;

    #[test]
    fn seeds_standard_layout() {
        let mut ns = VirtualNamespace::default();
        seed_default_volume(&mut ns).unwrap();

        for dir in [r"C:\DOS", r"C:\GAMES", r"C:\UTILS", r"C:\TEMP"] {
            assert!(ns.directory_exists(dir), "{dir}");
        }
        assert_eq!(ns.file_count(), 9);
        assert_eq!(ns.file(r"C:\GAMES\SNAKE.EXE").unwrap().kind, FileKind::Executable);
        assert_eq!(ns.file(r"C:\CONFIG.SYS").unwrap().kind, FileKind::Text);
        assert!(ns.file(r"C:\AUTOEXEC.BAT").unwrap().text().starts_with("@echo off"));
    }

    #[test]
    fn seeding_twice_fails() {
        let mut ns = VirtualNamespace::default();
        seed_default_volume(&mut ns).unwrap();
        assert!(seed_default_volume(&mut ns).is_err());
    }

    #[test]
    fn seeds_other_drive() {
        let mut ns = VirtualNamespace::new('D');
        seed_default_volume(&mut ns).unwrap();
        assert!(ns.file_exists(r"D:\UTILS\EDIT.COM"));
    }
}
