//! dosh REPL: interactive front-end for the dosh shell.
//!
//! It handles:
//! - Meta-commands: `/help`, `/quit`, `/history`, `/cwd`, `/export`, `/import`
//! - Command execution via the kernel [`Shell`]
//! - Line editing and persistent history via rustyline
//! - Optional snapshot persistence of the volume between sessions

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use tokio::runtime::Runtime;

use dosh_kernel::{OutputSink, Shell, ShellAction, ShellConfig, Snapshot};

/// ANSI sequence to clear the terminal and home the cursor.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Buffers shell output for the terminal.
///
/// The line editor already shows what was typed, so echoed command lines
/// are dropped.
#[derive(Debug, Default)]
pub struct ConsoleSink {
    lines: Vec<String>,
    cleared: bool,
}

impl ConsoleSink {
    /// Everything rendered since the last drain, `None` if nothing was.
    fn drain(&mut self) -> Option<String> {
        let mut out = String::new();
        if std::mem::take(&mut self.cleared) {
            out.push_str(CLEAR_SCREEN);
        }
        out.push_str(&std::mem::take(&mut self.lines).join("\n"));
        (!out.is_empty()).then_some(out)
    }
}

impl OutputSink for ConsoleSink {
    fn print(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn echo_command(&mut self, _line: &str) {}

    fn clear(&mut self) {
        self.lines.clear();
        self.cleared = true;
    }
}

/// Result from meta-command handling.
#[derive(Debug)]
enum MetaResult {
    /// Continue with optional output
    Continue(Option<String>),
    /// Leave the REPL
    Exit,
}

/// REPL state: the shell, the runtime that drives it, and where the volume
/// is persisted.
pub struct Repl {
    shell: Shell<ConsoleSink>,
    runtime: Runtime,
    snapshot_path: Option<PathBuf>,
    exit_requested: bool,
}

impl Repl {
    /// Create a REPL over the default seeded volume.
    pub fn new() -> Result<Self> {
        Self::with_config(ShellConfig::named("repl"))
    }

    /// Create a REPL with a custom shell configuration.
    pub fn with_config(config: ShellConfig) -> Result<Self> {
        let shell = Shell::with_sink(config, ConsoleSink::default())
            .context("Failed to create shell")?;
        let runtime = Runtime::new().context("Failed to create tokio runtime")?;

        Ok(Self {
            shell,
            runtime,
            snapshot_path: None,
            exit_requested: false,
        })
    }

    /// Persist the volume at `path`: import it now if it exists, and write
    /// it back on [`finish`](Self::finish).
    pub fn with_snapshot(mut self, path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if path.exists() {
            self.load_snapshot(&path)?;
        } else {
            tracing::info!(path = %path.display(), "no snapshot yet, starting fresh");
        }
        self.snapshot_path = Some(path);
        Ok(self)
    }

    /// Process a single line of input.
    ///
    /// Returns Ok(None) when there is nothing to display.
    pub fn process_line(&mut self, line: &str) -> Result<Option<String>> {
        let trimmed = line.trim();

        if trimmed.starts_with('/') {
            return match self.handle_meta_command(trimmed) {
                MetaResult::Continue(output) => Ok(output),
                MetaResult::Exit => {
                    self.exit_requested = true;
                    Ok(None)
                }
            };
        }

        if trimmed.is_empty() {
            return Ok(None);
        }

        if self.runtime.block_on(self.shell.submit(line)) == ShellAction::Exit {
            self.exit_requested = true;
        }
        Ok(self.shell.output_mut().drain())
    }

    /// Handle a meta-command (starts with /).
    fn handle_meta_command(&mut self, cmd: &str) -> MetaResult {
        let parts: Vec<&str> = cmd.split_whitespace().collect();
        let command = parts.first().copied().unwrap_or("");

        match command {
            "/quit" | "/q" | "/exit" => MetaResult::Exit,
            "/help" | "/h" | "/?" => MetaResult::Continue(Some(HELP_TEXT.to_string())),
            "/cwd" => MetaResult::Continue(Some(self.shell.cwd().to_string())),
            "/history" => {
                let history = self.shell.history();
                if history.is_empty() {
                    return MetaResult::Continue(Some("(no history)".to_string()));
                }
                let lines: Vec<String> = history
                    .entries()
                    .enumerate()
                    .map(|(i, line)| format!("{:>4}  {line}", i + 1))
                    .collect();
                MetaResult::Continue(Some(lines.join("\n")))
            }
            "/export" | "/import" => {
                let Some(path) = parts.get(1) else {
                    return MetaResult::Continue(Some(format!("Usage: {command} <file>")));
                };
                let path = Path::new(path);
                let outcome = if command == "/export" {
                    self.save_snapshot(path).map(|()| format!("Exported to {}", path.display()))
                } else {
                    self.load_snapshot(path).map(|()| format!("Imported from {}", path.display()))
                };
                MetaResult::Continue(Some(outcome.unwrap_or_else(|e| format!("Error: {e:#}"))))
            }
            _ => MetaResult::Continue(Some(format!(
                "Unknown command: {command}\nType /help for REPL commands, help for shell commands."
            ))),
        }
    }

    /// Replace the volume with the snapshot stored at `path`.
    pub fn load_snapshot(&mut self, path: &Path) -> Result<()> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read snapshot: {}", path.display()))?;
        let snapshot = Snapshot::from_json(&json)
            .with_context(|| format!("Failed to parse snapshot: {}", path.display()))?;
        self.shell.namespace_mut().import(snapshot);
        Ok(())
    }

    /// Write the volume to `path` as JSON.
    pub fn save_snapshot(&self, path: &Path) -> Result<()> {
        let json = self
            .shell
            .namespace()
            .export()
            .to_json()
            .context("Failed to serialize snapshot")?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, json)
            .with_context(|| format!("Failed to write snapshot: {}", path.display()))?;
        tracing::debug!(path = %path.display(), "saved snapshot");
        Ok(())
    }

    /// Write the volume back to its snapshot file, if one is configured.
    pub fn finish(&self) -> Result<()> {
        match &self.snapshot_path {
            Some(path) => self.save_snapshot(path),
            None => Ok(()),
        }
    }

    /// True once `exit`, `quit` or `/quit` has been entered.
    pub fn should_exit(&self) -> bool {
        self.exit_requested
    }

    /// True unless the most recent shell command failed.
    pub fn last_ok(&self) -> bool {
        self.shell.last_ok()
    }

    /// `<cwd>> `
    pub fn prompt(&self) -> String {
        self.shell.prompt()
    }

    pub fn shell(&self) -> &Shell<ConsoleSink> {
        &self.shell
    }
}

const HELP_TEXT: &str = r#"dosh REPL

Meta Commands:
  /help, /?          Show this help
  /quit, /q          Exit the REPL (or type exit)
  /history           Show command history
  /cwd               Show current directory
  /export <file>     Save the volume as a JSON snapshot
  /import <file>     Replace the volume with a JSON snapshot

Shell Commands:
  Type help for the full command table, help <command> for details.
  dir, cd, type, copy, del, md, rd, find, echo ... > file, tree, more

Programs:
  Any .COM, .EXE or .BAT in the current directory can be run by name,
  with or without its extension.

Keys:
  Up/Down            Recall previous commands
  Ctrl-C             Cancel the current line
  Ctrl-D             Exit
"#;

/// Save REPL history to disk.
fn save_history(rl: &mut Editor<(), DefaultHistory>, history_path: &Option<PathBuf>) {
    if let Some(path) = history_path {
        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                tracing::warn!("Failed to create history directory: {}", e);
            }
        }
        if let Err(e) = rl.save_history(path) {
            tracing::warn!("Failed to save history: {}", e);
        }
    }
}

/// Run the interactive loop until exit or end of input.
pub fn run(mut repl: Repl) -> Result<()> {
    println!("dosh v{}", env!("CARGO_PKG_VERSION"));
    println!("Type help for commands, /help for REPL commands, exit to leave.");
    println!();

    let mut rl: Editor<(), DefaultHistory> =
        Editor::new().context("Failed to create editor")?;

    let history_path = directories::BaseDirs::new()
        .map(|b| b.data_dir().join("dosh").join("history.txt"));
    if let Some(ref path) = history_path {
        if let Err(e) = rl.load_history(path) {
            // Missing history is expected on first run
            let is_not_found = matches!(&e, ReadlineError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound);
            if !is_not_found {
                tracing::warn!("Failed to load history: {}", e);
            }
        }
    }

    loop {
        match rl.readline(&repl.prompt()) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(e) = rl.add_history_entry(line.as_str()) {
                        tracing::warn!("Failed to add history entry: {}", e);
                    }
                }

                match repl.process_line(&line) {
                    Ok(Some(output)) => println!("{output}"),
                    Ok(None) => {}
                    Err(e) => eprintln!("Error: {e:#}"),
                }
                if repl.should_exit() {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("^D");
                break;
            }
            Err(err) => {
                eprintln!("Error: {}", err);
                break;
            }
        }
    }

    save_history(&mut rl, &history_path);
    repl.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console_sink_drops_echo_and_marks_clear() {
        let mut sink = ConsoleSink::default();
        sink.echo_command(r"C:\> ver");
        assert_eq!(sink.drain(), None);

        sink.print("one");
        sink.clear();
        sink.print("two");
        assert_eq!(sink.drain().as_deref(), Some("\x1b[2J\x1b[Htwo"));
        assert_eq!(sink.drain(), None);
    }
}
