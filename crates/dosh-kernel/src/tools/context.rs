//! Execution context for tools.

use chrono::NaiveDateTime;
use dosh_types::FileRecord;

use crate::namespace::VirtualNamespace;
use crate::path;

use super::traits::ToolSchema;

/// Execution context passed to tools.
///
/// Owns the volume and the current directory. Tools that affect the
/// front-end (clearing the screen, leaving the session) raise a request
/// flag that the shell consumes after the tool returns.
#[derive(Debug)]
pub struct ExecContext {
    /// The virtual volume.
    pub namespace: VirtualNamespace,
    /// Current directory key.
    pub cwd: String,
    /// Lines per page for `more`.
    pub page_size: usize,
    /// Tool schemas for the help command.
    pub tool_schemas: Vec<ToolSchema>,
    clear_requested: bool,
    exit_requested: bool,
}

impl ExecContext {
    /// Create a context positioned at the volume's drive root.
    pub fn new(namespace: VirtualNamespace) -> Self {
        let cwd = namespace.root();
        Self {
            namespace,
            cwd,
            page_size: crate::config::DEFAULT_PAGE_SIZE,
            tool_schemas: Vec::new(),
            clear_requested: false,
            exit_requested: false,
        }
    }

    /// Set the available tool schemas (for help command).
    pub fn set_tool_schemas(&mut self, schemas: Vec<ToolSchema>) {
        self.tool_schemas = schemas;
    }

    /// Resolve a user token against the current directory.
    pub fn resolve_path(&self, token: &str) -> String {
        path::resolve(&self.cwd, token)
    }

    /// Move the cursor to `token` if it names an existing directory.
    ///
    /// Returns false, leaving the cursor unchanged, otherwise.
    pub fn change_directory(&mut self, token: &str) -> bool {
        let target = self.resolve_path(token);
        if self.namespace.directory_exists(&target) {
            tracing::debug!(from = %self.cwd, to = %target, "changed directory");
            self.cwd = target;
            true
        } else {
            false
        }
    }

    /// The file a token resolves to, if any.
    pub fn file(&self, token: &str) -> Option<&FileRecord> {
        self.namespace.file(&self.resolve_path(token))
    }

    pub fn now(&self) -> NaiveDateTime {
        self.namespace.now()
    }

    /// Ask the front-end to clear its rendered output.
    pub fn request_clear(&mut self) {
        self.clear_requested = true;
    }

    /// Ask the front-end to end the session.
    pub fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    /// Consume a pending clear request.
    pub fn take_clear_request(&mut self) -> bool {
        std::mem::take(&mut self.clear_requested)
    }

    /// Consume a pending exit request.
    pub fn take_exit_request(&mut self) -> bool {
        std::mem::take(&mut self.exit_requested)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_ctx() -> ExecContext {
        let mut ns = VirtualNamespace::default();
        ns.create_directory(r"C:\GAMES").unwrap();
        ns.create_file(r"C:\GAMES\SNAKE.EXE", "Snake Game").unwrap();
        ExecContext::new(ns)
    }

    #[test]
    fn starts_at_drive_root() {
        assert_eq!(make_ctx().cwd, r"C:\");
    }

    #[test]
    fn change_directory_moves_only_to_existing_directories() {
        let mut ctx = make_ctx();
        assert!(ctx.change_directory("games"));
        assert_eq!(ctx.cwd, r"C:\GAMES");

        assert!(!ctx.change_directory("nowhere"));
        assert!(!ctx.change_directory("snake.exe"));
        assert_eq!(ctx.cwd, r"C:\GAMES");

        assert!(ctx.change_directory(".."));
        assert_eq!(ctx.cwd, r"C:\");
    }

    #[test]
    fn file_resolves_against_cwd() {
        let mut ctx = make_ctx();
        ctx.cwd = r"C:\GAMES".into();
        assert_eq!(ctx.file("snake.exe").map(|f| f.size), Some(10));
        assert!(ctx.file(r"\snake.exe").is_none());
    }

    #[test]
    fn requests_are_consumed_once() {
        let mut ctx = make_ctx();
        ctx.request_exit();
        assert!(ctx.take_exit_request());
        assert!(!ctx.take_exit_request());
        assert!(!ctx.take_clear_request());
    }
}
