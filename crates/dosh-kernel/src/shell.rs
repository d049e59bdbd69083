//! The command shell: one line in, rendered output out.
//!
//! A [`Shell`] is the whole session: the volume, the current directory, the
//! command history and the output sink. Nothing is global; front-ends own a
//! shell and feed it lines.

use dosh_types::{ExecResult, NamespaceResult, ToolArgs};

use crate::config::ShellConfig;
use crate::history::{CommandHistory, RecallDirection};
use crate::namespace::VirtualNamespace;
use crate::seed::seed_default_volume;
use crate::tools::{ExecContext, Tool, ToolRegistry, register_builtins, resolve_executable};

/// Where rendered output goes.
pub trait OutputSink: Send {
    /// Render text. May span several lines.
    fn print(&mut self, text: &str);

    /// Render the echoed prompt and command line.
    ///
    /// Front-ends whose line editor already shows what was typed can
    /// ignore it.
    fn echo_command(&mut self, line: &str) {
        self.print(line);
    }

    /// Discard everything rendered so far.
    fn clear(&mut self);
}

/// An in-memory sink that keeps every rendered line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The rendered lines joined with newlines.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Take the lines rendered so far, leaving the transcript empty.
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }

    pub fn last(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }
}

impl OutputSink for Transcript {
    fn print(&mut self, text: &str) {
        self.lines.extend(text.split('\n').map(str::to_string));
    }

    fn clear(&mut self) {
        self.lines.clear();
    }
}

/// What the front-end should do after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellAction {
    Continue,
    Exit,
}

/// A DOS-style command session.
pub struct Shell<S: OutputSink = Transcript> {
    name: String,
    registry: ToolRegistry,
    ctx: ExecContext,
    history: CommandHistory,
    sink: S,
    last_result: Option<ExecResult>,
}

impl Shell<Transcript> {
    /// Create a shell that renders into a [`Transcript`].
    pub fn new(config: ShellConfig) -> NamespaceResult<Self> {
        Self::with_sink(config, Transcript::new())
    }
}

impl<S: OutputSink> Shell<S> {
    /// Create a shell that renders into `sink`.
    ///
    /// Fails only if seeding the default volume collides with itself.
    pub fn with_sink(config: ShellConfig, sink: S) -> NamespaceResult<Self> {
        let mut namespace = VirtualNamespace::with_clock(config.drive, config.clock.clone());
        if config.seed {
            seed_default_volume(&mut namespace)?;
        }

        let mut registry = ToolRegistry::new();
        register_builtins(&mut registry);

        let mut ctx = ExecContext::new(namespace);
        ctx.page_size = config.page_size;
        ctx.set_tool_schemas(registry.schemas());

        tracing::info!(
            name = %config.name,
            drive = %config.drive,
            seeded = config.seed,
            tools = registry.len(),
            "shell ready"
        );

        Ok(Self {
            name: config.name,
            registry,
            ctx,
            history: CommandHistory::new(config.history_limit),
            sink,
            last_result: None,
        })
    }

    /// Execute one line of input.
    ///
    /// Blank lines do nothing. Otherwise the line is echoed after the
    /// prompt, recorded in history, and dispatched by its first word
    /// (case-insensitive). Names that are not commands are tried as
    /// executables in the current directory. A command that faults is
    /// rendered as `Error: <message>`; the shell keeps running.
    #[tracing::instrument(level = "debug", skip(self), fields(shell = %self.name))]
    pub async fn submit(&mut self, line: &str) -> ShellAction {
        let mut tokens = line.split_whitespace();
        let Some(name) = tokens.next() else {
            return ShellAction::Continue;
        };
        let name = name.to_lowercase();
        let args: ToolArgs = tokens.collect();

        self.sink.echo_command(&format!("{}{line}", self.prompt()));
        self.history.push(line);

        let result = match self.registry.get(&name) {
            Some(tool) => match tool.execute(args, &mut self.ctx).await {
                Ok(result) => result,
                Err(e) => {
                    tracing::warn!(command = %name, error = %e, "command faulted");
                    ExecResult::failure(1, format!("Error: {e}"))
                }
            },
            None => self.run_executable(&name),
        };

        self.render(&result);
        if self.ctx.take_clear_request() {
            self.sink.clear();
        }
        let exit = self.ctx.take_exit_request();
        self.last_result = Some(result);

        if exit {
            tracing::debug!("exit requested");
            ShellAction::Exit
        } else {
            ShellAction::Continue
        }
    }

    fn run_executable(&self, name: &str) -> ExecResult {
        match resolve_executable(&self.ctx, name) {
            Some(record) => {
                tracing::debug!(path = %record.path, "running executable");
                ExecResult::success(format!("Running {name}..."))
            }
            None => ExecResult::failure(
                1,
                format!(
                    "'{name}' is not recognized as an internal or external command,\n\
                     operable program or batch file."
                ),
            ),
        }
    }

    fn render(&mut self, result: &ExecResult) {
        if !result.out.is_empty() {
            self.sink.print(&result.out);
        }
        if !result.err.is_empty() {
            self.sink.print(&result.err);
        }
    }

    /// Add a command alongside the builtins, replacing any with the same
    /// name or alias. `help` picks it up immediately.
    pub fn register_tool(&mut self, tool: impl Tool + 'static) {
        tracing::debug!(command = %tool.name(), "registered tool");
        self.registry.register(tool);
        self.ctx.set_tool_schemas(self.registry.schemas());
    }

    /// Walk the history and return the entry to place in the input buffer.
    ///
    /// `None` means the input should be blank. This is for embedders
    /// without a line editor of their own; the terminal REPL recalls
    /// through rustyline's history instead.
    pub fn recall_history(&mut self, direction: RecallDirection) -> Option<String> {
        self.history.recall(direction).map(str::to_string)
    }

    /// Move to a directory, rendering a message if it does not exist.
    pub fn change_directory(&mut self, token: &str) -> bool {
        let moved = self.ctx.change_directory(token);
        if !moved {
            self.sink.print(&format!("Directory not found: {token}"));
        }
        moved
    }

    /// The current directory key.
    pub fn cwd(&self) -> &str {
        &self.ctx.cwd
    }

    /// `<cwd>> `
    pub fn prompt(&self) -> String {
        format!("{}> ", self.ctx.cwd)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> &VirtualNamespace {
        &self.ctx.namespace
    }

    pub fn namespace_mut(&mut self) -> &mut VirtualNamespace {
        &mut self.ctx.namespace
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn output(&self) -> &S {
        &self.sink
    }

    pub fn output_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// The result of the most recent command, if any has run.
    pub fn last_result(&self) -> Option<&ExecResult> {
        self.last_result.as_ref()
    }

    /// True unless the most recent command failed.
    pub fn last_ok(&self) -> bool {
        self.last_result.as_ref().is_none_or(ExecResult::ok)
    }
}

impl<S: OutputSink> std::fmt::Debug for Shell<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shell")
            .field("name", &self.name)
            .field("cwd", &self.ctx.cwd)
            .field("history", &self.history.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use dosh_types::ToolSchema;

    use crate::clock::FixedClock;

    /// A command whose handler always faults.
    struct Broken;

    #[async_trait]
    impl Tool for Broken {
        fn name(&self) -> &str {
            "broken"
        }

        fn schema(&self) -> ToolSchema {
            ToolSchema::new("broken", "Always fails")
        }

        async fn execute(&self, _args: ToolArgs, _ctx: &mut ExecContext) -> anyhow::Result<ExecResult> {
            Err(anyhow::anyhow!("boom"))
        }
    }

    fn make_shell() -> Shell {
        let clock = FixedClock::at(2024, 5, 1, 12, 30).unwrap();
        Shell::new(ShellConfig::default().with_clock(Arc::new(clock))).unwrap()
    }

    #[tokio::test]
    async fn echoes_prompt_and_line() {
        let mut shell = make_shell();
        shell.submit("echo hi").await;
        assert_eq!(shell.output().lines(), [r"C:\> echo hi", "hi"]);
    }

    #[tokio::test]
    async fn blank_line_is_a_no_op() {
        let mut shell = make_shell();
        shell.submit("   ").await;
        assert!(shell.output().lines().is_empty());
        assert!(shell.history().is_empty());
    }

    #[tokio::test]
    async fn command_names_are_case_insensitive() {
        let mut shell = make_shell();
        shell.submit("VER").await;
        assert!(shell.last_ok());
        assert!(shell.output().text().contains("dosh v"));
    }

    #[tokio::test]
    async fn unknown_command() {
        let mut shell = make_shell();
        shell.submit("FORMAT c:").await;
        assert_eq!(
            &shell.output().lines()[1..],
            [
                "'format' is not recognized as an internal or external command,",
                "operable program or batch file."
            ]
        );
        assert!(!shell.last_ok());
    }

    #[tokio::test]
    async fn executable_fallback() {
        let mut shell = make_shell();
        shell.submit("cd games").await;
        shell.submit("snake").await;
        assert_eq!(shell.output().last(), Some("Running snake..."));
        shell.submit("pacman.exe").await;
        assert_eq!(shell.output().last(), Some("Running pacman.exe..."));
    }

    #[tokio::test]
    async fn prompt_follows_cwd() {
        let mut shell = make_shell();
        assert_eq!(shell.prompt(), r"C:\> ");
        shell.submit("cd utils").await;
        assert_eq!(shell.prompt(), r"C:\UTILS> ");
        shell.submit("dir").await;
        assert!(shell.output().lines().contains(&r"C:\UTILS> dir".to_string()));
    }

    #[tokio::test]
    async fn cls_clears_output() {
        let mut shell = make_shell();
        shell.submit("ver").await;
        shell.submit("cls").await;
        assert!(shell.output().lines().is_empty());
        assert_eq!(shell.history().len(), 2);
    }

    #[tokio::test]
    async fn exit_and_quit() {
        let mut shell = make_shell();
        assert_eq!(shell.submit("dir").await, ShellAction::Continue);
        assert_eq!(shell.submit("exit").await, ShellAction::Exit);
        assert_eq!(shell.submit("QUIT").await, ShellAction::Exit);
    }

    #[tokio::test]
    async fn faulting_command_is_rendered_and_shell_continues() {
        let mut shell = make_shell();
        shell.register_tool(Broken);

        assert_eq!(shell.submit("BROKEN now").await, ShellAction::Continue);
        assert_eq!(shell.output().last(), Some("Error: boom"));
        assert!(!shell.last_ok());
        assert_eq!(shell.last_result().map(|r| r.code), Some(1));

        shell.submit("echo still here").await;
        assert_eq!(shell.output().last(), Some("still here"));
        assert!(shell.last_ok());
        assert_eq!(shell.history().len(), 2);
    }

    #[tokio::test]
    async fn registered_tool_shows_in_help() {
        let mut shell = make_shell();
        shell.register_tool(Broken);
        shell.submit("help broken").await;
        assert!(shell.output().text().contains("Always fails"));
    }

    #[tokio::test]
    async fn history_recall_through_shell() {
        let mut shell = make_shell();
        shell.submit("dir").await;
        shell.submit("ver").await;
        assert_eq!(shell.recall_history(RecallDirection::Up).as_deref(), Some("ver"));
        assert_eq!(shell.recall_history(RecallDirection::Up).as_deref(), Some("dir"));
        assert_eq!(shell.recall_history(RecallDirection::Down).as_deref(), Some("ver"));
        assert_eq!(shell.recall_history(RecallDirection::Down), None);
    }

    #[test]
    fn change_directory_reports_missing() {
        let mut shell = make_shell();
        assert!(!shell.change_directory("ghost"));
        assert_eq!(shell.cwd(), r"C:\");
        assert_eq!(shell.output().last(), Some("Directory not found: ghost"));
        assert!(shell.change_directory(r"\games"));
        assert_eq!(shell.cwd(), r"C:\GAMES");
    }

    #[test]
    fn unseeded_shell_has_only_roots() {
        let shell = Shell::new(ShellConfig::empty()).unwrap();
        assert_eq!(shell.namespace().file_count(), 0);
        assert_eq!(shell.namespace().directories().count(), 2);
    }
}
