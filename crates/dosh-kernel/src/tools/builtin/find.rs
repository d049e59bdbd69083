//! find: Search for files by wildcard pattern.

use async_trait::async_trait;
use dosh_types::ExecResult;

use crate::tools::{ExecContext, ParamSchema, Tool, ToolArgs, ToolSchema};

use super::usage;

/// Find tool: list every file beneath a directory whose name matches.
pub struct Find;

#[async_trait]
impl Tool for Find {
    fn name(&self) -> &str {
        "find"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("find", "Find files by name pattern (* and ?)")
            .param(ParamSchema::required("pattern", "Wildcard pattern, e.g. *.EXE"))
            .param(ParamSchema::optional("path", "Directory to search (default: current)"))
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> anyhow::Result<ExecResult> {
        let Some(pattern) = args.get(0) else {
            return Ok(usage(&self.schema()));
        };
        let root = match args.get(1) {
            Some(token) => ctx.resolve_path(token),
            None => ctx.cwd.clone(),
        };

        let found = ctx.namespace.search_files(pattern, &root);
        if found.is_empty() {
            return Ok(ExecResult::failure(1, format!("No files found matching pattern: {pattern}")));
        }

        let mut out = format!("Found {} file(s) matching \"{pattern}\":", found.len());
        for record in found {
            out.push_str("\n  ");
            out.push_str(&record.path);
        }
        Ok(ExecResult::success(out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::builtin::testing::{args, make_ctx};

    #[tokio::test]
    async fn test_find_exe() {
        let mut ctx = make_ctx();
        let result = Find.execute(args(&["*.exe"]), &mut ctx).await.unwrap();
        assert_eq!(
            result.out,
            "Found 3 file(s) matching \"*.exe\":\n  C:\\GAMES\\PACMAN.EXE\n  C:\\GAMES\\SNAKE.EXE\n  C:\\GAMES\\TETRIS.EXE"
        );
    }

    #[tokio::test]
    async fn test_find_scoped_to_directory() {
        let mut ctx = make_ctx();
        let result = Find.execute(args(&["*.com", "utils"]), &mut ctx).await.unwrap();
        assert!(result.out.starts_with("Found 3 file(s)"));
        assert!(!result.out.contains("COMMAND.COM"));
    }

    #[tokio::test]
    async fn test_find_question_mark() {
        let mut ctx = make_ctx();
        let result = Find.execute(args(&["?DIT.COM"]), &mut ctx).await.unwrap();
        assert!(result.out.contains(r"C:\UTILS\EDIT.COM"));
    }

    #[tokio::test]
    async fn test_find_nothing() {
        let mut ctx = make_ctx();
        let result = Find.execute(args(&["*.doc"]), &mut ctx).await.unwrap();
        assert_eq!(result.err, "No files found matching pattern: *.doc");
    }
}
