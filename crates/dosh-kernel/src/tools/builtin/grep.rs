//! grep: Print the lines of a file containing a string.

use async_trait::async_trait;
use dosh_types::ExecResult;

use crate::tools::{ExecContext, ParamSchema, Tool, ToolArgs, ToolSchema};

use super::{file_text, join_lines, usage};

/// Grep tool: case-insensitive substring filter over a file's lines.
pub struct Grep;

#[async_trait]
impl Tool for Grep {
    fn name(&self) -> &str {
        "grep"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("grep", "Search for text in a file")
            .param(ParamSchema::required("pattern", "Text to search for (case-insensitive)"))
            .param(ParamSchema::required("filename", "File to search"))
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> anyhow::Result<ExecResult> {
        let schema = self.schema();
        let Some(pattern) = args.get(0) else {
            return Ok(usage(&schema));
        };
        let text = match file_text(&schema, &args, 1, ctx) {
            Ok(text) => text,
            Err(result) => return Ok(result),
        };

        let needle = pattern.to_lowercase();
        let matches: Vec<&str> = text
            .lines()
            .filter(|line| line.to_lowercase().contains(&needle))
            .collect();

        if matches.is_empty() {
            // No match: exit 1 with nothing to print.
            return Ok(ExecResult { code: 1, ..ExecResult::default() });
        }
        Ok(ExecResult::success(join_lines(matches)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::builtin::testing::{args, make_ctx};

    #[tokio::test]
    async fn test_grep_case_insensitive() {
        let mut ctx = make_ctx();
        let result = Grep.execute(args(&["DEVICE", "config.sys"]), &mut ctx).await.unwrap();
        assert_eq!(result.out, "DEVICE=C:\\DOS\\HIMEM.SYS\nDEVICE=C:\\DOS\\EMM386.EXE");

        let result = Grep.execute(args(&["welcome", "autoexec.bat"]), &mut ctx).await.unwrap();
        assert_eq!(result.out, "echo Welcome to DOS Emulator!");
    }

    #[tokio::test]
    async fn test_grep_no_match() {
        let mut ctx = make_ctx();
        let result = Grep.execute(args(&["zzz", "config.sys"]), &mut ctx).await.unwrap();
        assert_eq!(result.code, 1);
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_grep_missing_file() {
        let mut ctx = make_ctx();
        let result = Grep.execute(args(&["x", "ghost.txt"]), &mut ctx).await.unwrap();
        assert_eq!(result.err, "File not found: ghost.txt");

        let result = Grep.execute(args(&["x"]), &mut ctx).await.unwrap();
        assert_eq!(result.err, "Usage: grep <pattern> <filename>");
    }
}
