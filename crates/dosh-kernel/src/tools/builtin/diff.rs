//! diff: Compare two files.

use async_trait::async_trait;
use dosh_types::ExecResult;

use crate::tools::{ExecContext, ParamSchema, Tool, ToolArgs, ToolSchema};

use super::{file_not_found, usage};

/// Diff tool: report whether two files have the same content.
pub struct Diff;

#[async_trait]
impl Tool for Diff {
    fn name(&self) -> &str {
        "diff"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("diff", "Compare two files")
            .param(ParamSchema::required("file1", "First file"))
            .param(ParamSchema::required("file2", "Second file"))
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> anyhow::Result<ExecResult> {
        let (Some(a_token), Some(b_token)) = (args.get(0), args.get(1)) else {
            return Ok(usage(&self.schema()));
        };
        let Some(a) = ctx.file(a_token) else {
            return Ok(file_not_found(a_token));
        };
        let Some(b) = ctx.file(b_token) else {
            return Ok(file_not_found(b_token));
        };

        if a.content == b.content {
            return Ok(ExecResult::success("Files are identical"));
        }
        let delta = b.size as i64 - a.size as i64;
        Ok(ExecResult {
            code: 1,
            out: format!("Files are different\nSize difference: {delta:+} bytes"),
            err: String::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::builtin::testing::{args, make_ctx};

    #[tokio::test]
    async fn test_diff_identical() {
        let mut ctx = make_ctx();
        ctx.namespace.copy_file(r"C:\CONFIG.SYS", r"C:\CONFIG.BAK").unwrap();
        let result = Diff.execute(args(&["config.sys", "config.bak"]), &mut ctx).await.unwrap();
        assert!(result.ok());
        assert_eq!(result.out, "Files are identical");
    }

    #[tokio::test]
    async fn test_diff_different() {
        let mut ctx = make_ctx();
        ctx.cwd = r"C:\GAMES".into();
        let result = Diff.execute(args(&["snake.exe", "pacman.exe"]), &mut ctx).await.unwrap();
        assert_eq!(result.code, 1);
        assert_eq!(result.out, "Files are different\nSize difference: +2 bytes");
    }

    #[tokio::test]
    async fn test_diff_missing() {
        let mut ctx = make_ctx();
        let result = Diff.execute(args(&["config.sys", "ghost"]), &mut ctx).await.unwrap();
        assert_eq!(result.err, "File not found: ghost");
    }
}
