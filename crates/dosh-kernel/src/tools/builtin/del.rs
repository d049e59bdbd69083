//! del: Delete a file.

use async_trait::async_trait;
use dosh_types::ExecResult;

use crate::tools::{ExecContext, ParamSchema, Tool, ToolArgs, ToolSchema};

use super::{file_not_found, usage};

/// Del tool: remove a file.
pub struct Del;

#[async_trait]
impl Tool for Del {
    fn name(&self) -> &str {
        "del"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("del", "Delete a file")
            .param(ParamSchema::required("filename", "File to delete"))
            .with_aliases(["delete", "erase"])
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> anyhow::Result<ExecResult> {
        let Some(token) = args.get(0) else {
            return Ok(usage(&self.schema()));
        };

        let target = ctx.resolve_path(token);
        Ok(match ctx.namespace.delete_file(&target) {
            Ok(()) => ExecResult::success(format!("File deleted: {token}")),
            Err(_) => file_not_found(token),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::builtin::testing::{args, make_ctx};

    #[tokio::test]
    async fn test_del_file() {
        let mut ctx = make_ctx();
        ctx.cwd = r"C:\GAMES".into();
        let result = Del.execute(args(&["snake.exe"]), &mut ctx).await.unwrap();
        assert_eq!(result.out, "File deleted: snake.exe");
        assert!(!ctx.namespace.file_exists(r"C:\GAMES\SNAKE.EXE"));
    }

    #[tokio::test]
    async fn test_del_missing() {
        let mut ctx = make_ctx();
        let result = Del.execute(args(&["ghost.txt"]), &mut ctx).await.unwrap();
        assert!(!result.ok());
        assert_eq!(result.err, "File not found: ghost.txt");
    }

    #[tokio::test]
    async fn test_del_directory_is_not_a_file() {
        let mut ctx = make_ctx();
        let result = Del.execute(args(&["games"]), &mut ctx).await.unwrap();
        assert!(!result.ok());
        assert!(ctx.namespace.directory_exists(r"C:\GAMES"));
    }
}
