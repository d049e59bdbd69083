//! rd: Remove a directory.

use async_trait::async_trait;
use dosh_types::{ExecResult, NamespaceError};

use crate::tools::{ExecContext, ParamSchema, Tool, ToolArgs, ToolSchema};

use super::usage;

/// Rd tool: remove a directory with no files beneath it.
pub struct Rd;

#[async_trait]
impl Tool for Rd {
    fn name(&self) -> &str {
        "rd"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("rd", "Remove directory")
            .param(ParamSchema::required("dirname", "Directory to remove"))
            .with_aliases(["rmdir"])
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> anyhow::Result<ExecResult> {
        let Some(token) = args.get(0) else {
            return Ok(usage(&self.schema()));
        };

        let target = ctx.resolve_path(token);
        let message = match ctx.namespace.remove_directory(&target) {
            Ok(()) => return Ok(ExecResult::success(format!("Directory removed: {token}"))),
            Err(NamespaceError::NotFound(_)) => format!("Directory not found: {token}"),
            Err(NamespaceError::NotEmpty(_)) => format!("Directory not empty: {token}"),
            Err(NamespaceError::ProtectedRoot(_)) => format!("Cannot remove root directory: {token}"),
            Err(e) => return Err(e.into()),
        };
        Ok(ExecResult::failure(1, message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::builtin::testing::{args, make_ctx};

    #[tokio::test]
    async fn test_rd_empty() {
        let mut ctx = make_ctx();
        let result = Rd.execute(args(&["dos"]), &mut ctx).await.unwrap();
        assert_eq!(result.out, "Directory removed: dos");
        assert!(!ctx.namespace.directory_exists(r"C:\DOS"));
    }

    #[tokio::test]
    async fn test_rd_not_empty() {
        let mut ctx = make_ctx();
        let result = Rd.execute(args(&["games"]), &mut ctx).await.unwrap();
        assert_eq!(result.err, "Directory not empty: games");
    }

    #[tokio::test]
    async fn test_rd_missing() {
        let mut ctx = make_ctx();
        let result = Rd.execute(args(&["ghost"]), &mut ctx).await.unwrap();
        assert_eq!(result.err, "Directory not found: ghost");
    }

    #[tokio::test]
    async fn test_rd_root() {
        let mut ctx = make_ctx();
        let result = Rd.execute(args(&[r"\"]), &mut ctx).await.unwrap();
        assert_eq!(result.err, r"Cannot remove root directory: \");
        assert!(ctx.namespace.directory_exists(r"C:\"));
    }
}
