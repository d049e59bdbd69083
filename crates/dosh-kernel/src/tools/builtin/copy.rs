//! copy: Copy a file.

use async_trait::async_trait;
use dosh_types::{ExecResult, NamespaceError};

use crate::path;
use crate::tools::{ExecContext, ParamSchema, Tool, ToolArgs, ToolSchema};

use super::{file_not_found, usage};

/// Copy tool: duplicate a file. A destination directory receives the
/// file under its own name.
pub struct Copy;

#[async_trait]
impl Tool for Copy {
    fn name(&self) -> &str {
        "copy"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("copy", "Copy a file")
            .param(ParamSchema::required("source", "File to copy"))
            .param(ParamSchema::required("destination", "New file or target directory"))
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> anyhow::Result<ExecResult> {
        let (Some(src_token), Some(dst_token)) = (args.get(0), args.get(1)) else {
            return Ok(usage(&self.schema()));
        };

        let src = ctx.resolve_path(src_token);
        let mut dst = ctx.resolve_path(dst_token);
        if ctx.namespace.directory_exists(&dst) {
            dst = path::join(&dst, path::file_name(&src));
        }

        match ctx.namespace.copy_file(&src, &dst) {
            Ok(()) => Ok(ExecResult::success("1 file(s) copied")),
            Err(NamespaceError::NotFound(_)) => Ok(file_not_found(src_token)),
            Err(NamespaceError::AlreadyExists(_)) => {
                Ok(ExecResult::failure(1, format!("File already exists: {dst_token}")))
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::builtin::testing::{args, make_ctx};

    #[tokio::test]
    async fn test_copy_file() {
        let mut ctx = make_ctx();
        let result = Copy.execute(args(&["config.sys", "config.bak"]), &mut ctx).await.unwrap();
        assert_eq!(result.out, "1 file(s) copied");
        assert_eq!(
            ctx.namespace.read_file(r"C:\CONFIG.BAK"),
            ctx.namespace.read_file(r"C:\CONFIG.SYS")
        );
    }

    #[tokio::test]
    async fn test_copy_into_directory() {
        let mut ctx = make_ctx();
        let result = Copy.execute(args(&["command.com", "temp"]), &mut ctx).await.unwrap();
        assert!(result.ok());
        assert!(ctx.namespace.file_exists(r"C:\TEMP\COMMAND.COM"));
    }

    #[tokio::test]
    async fn test_copy_missing_source() {
        let mut ctx = make_ctx();
        let result = Copy.execute(args(&["ghost.txt", "x.txt"]), &mut ctx).await.unwrap();
        assert_eq!(result.err, "File not found: ghost.txt");
    }

    #[tokio::test]
    async fn test_copy_existing_destination() {
        let mut ctx = make_ctx();
        let result = Copy.execute(args(&["config.sys", "command.com"]), &mut ctx).await.unwrap();
        assert_eq!(result.err, "File already exists: command.com");
        assert_eq!(
            ctx.namespace.read_file(r"C:\COMMAND.COM"),
            Some(&b"DOS Command Interpreter"[..])
        );
    }

    #[tokio::test]
    async fn test_copy_usage() {
        let mut ctx = make_ctx();
        let result = Copy.execute(args(&["config.sys"]), &mut ctx).await.unwrap();
        assert_eq!(result.err, "Usage: copy <source> <destination>");
    }
}
