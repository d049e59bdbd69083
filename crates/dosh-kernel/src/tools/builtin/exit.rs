//! exit: Leave the shell.

use async_trait::async_trait;
use dosh_types::ExecResult;

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

pub struct Exit;

#[async_trait]
impl Tool for Exit {
    fn name(&self) -> &str {
        "exit"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("exit", "Exit the shell").with_aliases(["quit"])
    }

    async fn execute(&self, _args: ToolArgs, ctx: &mut ExecContext) -> anyhow::Result<ExecResult> {
        ctx.request_exit();
        Ok(ExecResult::silent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::builtin::testing::{args, make_ctx};

    #[tokio::test]
    async fn test_exit_requests_exit() {
        let mut ctx = make_ctx();
        Exit.execute(args(&[]), &mut ctx).await.unwrap();
        assert!(ctx.take_exit_request());
        assert!(!ctx.take_clear_request());
    }
}
