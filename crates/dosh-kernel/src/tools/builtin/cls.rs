//! cls: Clear the screen.

use async_trait::async_trait;
use dosh_types::ExecResult;

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

pub struct Cls;

#[async_trait]
impl Tool for Cls {
    fn name(&self) -> &str {
        "cls"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("cls", "Clear the screen").with_aliases(["clear"])
    }

    async fn execute(&self, _args: ToolArgs, ctx: &mut ExecContext) -> anyhow::Result<ExecResult> {
        ctx.request_clear();
        Ok(ExecResult::silent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::builtin::testing::{args, make_ctx};

    #[tokio::test]
    async fn test_cls_requests_clear() {
        let mut ctx = make_ctx();
        let result = Cls.execute(args(&[]), &mut ctx).await.unwrap();
        assert!(result.is_empty());
        assert!(ctx.take_clear_request());
    }
}
