//! cd: Change the current directory.

use async_trait::async_trait;
use dosh_types::ExecResult;

use crate::tools::{ExecContext, ParamSchema, Tool, ToolArgs, ToolSchema};

/// Cd tool: change current directory, or print it when given no argument.
pub struct Cd;

#[async_trait]
impl Tool for Cd {
    fn name(&self) -> &str {
        "cd"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("cd", "Change directory")
            .param(ParamSchema::optional("path", "Directory to change to (.. for parent)"))
            .with_aliases(["chdir"])
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> anyhow::Result<ExecResult> {
        let Some(token) = args.get(0) else {
            return Ok(ExecResult::success(ctx.cwd.clone()));
        };

        if ctx.change_directory(token) {
            Ok(ExecResult::silent())
        } else {
            Ok(ExecResult::failure(1, format!("Directory not found: {token}")))
        }
    }
}
