//! md: Make a directory.

use async_trait::async_trait;
use dosh_types::ExecResult;

use crate::tools::{ExecContext, ParamSchema, Tool, ToolArgs, ToolSchema};

use super::usage;

/// Md tool: create a directory. Parents are not created.
pub struct Md;

#[async_trait]
impl Tool for Md {
    fn name(&self) -> &str {
        "md"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("md", "Make directory")
            .param(ParamSchema::required("dirname", "Directory to create"))
            .with_aliases(["mkdir"])
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> anyhow::Result<ExecResult> {
        let Some(token) = args.get(0) else {
            return Ok(usage(&self.schema()));
        };

        let target = ctx.resolve_path(token);
        Ok(match ctx.namespace.create_directory(&target) {
            Ok(()) => ExecResult::success(format!("Directory created: {token}")),
            Err(_) => ExecResult::failure(1, format!("Directory already exists: {token}")),
        })
    }
}
