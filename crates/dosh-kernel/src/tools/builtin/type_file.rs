//! type: Display file contents.

use async_trait::async_trait;
use dosh_types::ExecResult;

use crate::tools::{ExecContext, ParamSchema, Tool, ToolArgs, ToolSchema};

use super::file_text;

/// Type tool: print a file.
pub struct Type;

#[async_trait]
impl Tool for Type {
    fn name(&self) -> &str {
        "type"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("type", "Display file contents")
            .param(ParamSchema::required("filename", "File to display"))
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> anyhow::Result<ExecResult> {
        Ok(match file_text(&self.schema(), &args, 0, ctx) {
            Ok(text) => ExecResult::success(text),
            Err(result) => result,
        })
    }
}
