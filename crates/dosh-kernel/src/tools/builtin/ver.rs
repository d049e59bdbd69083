//! ver: Show version.

use async_trait::async_trait;
use dosh_types::ExecResult;

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

pub struct Ver;

#[async_trait]
impl Tool for Ver {
    fn name(&self) -> &str {
        "ver"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("ver", "Show version")
    }

    async fn execute(&self, _args: ToolArgs, _ctx: &mut ExecContext) -> anyhow::Result<ExecResult> {
        Ok(ExecResult::success(format!(
            "dosh v{}\nDOS-style shell over a virtual volume",
            env!("CARGO_PKG_VERSION")
        )))
    }
}
