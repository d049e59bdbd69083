//! attrib: Show a file's record.

use async_trait::async_trait;
use dosh_types::ExecResult;

use crate::tools::{ExecContext, ParamSchema, Tool, ToolArgs, ToolSchema};

use super::{file_not_found, usage};

pub struct Attrib;

#[async_trait]
impl Tool for Attrib {
    fn name(&self) -> &str {
        "attrib"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("attrib", "Show file attributes")
            .param(ParamSchema::required("filename", "File to inspect"))
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> anyhow::Result<ExecResult> {
        let Some(token) = args.get(0) else {
            return Ok(usage(&self.schema()));
        };
        let Some(record) = ctx.file(token) else {
            return Ok(file_not_found(token));
        };

        let extension = if record.extension.is_empty() {
            "(none)"
        } else {
            record.extension.as_str()
        };
        Ok(ExecResult::success(format!(
            "Name:      {}\nPath:      {}\nSize:      {} bytes\nType:      {}\nCreated:   {} {}\nExtension: {}",
            record.name, record.path, record.size, record.kind, record.date, record.time, extension
        )))
    }
}
