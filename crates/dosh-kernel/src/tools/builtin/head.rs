//! head, tail: Show the first or last lines of a file.

use async_trait::async_trait;
use dosh_types::ExecResult;

use crate::tools::{ExecContext, ParamSchema, Tool, ToolArgs, ToolSchema};

use super::{file_text, join_lines, usage};

const DEFAULT_LINES: usize = 10;

pub struct Head;

pub struct Tail;

/// File text and line count for head/tail, or the result to return instead.
fn read_args(schema: &ToolSchema, args: &ToolArgs, ctx: &ExecContext) -> Result<(String, usize), ExecResult> {
    let count = match args.get(1) {
        None => DEFAULT_LINES,
        Some(_) => args.get_count(1).ok_or_else(|| usage(schema))?,
    };
    Ok((file_text(schema, args, 0, ctx)?, count))
}

fn schema(name: &str, description: &str) -> ToolSchema {
    ToolSchema::new(name, description)
        .param(ParamSchema::required("filename", "File to read"))
        .param(ParamSchema::optional("lines", "Number of lines (default: 10)"))
}

#[async_trait]
impl Tool for Head {
    fn name(&self) -> &str {
        "head"
    }

    fn schema(&self) -> ToolSchema {
        schema("head", "Show the first lines of a file")
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> anyhow::Result<ExecResult> {
        let (text, count) = match read_args(&self.schema(), &args, ctx) {
            Ok(read) => read,
            Err(result) => return Ok(result),
        };
        Ok(ExecResult::success(join_lines(text.lines().take(count))))
    }
}

#[async_trait]
impl Tool for Tail {
    fn name(&self) -> &str {
        "tail"
    }

    fn schema(&self) -> ToolSchema {
        schema("tail", "Show the last lines of a file")
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> anyhow::Result<ExecResult> {
        let (text, count) = match read_args(&self.schema(), &args, ctx) {
            Ok(read) => read,
            Err(result) => return Ok(result),
        };
        let lines: Vec<&str> = text.lines().collect();
        let start = lines.len().saturating_sub(count);
        Ok(ExecResult::success(join_lines(lines[start..].iter().copied())))
    }
}
