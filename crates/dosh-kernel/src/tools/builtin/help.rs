//! help: Display the command table or one command's usage.

use async_trait::async_trait;
use dosh_types::ExecResult;

use crate::tools::{ExecContext, ParamSchema, Tool, ToolArgs, ToolSchema};

/// Help tool: list commands, or describe one.
pub struct Help;

#[async_trait]
impl Tool for Help {
    fn name(&self) -> &str {
        "help"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("help", "Show this help")
            .param(ParamSchema::optional("command", "Command to describe"))
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> anyhow::Result<ExecResult> {
        match args.get(0) {
            None => Ok(ExecResult::success(overview(&ctx.tool_schemas))),
            Some(name) => {
                let name = name.to_lowercase();
                let schema = ctx
                    .tool_schemas
                    .iter()
                    .find(|s| s.name == name || s.aliases.iter().any(|a| *a == name));
                Ok(match schema {
                    Some(schema) => ExecResult::success(describe(schema)),
                    None => ExecResult::failure(1, format!("help: no such command: {name}")),
                })
            }
        }
    }
}

fn overview(schemas: &[ToolSchema]) -> String {
    let mut out = String::from("Available commands:");
    for schema in schemas {
        out.push_str(&format!("\n  {:<24}- {}", schema.usage(), schema.description));
    }
    out
}

fn describe(schema: &ToolSchema) -> String {
    let mut out = format!("{}\n\nUsage: {}", schema.description, schema.usage());
    for param in &schema.params {
        out.push_str(&format!("\n  {:<12}{}", param.name, param.description));
    }
    if !schema.aliases.is_empty() {
        out.push_str(&format!("\n\nAliases: {}", schema.aliases.join(", ")));
    }
    out
}
