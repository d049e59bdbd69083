//! dir: List directory contents.

use async_trait::async_trait;
use dosh_types::{DirEntry, ExecResult};

use crate::tools::{ExecContext, ParamSchema, Tool, ToolArgs, ToolSchema};

/// Dir tool: DOS-style directory listing.
pub struct Dir;

#[async_trait]
impl Tool for Dir {
    fn name(&self) -> &str {
        "dir"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("dir", "List directory contents")
            .param(ParamSchema::optional("path", "Directory to list (default: current)"))
            .with_aliases(["ls"])
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> anyhow::Result<ExecResult> {
        let target = match args.get(0) {
            Some(token) => ctx.resolve_path(token),
            None => ctx.cwd.clone(),
        };

        let Some(entries) = ctx.namespace.list_directory(&target) else {
            return Ok(ExecResult::failure(1, format!("Directory of {target}\nFile not found")));
        };

        let mut out = format!("Directory of {target}\n\n");
        for entry in &entries {
            out.push_str(&format_row(entry));
            out.push('\n');
        }
        let total = ctx.namespace.directory_size(&target);
        out.push_str(&format!("\n    {} file(s)  {} bytes", entries.len(), total.bytes));
        Ok(ExecResult::success(out))
    }
}

/// `MM/DD/YY  HH:MM    <size or <DIR>> NAME`
fn format_row(entry: &DirEntry) -> String {
    let size = if entry.is_dir() {
        "<DIR>".to_string()
    } else {
        entry.size.to_string()
    };
    format!("{}  {}    {:>10} {}", entry.date, entry.time, size, entry.name)
}
