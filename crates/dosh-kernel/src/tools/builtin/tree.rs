//! tree: Display a directory hierarchy.

use async_trait::async_trait;
use dosh_types::ExecResult;

use crate::namespace::VirtualNamespace;
use crate::tools::{ExecContext, ParamSchema, Tool, ToolArgs, ToolSchema};

/// Directories deeper than this are not expanded.
const MAX_DEPTH: usize = 10;

/// Tree tool: recursive listing with box-drawing connectors.
pub struct Tree;

#[async_trait]
impl Tool for Tree {
    fn name(&self) -> &str {
        "tree"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("tree", "Display directory structure")
            .param(ParamSchema::optional("path", "Directory to show (default: current)"))
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> anyhow::Result<ExecResult> {
        let root = match args.get(0) {
            Some(token) => ctx.resolve_path(token),
            None => ctx.cwd.clone(),
        };
        if !ctx.namespace.directory_exists(&root) {
            return Ok(ExecResult::failure(1, format!("Directory not found: {root}")));
        }

        let mut out = root.clone();
        out.push('\n');
        format_tree(&ctx.namespace, &root, "", 1, &mut out);

        let total = ctx.namespace.directory_size(&root);
        out.push_str(&format!("\n{} file(s), {} bytes", total.files, total.bytes));
        Ok(ExecResult::success(out))
    }
}

fn format_tree(ns: &VirtualNamespace, dir: &str, prefix: &str, depth: usize, output: &mut String) {
    let entries = ns.list_directory(dir).unwrap_or_default();
    for (i, entry) in entries.iter().enumerate() {
        let is_last_child = i == entries.len() - 1;
        let connector = if is_last_child { "└── " } else { "├── " };

        output.push_str(prefix);
        output.push_str(connector);
        output.push_str(&entry.name);
        output.push('\n');

        if entry.is_dir() && depth < MAX_DEPTH {
            let new_prefix = if is_last_child {
                format!("{}    ", prefix)
            } else {
                format!("{}│   ", prefix)
            };
            format_tree(ns, &entry.path, &new_prefix, depth + 1, output);
        }
    }
}
