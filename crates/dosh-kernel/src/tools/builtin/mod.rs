//! Built-in tools for dosh.
//!
//! These tools are always available and provide core functionality.

mod attrib;
mod cd;
mod cls;
mod copy;
mod date;
mod del;
mod diff;
mod dir;
mod echo;
mod exec;
mod exit;
mod find;
mod grep;
mod head;
mod help;
mod lines;
mod md;
mod more;
mod rd;
mod tree;
mod type_file;
mod ver;
mod wc;

pub use exec::resolve_executable;

use dosh_types::ExecResult;

use super::{ExecContext, ToolArgs, ToolRegistry, ToolSchema};

/// Register all built-in tools with the registry.
pub fn register_builtins(registry: &mut ToolRegistry) {
    registry.register(attrib::Attrib);
    registry.register(cd::Cd);
    registry.register(cls::Cls);
    registry.register(copy::Copy);
    registry.register(date::Date);
    registry.register(date::Time);
    registry.register(del::Del);
    registry.register(diff::Diff);
    registry.register(dir::Dir);
    registry.register(echo::Echo);
    registry.register(exit::Exit);
    registry.register(find::Find);
    registry.register(grep::Grep);
    registry.register(head::Head);
    registry.register(head::Tail);
    registry.register(help::Help);
    registry.register(lines::Nl);
    registry.register(lines::Rev);
    registry.register(lines::Sort);
    registry.register(lines::Tac);
    registry.register(lines::Uniq);
    registry.register(md::Md);
    registry.register(more::More);
    registry.register(rd::Rd);
    registry.register(tree::Tree);
    registry.register(type_file::Type);
    registry.register(ver::Ver);
    registry.register(wc::Wc);
}

/// `Usage: <name> <params>` as a failed result.
fn usage(schema: &ToolSchema) -> ExecResult {
    ExecResult::failure(1, format!("Usage: {}", schema.usage()))
}

fn file_not_found(token: &str) -> ExecResult {
    ExecResult::failure(1, format!("File not found: {token}"))
}

/// Text of the file named by the argument at `index`.
///
/// On a missing argument or file, returns the result the tool should give
/// back instead.
fn file_text(
    schema: &ToolSchema,
    args: &ToolArgs,
    index: usize,
    ctx: &ExecContext,
) -> Result<String, ExecResult> {
    let token = args.get(index).ok_or_else(|| usage(schema))?;
    ctx.file(token)
        .map(|record| record.text().into_owned())
        .ok_or_else(|| file_not_found(token))
}

/// Join lines back into output text.
fn join_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> String {
    lines.into_iter().collect::<Vec<_>>().join("\n")
}
