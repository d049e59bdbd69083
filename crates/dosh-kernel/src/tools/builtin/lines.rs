//! sort, uniq, tac, rev, nl: Line utilities over a file's content.

use async_trait::async_trait;
use dosh_types::ExecResult;

use crate::tools::{ExecContext, ParamSchema, Tool, ToolArgs, ToolSchema};

use super::{file_text, join_lines};

/// Sort lines lexically.
pub struct Sort;

/// Drop adjacent duplicate lines.
pub struct Uniq;

/// Reverse line order.
pub struct Tac;

/// Reverse the characters of each line.
pub struct Rev;

/// Number lines.
pub struct Nl;

fn schema(name: &str, description: &str) -> ToolSchema {
    ToolSchema::new(name, description).param(ParamSchema::required("filename", "File to read"))
}

/// Run `transform` over the file named by the first argument.
fn transform_file(
    schema: ToolSchema,
    args: &ToolArgs,
    ctx: &ExecContext,
    transform: impl FnOnce(Vec<&str>) -> String,
) -> ExecResult {
    match file_text(&schema, args, 0, ctx) {
        Ok(text) => ExecResult::success(transform(text.lines().collect())),
        Err(result) => result,
    }
}

#[async_trait]
impl Tool for Sort {
    fn name(&self) -> &str {
        "sort"
    }

    fn schema(&self) -> ToolSchema {
        schema("sort", "Sort the lines of a file")
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> anyhow::Result<ExecResult> {
        Ok(transform_file(self.schema(), &args, ctx, |mut lines| {
            lines.sort_unstable();
            join_lines(lines)
        }))
    }
}

#[async_trait]
impl Tool for Uniq {
    fn name(&self) -> &str {
        "uniq"
    }

    fn schema(&self) -> ToolSchema {
        schema("uniq", "Remove adjacent duplicate lines")
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> anyhow::Result<ExecResult> {
        Ok(transform_file(self.schema(), &args, ctx, |mut lines| {
            lines.dedup();
            join_lines(lines)
        }))
    }
}

#[async_trait]
impl Tool for Tac {
    fn name(&self) -> &str {
        "tac"
    }

    fn schema(&self) -> ToolSchema {
        schema("tac", "Print lines in reverse order")
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> anyhow::Result<ExecResult> {
        Ok(transform_file(self.schema(), &args, ctx, |lines| {
            join_lines(lines.into_iter().rev())
        }))
    }
}

#[async_trait]
impl Tool for Rev {
    fn name(&self) -> &str {
        "rev"
    }

    fn schema(&self) -> ToolSchema {
        schema("rev", "Reverse the characters of each line")
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> anyhow::Result<ExecResult> {
        Ok(transform_file(self.schema(), &args, ctx, |lines| {
            lines
                .iter()
                .map(|line| line.chars().rev().collect::<String>())
                .collect::<Vec<_>>()
                .join("\n")
        }))
    }
}

#[async_trait]
impl Tool for Nl {
    fn name(&self) -> &str {
        "nl"
    }

    fn schema(&self) -> ToolSchema {
        schema("nl", "Number the lines of a file")
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> anyhow::Result<ExecResult> {
        Ok(transform_file(self.schema(), &args, ctx, |lines| {
            lines
                .iter()
                .enumerate()
                .map(|(i, line)| format!("{:>6}\t{line}", i + 1))
                .collect::<Vec<_>>()
                .join("\n")
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::builtin::testing::{args, make_ctx};

    const NOTES: &str = r"temp\notes.txt";

    #[tokio::test]
    async fn test_sort() {
        let mut ctx = make_ctx();
        let result = Sort.execute(args(&[NOTES]), &mut ctx).await.unwrap();
        assert_eq!(result.out, "alpha\nalpha\nalpha\nbeta\ngamma");
    }

    #[tokio::test]
    async fn test_uniq_is_adjacent_only() {
        let mut ctx = make_ctx();
        let result = Uniq.execute(args(&[NOTES]), &mut ctx).await.unwrap();
        assert_eq!(result.out, "gamma\nalpha\nbeta\nalpha");
    }

    #[tokio::test]
    async fn test_tac() {
        let mut ctx = make_ctx();
        let result = Tac.execute(args(&[NOTES]), &mut ctx).await.unwrap();
        assert_eq!(result.out, "alpha\nalpha\nbeta\nalpha\ngamma");
    }

    #[tokio::test]
    async fn test_rev() {
        let mut ctx = make_ctx();
        let result = Rev.execute(args(&["command.com"]), &mut ctx).await.unwrap();
        assert_eq!(result.out, "reterpretnI dnammoC SOD");
    }

    #[tokio::test]
    async fn test_nl() {
        let mut ctx = make_ctx();
        let result = Nl.execute(args(&[NOTES]), &mut ctx).await.unwrap();
        assert!(result.out.starts_with("     1\tgamma\n     2\talpha"));
        assert!(result.out.ends_with("     5\talpha"));
    }

    #[tokio::test]
    async fn test_missing_file() {
        let mut ctx = make_ctx();
        let result = Sort.execute(args(&["ghost"]), &mut ctx).await.unwrap();
        assert_eq!(result.err, "File not found: ghost");
        let result = Nl.execute(args(&[]), &mut ctx).await.unwrap();
        assert_eq!(result.err, "Usage: nl <filename>");
    }
}
