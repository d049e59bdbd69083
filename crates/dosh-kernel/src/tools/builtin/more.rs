//! more: Show a file one page at a time.
//!
//! There is no interactive pager: the whole file is emitted with a
//! `-- More --` marker between pages.

use async_trait::async_trait;
use dosh_types::ExecResult;

use crate::tools::{ExecContext, ParamSchema, Tool, ToolArgs, ToolSchema};

use super::{file_text, join_lines};

const PAGE_BREAK: &str = "-- More --";

pub struct More;

#[async_trait]
impl Tool for More {
    fn name(&self) -> &str {
        "more"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("more", "Display a file page by page")
            .param(ParamSchema::required("filename", "File to display"))
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> anyhow::Result<ExecResult> {
        let text = match file_text(&self.schema(), &args, 0, ctx) {
            Ok(text) => text,
            Err(result) => return Ok(result),
        };

        let lines: Vec<&str> = text.lines().collect();
        let pages: Vec<String> = lines
            .chunks(ctx.page_size.max(1))
            .map(|page| join_lines(page.iter().copied()))
            .collect();
        Ok(ExecResult::success(pages.join(&format!("\n{PAGE_BREAK}\n"))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::builtin::testing::{args, make_ctx};

    #[tokio::test]
    async fn test_more_pages() {
        let mut ctx = make_ctx();
        ctx.page_size = 2;
        let result = More.execute(args(&[r"temp\notes.txt"]), &mut ctx).await.unwrap();
        assert_eq!(
            result.out,
            "gamma\nalpha\n-- More --\nbeta\nalpha\n-- More --\nalpha"
        );
    }

    #[tokio::test]
    async fn test_more_single_page() {
        let mut ctx = make_ctx();
        let result = More.execute(args(&["config.sys"]), &mut ctx).await.unwrap();
        assert!(!result.out.contains(PAGE_BREAK));
        assert_eq!(result.out.lines().count(), 5);
    }
}
