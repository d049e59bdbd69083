//! wc: Count lines, words and characters.

use async_trait::async_trait;
use dosh_types::ExecResult;

use crate::tools::{ExecContext, ParamSchema, Tool, ToolArgs, ToolSchema};

use super::file_text;

pub struct Wc;

#[async_trait]
impl Tool for Wc {
    fn name(&self) -> &str {
        "wc"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("wc", "Count lines, words and characters")
            .param(ParamSchema::required("filename", "File to count"))
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> anyhow::Result<ExecResult> {
        let text = match file_text(&self.schema(), &args, 0, ctx) {
            Ok(text) => text,
            Err(result) => return Ok(result),
        };

        let lines = text.lines().count();
        let words = text.split_whitespace().count();
        let chars = text.chars().count();
        Ok(ExecResult::success(format!("{lines} lines, {words} words, {chars} characters")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::builtin::testing::{args, make_ctx};

    #[tokio::test]
    async fn test_wc() {
        let mut ctx = make_ctx();
        let result = Wc.execute(args(&["config.sys"]), &mut ctx).await.unwrap();
        assert_eq!(result.out, "5 lines, 5 words, 82 characters");
    }

    #[tokio::test]
    async fn test_wc_words() {
        let mut ctx = make_ctx();
        let result = Wc.execute(args(&[r"utils\edit.com"]), &mut ctx).await.unwrap();
        assert_eq!(result.out, "1 lines, 3 words, 18 characters");
    }
}
