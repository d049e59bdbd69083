//! date, time: Show the current date or time.

use async_trait::async_trait;
use dosh_types::ExecResult;

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Date tool: `Current date is Wed 05/01/2024`.
pub struct Date;

/// Time tool: `Current time is 12:30:00`.
pub struct Time;

#[async_trait]
impl Tool for Date {
    fn name(&self) -> &str {
        "date"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("date", "Show current date")
    }

    async fn execute(&self, _args: ToolArgs, ctx: &mut ExecContext) -> anyhow::Result<ExecResult> {
        let now = ctx.now();
        Ok(ExecResult::success(format!("Current date is {}", now.format("%a %m/%d/%Y"))))
    }
}

#[async_trait]
impl Tool for Time {
    fn name(&self) -> &str {
        "time"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("time", "Show current time")
    }

    async fn execute(&self, _args: ToolArgs, ctx: &mut ExecContext) -> anyhow::Result<ExecResult> {
        let now = ctx.now();
        Ok(ExecResult::success(format!("Current time is {}", now.format("%H:%M:%S"))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::builtin::testing::{args, make_ctx};

    #[tokio::test]
    async fn test_date_uses_clock() {
        let mut ctx = make_ctx();
        let result = Date.execute(args(&[]), &mut ctx).await.unwrap();
        assert_eq!(result.out, "Current date is Wed 05/01/2024");
    }

    #[tokio::test]
    async fn test_time_uses_clock() {
        let mut ctx = make_ctx();
        let result = Time.execute(args(&[]), &mut ctx).await.unwrap();
        assert_eq!(result.out, "Current time is 12:30:00");
    }
}
