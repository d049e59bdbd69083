//! Core tool trait.

use async_trait::async_trait;
use dosh_types::ExecResult;

pub use dosh_types::{ParamSchema, ToolArgs, ToolSchema};

use super::context::ExecContext;

/// A command the shell can dispatch to.
///
/// Expected failures (a missing file, a non-empty directory) are returned as
/// `Ok(ExecResult::failure(..))`. An `Err` is a fault: the shell renders it
/// as `Error: <message>` and keeps running.
#[async_trait]
pub trait Tool: Send + Sync {
    /// The tool's name (used for lookup, lower case).
    fn name(&self) -> &str;

    /// Get the tool's schema.
    fn schema(&self) -> ToolSchema;

    /// Execute the tool with the given arguments and context.
    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> anyhow::Result<ExecResult>;
}
