//! echo: Print text, optionally redirected into a file.

use async_trait::async_trait;
use dosh_types::ExecResult;

use crate::tools::{ExecContext, ParamSchema, Tool, ToolArgs, ToolSchema};

/// Echo tool: print its arguments joined by single spaces.
///
/// A `>` token writes the text (plus a newline) to the file named after it,
/// creating or overwriting; `>>` appends.
pub struct Echo;

#[async_trait]
impl Tool for Echo {
    fn name(&self) -> &str {
        "echo"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("echo", "Display text, or write it to a file with > or >>")
            .param(ParamSchema::optional("text", "Text to display"))
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> anyhow::Result<ExecResult> {
        let redirect = args
            .positional
            .iter()
            .position(|token| token == ">" || token == ">>");

        let Some(at) = redirect else {
            return Ok(ExecResult::success(args.positional.join(" ")));
        };

        let (Some(token), None) = (args.get(at + 1), args.get(at + 2)) else {
            return Ok(ExecResult::failure(1, "The syntax of the command is incorrect."));
        };

        let line = format!("{}\n", args.positional[..at].join(" "));
        let append = args.positional[at] == ">>";
        let target = ctx.resolve_path(token);

        let existing = ctx.namespace.read_file(&target).map(<[u8]>::to_vec);
        let written = match existing {
            Some(mut content) if append => {
                content.extend_from_slice(line.as_bytes());
                ctx.namespace.write_file(&target, content)
            }
            Some(_) => ctx.namespace.write_file(&target, line),
            None => ctx.namespace.create_file(&target, line),
        };

        Ok(match written {
            Ok(()) => ExecResult::silent(),
            Err(_) => ExecResult::failure(1, format!("Access denied - {token}")),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::builtin::testing::{args, make_ctx};

    #[tokio::test]
    async fn test_echo_joins_words() {
        let mut ctx = make_ctx();
        let result = Echo.execute(args(&["hello", "world"]), &mut ctx).await.unwrap();
        assert_eq!(result.out, "hello world");
    }

    #[tokio::test]
    async fn test_echo_empty() {
        let mut ctx = make_ctx();
        let result = Echo.execute(args(&[]), &mut ctx).await.unwrap();
        assert!(result.ok());
        assert_eq!(result.out, "");
    }

    #[tokio::test]
    async fn test_echo_redirect_creates_and_overwrites() {
        let mut ctx = make_ctx();
        Echo.execute(args(&["first", ">", "out.txt"]), &mut ctx).await.unwrap();
        assert_eq!(ctx.namespace.read_file(r"C:\OUT.TXT"), Some(&b"first\n"[..]));

        let result = Echo.execute(args(&["second", ">", "out.txt"]), &mut ctx).await.unwrap();
        assert!(result.is_empty());
        assert_eq!(ctx.namespace.read_file(r"C:\OUT.TXT"), Some(&b"second\n"[..]));
    }

    #[tokio::test]
    async fn test_echo_append() {
        let mut ctx = make_ctx();
        Echo.execute(args(&["one", ">>", r"temp\log.txt"]), &mut ctx).await.unwrap();
        Echo.execute(args(&["two", ">>", r"temp\log.txt"]), &mut ctx).await.unwrap();
        let record = ctx.namespace.file(r"C:\TEMP\LOG.TXT").unwrap();
        assert_eq!(record.text(), "one\ntwo\n");
        assert_eq!(record.size, 8);
    }

    #[tokio::test]
    async fn test_echo_redirect_without_target() {
        let mut ctx = make_ctx();
        let result = Echo.execute(args(&["oops", ">"]), &mut ctx).await.unwrap();
        assert!(!result.ok());
    }

    #[tokio::test]
    async fn test_echo_redirect_onto_directory() {
        let mut ctx = make_ctx();
        let result = Echo.execute(args(&["x", ">", "games"]), &mut ctx).await.unwrap();
        assert_eq!(result.err, "Access denied - games");
    }
}
