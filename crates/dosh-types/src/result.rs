//! ExecResult: the structured result of every command execution.

use serde::{Deserialize, Serialize};

/// The result of executing one shell command.
///
/// Both streams are rendered by the shell: `out` first, then `err`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecResult {
    /// Exit code. 0 means success.
    pub code: i64,
    /// Normal output.
    pub out: String,
    /// Error message if the command failed.
    pub err: String,
}

impl ExecResult {
    /// Create a successful result with output.
    pub fn success(out: impl Into<String>) -> Self {
        Self {
            code: 0,
            out: out.into(),
            err: String::new(),
        }
    }

    /// Create a successful result that prints nothing.
    pub fn silent() -> Self {
        Self::default()
    }

    /// Create a failed result with an error message.
    pub fn failure(code: i64, err: impl Into<String>) -> Self {
        Self {
            code,
            out: String::new(),
            err: err.into(),
        }
    }

    /// True if the command succeeded (exit code 0).
    pub fn ok(&self) -> bool {
        self.code == 0
    }

    /// True if there is nothing to render.
    pub fn is_empty(&self) -> bool {
        self.out.is_empty() && self.err.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_is_not_ok() {
        let result = ExecResult::failure(1, "File not found: X");
        assert!(!result.ok());
        assert_eq!(result.err, "File not found: X");
        assert!(ExecResult::success("x").ok());
        assert!(ExecResult::silent().is_empty());
    }
}
