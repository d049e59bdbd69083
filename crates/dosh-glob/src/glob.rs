//! Wildcard pattern matching for file names.
//!
//! - `*` matches zero or more characters
//! - `?` matches exactly one character
//! - anything else matches itself, ignoring case

use std::cell::Cell;

/// Maximum number of recursive calls for one match. Protects against
/// adversarial patterns like `*A*A*A*...*A` that cause O(n^k) backtracking.
/// Counted as total work (calls), not stack depth, to bound actual CPU cost.
const MAX_MATCH_CALLS: usize = 100_000;

/// A compiled wildcard pattern.
///
/// ```
/// use dosh_glob::GlobMatcher;
///
/// let exe = GlobMatcher::compile("*.EXE");
/// assert!(exe.test("SNAKE.EXE"));
/// assert!(exe.test("snake.exe"));
/// assert!(!exe.test("COMMAND.COM"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobMatcher {
    source: String,
    folded: Vec<char>,
}

impl GlobMatcher {
    /// Compile a pattern. Compilation never fails.
    pub fn compile(pattern: &str) -> Self {
        Self {
            source: pattern.to_string(),
            folded: fold(pattern),
        }
    }

    /// The pattern as originally written.
    pub fn pattern(&self) -> &str {
        &self.source
    }

    /// True if the whole of `name` matches the pattern.
    pub fn test(&self, name: &str) -> bool {
        let input = fold(name);
        let calls = Cell::new(0usize);
        match_bounded(&self.folded, 0, &input, 0, &calls)
    }
}

/// Match a name against a pattern in one step.
///
/// ```
/// use dosh_glob::glob_match;
///
/// assert!(glob_match("CHK???.COM", "chkdsk.com"));
/// assert!(!glob_match("*.TXT", "NOTES.TXT.BAK"));
/// ```
pub fn glob_match(pattern: &str, name: &str) -> bool {
    GlobMatcher::compile(pattern).test(name)
}

/// Check if a string contains wildcard characters (`*`, `?`).
///
/// ```
/// use dosh_glob::contains_glob;
/// assert!(contains_glob("*.EXE"));
/// assert!(!contains_glob("SNAKE.EXE"));
/// ```
pub fn contains_glob(s: &str) -> bool {
    s.contains('*') || s.contains('?')
}

fn fold(s: &str) -> Vec<char> {
    s.chars().flat_map(char::to_lowercase).collect()
}

/// Work-bounded recursive matching with backtracking for `*`.
///
/// Returns `false` (non-match) if total recursive calls exceed `MAX_MATCH_CALLS`.
fn match_bounded(pattern: &[char], pi: usize, input: &[char], ii: usize, calls: &Cell<usize>) -> bool {
    let count = calls.get() + 1;
    calls.set(count);
    if count > MAX_MATCH_CALLS {
        return false;
    }

    if pi >= pattern.len() {
        return ii >= input.len();
    }

    match pattern[pi] {
        '*' => {
            let mut next_pi = pi;
            while next_pi < pattern.len() && pattern[next_pi] == '*' {
                next_pi += 1;
            }

            // Trailing star swallows the rest
            if next_pi >= pattern.len() {
                return true;
            }

            (ii..=input.len()).any(|start| match_bounded(pattern, next_pi, input, start, calls))
        }

        '?' => ii < input.len() && match_bounded(pattern, pi + 1, input, ii + 1, calls),

        c => ii < input.len() && c == input[ii] && match_bounded(pattern, pi + 1, input, ii + 1, calls),
    }
}
