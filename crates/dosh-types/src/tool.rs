//! Tool schema and argument types.

/// Schema for a tool parameter.
#[derive(Debug, Clone)]
pub struct ParamSchema {
    /// Parameter name.
    pub name: String,
    /// Whether this parameter is required.
    pub required: bool,
    /// Description for help text.
    pub description: String,
}

impl ParamSchema {
    /// Create a required parameter.
    pub fn required(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: true,
            description: description.into(),
        }
    }

    /// Create an optional parameter.
    pub fn optional(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: false,
            description: description.into(),
        }
    }
}

/// Schema describing a tool's interface.
#[derive(Debug, Clone)]
pub struct ToolSchema {
    /// Tool name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Parameter definitions, in positional order.
    pub params: Vec<ParamSchema>,
    /// Alternative command names.
    pub aliases: Vec<String>,
}

impl ToolSchema {
    /// Create a new tool schema.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            params: Vec::new(),
            aliases: Vec::new(),
        }
    }

    /// Add a parameter to the schema.
    pub fn param(mut self, param: ParamSchema) -> Self {
        self.params.push(param);
        self
    }

    /// Add alternative command names.
    pub fn with_aliases(mut self, aliases: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    /// One-line usage, e.g. `copy <source> <destination>`.
    ///
    /// ```
    /// use dosh_types::{ParamSchema, ToolSchema};
    ///
    /// let schema = ToolSchema::new("head", "Show the first lines of a file")
    ///     .param(ParamSchema::required("filename", "File to read"))
    ///     .param(ParamSchema::optional("lines", "Number of lines"));
    /// assert_eq!(schema.usage(), "head <filename> [lines]");
    /// ```
    pub fn usage(&self) -> String {
        let mut usage = self.name.clone();
        for param in &self.params {
            if param.required {
                usage.push_str(&format!(" <{}>", param.name));
            } else {
                usage.push_str(&format!(" [{}]", param.name));
            }
        }
        usage
    }
}

/// Whitespace-separated arguments following the command name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolArgs {
    /// Positional arguments in order.
    pub positional: Vec<String>,
}

impl ToolArgs {
    /// Create empty args.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a positional argument by index.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.positional.get(index).map(String::as_str)
    }

    /// Parse a positional argument as a count, `None` if absent or not a number.
    pub fn get_count(&self, index: usize) -> Option<usize> {
        self.get(index).and_then(|s| s.parse().ok())
    }

    pub fn len(&self) -> usize {
        self.positional.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ToolArgs {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            positional: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_from_tokens() {
        let args: ToolArgs = "a.txt 5".split_whitespace().collect();
        assert_eq!(args.get(0), Some("a.txt"));
        assert_eq!(args.get_count(1), Some(5));
        assert_eq!(args.get_count(0), None);
        assert_eq!(args.len(), 2);
    }
}
