//! Name-to-tool lookup table.

use std::collections::HashMap;
use std::sync::Arc;

use super::traits::{Tool, ToolSchema};

/// Registry of available tools, keyed by lower-case name and alias.
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool under its name and every alias in its schema.
    pub fn register(&mut self, tool: impl Tool + 'static) {
        let schema = tool.schema();
        let tool: Arc<dyn Tool> = Arc::new(tool);
        for alias in &schema.aliases {
            self.tools.insert(alias.to_lowercase(), Arc::clone(&tool));
        }
        self.tools.insert(tool.name().to_lowercase(), tool);
    }

    /// Look up a tool by name or alias (case-insensitive).
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(&name.to_lowercase()).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(&name.to_lowercase())
    }

    /// One schema per tool (aliases folded in), sorted by name.
    pub fn schemas(&self) -> Vec<ToolSchema> {
        let mut schemas: Vec<ToolSchema> = self
            .tools
            .iter()
            .filter(|(key, tool)| key.as_str() == tool.name())
            .map(|(_, tool)| tool.schema())
            .collect();
        schemas.sort_by(|a, b| a.name.cmp(&b.name));
        schemas
    }

    /// Number of distinct tools.
    pub fn len(&self) -> usize {
        self.tools
            .iter()
            .filter(|(key, tool)| key.as_str() == tool.name())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&str> = self.tools.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("ToolRegistry").field("tools", &names).finish()
    }
}
