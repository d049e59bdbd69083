//! Shell configuration.

use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::history::DEFAULT_HISTORY_LIMIT;

/// Lines per page for `more` when not configured.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Configuration for a [`Shell`](crate::Shell).
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Name of this shell (for identification in logs).
    pub name: String,

    /// Drive letter of the volume, upper-cased on use.
    pub drive: char,

    /// Maximum number of commands kept in history.
    pub history_limit: usize,

    /// Lines per page for `more`.
    pub page_size: usize,

    /// Whether to populate the default DOS volume on start.
    ///
    /// When false the volume holds only the two drive root keys.
    pub seed: bool,

    /// Time source for file stamps and the `date`/`time` commands.
    pub clock: Arc<dyn Clock>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            drive: 'C',
            history_limit: DEFAULT_HISTORY_LIMIT,
            page_size: DEFAULT_PAGE_SIZE,
            seed: true,
            clock: Arc::new(SystemClock),
        }
    }
}

impl ShellConfig {
    /// A config with an unseeded volume (drive roots only).
    pub fn empty() -> Self {
        Self {
            name: "empty".to_string(),
            seed: false,
            ..Self::default()
        }
    }

    /// A seeded config with the given name.
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Set the drive letter.
    pub fn with_drive(mut self, drive: char) -> Self {
        self.drive = drive.to_ascii_uppercase();
        self
    }

    /// Set the history cap.
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Set the `more` page size (at least one line).
    pub fn with_page_size(mut self, lines: usize) -> Self {
        self.page_size = lines.max(1);
        self
    }

    /// Choose whether the default volume is created.
    pub fn with_seed(mut self, seed: bool) -> Self {
        self.seed = seed;
        self
    }

    /// Use a different time source.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    #[test]
    fn defaults() {
        let config = ShellConfig::default();
        assert_eq!(config.drive, 'C');
        assert_eq!(config.history_limit, 50);
        assert_eq!(config.page_size, 20);
        assert!(config.seed);
    }

    #[test]
    fn builder_chain() {
        let clock = FixedClock::at(1994, 1, 1, 0, 0).unwrap();
        let config = ShellConfig::empty()
            .with_drive('d')
            .with_page_size(0)
            .with_history_limit(5)
            .with_clock(Arc::new(clock));

        assert_eq!(config.name, "empty");
        assert!(!config.seed);
        assert_eq!(config.drive, 'D');
        assert_eq!(config.page_size, 1);
        assert_eq!(config.history_limit, 5);
        assert_eq!(config.clock.now(), clock.0);
    }
}
