//! Walk options

/// Default document extension
pub const DEFAULT_EXTENSION: &str = "xml";

/// Documents between progress log lines
pub const DEFAULT_PROGRESS_EVERY: usize = 100;

/// Options for a corpus walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzeOptions {
    /// File extension to pick up, matched case-insensitively, no leading dot
    pub extension: String,
    pub progress_every: usize,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            progress_every: DEFAULT_PROGRESS_EVERY,
        }
    }
}

impl AnalyzeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document extension; a leading `.` is ignored
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        let extension = extension.into();
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }

    /// Set progress interval (0 disables progress lines)
    pub fn with_progress_every(mut self, every: usize) -> Self {
        self.progress_every = every;
        self
    }
}
