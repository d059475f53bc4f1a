//! Configuration for a console and its terminal host.

use std::path::PathBuf;

/// Console configuration.
///
/// Controls the initial state, where `dump` writes, and how the terminal
/// host prompts and toggles.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConsoleConfig {
    /// Whether the console starts open.
    pub start_open: bool,

    /// Directory that `dump` writes transcripts into.
    pub dump_directory: PathBuf,

    /// Prompt shown while the console is open.
    pub prompt: String,

    /// Prompt shown while the console is closed.
    pub closed_prompt: String,

    /// Input line that toggles the console in the terminal host.
    pub toggle_line: String,

    /// Maximum number of lines kept in line-editor history.
    pub history_size: usize,

    /// Whether the terminal host prints a welcome banner.
    pub show_banner: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            start_open: false,
            dump_directory: PathBuf::from("."),
            prompt: "> ".to_string(),
            closed_prompt: "(closed) ".to_string(),
            toggle_line: "`".to_string(),
            history_size: 1000,
            show_banner: true,
        }
    }
}

impl ConsoleConfig {
    /// Builder method to set the initial open state.
    #[must_use]
    pub fn with_start_open(mut self, open: bool) -> Self {
        self.start_open = open;
        self
    }

    /// Builder method to set the dump directory.
    #[must_use]
    pub fn with_dump_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.dump_directory = directory.into();
        self
    }

    /// Builder method to set the open prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Builder method to set the toggle line.
    #[must_use]
    pub fn with_toggle_line(mut self, line: impl Into<String>) -> Self {
        self.toggle_line = line.into();
        self
    }

    /// Builder method to set the history size.
    #[must_use]
    pub fn with_history_size(mut self, size: usize) -> Self {
        self.history_size = size;
        self
    }

    /// Builder method to enable or disable the banner.
    #[must_use]
    pub fn with_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }
}
