//! Interactive session settings.

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// Prompt printed before each REPL line
    pub prompt: String,

    /// Where REPL history is loaded from and saved to, if anywhere
    pub history_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: ">> ".to_owned(),
            history_file: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }
}
