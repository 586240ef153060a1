// Thu Aug 27 2026 - Alex

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output format for a resolved layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Translation unit fact dump produced by the external frontend driver.
    pub input_file: PathBuf,
    /// Cursor position, 1-based.
    pub row: u32,
    pub col: u32,
    /// Compiler flags forwarded opaquely to the frontend.
    pub extra_args: Vec<String>,
    pub format: OutputFormat,
    pub output_file: Option<PathBuf>,
    pub pretty_json: bool,
    pub show_statistics: bool,
    pub use_color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_file: PathBuf::new(),
            row: 1,
            col: 1,
            extra_args: Vec::new(),
            format: OutputFormat::Text,
            output_file: None,
            pretty_json: true,
            show_statistics: false,
            use_color: true,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input_file(mut self, input: PathBuf) -> Self {
        self.input_file = input;
        self
    }

    pub fn with_position(mut self, row: u32, col: u32) -> Self {
        self.row = row;
        self.col = col;
        self
    }

    pub fn with_extra_args(mut self, args: Vec<String>) -> Self {
        self.extra_args = args;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_output_file(mut self, output: PathBuf) -> Self {
        self.output_file = Some(output);
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.input_file.as_os_str().is_empty() {
            return Err("input_file must be set".to_string());
        }
        if self.row == 0 || self.col == 0 {
            return Err("row and col are 1-based and must be greater than 0".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_needs_input() {
        let config = Config::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_valid_config() {
        let config = Config::new()
            .with_input_file(PathBuf::from("tu.json"))
            .with_position(12, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_position_rejected() {
        let config = Config::new()
            .with_input_file(PathBuf::from("tu.json"))
            .with_position(0, 5);
        assert!(config.validate().is_err());
    }
}
