//! Interactive menu configuration module.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Menu configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Whether to print the welcome banner when the menu starts
    pub show_banner: bool,

    /// Prompt printed after the option list
    pub prompt: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            show_banner: true,
            prompt: "Choose an option: ".to_string(),
        }
    }
}

impl Validate for MenuConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.prompt.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "Menu prompt cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
