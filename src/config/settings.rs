//! Application settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Bot-specific settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotSettings {
    /// Path to the prompt templates JSON file.
    #[serde(default = "default_templates_path")]
    pub templates_path: PathBuf,

    /// Command prefix for bot commands.
    #[serde(default = "default_command_prefix")]
    pub command_prefix: String,

    /// Log level for the application.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_templates_path() -> PathBuf {
    PathBuf::from("prompts.json")
}

fn default_command_prefix() -> String {
    "/prompt_bot".to_owned()
}

fn default_log_level() -> String {
    "info".to_owned()
}

impl Default for BotSettings {
    fn default() -> Self {
        Self {
            templates_path: default_templates_path(),
            command_prefix: default_command_prefix(),
            log_level: default_log_level(),
        }
    }
}

impl BotSettings {
    /// Creates bot settings from environment variables with defaults.
    ///
    /// Reads `PROMPTS_PATH`, `COMMAND_PREFIX` and `RUST_LOG`.
    #[must_use]
    pub fn from_env_with_defaults() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            templates_path: lookup("PROMPTS_PATH").map_or_else(default_templates_path, PathBuf::from),
            command_prefix: lookup("COMMAND_PREFIX")
                .filter(|p| !p.trim().is_empty())
                .unwrap_or_else(default_command_prefix),
            log_level: lookup("RUST_LOG").unwrap_or_else(default_log_level),
        }
    }
}
