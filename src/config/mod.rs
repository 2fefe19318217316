//! Configuration module for the prompt bot.
//!
//! Handles loading, validation, and management of prompt templates and the
//! environment-driven bot settings.

mod settings;
mod templates;

pub use settings::BotSettings;
pub use templates::{PromptTemplate, PromptTemplates, TemplateError};
