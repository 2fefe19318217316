//! Command handling module.
//!
//! Processes text commands that list prompt templates, pose their questions
//! and check answers. Commands use the `/prompt_bot` prefix by default.

mod handler;
mod types;

pub use handler::CommandHandler;
pub use types::{AnswerArgs, BotCommand, CommandResult};
