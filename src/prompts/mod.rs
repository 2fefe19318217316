//! Prompt definitions.
//!
//! A prompt is a question posed to a user, optionally carrying a rule for
//! validating the answer. Prompts convert to and from plain JSON records so
//! they can be stored in template files or sent to the chat platform.

mod choice;
mod email;
mod error;
mod kind;
mod number;
mod password;
mod prompt;
mod record;

pub use choice::MultiChoicePrompt;
pub use email::EmailPrompt;
pub use error::PromptError;
pub use kind::PromptKind;
pub use number::NumberPrompt;
pub use password::PasswordPrompt;
pub use prompt::{BasePrompt, Prompt};
pub use record::Record;
