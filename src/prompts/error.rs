//! Prompt error types.

use std::num::ParseIntError;

use thiserror::Error;

/// Errors raised while validating answers, editing prompts or rebuilding them
/// from records.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("Answer '{input}' is not a whole number: {source}")]
    Parse {
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Answer '{input}' is not an email address (missing '@')")]
    Format { input: String },

    #[error("Record is missing required field: {0}")]
    MissingField(&'static str),

    #[error("Record field '{field}' has an invalid value: {source}")]
    InvalidField {
        field: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{collection} does not contain '{value}'")]
    NotFound {
        collection: &'static str,
        value: String,
    },
}
