//! Multiple choice prompts.

use super::PromptError;
use super::prompt::remove_entry;

/// A prompt answered by picking one of a list of options.
///
/// Options keep their insertion order and may repeat. Whether an answer is a
/// legal choice is left to the caller; see [`MultiChoicePrompt::is_option`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiChoicePrompt {
    question: String,
    options: Vec<String>,
}

impl MultiChoicePrompt {
    /// Creates a prompt with no options.
    #[must_use]
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            options: Vec::new(),
        }
    }

    /// Creates a prompt with an initial list of options.
    #[must_use]
    pub fn with_options<I, S>(question: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            question: question.into(),
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Appends an option. Duplicates are kept.
    pub fn add_option(&mut self, option: impl Into<String>) {
        self.options.push(option.into());
    }

    /// Removes the first occurrence of an option.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::NotFound`] if the option is not present.
    pub fn remove_option(&mut self, option: &str) -> Result<(), PromptError> {
        remove_entry(&mut self.options, option, "options")
    }

    /// Checks whether the answer exactly matches one of the options.
    #[must_use]
    pub fn is_option(&self, answer: &str) -> bool {
        self.options.iter().any(|o| o == answer)
    }
}
