//! Password prompts.

use super::PromptError;
use super::prompt::remove_entry;

/// A prompt answered by one of a set of accepted secrets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordPrompt {
    question: String,
    passwords: Vec<String>,
}

impl PasswordPrompt {
    #[must_use]
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            passwords: Vec::new(),
        }
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn passwords(&self) -> &[String] {
        &self.passwords
    }

    pub fn add_password(&mut self, password: impl Into<String>) {
        self.passwords.push(password.into());
    }

    /// # Errors
    ///
    /// Returns [`PromptError::NotFound`] if the password is not accepted.
    pub fn remove_password(&mut self, password: &str) -> Result<(), PromptError> {
        remove_entry(&mut self.passwords, password, "passwords")
    }

    /// Exact, case-sensitive match against the accepted passwords.
    #[must_use]
    pub fn validate(&self, input: &str) -> bool {
        self.passwords.iter().any(|p| p == input)
    }
}
