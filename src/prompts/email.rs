//! Email prompts with domain allow/block lists.

use super::PromptError;
use super::prompt::remove_entry;

/// A prompt whose answer must be an email address, optionally filtered by
/// domain.
///
/// A non-empty allow-list takes precedence: the block-list is only consulted
/// while the allow-list is empty. With both lists empty every domain passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailPrompt {
    question: String,
    allowed_domains: Vec<String>,
    blocked_domains: Vec<String>,
}

impl EmailPrompt {
    #[must_use]
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            allowed_domains: Vec::new(),
            blocked_domains: Vec::new(),
        }
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn allowed_domains(&self) -> &[String] {
        &self.allowed_domains
    }

    #[must_use]
    pub fn blocked_domains(&self) -> &[String] {
        &self.blocked_domains
    }

    /// Adds a domain to the allow-list. Adding a listed domain again is a no-op.
    pub fn add_allowed_domain(&mut self, domain: impl Into<String>) {
        insert_unique(&mut self.allowed_domains, domain.into());
    }

    /// Adds a domain to the block-list. Adding a listed domain again is a no-op.
    pub fn add_blocked_domain(&mut self, domain: impl Into<String>) {
        insert_unique(&mut self.blocked_domains, domain.into());
    }

    /// # Errors
    ///
    /// Returns [`PromptError::NotFound`] if the domain is not allowed.
    pub fn remove_allowed_domain(&mut self, domain: &str) -> Result<(), PromptError> {
        remove_entry(&mut self.allowed_domains, domain, "allowed domains")
    }

    /// # Errors
    ///
    /// Returns [`PromptError::NotFound`] if the domain is not blocked.
    pub fn remove_blocked_domain(&mut self, domain: &str) -> Result<(), PromptError> {
        remove_entry(&mut self.blocked_domains, domain, "blocked domains")
    }

    /// Checks the domain of an email address against the lists.
    ///
    /// The domain is everything after the first `@`.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::Format`] if the answer contains no `@`.
    pub fn validate(&self, input: &str) -> Result<bool, PromptError> {
        let (_, domain) = input.split_once('@').ok_or_else(|| PromptError::Format {
            input: input.to_owned(),
        })?;

        if !self.allowed_domains.is_empty() {
            return Ok(self.allowed_domains.iter().any(|d| d == domain));
        }

        if !self.blocked_domains.is_empty() {
            return Ok(!self.blocked_domains.iter().any(|d| d == domain));
        }

        Ok(true)
    }
}

fn insert_unique(domains: &mut Vec<String>, domain: String) {
    if !domains.contains(&domain) {
        domains.push(domain);
    }
}
