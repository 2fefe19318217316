//! The prompt sum type.

use super::{EmailPrompt, MultiChoicePrompt, NumberPrompt, PasswordPrompt, PromptError, PromptKind};

/// A plain question with no validation rule. Backs both the base and the
/// text prompt kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasePrompt {
    question: String,
}

impl BasePrompt {
    #[must_use]
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
        }
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }
}

/// Any prompt, tagged by kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    /// Fallback prompt, also produced for unknown record kinds.
    Base(BasePrompt),
    /// Free-text answer.
    Text(BasePrompt),
    Number(NumberPrompt),
    MultiChoice(MultiChoicePrompt),
    Email(EmailPrompt),
    Password(PasswordPrompt),
}

impl Prompt {
    /// Creates a base prompt.
    #[must_use]
    pub fn base(question: impl Into<String>) -> Self {
        Self::Base(BasePrompt::new(question))
    }

    /// Creates a free-text prompt.
    #[must_use]
    pub fn text(question: impl Into<String>) -> Self {
        Self::Text(BasePrompt::new(question))
    }

    #[must_use]
    pub const fn kind(&self) -> PromptKind {
        match self {
            Self::Base(_) => PromptKind::Base,
            Self::Text(_) => PromptKind::Text,
            Self::Number(_) => PromptKind::Number,
            Self::MultiChoice(_) => PromptKind::MultiChoice,
            Self::Email(_) => PromptKind::Email,
            Self::Password(_) => PromptKind::Password,
        }
    }

    #[must_use]
    pub fn question(&self) -> &str {
        match self {
            Self::Base(p) | Self::Text(p) => p.question(),
            Self::Number(p) => p.question(),
            Self::MultiChoice(p) => p.question(),
            Self::Email(p) => p.question(),
            Self::Password(p) => p.question(),
        }
    }

    /// Whether this kind carries its own validation rule.
    #[must_use]
    pub const fn has_validation(&self) -> bool {
        matches!(self, Self::Number(_) | Self::Email(_) | Self::Password(_))
    }

    /// Validates an answer.
    ///
    /// Kinds without a validation rule (base, text, multiple choice) accept
    /// any answer. Checking a multiple choice answer against its options is
    /// up to the caller.
    ///
    /// # Errors
    ///
    /// Propagates [`PromptError::Parse`] from number prompts and
    /// [`PromptError::Format`] from email prompts.
    pub fn validate(&self, input: &str) -> Result<bool, PromptError> {
        match self {
            Self::Base(_) | Self::Text(_) | Self::MultiChoice(_) => Ok(true),
            Self::Number(p) => p.validate(input),
            Self::Email(p) => p.validate(input),
            Self::Password(p) => Ok(p.validate(input)),
        }
    }
}

impl From<NumberPrompt> for Prompt {
    fn from(prompt: NumberPrompt) -> Self {
        Self::Number(prompt)
    }
}

impl From<MultiChoicePrompt> for Prompt {
    fn from(prompt: MultiChoicePrompt) -> Self {
        Self::MultiChoice(prompt)
    }
}

impl From<EmailPrompt> for Prompt {
    fn from(prompt: EmailPrompt) -> Self {
        Self::Email(prompt)
    }
}

impl From<PasswordPrompt> for Prompt {
    fn from(prompt: PasswordPrompt) -> Self {
        Self::Password(prompt)
    }
}

/// Removes the first entry equal to `value`.
pub(super) fn remove_entry(
    entries: &mut Vec<String>,
    value: &str,
    collection: &'static str,
) -> Result<(), PromptError> {
    let index = entries
        .iter()
        .position(|e| e == value)
        .ok_or_else(|| PromptError::NotFound {
            collection,
            value: value.to_owned(),
        })?;
    entries.remove(index);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_and_question() {
        let prompt = Prompt::from(NumberPrompt::new("How many?"));
        assert_eq!(prompt.kind(), PromptKind::Number);
        assert_eq!(prompt.question(), "How many?");

        let prompt = Prompt::text("Name?");
        assert_eq!(prompt.kind(), PromptKind::Text);
        assert_eq!(prompt.question(), "Name?");
    }

    #[test]
    fn test_base_and_text_are_distinct() {
        assert_ne!(Prompt::base("Q"), Prompt::text("Q"));
    }

    #[test]
    fn test_unvalidated_kinds_accept_anything() {
        let choice = MultiChoicePrompt::with_options("Pick", ["a"]);
        for prompt in [Prompt::base("Q"), Prompt::text("Q"), choice.into()] {
            assert!(!prompt.has_validation());
            assert!(prompt.validate("whatever").unwrap());
        }
    }

    #[test]
    fn test_validate_dispatches_to_variant() {
        let mut password = PasswordPrompt::new("Password?");
        password.add_password("secret");
        let prompt = Prompt::from(password);
        assert!(prompt.has_validation());
        assert!(prompt.validate("secret").unwrap());
        assert!(!prompt.validate("nope").unwrap());
    }

    #[test]
    fn test_validate_propagates_errors() {
        let number = Prompt::from(NumberPrompt::new("n"));
        assert!(matches!(number.validate("abc"), Err(PromptError::Parse { .. })));

        let email = Prompt::from(EmailPrompt::new("e"));
        assert!(matches!(email.validate("abc"), Err(PromptError::Format { .. })));
    }
}
