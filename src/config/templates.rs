//! Prompt template files and template validation.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::prompts::{EmailPrompt, MultiChoicePrompt, NumberPrompt, PasswordPrompt, Prompt};

/// Errors that can occur while loading or validating templates.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template at index {index} has an empty id")]
    EmptyId { index: usize },

    #[error("Template at index {index} (id: {id}) has an empty question")]
    EmptyQuestion { index: usize, id: String },

    #[error("Duplicate template ID found: {id}")]
    DuplicateId { id: String },

    #[error("Template at index {index} (id: {id}) has bounds no number can satisfy ({bounds})")]
    UnsatisfiableBounds {
        index: usize,
        id: String,
        bounds: String,
    },

    #[error("Template at index {index} (id: {id}) is a multiple choice prompt without options")]
    NoOptions { index: usize, id: String },

    #[error("Template at index {index} (id: {id}) is a password prompt without passwords")]
    NoPasswords { index: usize, id: String },

    #[error("No prompt templates configured")]
    NoPrompts,

    #[error("Failed to read template file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse template file: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// A prompt stored under an id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PromptTemplate {
    /// Unique identifier used by commands.
    pub id: String,

    /// The prompt, stored as its record.
    pub prompt: Prompt,
}

impl PromptTemplate {
    #[must_use]
    pub fn new(id: impl Into<String>, prompt: impl Into<Prompt>) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
        }
    }

    /// Checks a single template. `index` is only used in error messages.
    ///
    /// # Errors
    ///
    /// Returns the first problem found with the template.
    pub fn validate(&self, index: usize) -> Result<(), TemplateError> {
        let id = || self.id.clone();

        if self.id.trim().is_empty() {
            return Err(TemplateError::EmptyId { index });
        }

        if self.prompt.question().trim().is_empty() {
            return Err(TemplateError::EmptyQuestion { index, id: id() });
        }

        match &self.prompt {
            Prompt::Number(p) if p.accepted_range().is_none() => {
                Err(TemplateError::UnsatisfiableBounds {
                    index,
                    id: id(),
                    bounds: p.bounds_hint().unwrap_or_default(),
                })
            }
            Prompt::MultiChoice(p) if p.options().is_empty() => {
                Err(TemplateError::NoOptions { index, id: id() })
            }
            Prompt::Password(p) if p.passwords().is_empty() => {
                Err(TemplateError::NoPasswords { index, id: id() })
            }
            _ => Ok(()),
        }
    }
}

/// The contents of a template file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromptTemplates {
    /// Templates in display order.
    pub prompts: Vec<PromptTemplate>,
}

impl PromptTemplates {
    /// Loads templates from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, TemplateError> {
        let content = std::fs::read_to_string(path)?;
        let templates: Self = serde_json::from_str(&content)?;
        Ok(templates)
    }

    /// Saves templates to a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), TemplateError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validates all templates.
    ///
    /// # Errors
    ///
    /// Returns the first validation error encountered.
    pub fn validate(&self) -> Result<(), TemplateError> {
        self.validate_all().into_iter().find(Result::is_err).unwrap_or(Ok(()))
    }

    /// Returns a validation result per template, in order.
    #[must_use]
    pub fn validate_all(&self) -> Vec<Result<(), TemplateError>> {
        if self.prompts.is_empty() {
            return vec![Err(TemplateError::NoPrompts)];
        }

        let mut seen_ids = HashSet::new();

        self.prompts
            .iter()
            .enumerate()
            .map(|(index, template)| {
                if !seen_ids.insert(template.id.as_str()) {
                    return Err(TemplateError::DuplicateId {
                        id: template.id.clone(),
                    });
                }
                template.validate(index)
            })
            .collect()
    }

    /// Finds a template by id, or by 1-based position.
    #[must_use]
    pub fn find(&self, key: &str) -> Option<&PromptTemplate> {
        self.prompts.iter().find(|t| t.id == key).or_else(|| {
            key.parse::<usize>()
                .ok()
                .filter(|&i| i > 0)
                .and_then(|i| self.prompts.get(i - 1))
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }

    /// Creates an example template set covering every prompt kind.
    #[must_use]
    pub fn example() -> Self {
        let mut age = NumberPrompt::new("How old are you?");
        age.set_lower_bound(Some(0));
        age.set_lower_inclusive(true);
        age.set_upper_bound(Some(130));

        let mut email = EmailPrompt::new("What's your work email?");
        email.add_blocked_domain("example.com");

        let mut password = PasswordPrompt::new("What's the server password?");
        password.add_password("open sesame");

        Self {
            prompts: vec![
                PromptTemplate::new("name", Prompt::text("What should we call you?")),
                PromptTemplate::new("age", age),
                PromptTemplate::new(
                    "team",
                    MultiChoicePrompt::with_options("Which team are you on?", ["Red", "Blue", "Green"]),
                ),
                PromptTemplate::new("email", email),
                PromptTemplate::new("password", password),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn templates(prompts: Vec<PromptTemplate>) -> PromptTemplates {
        PromptTemplates { prompts }
    }

    #[test]
    fn test_example_is_valid() {
        let example = PromptTemplates::example();
        assert!(example.validate().is_ok());
        assert_eq!(example.len(), 5);
    }

    #[test]
    fn test_validation_empty_templates() {
        assert!(matches!(
            templates(vec![]).validate(),
            Err(TemplateError::NoPrompts)
        ));
    }

    #[test]
    fn test_validation_duplicate_id() {
        let config = templates(vec![
            PromptTemplate::new("same", Prompt::text("First")),
            PromptTemplate::new("same", Prompt::text("Second")),
        ]);
        assert!(matches!(
            config.validate(),
            Err(TemplateError::DuplicateId { .. })
        ));
    }

    #[test]
    fn test_validation_empty_question() {
        let config = templates(vec![PromptTemplate::new("q", Prompt::text("  "))]);
        assert!(matches!(
            config.validate(),
            Err(TemplateError::EmptyQuestion { .. })
        ));
    }

    #[test]
    fn test_validation_empty_id() {
        let config = templates(vec![PromptTemplate::new("", Prompt::text("Q"))]);
        assert!(matches!(config.validate(), Err(TemplateError::EmptyId { index: 0 })));
    }

    #[test]
    fn test_validation_unsatisfiable_bounds() {
        let mut number = NumberPrompt::new("Q");
        number.set_lower_bound(Some(5));
        number.set_upper_bound(Some(6));
        let config = templates(vec![PromptTemplate::new("n", number)]);
        assert!(matches!(
            config.validate(),
            Err(TemplateError::UnsatisfiableBounds { .. })
        ));
    }

    #[test]
    fn test_validation_no_options_or_passwords() {
        let config = templates(vec![
            PromptTemplate::new("choice", MultiChoicePrompt::new("Q")),
            PromptTemplate::new("pw", PasswordPrompt::new("Q")),
            PromptTemplate::new("ok", Prompt::text("Q")),
        ]);
        let results = config.validate_all();
        assert!(matches!(results[0], Err(TemplateError::NoOptions { .. })));
        assert!(matches!(results[1], Err(TemplateError::NoPasswords { .. })));
        assert!(results[2].is_ok());
    }

    #[test]
    fn test_find_by_id_or_position() {
        let example = PromptTemplates::example();
        assert_eq!(example.find("age").map(|t| t.id.as_str()), Some("age"));
        assert_eq!(example.find("1").map(|t| t.id.as_str()), Some("name"));
        assert!(example.find("0").is_none());
        assert!(example.find("missing").is_none());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prompts.json");

        let example = PromptTemplates::example();
        example.save_to_file(&path).unwrap();
        let loaded = PromptTemplates::load_from_file(&path).unwrap();

        assert_eq!(loaded.prompts, example.prompts);
    }

    #[test]
    fn test_load_rejects_bad_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prompts.json");
        std::fs::write(&path, r#"{"prompts": [{"id": "x", "prompt": {"type": 1}}]}"#).unwrap();

        assert!(matches!(
            PromptTemplates::load_from_file(&path),
            Err(TemplateError::ParseError(_))
        ));
    }
}
