//! Prompt kind discriminant.

use std::fmt;

/// The tag stored in a record's `type` field.
///
/// Tag values are part of the wire format and never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PromptKind {
    Base = 0,
    Text = 1,
    Number = 2,
    MultiChoice = 3,
    Email = 4,
    Password = 5,
}

impl PromptKind {
    /// All kinds in tag order.
    pub const ALL: [Self; 6] = [
        Self::Base,
        Self::Text,
        Self::Number,
        Self::MultiChoice,
        Self::Email,
        Self::Password,
    ];

    /// Returns the numeric wire tag.
    #[must_use]
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Maps a wire tag to a kind. Unknown tags fall back to [`PromptKind::Base`].
    #[must_use]
    pub fn from_tag(tag: i64) -> Self {
        Self::ALL
            .into_iter()
            .find(|kind| i64::from(kind.tag()) == tag)
            .unwrap_or(Self::Base)
    }

    /// Human-readable name used in listings.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Text => "text",
            Self::Number => "number",
            Self::MultiChoice => "multiple choice",
            Self::Email => "email",
            Self::Password => "password",
        }
    }
}

impl fmt::Display for PromptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
