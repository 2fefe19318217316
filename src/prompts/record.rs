//! Conversion between prompts and JSON records.
//!
//! Record shape, by kind:
//!
//! ```json
//! {"type": 2, "question": "...",
//!  "bounds": {"upper": 10, "lower": null, "upper_inclusive": false, "lower_inclusive": false}}
//! {"type": 3, "question": "...", "options": ["a", "b"]}
//! {"type": 4, "question": "...", "domains": {"allowed": [], "blocked": []}}
//! {"type": 5, "question": "...", "passwords": ["..."]}
//! ```
//!
//! Base (0) and text (1) records carry only `type` and `question`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Number, Value, json};
use tracing::debug;

use super::{
    BasePrompt, EmailPrompt, MultiChoicePrompt, NumberPrompt, PasswordPrompt, Prompt, PromptError,
    PromptKind,
};

/// A JSON object encoding one prompt.
pub type Record = Map<String, Value>;

const TYPE_KEY: &str = "type";
const KIND_ALIAS: &str = "kind";
const QUESTION_KEY: &str = "question";
const BOUNDS_KEY: &str = "bounds";
const OPTIONS_KEY: &str = "options";
const DOMAINS_KEY: &str = "domains";
const PASSWORDS_KEY: &str = "passwords";

#[derive(Debug, Deserialize)]
struct BoundsSection {
    #[serde(default, deserialize_with = "whole_number")]
    upper: Option<i64>,
    #[serde(default, deserialize_with = "whole_number")]
    lower: Option<i64>,
    #[serde(default)]
    upper_inclusive: bool,
    #[serde(default)]
    lower_inclusive: bool,
}

/// Reads an optional bound. Whole-valued floats such as `10.0` are accepted;
/// fractional bounds are rejected.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn whole_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    let Some(number) = Option::<Number>::deserialize(deserializer)? else {
        return Ok(None);
    };

    if let Some(value) = number.as_i64() {
        return Ok(Some(value));
    }

    match number.as_f64() {
        Some(value)
            if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 =>
        {
            Ok(Some(value as i64))
        }
        _ => Err(<D::Error as serde::de::Error>::custom(format!(
            "bound {number} is not a whole number in range"
        ))),
    }
}

#[derive(Debug, Deserialize)]
struct DomainsSection {
    #[serde(default)]
    allowed: Vec<String>,
    #[serde(default)]
    blocked: Vec<String>,
}

impl Prompt {
    /// Serializes the prompt into a record.
    #[must_use]
    pub fn to_record(&self) -> Record {
        let mut record = Record::new();
        record.insert(TYPE_KEY.to_owned(), Value::from(self.kind().tag()));
        record.insert(QUESTION_KEY.to_owned(), Value::from(self.question()));

        match self {
            Self::Base(_) | Self::Text(_) => {}
            Self::Number(p) => {
                record.insert(
                    BOUNDS_KEY.to_owned(),
                    json!({
                        "upper": p.upper_bound(),
                        "lower": p.lower_bound(),
                        "upper_inclusive": p.upper_inclusive(),
                        "lower_inclusive": p.lower_inclusive(),
                    }),
                );
            }
            Self::MultiChoice(p) => {
                record.insert(OPTIONS_KEY.to_owned(), json!(p.options()));
            }
            Self::Email(p) => {
                record.insert(
                    DOMAINS_KEY.to_owned(),
                    json!({
                        "allowed": p.allowed_domains(),
                        "blocked": p.blocked_domains(),
                    }),
                );
            }
            Self::Password(p) => {
                record.insert(PASSWORDS_KEY.to_owned(), json!(p.passwords()));
            }
        }

        record
    }

    /// Rebuilds a prompt from a record.
    ///
    /// The `type` field (or `kind`) selects the variant. Unknown or
    /// non-integer kinds produce a base prompt rather than an error.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::MissingField`] if the kind, the question or the
    /// kind's section is absent, and [`PromptError::InvalidField`] if a field
    /// has the wrong shape.
    pub fn from_record(record: &Record) -> Result<Self, PromptError> {
        let kind = read_kind(record)?;
        let question: String = read_field(record, QUESTION_KEY)?;

        let prompt = match kind {
            PromptKind::Base => Self::Base(BasePrompt::new(question)),
            PromptKind::Text => Self::Text(BasePrompt::new(question)),
            PromptKind::Number => {
                let bounds: BoundsSection = read_field(record, BOUNDS_KEY)?;
                let mut prompt = NumberPrompt::new(question);
                prompt.set_lower_bound(bounds.lower);
                prompt.set_upper_bound(bounds.upper);
                prompt.set_lower_inclusive(bounds.lower_inclusive);
                prompt.set_upper_inclusive(bounds.upper_inclusive);
                Self::Number(prompt)
            }
            PromptKind::MultiChoice => {
                let options: Vec<String> = read_field(record, OPTIONS_KEY)?;
                let mut prompt = MultiChoicePrompt::new(question);
                for option in options {
                    prompt.add_option(option);
                }
                Self::MultiChoice(prompt)
            }
            PromptKind::Email => {
                let domains: DomainsSection = read_field(record, DOMAINS_KEY)?;
                let mut prompt = EmailPrompt::new(question);
                for domain in domains.allowed {
                    prompt.add_allowed_domain(domain);
                }
                for domain in domains.blocked {
                    prompt.add_blocked_domain(domain);
                }
                Self::Email(prompt)
            }
            PromptKind::Password => {
                let passwords: Vec<String> = read_field(record, PASSWORDS_KEY)?;
                let mut prompt = PasswordPrompt::new(question);
                for password in passwords {
                    prompt.add_password(password);
                }
                Self::Password(prompt)
            }
        };

        Ok(prompt)
    }
}

fn read_kind(record: &Record) -> Result<PromptKind, PromptError> {
    // A null tag counts as absent.
    let present = |key: &str| record.get(key).filter(|v| !v.is_null());
    let value = present(TYPE_KEY)
        .or_else(|| present(KIND_ALIAS))
        .ok_or(PromptError::MissingField(TYPE_KEY))?;

    let tag = value
        .as_i64()
        .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok()));

    match tag {
        Some(tag) => {
            let kind = PromptKind::from_tag(tag);
            if kind == PromptKind::Base && tag != 0 {
                debug!("Unknown prompt kind {}, using base prompt", tag);
            }
            Ok(kind)
        }
        None => {
            debug!("Non-integer prompt kind {}, using base prompt", value);
            Ok(PromptKind::Base)
        }
    }
}

fn read_field<'a, T>(record: &'a Record, field: &'static str) -> Result<T, PromptError>
where
    T: Deserialize<'a>,
{
    let value = record.get(field).ok_or(PromptError::MissingField(field))?;
    T::deserialize(value).map_err(|source| PromptError::InvalidField { field, source })
}

impl Serialize for Prompt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_record().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Prompt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let record = Record::deserialize(deserializer)?;
        Self::from_record(&record).map_err(<D::Error as serde::de::Error>::custom)
    }
}
