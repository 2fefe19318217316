//! Number prompts with optional bounds.

use super::PromptError;

/// A prompt whose answer must be a whole number, optionally bounded.
///
/// Both bounds are exclusive unless marked inclusive. An inclusivity flag has
/// no effect while its bound is unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberPrompt {
    question: String,
    upper_bound: Option<i64>,
    lower_bound: Option<i64>,
    upper_inclusive: bool,
    lower_inclusive: bool,
}

impl NumberPrompt {
    /// Creates an unbounded number prompt.
    #[must_use]
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            upper_bound: None,
            lower_bound: None,
            upper_inclusive: false,
            lower_inclusive: false,
        }
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub const fn upper_bound(&self) -> Option<i64> {
        self.upper_bound
    }

    #[must_use]
    pub const fn lower_bound(&self) -> Option<i64> {
        self.lower_bound
    }

    #[must_use]
    pub const fn upper_inclusive(&self) -> bool {
        self.upper_inclusive
    }

    #[must_use]
    pub const fn lower_inclusive(&self) -> bool {
        self.lower_inclusive
    }

    /// Sets or clears the upper bound.
    pub fn set_upper_bound(&mut self, bound: Option<i64>) {
        self.upper_bound = bound;
    }

    /// Sets or clears the lower bound.
    pub fn set_lower_bound(&mut self, bound: Option<i64>) {
        self.lower_bound = bound;
    }

    pub fn set_upper_inclusive(&mut self, inclusive: bool) {
        self.upper_inclusive = inclusive;
    }

    pub fn set_lower_inclusive(&mut self, inclusive: bool) {
        self.lower_inclusive = inclusive;
    }

    /// Parses the answer and checks it against the configured bounds.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::Parse`] if the answer is not a whole number.
    pub fn validate(&self, input: &str) -> Result<bool, PromptError> {
        let value = input.trim().parse::<i64>().map_err(|source| PromptError::Parse {
            input: input.to_owned(),
            source,
        })?;

        Ok(self.accepts(value))
    }

    /// Checks a value against the bounds, upper bound first.
    #[must_use]
    pub fn accepts(&self, value: i64) -> bool {
        if let Some(upper) = self.upper_bound {
            let too_high = if self.upper_inclusive {
                value > upper
            } else {
                value >= upper
            };
            if too_high {
                return false;
            }
        }

        if let Some(lower) = self.lower_bound {
            let too_low = if self.lower_inclusive {
                value < lower
            } else {
                value <= lower
            };
            if too_low {
                return false;
            }
        }

        true
    }

    /// Returns the smallest and largest accepted values, or `None` when no
    /// integer satisfies both bounds.
    #[must_use]
    pub fn accepted_range(&self) -> Option<(i64, i64)> {
        let min = match self.lower_bound {
            None => i64::MIN,
            Some(lower) if self.lower_inclusive => lower,
            Some(lower) => lower.checked_add(1)?,
        };
        let max = match self.upper_bound {
            None => i64::MAX,
            Some(upper) if self.upper_inclusive => upper,
            Some(upper) => upper.checked_sub(1)?,
        };

        (min <= max).then_some((min, max))
    }

    /// Describes the bounds for display, e.g. `> 0 and <= 10`.
    #[must_use]
    pub fn bounds_hint(&self) -> Option<String> {
        let mut parts = Vec::with_capacity(2);

        if let Some(lower) = self.lower_bound {
            let op = if self.lower_inclusive { ">=" } else { ">" };
            parts.push(format!("{op} {lower}"));
        }

        if let Some(upper) = self.upper_bound {
            let op = if self.upper_inclusive { "<=" } else { "<" };
            parts.push(format!("{op} {upper}"));
        }

        (!parts.is_empty()).then(|| parts.join(" and "))
    }
}
