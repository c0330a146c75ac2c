//! Input boundary for loosely typed values.
//!
//! Anything that arrives from outside (JSON, optional columns, CLI files) is
//! mapped to a [`Candidate`] before it reaches a filter or a sketch, so a
//! missing or non-string value becomes an explicit `Invalid` instead of being
//! coerced into some string.
use crate::error::{Result, SketchError};
use serde_json::Value;
use std::collections::BTreeSet;

/// Characters accepted by [`PasswordPolicy::ascii_printable`].
pub const PASSWORD_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()_+-=[]{}|;:,.<>?";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidate {
    Valid(String),
    Invalid(String),
}

impl Candidate {
    pub fn is_valid(&self) -> bool {
        matches!(self, Candidate::Valid(_))
    }

    /// Returns the string value or an `InvalidInput` error carrying the
    /// rejection reason.
    pub fn as_str(&self) -> Result<&str> {
        match self {
            Candidate::Valid(value) => Ok(value),
            Candidate::Invalid(reason) => {
                Err(SketchError::InvalidInput(reason.clone()))
            }
        }
    }

    pub fn into_string(self) -> Result<String> {
        match self {
            Candidate::Valid(value) => Ok(value),
            Candidate::Invalid(reason) => Err(SketchError::InvalidInput(reason)),
        }
    }
}

impl From<&str> for Candidate {
    fn from(value: &str) -> Self {
        Candidate::Valid(value.to_string())
    }
}

impl From<String> for Candidate {
    fn from(value: String) -> Self {
        Candidate::Valid(value)
    }
}

impl<T: Into<Candidate>> From<Option<T>> for Candidate {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Candidate::Invalid("value is missing (null)".to_string()),
        }
    }
}

impl From<Value> for Candidate {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => Candidate::Valid(s),
            Value::Null => {
                Candidate::Invalid("value is missing (null)".to_string())
            }
            Value::Bool(_) => {
                Candidate::Invalid("expected a string, got a boolean".to_string())
            }
            Value::Number(n) => {
                Candidate::Invalid(format!("expected a string, got number {n}"))
            }
            Value::Array(_) => {
                Candidate::Invalid("expected a string, got an array".to_string())
            }
            Value::Object(_) => {
                Candidate::Invalid("expected a string, got an object".to_string())
            }
        }
    }
}

/// Optional character restriction applied to password candidates.
///
/// The filter itself accepts any string; the policy only narrows what a
/// [`UniquenessChecker`](crate::UniquenessChecker) lets through.
#[derive(Debug, Clone, Default)]
pub struct PasswordPolicy {
    allowed_chars: Option<BTreeSet<char>>,
}

impl PasswordPolicy {
    pub fn permissive() -> Self {
        Self::default()
    }

    pub fn ascii_printable() -> Self {
        Self::with_alphabet(PASSWORD_ALPHABET)
    }

    pub fn with_alphabet(alphabet: &str) -> Self {
        Self {
            allowed_chars: Some(alphabet.chars().collect()),
        }
    }

    pub fn is_permissive(&self) -> bool {
        self.allowed_chars.is_none()
    }

    /// Checks `value` against the alphabet. The empty string always passes.
    pub fn validate(&self, value: &str) -> Result<()> {
        let Some(allowed) = &self.allowed_chars else {
            return Ok(());
        };

        let unexpected: BTreeSet<char> =
            value.chars().filter(|c| !allowed.contains(c)).collect();
        if unexpected.is_empty() {
            Ok(())
        } else {
            let listed: String = unexpected.into_iter().collect();
            Err(SketchError::InvalidInput(format!(
                "password contains unexpected symbols: {listed:?}"
            )))
        }
    }

    /// Narrows a candidate: a valid value that breaks the policy becomes
    /// `Invalid`.
    pub fn apply(&self, candidate: Candidate) -> Candidate {
        match candidate {
            Candidate::Valid(value) => match self.validate(&value) {
                Ok(()) => Candidate::Valid(value),
                Err(e) => Candidate::Invalid(e.to_string()),
            },
            invalid => invalid,
        }
    }
}
