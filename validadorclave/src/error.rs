//! Error types for password validation.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// The rule a candidate password violated.
///
/// Policies report exactly one kind per call: the first rule in their
/// evaluation order that the candidate does not satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ValidationError {
    /// The password is not longer than the policy's length threshold.
    #[error("Password does not exceed the minimum length")]
    InsufficientLength,
    /// No uppercase letter was found.
    #[error("Password must contain at least one uppercase letter")]
    MissingUppercase,
    /// No lowercase letter was found.
    #[error("Password must contain at least one lowercase letter")]
    MissingLowercase,
    /// No digit was found.
    #[error("Password must contain at least one digit")]
    MissingDigit,
    /// None of the accepted special characters (`@ _ # % $`) was found.
    #[error("Password must contain at least one special character (@, _, #, %, $)")]
    MissingSpecialCharacter,
    /// The secret word is absent or not written in mixed case.
    #[error("Password must contain the secret word in mixed case")]
    MissingSecretWord,
}

impl ValidationError {
    /// Stable machine-readable code for this failure kind.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::InsufficientLength => "insufficient_length",
            Self::MissingUppercase => "missing_uppercase",
            Self::MissingLowercase => "missing_lowercase",
            Self::MissingDigit => "missing_digit",
            Self::MissingSpecialCharacter => "missing_special_character",
            Self::MissingSecretWord => "missing_secret_word",
        }
    }
}

impl Serialize for ValidationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

/// Errors raised while loading a [`ValidatorConfig`](crate::ValidatorConfig).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The policy name does not match any known policy.
    #[error("Unknown password policy: '{0}' (expected 'ganimedes' or 'calisto')")]
    UnknownPolicy(String),
    /// The JSON document could not be parsed.
    #[error("Invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
    /// The YAML document could not be parsed.
    #[error("Invalid YAML config: {0}")]
    Yaml(String),
}
