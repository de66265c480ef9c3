//! Password rule contract and the primitive checks policies are built from.
//!
//! A policy is a fixed, ordered chain of checks. Evaluation stops at the first
//! check that fails and reports its [`ValidationError`] kind; a candidate that
//! passes every check yields `Ok(true)`.

mod calisto;
mod ganimedes;

pub use calisto::ReglaValidacionCalisto;
pub use ganimedes::ReglaValidacionGanimedes;

use crate::error::ValidationError;

/// A password policy.
///
/// Implementations are immutable after construction and hold no per-call
/// state, so one instance may be shared freely across threads.
pub trait ReglaValidacion: Send + Sync {
    /// Stable lowercase name of the policy (e.g. `"ganimedes"`).
    fn name(&self) -> &'static str;

    /// Length threshold the password must exceed.
    fn expected_length(&self) -> usize;

    /// Judge `password` against this policy.
    ///
    /// # Errors
    ///
    /// Returns the kind of the first rule, in policy order, that `password`
    /// violates. Never returns `Ok(false)`.
    fn validate(&self, password: &str) -> Result<bool, ValidationError>;
}

/// True iff `password` has strictly more than `expected_length` characters.
///
/// Characters are Unicode scalar values, not bytes.
#[must_use]
pub fn length_ok(password: &str, expected_length: usize) -> bool {
    password.chars().count() > expected_length
}

/// True iff `password` contains at least one uppercase letter.
#[must_use]
pub fn has_uppercase(password: &str) -> bool {
    password.chars().any(char::is_uppercase)
}

/// True iff `password` contains at least one lowercase letter.
#[must_use]
pub fn has_lowercase(password: &str) -> bool {
    password.chars().any(char::is_lowercase)
}

/// True iff `password` contains at least one decimal digit `0-9`.
///
/// Other numeric characters (fractions, Roman numerals) are not digits.
#[must_use]
pub fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}
