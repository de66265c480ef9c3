use crate::error::ValidationError;
use crate::rules::{ReglaValidacion, has_digit, has_lowercase, has_uppercase, length_ok};

/// Characters accepted by the special-character rule.
pub const SPECIAL_CHARACTERS: [char; 5] = ['@', '_', '#', '%', '$'];

/// General strong-password policy.
///
/// Checks, in order: length > 8, an uppercase letter, a lowercase letter,
/// a digit, and one of [`SPECIAL_CHARACTERS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReglaValidacionGanimedes {
    expected_length: usize,
}

impl ReglaValidacionGanimedes {
    pub const EXPECTED_LENGTH: usize = 8;

    #[must_use]
    pub const fn new() -> Self {
        Self {
            expected_length: Self::EXPECTED_LENGTH,
        }
    }

    #[must_use]
    pub fn has_special_character(password: &str) -> bool {
        password.chars().any(|c| SPECIAL_CHARACTERS.contains(&c))
    }
}

impl Default for ReglaValidacionGanimedes {
    fn default() -> Self {
        Self::new()
    }
}

impl ReglaValidacion for ReglaValidacionGanimedes {
    fn name(&self) -> &'static str {
        "ganimedes"
    }

    fn expected_length(&self) -> usize {
        self.expected_length
    }

    fn validate(&self, password: &str) -> Result<bool, ValidationError> {
        if !length_ok(password, self.expected_length) {
            return Err(ValidationError::InsufficientLength);
        }
        if !has_uppercase(password) {
            return Err(ValidationError::MissingUppercase);
        }
        if !has_lowercase(password) {
            return Err(ValidationError::MissingLowercase);
        }
        if !has_digit(password) {
            return Err(ValidationError::MissingDigit);
        }
        if !Self::has_special_character(password) {
            return Err(ValidationError::MissingSpecialCharacter);
        }
        Ok(true)
    }
}
