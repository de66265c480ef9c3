use crate::error::ValidationError;
use crate::rules::{ReglaValidacion, has_digit, length_ok};

/// Secret word the Calisto policy looks for, in lowercase.
pub const SECRET_WORD: &str = "calisto";

const SECRET_WORD_LEN: usize = SECRET_WORD.len();

/// Minimum number of uppercase letters a qualifying secret word must carry.
const MIN_UPPERCASE: usize = 2;

/// Secret-word policy.
///
/// Checks, in order: length > 6, a digit, and the word `calisto` written in
/// mixed case (see [`ReglaValidacionCalisto::contains_secret_word`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReglaValidacionCalisto {
    expected_length: usize,
}

impl ReglaValidacionCalisto {
    pub const EXPECTED_LENGTH: usize = 6;

    #[must_use]
    pub const fn new() -> Self {
        Self {
            expected_length: Self::EXPECTED_LENGTH,
        }
    }

    /// True iff some case-insensitive occurrence of [`SECRET_WORD`] has at
    /// least two uppercase letters but is not entirely uppercase.
    ///
    /// Every start position is tried, so each occurrence is judged on its own.
    #[must_use]
    pub fn contains_secret_word(password: &str) -> bool {
        let chars: Vec<char> = password.chars().collect();
        chars.windows(SECRET_WORD_LEN).any(|window| {
            let is_secret_word = window
                .iter()
                .zip(SECRET_WORD.chars())
                .all(|(c, expected)| c.to_lowercase().eq(std::iter::once(expected)));
            if !is_secret_word {
                return false;
            }
            let uppercase = window.iter().filter(|c| c.is_uppercase()).count();
            (MIN_UPPERCASE..SECRET_WORD_LEN).contains(&uppercase)
        })
    }
}

impl Default for ReglaValidacionCalisto {
    fn default() -> Self {
        Self::new()
    }
}

impl ReglaValidacion for ReglaValidacionCalisto {
    fn name(&self) -> &'static str {
        "calisto"
    }

    fn expected_length(&self) -> usize {
        self.expected_length
    }

    fn validate(&self, password: &str) -> Result<bool, ValidationError> {
        if !length_ok(password, self.expected_length) {
            return Err(ValidationError::InsufficientLength);
        }
        if !has_digit(password) {
            return Err(ValidationError::MissingDigit);
        }
        if !Self::contains_secret_word(password) {
            return Err(ValidationError::MissingSecretWord);
        }
        Ok(true)
    }
}
