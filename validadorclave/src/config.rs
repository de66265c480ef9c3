//! Policy selection config.
//!
//! Callers that pick the policy at runtime (from a settings file, an
//! environment value, etc.) describe it with a [`ValidatorConfig`] and turn it
//! into a ready [`Validador`]. Where that choice is stored is up to the caller.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::rules::{ReglaValidacion, ReglaValidacionCalisto, ReglaValidacionGanimedes};
use crate::validador::Validador;

/// Built-in password policies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
#[non_exhaustive]
pub enum PolicyKind {
    /// General strong-password policy (default).
    #[default]
    Ganimedes,
    /// Secret-word policy.
    Calisto,
}

impl PolicyKind {
    /// Stable lowercase name, matching [`ReglaValidacion::name`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ganimedes => "ganimedes",
            Self::Calisto => "calisto",
        }
    }

    /// Instantiate the policy.
    #[must_use]
    pub fn build(self) -> Box<dyn ReglaValidacion> {
        match self {
            Self::Ganimedes => Box::new(ReglaValidacionGanimedes::new()),
            Self::Calisto => Box::new(ReglaValidacionCalisto::new()),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PolicyKind {
    type Err = ConfigError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ganimedes" => Ok(Self::Ganimedes),
            "calisto" => Ok(Self::Calisto),
            _ => Err(ConfigError::UnknownPolicy(s.to_owned())),
        }
    }
}

impl TryFrom<String> for PolicyKind {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Which policy a [`Validador`] should enforce.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
#[non_exhaustive]
pub struct ValidatorConfig {
    /// Policy to enforce. Defaults to [`PolicyKind::Ganimedes`].
    pub policy: PolicyKind,
}

impl ValidatorConfig {
    #[must_use]
    pub const fn new(policy: PolicyKind) -> Self {
        Self { policy }
    }

    /// Parse a config from a JSON document such as `{"policy": "calisto"}`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if the document is malformed, carries
    /// unknown fields, or names an unknown policy.
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Parse a config from a YAML document such as `policy: calisto`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the document is malformed, carries
    /// unknown fields, or names an unknown policy.
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        serde_saphyr::from_str(content).map_err(|e| ConfigError::Yaml(e.to_string()))
    }

    /// Build a [`Validador`] enforcing the configured policy.
    #[must_use]
    pub fn build(&self) -> Validador {
        tracing::debug!(policy = self.policy.name(), "building password validator");
        Validador::from_kind(self.policy)
    }
}
