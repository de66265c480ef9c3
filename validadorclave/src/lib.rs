//! # validadorclave
//!
//! Password validation against pluggable, named policies.
//!
//! A policy is an ordered chain of structural checks (length, letter case,
//! digits, special characters, a secret word). Validation stops at the first
//! failing check and reports *which* rule failed as a [`ValidationError`];
//! success is always `Ok(true)`.
//!
//! ## Quick Start
//!
//! ```rust
//! use validadorclave::{
//!     ReglaValidacionCalisto, ReglaValidacionGanimedes, Validador, ValidationError,
//! };
//!
//! let validador = Validador::new(ReglaValidacionGanimedes::new());
//! assert_eq!(validador.es_valida("Passw0rd@"), Ok(true));
//! assert_eq!(
//!     validador.es_valida("passw0rd@"),
//!     Err(ValidationError::MissingUppercase)
//! );
//!
//! let validador = Validador::new(ReglaValidacionCalisto::new());
//! assert_eq!(validador.es_valida("abc1CaLISTOxyz"), Ok(true));
//! ```
//!
//! Policies can also be chosen at runtime:
//!
//! ```rust
//! use validadorclave::ValidatorConfig;
//!
//! let config = ValidatorConfig::from_json_str(r#"{"policy": "calisto"}"#).unwrap();
//! let report = config.build().validate_batch(["abc1CaLISTOxyz", "calisto"]);
//! assert_eq!(report.passed, 1);
//! assert_eq!(report.failed, 1);
//! ```

mod config;
mod error;
pub mod output;
mod report;
mod rules;
mod validador;

pub use config::{PolicyKind, ValidatorConfig};
pub use error::{ConfigError, ValidationError};
pub use report::{FailureEntry, ValidationReport};
pub use rules::{ReglaValidacion, ReglaValidacionCalisto, ReglaValidacionGanimedes};
pub use validador::Validador;

/// Alias for the general strong-password policy.
pub type PolicyGanimedes = ReglaValidacionGanimedes;

/// Alias for the secret-word policy.
pub type PolicyCalisto = ReglaValidacionCalisto;
