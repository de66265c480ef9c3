//! Strategy context that holds one policy and delegates to it.

use std::fmt;

use crate::config::PolicyKind;
use crate::error::ValidationError;
use crate::report::{FailureEntry, ValidationReport};
use crate::rules::ReglaValidacion;

/// Single entry point for password validation, independent of which policy
/// is active.
pub struct Validador {
    regla: Box<dyn ReglaValidacion>,
}

impl Validador {
    #[must_use]
    pub fn new<R: ReglaValidacion + 'static>(regla: R) -> Self {
        Self {
            regla: Box::new(regla),
        }
    }

    /// Build a validador around one of the built-in policies.
    #[must_use]
    pub fn from_kind(kind: PolicyKind) -> Self {
        Self { regla: kind.build() }
    }

    /// Validate `clave` with the held policy.
    ///
    /// # Errors
    ///
    /// Returns the policy's failure kind unchanged.
    pub fn es_valida(&self, clave: &str) -> Result<bool, ValidationError> {
        let result = self.regla.validate(clave);
        match &result {
            Ok(_) => tracing::trace!(policy = self.regla.name(), "password accepted"),
            Err(err) => tracing::debug!(
                policy = self.regla.name(),
                code = err.code(),
                "password rejected"
            ),
        }
        result
    }

    /// Name of the held policy.
    #[must_use]
    pub fn policy_name(&self) -> &'static str {
        self.regla.name()
    }

    /// Replace the held policy.
    pub fn set_regla<R: ReglaValidacion + 'static>(&mut self, regla: R) {
        tracing::debug!(
            from = self.regla.name(),
            to = regla.name(),
            "switching password policy"
        );
        self.regla = Box::new(regla);
    }

    /// Validate every candidate in order and summarize the outcome.
    ///
    /// Each candidate is judged independently; a rejection never stops the
    /// batch.
    #[must_use]
    pub fn validate_batch<'a, I>(&self, claves: I) -> ValidationReport
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut checked: usize = 0;
        let mut failures = Vec::new();

        for (index, clave) in claves.into_iter().enumerate() {
            checked += 1;
            if let Err(kind) = self.es_valida(clave) {
                failures.push(FailureEntry {
                    index,
                    kind,
                    message: kind.to_string(),
                });
            }
        }

        let failed = failures.len();
        ValidationReport {
            policy: self.policy_name().to_owned(),
            checked,
            passed: checked - failed,
            failed,
            ok: failures.is_empty(),
            failures,
        }
    }
}

impl From<PolicyKind> for Validador {
    fn from(kind: PolicyKind) -> Self {
        Self::from_kind(kind)
    }
}

impl fmt::Debug for Validador {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validador")
            .field("policy", &self.regla.name())
            .field("expected_length", &self.regla.expected_length())
            .finish()
    }
}
