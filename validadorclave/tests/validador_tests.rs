//! Integration tests for `validadorclave::Validador`.

use validadorclave::{
    PolicyCalisto, PolicyGanimedes, PolicyKind, ReglaValidacion, Validador, ValidationError,
    ValidatorConfig,
};

fn ganimedes() -> Validador {
    Validador::new(PolicyGanimedes::new())
}

fn calisto() -> Validador {
    Validador::new(PolicyCalisto::new())
}

#[test]
fn test_ganimedes_accepts_strong_password() {
    assert_eq!(ganimedes().es_valida("Passw0rd@"), Ok(true));
}

#[test]
fn test_ganimedes_length_nine_without_uppercase() {
    let result = ganimedes().es_valida("passw0rd@");
    assert_eq!(result, Err(ValidationError::MissingUppercase));
}

#[test]
fn test_short_passwords_always_report_length() {
    let cases = [
        (ganimedes(), ["", "P@0a", "Pass0rd@", "AAAAAAAA"]),
        (calisto(), ["", "1", "CaLis1", "CALIST"]),
    ];
    for (validador, passwords) in &cases {
        for password in passwords {
            assert_eq!(
                validador.es_valida(password),
                Err(ValidationError::InsufficientLength),
                "policy {} password {password:?}",
                validador.policy_name()
            );
        }
    }
}

#[test]
fn test_ganimedes_earliest_violation_reported() {
    // Missing uppercase and digit: uppercase is checked first
    assert_eq!(
        ganimedes().es_valida("password@@"),
        Err(ValidationError::MissingUppercase)
    );
    // Missing digit and special: digit is checked first
    assert_eq!(
        ganimedes().es_valida("Passwordxx"),
        Err(ValidationError::MissingDigit)
    );
}

#[test]
fn test_calisto_scenarios() {
    assert_eq!(
        calisto().es_valida("Cal1stoXY"),
        Err(ValidationError::MissingSecretWord)
    );
    assert_eq!(calisto().es_valida("abc1CaLISTOxyz"), Ok(true));
    assert_eq!(
        calisto().es_valida("num1CALISTO"),
        Err(ValidationError::MissingSecretWord)
    );
}

#[test]
fn test_calisto_ignores_uppercase_and_special_rules() {
    // No special character and no lowercase outside the secret word still passes
    assert_eq!(calisto().es_valida("99CAListo"), Ok(true));
}

#[test]
fn test_all_primitives_satisfied_means_valid() {
    let ganimedes_ok = ["Abcdefg1@", "zZ9_zzzzzz", "1aA#aaaaaaaa", "$$$$$$$aA0"];
    for password in ganimedes_ok {
        assert_eq!(ganimedes().es_valida(password), Ok(true), "{password}");
    }

    let calisto_ok = ["0CAlisto", "calISTO7", "x9cAlIsTo", "CALISTO calistO 1 caliSTo"];
    for password in calisto_ok {
        assert_eq!(calisto().es_valida(password), Ok(true), "{password}");
    }
}

#[test]
fn test_validation_never_returns_false() {
    let samples = ["", "a", "Passw0rd@", "passw0rd@", "abc1CaLISTOxyz", "num1CALISTO"];
    for kind in [PolicyKind::Ganimedes, PolicyKind::Calisto] {
        let validador = Validador::from_kind(kind);
        for password in samples {
            assert_ne!(validador.es_valida(password), Ok(false));
        }
    }
}

#[test]
fn test_policy_thresholds() {
    assert_eq!(PolicyGanimedes::new().expected_length(), 8);
    assert_eq!(PolicyCalisto::new().expected_length(), 6);
}

#[test]
fn test_validador_shared_across_threads() {
    let validador = std::sync::Arc::new(calisto());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let validador = std::sync::Arc::clone(&validador);
            std::thread::spawn(move || validador.es_valida(&format!("{i}xCaLiStO")))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), Ok(true));
    }
}

#[test]
fn test_config_driven_batch() {
    let config = ValidatorConfig::from_yaml_str("policy: ganimedes\n").unwrap();
    let report = config
        .build()
        .validate_batch(["Passw0rd@", "Passw0rdx", "PASSW0RD@", "short"]);

    assert_eq!(report.checked, 4);
    assert_eq!(report.passed, 1);
    assert_eq!(report.failed, 3);
    assert!(!report.ok);
    let kinds: Vec<ValidationError> = report.failures.iter().map(|f| f.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ValidationError::MissingSpecialCharacter,
            ValidationError::MissingLowercase,
            ValidationError::InsufficientLength,
        ]
    );
}
