#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;

#[test]
fn test_register_then_login() {
    let mut registry = Registry::new();
    registry.register("ana", "Secret1", dec!(100)).unwrap();

    assert_eq!(registry.login("ana", "Secret1"), LoginOutcome::Success(0));
    let user = registry.user(0).unwrap();
    assert_eq!(user.username, "ana");
    assert_eq!(user.budget, dec!(100));
}

#[test]
fn test_duplicate_registration_leaves_first_account_intact() {
    let mut registry = Registry::new();
    registry.register("ana", "first", dec!(100)).unwrap();

    let second = registry.register("ana", "second", dec!(999));
    assert_eq!(second, Err(TrackerError::DuplicateUsername));

    let user = registry.user(0).unwrap();
    assert_eq!(user.password, "first");
    assert_eq!(user.budget, dec!(100));
    assert!(registry.user(1).is_none());
}

#[test]
fn test_login_wrong_password() {
    let mut registry = Registry::new();
    registry.register("ana", "Secret1", dec!(100)).unwrap();
    assert_eq!(
        registry.login("ana", "secret1"),
        LoginOutcome::WrongPassword
    );
}

#[test]
fn test_login_unknown_user() {
    let registry = Registry::new();
    assert_eq!(registry.login("ghost", "pw"), LoginOutcome::UnknownUser);
}

#[test]
fn test_register_rejects_bad_credentials() {
    let mut registry = Registry::new();
    assert!(matches!(
        registry.register("an a", "pw", dec!(10)),
        Err(TrackerError::InvalidUsername(_))
    ));
    assert_eq!(
        registry.register("ana", "p w", dec!(10)),
        Err(TrackerError::InvalidPassword)
    );
    assert_eq!(
        registry.register("ana", "pw", dec!(-1)),
        Err(TrackerError::NegativeBudget)
    );
    // None of the rejects claimed the name.
    assert!(!registry.is_taken("ana"));
    assert!(registry.register("ana", "pw", dec!(10)).is_ok());
}

#[test]
fn test_usernames_are_case_sensitive() {
    let mut registry = Registry::new();
    registry.register("ana", "pw", dec!(10)).unwrap();
    assert!(registry.register("Ana", "pw", dec!(10)).is_ok());
    assert_eq!(registry.login("Ana", "pw"), LoginOutcome::Success(1));
}
