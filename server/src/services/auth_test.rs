use super::*;
use crate::state::test_helpers::fixed_instant;

fn valid_registration() -> RegisterRequest {
    RegisterRequest {
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        password: "secret1".to_owned(),
        confirm_password: "secret1".to_owned(),
    }
}

fn login_req(email: &str, password: &str) -> LoginRequest {
    LoginRequest { email: email.to_owned(), password: password.to_owned() }
}

// =============================================================================
// validate_registration
// =============================================================================

#[test]
fn registration_valid_input_has_no_errors() {
    assert!(validate_registration(&valid_registration()).is_empty());
}

#[test]
fn registration_names_exactly_the_violated_fields() {
    let cases: Vec<(RegisterRequest, Vec<Field>)> = vec![
        (RegisterRequest { username: "al".to_owned(), ..valid_registration() }, vec![Field::Username]),
        (RegisterRequest { email: "not-an-email".to_owned(), ..valid_registration() }, vec![Field::Email]),
        (
            RegisterRequest { password: "12345".to_owned(), confirm_password: "12345".to_owned(), ..valid_registration() },
            vec![Field::Password],
        ),
        (RegisterRequest { confirm_password: "secret2".to_owned(), ..valid_registration() }, vec![Field::ConfirmPassword]),
        (
            RegisterRequest { password: "abc".to_owned(), ..valid_registration() },
            vec![Field::Password, Field::ConfirmPassword],
        ),
        (
            RegisterRequest {
                username: String::new(),
                email: String::new(),
                password: String::new(),
                confirm_password: String::new(),
            },
            vec![Field::Username, Field::Email, Field::Password],
        ),
    ];

    for (req, expected) in cases {
        assert_eq!(validate_registration(&req).fields(), expected, "for {req:?}");
    }
}

#[test]
fn registration_messages_match_rules() {
    let req = RegisterRequest {
        username: "x".to_owned(),
        email: "x@".to_owned(),
        password: "short".to_owned(),
        confirm_password: "other".to_owned(),
    };
    let errors = validate_registration(&req);
    assert_eq!(errors.get(Field::Username), Some(messages::USERNAME_TOO_SHORT));
    assert_eq!(errors.get(Field::Email), Some(messages::EMAIL_INVALID));
    assert_eq!(errors.get(Field::Password), Some(messages::PASSWORD_TOO_SHORT));
    assert_eq!(errors.get(Field::ConfirmPassword), Some(messages::PASSWORD_MISMATCH));
}

#[test]
fn registration_username_length_counts_characters() {
    let req = RegisterRequest { username: "ユーザ".to_owned(), ..valid_registration() };
    assert!(validate_registration(&req).is_empty());
}

// =============================================================================
// validate_login
// =============================================================================

#[test]
fn login_requires_both_fields() {
    let errors = validate_login(&login_req("", ""));
    assert_eq!(errors.fields(), vec![Field::Email, Field::Password]);
    assert_eq!(errors.get(Field::Password), Some(messages::PASSWORD_REQUIRED));

    assert_eq!(validate_login(&login_req("a@b.c", "")).fields(), vec![Field::Password]);
    assert!(validate_login(&login_req("anything", "x")).is_empty());
}

// =============================================================================
// register
// =============================================================================

#[test]
fn register_mints_user_and_token_from_clock() {
    let resp = register(&valid_registration(), fixed_instant()).unwrap();
    let millis = epoch_millis(fixed_instant());

    assert_eq!(resp.user.id, format!("mock-user-{millis}"));
    assert_eq!(resp.token, format!("mock-jwt-token-{millis}"));
    assert_eq!(resp.user.username, "alice");
    assert_eq!(resp.user.email, "alice@example.com");
    assert_eq!(resp.user.created_at, "2024-05-01T12:34:56.789Z");

    let profile = resp.user.profile.unwrap();
    assert_eq!(profile.first_name, "alice");
    assert_eq!(profile.last_name, "User");
    assert_eq!(profile.avatar, DEFAULT_AVATAR);
}

#[test]
fn register_is_not_idempotent_across_instants() {
    let later = fixed_instant() + time::Duration::milliseconds(5);
    let a = register(&valid_registration(), fixed_instant()).unwrap();
    let b = register(&valid_registration(), later).unwrap();
    assert_ne!(a.token, b.token);
    assert_ne!(a.user.id, b.user.id);
}

#[test]
fn register_rejects_sentinel_email_for_any_valid_shape() {
    for (username, password) in [("alice", "secret1"), ("bob", "another-pass"), ("ユーザー", "123456")] {
        let req = RegisterRequest {
            username: username.to_owned(),
            email: EXISTING_EMAIL.to_owned(),
            password: password.to_owned(),
            confirm_password: password.to_owned(),
        };
        assert!(matches!(register(&req, fixed_instant()), Err(AuthError::EmailTaken)));
    }
}

#[test]
fn register_validates_before_sentinel_check() {
    let req = RegisterRequest { username: "al".to_owned(), email: EXISTING_EMAIL.to_owned(), ..valid_registration() };
    let Err(AuthError::Validation(errors)) = register(&req, fixed_instant()) else {
        panic!("expected validation error");
    };
    assert_eq!(errors.fields(), vec![Field::Username]);
}

// =============================================================================
// login
// =============================================================================

#[test]
fn login_returns_fixed_user_and_token_for_each_account() {
    let table = AccountTable::fixture();
    for account in &table {
        let resp = login(&table, &login_req(&account.email, &account.password)).unwrap();
        assert_eq!(resp.user, account.user);
        assert_eq!(resp.token, account.token);
    }
}

#[test]
fn login_demo_account_example() {
    let table = AccountTable::fixture();
    let resp = login(&table, &login_req("demo@demo.com", "demo123")).unwrap();
    assert_eq!(resp.user.username, "demouser");
    assert_eq!(resp.token, "mock-jwt-token-demo-11111");
}

#[test]
fn login_mismatch_lists_all_accounts() {
    let table = AccountTable::fixture();
    let Err(AuthError::InvalidCredentials(hint)) = login(&table, &login_req("demo@demo.com", "wrong")) else {
        panic!("expected invalid credentials");
    };
    assert_eq!(hint.attempted_email, "demo@demo.com");
    assert_eq!(hint.error_type, "authentication_failed");
    assert_eq!(hint.test_accounts, table.hints());
}

#[test]
fn login_missing_fields_is_validation_not_lookup() {
    let table = AccountTable::fixture();
    assert!(matches!(login(&table, &login_req("", "demo123")), Err(AuthError::Validation(_))));
}
