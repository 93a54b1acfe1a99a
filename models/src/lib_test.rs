use super::*;
use serde_json::json;

use crate::validation::{is_valid_email, shorter_than};

fn sample_user() -> User {
    User {
        id: "mock-user-003".to_owned(),
        username: "demouser".to_owned(),
        email: "demo@demo.com".to_owned(),
        created_at: "2024-01-01T00:00:00.000Z".to_owned(),
        profile: Some(Profile {
            first_name: "Demo".to_owned(),
            last_name: "User".to_owned(),
            avatar: "https://example.com/demo-avatar.jpg".to_owned(),
        }),
    }
}

// =============================================================================
// email shape
// =============================================================================

#[test]
fn email_accepts_basic_addresses() {
    assert!(is_valid_email("demo@demo.com"));
    assert!(is_valid_email("a@b.c"));
    assert!(is_valid_email("first.last+tag@sub.example.co.jp"));
    assert!(is_valid_email("x@a..b"));
}

#[test]
fn email_rejects_bad_shapes() {
    assert!(!is_valid_email(""));
    assert!(!is_valid_email("plainaddress"));
    assert!(!is_valid_email("@example.com"));
    assert!(!is_valid_email("user@"));
    assert!(!is_valid_email("user@example"));
    assert!(!is_valid_email("user@.com"));
    assert!(!is_valid_email("user@example."));
    assert!(!is_valid_email("a@b@c.com"));
    assert!(!is_valid_email("us er@example.com"));
    assert!(!is_valid_email(" user@example.com"));
}

#[test]
fn shorter_than_counts_characters_not_bytes() {
    assert!(shorter_than("ab", 3));
    assert!(!shorter_than("abc", 3));
    assert!(!shorter_than("ユーザー", 3));
}

// =============================================================================
// wire shapes
// =============================================================================

#[test]
fn user_serializes_camel_case() {
    let value = serde_json::to_value(sample_user()).unwrap();
    assert_eq!(value["createdAt"], "2024-01-01T00:00:00.000Z");
    assert_eq!(value["profile"]["firstName"], "Demo");
    assert_eq!(value["profile"]["lastName"], "User");
}

#[test]
fn user_without_profile_decodes() {
    let user: User = serde_json::from_value(json!({
        "id": "u1",
        "username": "alice",
        "email": "alice@example.com",
        "createdAt": "2024-01-01T00:00:00.000Z"
    }))
    .unwrap();
    assert!(user.profile.is_none());
    let value = serde_json::to_value(&user).unwrap();
    assert!(value.get("profile").is_none());
}

#[test]
fn login_request_treats_missing_and_null_as_empty() {
    let req: LoginRequest = serde_json::from_value(json!({ "email": null })).unwrap();
    assert_eq!(req, LoginRequest::default());
}

#[test]
fn register_request_reads_confirm_password() {
    let req: RegisterRequest = serde_json::from_value(json!({
        "username": "alice",
        "email": "alice@example.com",
        "password": "secret1",
        "confirmPassword": "secret1"
    }))
    .unwrap();
    assert_eq!(req.confirm_password, "secret1");
}

#[test]
fn session_from_auth_response_keeps_token_and_user() {
    let session = Session::from(AuthResponse { user: sample_user(), token: "tok".to_owned() });
    assert_eq!(session.token, "tok");
    assert_eq!(session.user.username, "demouser");
}

// =============================================================================
// error envelope
// =============================================================================

#[test]
fn validation_error_serializes_code_details_and_message() {
    let mut fields = FieldErrors::new();
    fields.insert(Field::ConfirmPassword, "Passwords do not match.");
    fields.insert(Field::Email, "Enter a valid email address.");
    let envelope = ErrorEnvelope::new(ErrorDetails::ValidationError(fields), "bad input");

    let value = serde_json::to_value(&envelope).unwrap();
    assert_eq!(
        value,
        json!({
            "error": {
                "code": "VALIDATION_ERROR",
                "message": "bad input",
                "details": {
                    "email": "Enter a valid email address.",
                    "confirmPassword": "Passwords do not match."
                }
            }
        })
    );
}

#[test]
fn conflict_serializes_empty_details() {
    let envelope = ErrorEnvelope::new(ErrorDetails::UserAlreadyExists {}, "taken");
    let value = serde_json::to_value(&envelope).unwrap();
    assert_eq!(value["error"]["code"], "USER_ALREADY_EXISTS");
    assert_eq!(value["error"]["details"], json!({}));
}

#[test]
fn credential_hint_decodes_from_wire() {
    let envelope: ErrorEnvelope = serde_json::from_value(json!({
        "error": {
            "code": "INVALID_CREDENTIALS",
            "message": "nope",
            "details": {
                "attemptedEmail": "who@example.com",
                "errorType": "authentication_failed",
                "suggestion": "try again",
                "testAccounts": [
                    { "email": "demo@demo.com", "password": "demo123", "username": "demouser" }
                ]
            }
        }
    }))
    .unwrap();

    assert_eq!(envelope.error.message, "nope");
    let ErrorDetails::InvalidCredentials(hint) = envelope.error.details else {
        panic!("expected credential hint");
    };
    assert_eq!(hint.attempted_email, "who@example.com");
    assert_eq!(hint.test_accounts.len(), 1);
    assert_eq!(hint.test_accounts[0].username, "demouser");
}

#[test]
fn error_codes_match_tags() {
    let kinds = [
        ErrorDetails::ValidationError(FieldErrors::new()),
        ErrorDetails::UserAlreadyExists {},
        ErrorDetails::NotFound(RouteMiss { path: "/x".to_owned(), method: "GET".to_owned() }),
        ErrorDetails::InternalServerError {},
    ];
    for kind in kinds {
        let value = serde_json::to_value(ErrorEnvelope::new(kind.clone(), "m")).unwrap();
        assert_eq!(value["error"]["code"], kind.code());
    }
}

#[test]
fn field_errors_track_fields_in_order() {
    let mut fields = FieldErrors::new();
    fields.insert(Field::Password, "p");
    fields.insert(Field::Username, "u");
    assert_eq!(fields.fields(), vec![Field::Username, Field::Password]);
    fields.remove(Field::Username);
    assert!(!fields.contains(Field::Username));
    assert_eq!(fields.get(Field::Password), Some("p"));
    assert_eq!(fields.len(), 1);
    assert_eq!(Field::ConfirmPassword.as_str(), "confirmPassword");
}
