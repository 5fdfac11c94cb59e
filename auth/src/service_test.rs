use super::*;
use crate::{MemoryStore, MockCredentials};

fn service() -> AuthService<MockCredentials, MemoryStore> {
    AuthService::with_config(
        MockCredentials::new(),
        MemoryStore::new(),
        AuthConfig::instant(),
    )
}

// =============================================================================
// login
// =============================================================================

#[tokio::test]
async fn login_with_valid_credentials_persists_session() {
    let service = service();
    assert!(service.restore().is_none());

    let session = service.login("admin@astral.com", "admin123").await.unwrap();
    assert_eq!(session.username, "Cosmic Admin");
    assert!(session.is_admin);

    // Session is the stripped shape by construction; it can only carry
    // username, email, and the admin flag.
    assert_eq!(service.restore(), Some(session));
}

#[tokio::test]
async fn login_with_wrong_password_is_invalid_credentials() {
    let service = service();
    let err = service
        .login("admin@astral.com", "wrong")
        .await
        .unwrap_err();
    assert_eq!(err, types::AuthError::InvalidCredentials);
    assert!(service.restore().is_none());
}

#[tokio::test]
async fn login_with_unknown_email_is_invalid_credentials() {
    let service = service();
    let err = service.login("ghost@astral.com", "admin123").await.unwrap_err();
    assert_eq!(err, types::AuthError::InvalidCredentials);
    assert!(service.restore().is_none());
}

#[tokio::test]
async fn login_email_is_case_sensitive() {
    let service = service();
    assert!(service.login("ADMIN@astral.com", "admin123").await.is_err());
}

// =============================================================================
// register
// =============================================================================

#[tokio::test]
async fn register_with_taken_email_is_duplicate_account() {
    let service = service();
    for password in ["user123", "something-else"] {
        let err = service
            .register("user@astral.com", password, "Another Gazer")
            .await
            .unwrap_err();
        assert_eq!(err, types::AuthError::DuplicateAccount);
    }
    assert!(service.restore().is_none());
}

#[tokio::test]
async fn register_creates_non_admin_session() {
    let service = service();
    let session = service
        .register("new@astral.com", "hunter22", "Newcomer")
        .await
        .unwrap();
    assert!(!session.is_admin);
    assert_eq!(session.email, "new@astral.com");
    assert_eq!(service.restore(), Some(session));
}

/// Pins the deployed mock's behavior: registration never inserts a credential
/// record, so the freshly chosen password cannot be used to log back in.
#[tokio::test]
async fn register_does_not_create_login_credential() {
    let service = service();
    service
        .register("new@astral.com", "hunter22", "Newcomer")
        .await
        .unwrap();
    service.logout();

    let err = service.login("new@astral.com", "hunter22").await.unwrap_err();
    assert_eq!(err, types::AuthError::InvalidCredentials);
}

// =============================================================================
// reset_password
// =============================================================================

#[tokio::test]
async fn reset_with_unknown_email_is_unknown_account() {
    let service = service();
    let err = service
        .reset_password("ghost@astral.com", "newpass1", "new york")
        .await
        .unwrap_err();
    assert_eq!(err, types::AuthError::UnknownAccount);
}

#[tokio::test]
async fn reset_with_wrong_answer_leaves_password_untouched() {
    let service = service();
    let err = service
        .reset_password("admin@astral.com", "newpass1", "Chicago")
        .await
        .unwrap_err();
    assert_eq!(err, types::AuthError::WrongSecurityAnswer);

    // Old password still works.
    assert!(service.login("admin@astral.com", "admin123").await.is_ok());
}

#[tokio::test]
async fn reset_answer_is_case_insensitive() {
    let service = service();
    service
        .reset_password("admin@astral.com", "newpass1", "NEW YORK")
        .await
        .unwrap();

    assert!(service.login("admin@astral.com", "newpass1").await.is_ok());
}

#[tokio::test]
async fn reset_swaps_which_password_logs_in() {
    let service = service();
    service
        .reset_password("user@astral.com", "changed1", "london")
        .await
        .unwrap();

    let err = service.login("user@astral.com", "user123").await.unwrap_err();
    assert_eq!(err, types::AuthError::InvalidCredentials);
    assert!(service.login("user@astral.com", "changed1").await.is_ok());
}

#[tokio::test]
async fn reset_does_not_touch_session_state() {
    let service = service();
    service.login("user@astral.com", "user123").await.unwrap();
    service
        .reset_password("user@astral.com", "changed1", "london")
        .await
        .unwrap();

    // Still the session from the earlier login.
    assert_eq!(service.restore().unwrap().email, "user@astral.com");
}

// =============================================================================
// logout
// =============================================================================

#[tokio::test]
async fn logout_is_idempotent() {
    let service = service();
    service.login("user@astral.com", "user123").await.unwrap();

    service.logout();
    assert!(service.restore().is_none());
    service.logout();
    assert!(service.restore().is_none());
}
