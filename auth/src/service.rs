use std::time::Duration;

use secrecy::ExposeSecret;
use types::{AuthError, Session};

use crate::latency;
use crate::{CredentialRepository, SessionStore};

#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Simulated round trip for login and registration.
    pub auth_latency: Duration,
    /// Password resets take a little longer.
    pub reset_latency: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            auth_latency: Duration::from_millis(1000),
            reset_latency: Duration::from_millis(1500),
        }
    }
}

impl AuthConfig {
    /// No artificial delay; for tests.
    pub fn instant() -> Self {
        Self {
            auth_latency: Duration::ZERO,
            reset_latency: Duration::ZERO,
        }
    }
}

/// Gates access to the admin panel. Two states: anonymous and authenticated.
/// Login and registration move to authenticated and persist the session in
/// the store; logout moves back and clears it. Password reset never touches
/// session state, only the stored credential.
pub struct AuthService<R, S> {
    repo: R,
    store: S,
    config: AuthConfig,
}

impl<R, S> AuthService<R, S>
where
    R: CredentialRepository,
    S: SessionStore,
{
    pub fn new(repo: R, store: S) -> Self {
        Self::with_config(repo, store, AuthConfig::default())
    }

    pub fn with_config(repo: R, store: S, config: AuthConfig) -> Self {
        Self {
            repo,
            store,
            config,
        }
    }

    /// The session persisted by a previous run, if any. Read once at startup.
    pub fn restore(&self) -> Option<Session> {
        self.store.load()
    }

    /// Exact-match scan over the credential list. The error never says which
    /// field was wrong.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        latency::simulate(self.config.auth_latency).await;

        let matched = self
            .repo
            .find_by_email(email)
            .filter(|c| c.password.expose_secret() == password);

        match matched {
            Some(credential) => {
                let session = credential.session();
                self.store.save(&session);
                tracing::info!(email, "login succeeded");
                Ok(session)
            }
            None => {
                tracing::warn!(email, "login failed");
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    /// Fabricates a non-admin session without adding a credential record, so
    /// a fresh registration cannot log back in with the chosen password.
    /// That matches the deployed mock; see `register_does_not_create_login_credential`.
    pub async fn register(
        &self,
        email: &str,
        _password: &str,
        username: &str,
    ) -> Result<Session, AuthError> {
        latency::simulate(self.config.auth_latency).await;

        if self.repo.exists(email) {
            tracing::warn!(email, "registration rejected, email taken");
            return Err(AuthError::DuplicateAccount);
        }

        let session = Session {
            username: username.to_owned(),
            email: email.to_owned(),
            is_admin: false,
        };
        self.store.save(&session);
        tracing::info!(email, "registered");
        Ok(session)
    }

    /// Overwrites the stored password once the security answer matches
    /// (case-insensitively). Strength checks are the caller's job.
    pub async fn reset_password(
        &self,
        email: &str,
        new_password: &str,
        security_answer: &str,
    ) -> Result<(), AuthError> {
        latency::simulate(self.config.reset_latency).await;

        let Some(credential) = self.repo.find_by_email(email) else {
            tracing::warn!(email, "password reset for unknown account");
            return Err(AuthError::UnknownAccount);
        };

        let expected = credential.security_answer.expose_secret().to_lowercase();
        if expected != security_answer.to_lowercase() {
            tracing::warn!(email, "password reset with wrong security answer");
            return Err(AuthError::WrongSecurityAnswer);
        }

        self.repo
            .update_password(email, new_password.to_owned().into());
        tracing::info!(email, "password reset");
        Ok(())
    }

    /// Clears the persisted session. Idempotent.
    pub fn logout(&self) {
        self.store.clear();
        tracing::info!("logged out");
    }
}

#[cfg(test)]
#[path = "service_test.rs"]
mod tests;
