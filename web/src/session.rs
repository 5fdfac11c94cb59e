use std::rc::Rc;

use auth::{AuthService, MockCredentials, SessionStore};
use dioxus::prelude::*;
use types::{AuthError, SESSION_STORAGE_KEY, Session, decode_session, encode_session};

use crate::toast::Toasts;

/// Session store backed by the browser's local storage. Failures are logged
/// and treated as "no session"; a corrupt stored value is discarded.
pub struct LocalStorage;

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl SessionStore for LocalStorage {
    fn load(&self) -> Option<Session> {
        let raw = storage()?.get_item(SESSION_STORAGE_KEY).ok().flatten()?;
        match decode_session(&raw) {
            Ok(session) => Some(session),
            Err(err) => {
                tracing::warn!(%err, "discarding corrupt stored session");
                self.clear();
                None
            }
        }
    }

    fn save(&self, session: &Session) {
        let encoded = match encode_session(session) {
            Ok(encoded) => encoded,
            Err(err) => {
                tracing::warn!(%err, "failed to encode session");
                return;
            }
        };
        let Some(storage) = storage() else { return };
        if let Err(err) = storage.set_item(SESSION_STORAGE_KEY, &encoded) {
            tracing::warn!(?err, "failed to persist session");
        }
    }

    fn clear(&self) {
        if let Some(storage) = storage() {
            if let Err(err) = storage.remove_item(SESSION_STORAGE_KEY) {
                tracing::warn!(?err, "failed to clear stored session");
            }
        }
    }
}

/// Auth context: the current session plus the operations that change it.
/// Failures surface as error toasts here; callers only get a `Result` back so
/// they can reset their busy flags without re-reporting.
#[derive(Clone)]
pub struct Auth {
    session: Signal<Option<Session>>,
    service: Rc<AuthService<MockCredentials, LocalStorage>>,
    toasts: Toasts,
}

pub fn use_auth() -> Auth {
    use_context::<Auth>()
}

impl Auth {
    pub fn new(toasts: Toasts) -> Self {
        let service = Rc::new(AuthService::new(MockCredentials::new(), LocalStorage));
        // One synchronous read at startup; absence means anonymous.
        let session = Signal::new(service.restore());
        Self {
            session,
            service,
            toasts,
        }
    }

    pub fn current(&self) -> Option<Session> {
        self.session.read().clone()
    }

    pub async fn login(&mut self, email: &str, password: &str) -> Result<(), AuthError> {
        match self.service.login(email, password).await {
            Ok(session) => {
                self.session.set(Some(session));
                self.toasts.success("Welcome back to the cosmos!");
                Ok(())
            }
            Err(err) => {
                self.toasts.error(err.to_string());
                Err(err)
            }
        }
    }

    pub async fn register(
        &mut self,
        email: &str,
        password: &str,
        username: &str,
    ) -> Result<(), AuthError> {
        match self.service.register(email, password, username).await {
            Ok(session) => {
                self.session.set(Some(session));
                self.toasts.success("Welcome to the celestial journey!");
                Ok(())
            }
            Err(err) => {
                self.toasts.error(err.to_string());
                Err(err)
            }
        }
    }

    pub async fn reset_password(
        &mut self,
        email: &str,
        new_password: &str,
        security_answer: &str,
    ) -> Result<(), AuthError> {
        match self
            .service
            .reset_password(email, new_password, security_answer)
            .await
        {
            Ok(()) => {
                self.toasts.success("Your cosmic password has been reset");
                Ok(())
            }
            Err(err) => {
                self.toasts.error(err.to_string());
                Err(err)
            }
        }
    }

    pub fn logout(&mut self) {
        self.service.logout();
        self.session.set(None);
        self.toasts.success("You have returned to the cosmos");
    }
}
