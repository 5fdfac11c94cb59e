use secrecy::SecretString;

use crate::Session;

/// The one security question every account answers at signup.
pub const SECURITY_QUESTION: &str = "In which city were you born?";

/// A stored login record. Held for the lifetime of the process only; password
/// resets mutate the in-memory copy and do not survive a restart.
#[derive(Debug, Clone)]
pub struct Credential {
    pub email: String,
    pub password: SecretString,
    pub username: String,
    pub is_admin: bool,
    pub security_answer: SecretString,
}

impl Credential {
    /// The session for this record, with secret fields stripped.
    pub fn session(&self) -> Session {
        Session {
            username: self.username.clone(),
            email: self.email.clone(),
            is_admin: self.is_admin,
        }
    }
}

/// Demo accounts. One admin, one regular user.
pub fn seed_credentials() -> Vec<Credential> {
    vec![
        Credential {
            email: "admin@astral.com".into(),
            password: "admin123".to_owned().into(),
            username: "Cosmic Admin".into(),
            is_admin: true,
            security_answer: "new york".to_owned().into(),
        },
        Credential {
            email: "user@astral.com".into(),
            password: "user123".to_owned().into(),
            username: "Star Gazer".into(),
            is_admin: false,
            security_answer: "london".to_owned().into(),
        },
    ]
}
