use std::sync::RwLock;

use secrecy::SecretString;
use types::{Credential, seed_credentials};

/// Where login records live. The mock below is the only implementation today;
/// a real store slots in behind this without touching the session contract.
pub trait CredentialRepository {
    fn find_by_email(&self, email: &str) -> Option<Credential>;

    /// Case-sensitive exact match, like the rest of the email handling.
    fn exists(&self, email: &str) -> bool;

    /// Overwrites the password for `email`. Returns false if no such record.
    fn update_password(&self, email: &str, new_password: SecretString) -> bool;
}

/// Fixed in-memory credential list. Password resets mutate it for the
/// lifetime of the process; nothing survives a restart.
pub struct MockCredentials {
    records: RwLock<Vec<Credential>>,
}

impl MockCredentials {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(seed_credentials()),
        }
    }

    pub fn with_records(records: Vec<Credential>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

impl Default for MockCredentials {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialRepository for MockCredentials {
    fn find_by_email(&self, email: &str) -> Option<Credential> {
        self.records
            .read()
            .expect("credential lock poisoned")
            .iter()
            .find(|c| c.email == email)
            .cloned()
    }

    fn exists(&self, email: &str) -> bool {
        self.records
            .read()
            .expect("credential lock poisoned")
            .iter()
            .any(|c| c.email == email)
    }

    fn update_password(&self, email: &str, new_password: SecretString) -> bool {
        let mut records = self.records.write().expect("credential lock poisoned");
        match records.iter_mut().find(|c| c.email == email) {
            Some(record) => {
                record.password = new_password;
                true
            }
            None => false,
        }
    }
}
