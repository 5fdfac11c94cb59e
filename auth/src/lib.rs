mod credentials;
pub mod latency;
mod service;
mod store;

pub use credentials::{CredentialRepository, MockCredentials};
pub use service::{AuthConfig, AuthService};
pub use store::{MemoryStore, SessionStore};
