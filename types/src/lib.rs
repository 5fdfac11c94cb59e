mod credential;
mod error;
mod session;

pub mod accounts;
pub mod content;
pub mod horoscopes;
pub mod kundli;
pub mod orders;
pub mod payments;

pub use credential::{Credential, SECURITY_QUESTION, seed_credentials};
pub use error::AuthError;
pub use session::{SESSION_STORAGE_KEY, Session, SessionCodecError, decode_session, encode_session};
