use serde::{Deserialize, Serialize};

/// Every way an auth operation can fail. All variants are terminal for the
/// triggering call; the `Display` text is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid stellar credentials")]
    InvalidCredentials,
    #[error("This cosmic email is already registered")]
    DuplicateAccount,
    #[error("No cosmic traveler found with this email")]
    UnknownAccount,
    #[error("Security answer is incorrect")]
    WrongSecurityAnswer,
}
