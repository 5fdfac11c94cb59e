use serde::{Deserialize, Serialize};

/// Local-storage key the serialized session lives under. Absence of the key
/// means anonymous at startup.
pub const SESSION_STORAGE_KEY: &str = "astralUser";

/// The authenticated identity. Built from a [`crate::Credential`] with the
/// password and security answer stripped; this is the only shape that is ever
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub username: String,
    pub email: String,
    pub is_admin: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionCodecError {
    #[error("failed to decode base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("invalid UTF-8 in session: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("failed to serialize or parse session JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn encode_session(session: &Session) -> Result<String, SessionCodecError> {
    let json = serde_json::to_string(session)?;
    use base64::Engine;
    Ok(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(json.as_bytes()))
}

pub fn decode_session(encoded: &str) -> Result<Session, SessionCodecError> {
    use base64::Engine;
    let bytes = base64::engine::general_purpose::URL_SAFE_NO_PAD.decode(encoded)?;
    let json = String::from_utf8(bytes)?;
    Ok(serde_json::from_str(&json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_codec_round_trips() {
        let session = Session {
            username: "Cosmic Admin".into(),
            email: "admin@astral.com".into(),
            is_admin: true,
        };
        let encoded = encode_session(&session).unwrap();
        assert_eq!(decode_session(&encoded).unwrap(), session);
    }

    #[test]
    fn garbage_does_not_decode() {
        assert!(decode_session("not!base64!").is_err());
        // Valid base64, but not a session object.
        use base64::Engine;
        let encoded = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(b"{\"nope\":1}");
        assert!(decode_session(&encoded).is_err());
    }
}
