use std::sync::RwLock;

use types::Session;

/// Where the (single) session is persisted. The browser build writes to local
/// storage; tests use [`MemoryStore`]. Implementations log their own failures
/// and degrade to "no session" rather than erroring, so the auth error
/// taxonomy stays purely about credentials.
pub trait SessionStore {
    /// Read the persisted session, if any. Called once at startup.
    fn load(&self) -> Option<Session>;

    fn save(&self, session: &Session);

    fn clear(&self);
}

/// In-memory store holding at most one session.
#[derive(Default)]
pub struct MemoryStore {
    slot: RwLock<Option<Session>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Option<Session> {
        self.slot.read().expect("session lock poisoned").clone()
    }

    fn save(&self, session: &Session) {
        *self.slot.write().expect("session lock poisoned") = Some(session.clone());
    }

    fn clear(&self) {
        *self.slot.write().expect("session lock poisoned") = None;
    }
}
