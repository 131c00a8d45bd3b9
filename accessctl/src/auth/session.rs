//! Read-only view of the caller's session store.
//!
//! Session management itself (cookies, expiry, storage) belongs to the web framework. This
//! crate only needs to read the authenticated user's id from it, under [`SESSION_USER_KEY`].

use std::collections::HashMap;
use std::hash::BuildHasher;
use tracing::debug;

use crate::types::UserId;

/// Key under which the authenticated user's id is stored.
pub const SESSION_USER_KEY: &str = "usuario_id";

/// A mapping-like session store.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
}

impl<S: BuildHasher> SessionStore for HashMap<String, String, S> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

/// The authenticated user's id, if the session has one.
///
/// A value that isn't an integer id is treated as no session.
pub fn session_user_id<T: SessionStore + ?Sized>(store: &T) -> Option<UserId> {
    let raw = store.get(SESSION_USER_KEY)?;
    match raw.trim().parse::<UserId>() {
        Ok(id) => Some(id),
        Err(e) => {
            debug!(value = %raw, error = %e, "Ignoring malformed session user id");
            None
        }
    }
}
