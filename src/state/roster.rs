//! The session registry.

use crate::state::SessionHandle;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Name-keyed directory of every online session.
///
/// Invariant: keys are unique and always equal to the stored handle's
/// `name`. Rename moves an entry under a single write-lock hold, so no
/// reader ever observes the old and new names together, or neither.
#[derive(Debug, Default)]
pub struct Roster {
    sessions: RwLock<HashMap<String, SessionHandle>>,
}

impl Roster {
    /// Create an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a session under its name. Returns false (and changes nothing)
    /// if the name is already taken.
    pub fn register(&self, handle: SessionHandle) -> bool {
        let mut sessions = self.sessions.write();
        match sessions.entry(handle.name.clone()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(handle);
                true
            }
        }
    }

    /// Remove a session by name. No-op if absent.
    pub fn unregister(&self, name: &str) {
        self.sessions.write().remove(name);
    }

    /// Atomically move a session from `old` to `new`.
    ///
    /// Fails without mutation if `new` is already taken or `old` is not
    /// registered. The stored handle's `name` field is updated together with
    /// the key.
    pub fn rename(&self, old: &str, new: &str) -> bool {
        let mut sessions = self.sessions.write();
        if sessions.contains_key(new) {
            return false;
        }
        let Some(mut handle) = sessions.remove(old) else {
            return false;
        };
        handle.name = new.to_string();
        sessions.insert(new.to_string(), handle);
        true
    }

    /// Look up a single session by name.
    pub fn find(&self, name: &str) -> Option<SessionHandle> {
        self.sessions.read().get(name).cloned()
    }

    /// A point-in-time copy of every session, sorted by name.
    ///
    /// Sessions registered or removed after the snapshot is taken are not
    /// reflected in it.
    pub fn snapshot(&self) -> Vec<SessionHandle> {
        let mut list: Vec<SessionHandle> = {
            let sessions = self.sessions.read();
            sessions.values().cloned().collect()
        };
        list.sort_by(|a, b| a.name.cmp(&b.name));
        list
    }

    /// Number of registered sessions.
    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    /// True when no session is registered.
    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }
}
