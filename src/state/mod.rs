//! Shared session state.
//!
//! The [`Roster`] is the only shared mutable structure in the daemon; every
//! other piece of per-session state is owned by its connection task and
//! reached exclusively through a [`SessionHandle`].

mod roster;
mod session;

pub use roster::Roster;
pub use session::{SessionHandle, SessionState};
