//! Broadcast fan-out.
//!
//! All public chat flows through a single hub task, the one serialized
//! consumer of broadcast intents. Its processing order is the global total
//! order of broadcasts: no two broadcasts ever interleave per recipient.

use crate::state::Roster;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::debug;

/// A fully formatted line bound for every registered session.
///
/// The sender tag is applied before the message enters the hub, so the hub
/// never needs to know who sent it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Broadcast {
    /// The line to deliver, without the trailing newline.
    pub text: String,
}

/// Run the hub until its input queue closes.
///
/// For each message the roster is snapshotted under the read lock, the lock
/// is released, and delivery runs against the copy. A session whose mailbox
/// is full misses the line instead of stalling every other session; each
/// mailbox is drained independently by its own connection task.
pub async fn run(roster: Arc<Roster>, mut rx: mpsc::Receiver<Broadcast>) {
    while let Some(broadcast) = rx.recv().await {
        let sessions = roster.snapshot();
        debug!(recipients = sessions.len(), "Fanning out broadcast");
        for session in &sessions {
            session.deliver(broadcast.text.clone());
        }
    }
    debug!("Broadcast hub input closed");
}
