//! Session handle and lifecycle types.

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tracing::{debug, warn};

/// The roster's view of one connected session.
///
/// The owning connection task holds the socket and the mailbox receiver;
/// everyone else sees only this handle and may touch the session solely by
/// queueing lines into its mailbox.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    /// Current display name. Always equal to the roster key.
    pub name: String,
    /// Remote address string, fixed for the life of the connection.
    pub addr: String,
    /// Sender half of the session's mailbox.
    pub mailbox: mpsc::Sender<String>,
}

impl SessionHandle {
    /// Create a handle for a freshly accepted session.
    pub fn new(name: String, addr: String, mailbox: mpsc::Sender<String>) -> Self {
        Self {
            name,
            addr,
            mailbox,
        }
    }

    /// Queue a line for delivery to this session.
    ///
    /// Never blocks: a full mailbox means the session's writer has fallen
    /// behind, and the line is dropped for this recipient alone rather than
    /// stalling the caller. Returns whether the line was queued.
    pub fn deliver(&self, line: String) -> bool {
        match self.mailbox.try_send(line) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => {
                warn!(name = %self.name, "Mailbox full, dropping line");
                false
            }
            Err(TrySendError::Closed(_)) => {
                // Session is tearing down; its roster entry goes away shortly.
                debug!(name = %self.name, "Mailbox closed, dropping line");
                false
            }
        }
    }
}

/// Connection lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Socket accepted, not yet registered.
    Connecting,
    /// Registered in the roster and receiving broadcasts.
    Online,
    /// Terminal: removed from the roster, socket closing.
    Disconnected,
}
