//! Shared daemon state.

use crate::config::Config;
use crate::hub::Broadcast;
use crate::state::Roster;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::warn;

/// Runtime settings derived from [`Config`].
#[derive(Debug, Clone)]
pub struct Settings {
    /// How long a session may stay silent before it is disconnected.
    pub idle_window: Duration,
    /// Capacity of each session's outbound mailbox.
    pub mailbox_capacity: usize,
    /// Maximum accepted input line length in bytes.
    pub max_line_len: usize,
}

impl Settings {
    /// Extract the runtime settings from a loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            idle_window: config.idle_window(),
            mailbox_capacity: config.limits.mailbox_capacity,
            max_line_len: config.limits.max_line_len,
        }
    }
}

/// The state every task shares: the roster, the hub input, and the settings.
pub struct Switchboard {
    /// The session registry.
    pub roster: Arc<Roster>,
    /// Runtime settings.
    pub settings: Settings,
    hub_tx: mpsc::Sender<Broadcast>,
}

impl Switchboard {
    /// Build the switchboard and the receiving end of the hub queue.
    ///
    /// The caller spawns [`crate::hub::run`] with the returned receiver.
    pub fn new(settings: Settings, hub_capacity: usize) -> (Self, mpsc::Receiver<Broadcast>) {
        let (hub_tx, hub_rx) = mpsc::channel(hub_capacity);
        let switchboard = Self {
            roster: Arc::new(Roster::new()),
            settings,
            hub_tx,
        };
        (switchboard, hub_rx)
    }

    /// Queue a formatted line for fan-out to every registered session.
    pub async fn broadcast(&self, text: String) {
        if self.hub_tx.send(Broadcast { text }).await.is_err() {
            warn!("Broadcast hub is gone, dropping message");
        }
    }
}
