//! Test server management.
//!
//! Starts the daemon in-process on an ephemeral port: hub task plus
//! gateway task, sharing one switchboard.

use parleyd::hub;
use parleyd::network::Gateway;
use parleyd::switchboard::{Settings, Switchboard};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// A daemon running inside the test process.
pub struct TestServer {
    addr: SocketAddr,
}

impl TestServer {
    /// Start a daemon with the given idle window.
    pub async fn spawn(idle_window: Duration) -> anyhow::Result<Self> {
        let settings = Settings {
            idle_window,
            mailbox_capacity: 64,
            max_line_len: 512,
        };
        let (switchboard, hub_rx) = Switchboard::new(settings, 64);
        let switchboard = Arc::new(switchboard);

        tokio::spawn(hub::run(Arc::clone(&switchboard.roster), hub_rx));

        let gateway = Gateway::bind("127.0.0.1:0".parse()?, Arc::clone(&switchboard)).await?;
        let addr = gateway.local_addr()?;
        tokio::spawn(async move {
            let _ = gateway.run().await;
        });

        Ok(Self { addr })
    }

    /// Start a daemon with an idle window far beyond any test's runtime.
    pub async fn spawn_default() -> anyhow::Result<Self> {
        Self::spawn(Duration::from_secs(60)).await
    }

    /// The address the daemon is listening on.
    #[allow(dead_code)]
    pub fn address(&self) -> SocketAddr {
        self.addr
    }

    /// Open a new client connection to this daemon.
    pub async fn connect(&self) -> anyhow::Result<super::client::TestClient> {
        super::client::TestClient::connect(self.addr).await
    }
}
