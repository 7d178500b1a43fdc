//! Gateway - TCP listener that accepts incoming connections.
//!
//! The Gateway binds one socket and spawns a [`Connection`] task per
//! accepted client. Accept failures are transient: they are logged and the
//! loop keeps going.

use crate::network::Connection;
use crate::switchboard::Switchboard;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info, instrument, warn};

/// The Gateway accepts incoming TCP connections and spawns session tasks.
pub struct Gateway {
    listener: TcpListener,
    switchboard: Arc<Switchboard>,
}

impl Gateway {
    /// Bind the gateway to the given address.
    pub async fn bind(addr: SocketAddr, switchboard: Arc<Switchboard>) -> anyhow::Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        info!(addr = %listener.local_addr()?, "Listener bound");
        Ok(Self {
            listener,
            switchboard,
        })
    }

    /// The address the listener actually bound (relevant with port 0).
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Run the gateway, accepting connections forever.
    ///
    /// There is no shutdown protocol: dropping the task leaves in-flight
    /// sessions running until their own idle timeout or I/O error.
    #[instrument(skip(self), name = "gateway")]
    pub async fn run(self) -> anyhow::Result<()> {
        loop {
            match self.listener.accept().await {
                Ok((stream, addr)) => {
                    info!(%addr, "Connection accepted");
                    let switchboard = Arc::clone(&self.switchboard);
                    tokio::spawn(async move {
                        let connection = Connection::new(stream, addr, switchboard);
                        match connection.run().await {
                            Ok(()) => info!(%addr, "Connection closed"),
                            Err(e) if e.is_line_too_long() => {
                                warn!(%addr, "Input line too long, connection dropped");
                            }
                            Err(e) => error!(%addr, error = %e, "Connection error"),
                        }
                    });
                }
                Err(e) => {
                    error!(error = %e, "Failed to accept connection");
                }
            }
        }
    }
}
