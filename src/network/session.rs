//! Connection - one chat session over one TCP socket.
//!
//! Each connection runs as a single task driving a `tokio::select!` loop
//! over three sources: inbound lines from the socket, outbound lines queued
//! in the session's mailbox, and the idle deadline. Keeping the watchdog in
//! the same loop as the reader gives the session exactly one teardown path;
//! no task is ever left blocked on a socket that something else closed.

use crate::error::SessionError;
use crate::state::{SessionHandle, SessionState};
use crate::switchboard::Switchboard;
use futures_util::{SinkExt, StreamExt};
use parley_proto::{
    ClientCommand, chat_line, joined_line, left_line, private_line, validate_name, who_line,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpStream;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::sync::mpsc;
use tokio::time::Instant;
use tokio_util::codec::{FramedRead, FramedWrite, LinesCodec, LinesCodecError};
use tracing::{info, instrument, warn};

/// Why the session loop ended in an orderly way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CloseReason {
    /// Clean end-of-stream from the client.
    Eof,
    /// No input within the idle window.
    IdleTimeout,
}

/// One cycle of the event loop, computed inside `select!` and acted on
/// afterwards so the branch arms only borrow disjoint fields.
enum Step {
    Inbound(Option<Result<String, LinesCodecError>>),
    Outbound(String),
    Idle,
    Noop,
}

/// A single client session: socket, mailbox, watchdog, command handling.
pub struct Connection {
    name: String,
    addr: String,
    state: SessionState,
    switchboard: Arc<Switchboard>,
    reader: FramedRead<OwnedReadHalf, LinesCodec>,
    writer: FramedWrite<OwnedWriteHalf, LinesCodec>,
    mailbox_rx: mpsc::Receiver<String>,
    handle: SessionHandle,
}

impl Connection {
    /// Wrap an accepted socket.
    ///
    /// The display name is seeded with the peer address, which stays unique
    /// for as long as the connection lives.
    pub fn new(stream: TcpStream, addr: SocketAddr, switchboard: Arc<Switchboard>) -> Self {
        let codec = LinesCodec::new_with_max_length(switchboard.settings.max_line_len);
        let (read_half, write_half) = stream.into_split();
        let reader = FramedRead::new(read_half, codec.clone());
        let writer = FramedWrite::new(write_half, codec);

        let addr = addr.to_string();
        let (mailbox_tx, mailbox_rx) = mpsc::channel(switchboard.settings.mailbox_capacity);
        let handle = SessionHandle::new(addr.clone(), addr.clone(), mailbox_tx);

        Self {
            name: addr.clone(),
            addr,
            state: SessionState::Connecting,
            switchboard,
            reader,
            writer,
            mailbox_rx,
            handle,
        }
    }

    /// Drive the session until the client leaves, fails, or idles out.
    #[instrument(skip(self), fields(addr = %self.addr), name = "session")]
    pub async fn run(mut self) -> Result<(), SessionError> {
        self.online().await;

        match self.event_loop().await {
            Ok(CloseReason::Eof) => {
                self.offline().await;
                Ok(())
            }
            Ok(CloseReason::IdleTimeout) => {
                // A deliberate disconnect, not an error; no "left"
                // announcement, matching the error teardown below.
                self.retire();
                Ok(())
            }
            Err(e) => {
                self.retire();
                Err(e)
            }
        }
    }

    /// Register and announce this session.
    ///
    /// The seed name is the peer address, unique among live connections, so
    /// registration cannot collide in practice; a collision means a stale
    /// entry and is logged without telling the client anything.
    async fn online(&mut self) {
        debug_assert_eq!(self.state, SessionState::Connecting);
        if !self.switchboard.roster.register(self.handle.clone()) {
            warn!(addr = %self.addr, "Seed name already registered, keeping session anyway");
        }
        self.state = SessionState::Online;
        info!(name = %self.name, online = self.switchboard.roster.len(), "Session online");
        self.switchboard
            .broadcast(joined_line(&self.addr, &self.name))
            .await;
    }

    /// Unregister and announce an orderly departure.
    async fn offline(&mut self) {
        debug_assert_eq!(self.state, SessionState::Online);
        self.switchboard.roster.unregister(&self.name);
        self.state = SessionState::Disconnected;
        info!(name = %self.name, "Session offline");
        self.switchboard
            .broadcast(left_line(&self.addr, &self.name))
            .await;
    }

    /// Unregister without an announcement (error or idle teardown).
    fn retire(&mut self) {
        self.switchboard.roster.unregister(&self.name);
        self.state = SessionState::Disconnected;
        info!(name = %self.name, "Session retired");
    }

    async fn event_loop(&mut self) -> Result<CloseReason, SessionError> {
        let idle_window = self.switchboard.settings.idle_window;
        let mut deadline = Instant::now() + idle_window;

        loop {
            let step = tokio::select! {
                inbound = self.reader.next() => Step::Inbound(inbound),
                outbound = self.mailbox_rx.recv() => match outbound {
                    Some(line) => Step::Outbound(line),
                    // Unreachable while `self.handle` holds a sender clone.
                    None => Step::Noop,
                },
                () = tokio::time::sleep_until(deadline) => Step::Idle,
            };

            match step {
                Step::Inbound(Some(Ok(line))) => {
                    // Any inbound line proves liveness, command or not.
                    deadline = Instant::now() + idle_window;
                    self.dispatch(&line).await?;
                }
                Step::Inbound(Some(Err(e))) => return Err(e.into()),
                Step::Inbound(None) => return Ok(CloseReason::Eof),
                Step::Outbound(line) => {
                    self.writer.send(line).await?;
                }
                Step::Idle => {
                    info!(
                        name = %self.name,
                        idle_secs = idle_window.as_secs(),
                        "Idle timeout"
                    );
                    // Best effort: the client may already be unreachable.
                    let _ = self
                        .writer
                        .send("you have been idle too long, disconnecting".to_string())
                        .await;
                    return Ok(CloseReason::IdleTimeout);
                }
                Step::Noop => {}
            }
        }
    }

    /// Handle one inbound line.
    async fn dispatch(&mut self, line: &str) -> Result<(), SessionError> {
        let Some(command) = ClientCommand::parse(line) else {
            return Ok(());
        };

        match command {
            ClientCommand::Who => self.handle_who().await,
            ClientCommand::Rename(new_name) => self.handle_rename(new_name).await,
            ClientCommand::Private { target, text } => self.handle_private(&target, &text).await,
            ClientCommand::Say(text) => {
                self.switchboard
                    .broadcast(chat_line(&self.addr, &self.name, &text))
                    .await;
                Ok(())
            }
        }
    }

    /// Reply with one line per registered session.
    async fn handle_who(&mut self) -> Result<(), SessionError> {
        let sessions = self.switchboard.roster.snapshot();
        for session in &sessions {
            self.send_direct(who_line(&session.addr, &session.name))
                .await?;
        }
        Ok(())
    }

    async fn handle_rename(&mut self, new_name: String) -> Result<(), SessionError> {
        if let Err(e) = validate_name(&new_name) {
            return self.send_direct(format!("invalid name: {e}")).await;
        }

        if self.switchboard.roster.rename(&self.name, &new_name) {
            info!(old = %self.name, new = %new_name, "Session renamed");
            self.name = new_name.clone();
            self.handle.name = new_name.clone();
            self.send_direct(format!("name updated to {new_name}")).await
        } else {
            self.send_direct("name already in use".to_string()).await
        }
    }

    /// Deliver text to a single named session, plus a confirmation to the
    /// sender. Nobody else sees the line.
    async fn handle_private(&mut self, target: &str, text: &str) -> Result<(), SessionError> {
        match self.switchboard.roster.find(target) {
            Some(peer) => {
                if peer.deliver(private_line(&self.addr, &self.name, text)) {
                    self.send_direct(format!("private to {target}: {text}")).await
                } else {
                    self.send_direct(format!("could not deliver to {target}"))
                        .await
                }
            }
            None => self.send_direct(format!("no such user: {target}")).await,
        }
    }

    /// Write a line straight to this session's socket, bypassing the
    /// mailbox. Used for query results, confirmations, and errors; ordering
    /// against interleaved broadcasts is not guaranteed.
    async fn send_direct(&mut self, line: String) -> Result<(), SessionError> {
        self.writer.send(line).await?;
        Ok(())
    }
}
