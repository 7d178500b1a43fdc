//! Error handling for parleyd.
//!
//! Registry operations report plain booleans (a duplicate name is a normal
//! outcome, not an error), so the only typed error surface is the session
//! transport.

use thiserror::Error;
use tokio_util::codec::LinesCodecError;

/// Errors that tear a client session down.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The socket failed, or the peer sent a line over the configured limit.
    #[error("transport error: {0}")]
    Transport(#[from] LinesCodecError),
}

impl SessionError {
    /// True when the peer exceeded the configured line length.
    ///
    /// Distinguished so the gateway can log it as a protocol violation
    /// rather than a socket failure.
    pub fn is_line_too_long(&self) -> bool {
        matches!(self, Self::Transport(LinesCodecError::MaxLineLengthExceeded))
    }
}
