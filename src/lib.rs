//! parleyd - a line-oriented TCP chat session daemon.
//!
//! The daemon accepts many simultaneous TCP connections carrying
//! newline-delimited UTF-8 text, tracks each as a named session, fans
//! broadcast chat out to every connected session, answers rename and `who`
//! queries, routes private messages, and disconnects sessions that go idle.
//!
//! Architecture, leaf-first:
//! - [`state::Roster`]: the name-keyed session registry behind a
//!   read-write lock - the only shared mutable structure.
//! - [`hub`]: the single serialized broadcast consumer; its processing
//!   order is the global total order of broadcasts.
//! - [`network::Connection`]: one task per client combining socket,
//!   mailbox, idle watchdog, and command handling in a single
//!   `select!` loop.
//! - [`network::Gateway`]: the accept loop.
//! - [`switchboard::Switchboard`]: the shared-state aggregate handed to
//!   every task.

pub mod config;
pub mod error;
pub mod hub;
pub mod network;
pub mod state;
pub mod switchboard;
