//! # parley-proto
//!
//! The wire grammar for the parley chat protocol: newline-delimited UTF-8
//! text, no length prefix, no framing beyond `\n`.
//!
//! This crate is pure data: parsing of client command lines, formatting of
//! server-to-client lines, and display-name validation. All I/O lives in the
//! daemon crate.
//!
//! ## Quick start
//!
//! ```rust
//! use parley_proto::{ClientCommand, chat_line};
//!
//! let cmd = ClientCommand::parse("rename|alice").unwrap();
//! assert_eq!(cmd, ClientCommand::Rename("alice".to_string()));
//!
//! let line = chat_line("127.0.0.1:9000", "alice", "hello");
//! assert_eq!(line, "[127.0.0.1:9000]alice: hello");
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

mod command;
mod line;
mod name;

pub use command::ClientCommand;
pub use line::{chat_line, joined_line, left_line, private_line, who_line};
pub use name::{MAX_NAME_LEN, NameError, validate_name};
