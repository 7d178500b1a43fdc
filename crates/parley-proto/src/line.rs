//! Server-to-client line formatting.
//!
//! Every line a session can receive is built here, so the daemon and its
//! tests agree on the exact bytes on the wire. Lines are returned without
//! the trailing `\n`; the codec appends it.

/// A chat line tagged with the sender: `[<addr>]<name>: <text>`.
///
/// Used for public broadcasts and for the join/left announcements.
pub fn chat_line(addr: &str, name: &str, text: &str) -> String {
    format!("[{addr}]{name}: {text}")
}

/// One `who` result entry: `[<addr>]<name>: online`.
pub fn who_line(addr: &str, name: &str) -> String {
    chat_line(addr, name, "online")
}

/// The announcement broadcast when a session comes online.
pub fn joined_line(addr: &str, name: &str) -> String {
    chat_line(addr, name, "joined")
}

/// The announcement broadcast when a session leaves in an orderly way.
pub fn left_line(addr: &str, name: &str) -> String {
    chat_line(addr, name, "left")
}

/// A privately routed line: `[<addr>]<name> (private): <text>`.
pub fn private_line(addr: &str, name: &str, text: &str) -> String {
    format!("[{addr}]{name} (private): {text}")
}
