//! Client command line parsing.

/// A parsed client-to-server command line.
///
/// The grammar is deliberately permissive: anything that is not `who`, a
/// `rename|` line, or a well-formed `to|<name>|<text>` line is chat text to
/// be broadcast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientCommand {
    /// `who` - list every registered session.
    Who,
    /// `rename|<name>` - adopt a new display name. The name is carried
    /// verbatim; validation is the server's call.
    Rename(String),
    /// `to|<name>|<text>` - private message to a named session.
    Private {
        /// Recipient display name.
        target: String,
        /// Message body.
        text: String,
    },
    /// Any other non-empty line - public broadcast.
    Say(String),
}

impl ClientCommand {
    /// Parse one inbound line. Returns `None` for an empty line.
    ///
    /// A trailing `\r` is stripped first so that clients sending `\r\n`
    /// (telnet, Windows) parse identically.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.is_empty() {
            return None;
        }

        if line == "who" {
            return Some(Self::Who);
        }

        if let Some(rest) = line.strip_prefix("rename|") {
            return Some(Self::Rename(rest.to_string()));
        }

        if let Some(rest) = line.strip_prefix("to|") {
            // Only a well-formed `to|name|text` routes privately; anything
            // else falls through to the broadcast rule below.
            if let Some((target, text)) = rest.split_once('|') {
                if !target.is_empty() && !text.is_empty() {
                    return Some(Self::Private {
                        target: target.to_string(),
                        text: text.to_string(),
                    });
                }
            }
        }

        Some(Self::Say(line.to_string()))
    }
}
