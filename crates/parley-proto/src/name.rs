//! Display name validation.

use thiserror::Error;

/// Maximum display name length in characters.
pub const MAX_NAME_LEN: usize = 32;

/// Why a display name was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NameError {
    /// The name is the empty string.
    #[error("name is empty")]
    Empty,
    /// The name exceeds [`MAX_NAME_LEN`] characters.
    #[error("name is longer than {MAX_NAME_LEN} characters")]
    TooLong,
    /// The name contains a character the wire format cannot carry.
    #[error("name contains illegal character {0:?}")]
    IllegalChar(char),
}

/// Check that `name` can be used as a session's display name.
///
/// `|` would corrupt the `to|<name>|<text>` grammar, and whitespace or
/// control characters would make `who` output ambiguous, so all three are
/// rejected. Address-seeded names (`127.0.0.1:9000`) always pass.
pub fn validate_name(name: &str) -> Result<(), NameError> {
    if name.is_empty() {
        return Err(NameError::Empty);
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(NameError::TooLong);
    }
    for c in name.chars() {
        if c == '|' || c.is_whitespace() || c.is_control() {
            return Err(NameError::IllegalChar(c));
        }
    }
    Ok(())
}
