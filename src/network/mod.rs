//! Network layer: the accept loop and the per-connection session actors.

mod gateway;
mod session;

pub use gateway::Gateway;
pub use session::Connection;
