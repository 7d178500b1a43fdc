//! Integration test common infrastructure.
//!
//! Provides utilities for starting in-process daemons and line-oriented
//! test clients.

pub mod client;
pub mod server;

#[allow(unused_imports)]
pub use client::TestClient;
#[allow(unused_imports)]
pub use server::TestServer;
