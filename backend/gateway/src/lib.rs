//! WildLens Gateway HTTP API Server
//!
//! Accepts a multipart image upload, forwards it to the configured vision
//! provider, and returns the typed analysis result.

pub mod analyze_api;
pub mod server;

pub use server::{start_server, GatewayState};
