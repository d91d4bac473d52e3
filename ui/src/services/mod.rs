//! Infrastructure Services
//!
//! This module provides the client-side infrastructure for the registration
//! front-end:
//!
//! - **client**: HTTP client for the authentication backend
//!
//! The services are designed to be WASM-first, using browser-compatible
//! async code without Send/Sync bounds.

pub mod client;
