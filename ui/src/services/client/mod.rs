// Client-side functionality for the registration front-end
//
// This module provides the browser-based client for the authentication
// backend. The backend itself is an opaque collaborator: the only operation
// used here is account registration, and the only thing inspected on
// failure is the human-readable message text.

pub mod auth_client;
pub mod errors;
pub mod types;

// Re-export core types for easy access
pub use auth_client::AuthClient;
pub use errors::{ClientError, ClientResult};
pub use types::{ClientRegisterRequest, ClientRegisterResponse};
