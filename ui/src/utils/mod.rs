//! Utility Functions and Cross-Cutting Concerns
//!
//! - **console_macros**: WASM-compatible logging macros for browser console output
//! - **validation**: Styling helpers keyed off field validation status

pub mod console_macros;
pub mod validation;

pub use validation::*;
