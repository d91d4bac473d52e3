//! User Interface Components
//!
//! This module contains reusable Dioxus components for the registration UI:
//!
//! - **forms**: The registration form itself
//! - **inputs**: Labeled, validated input fields
//! - **feedback**: Inline per-field errors and the submission alert region
//!
//! All components are designed to work within the Dioxus framework and
//! target WASM deployment.

pub mod feedback;
pub mod forms;
pub mod inputs;

pub use feedback::{FieldErrorFeedback, SubmitErrorAlert};
pub use forms::RegistrationFormComponent;
pub use inputs::{InputType, ValidatedInput};
