// Core types for the registration form - no dioxus imports needed here
use serde::{Deserialize, Serialize};

/// Candidate account data entered by the user.
///
/// Created empty when the form mounts, mutated field by field as the user
/// types, and discarded when the form unmounts. Never persisted.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct RegistrationInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Per-field validation messages shown inline next to the offending field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl FieldErrors {
    pub fn has_errors(&self) -> bool {
        self.username.is_some() || self.email.is_some() || self.password.is_some()
    }
}

// Action enum for state mutations
#[derive(Clone, Debug)]
pub enum RegistrationAction {
    // Field input actions
    SetUsername(String),
    SetEmail(String),
    SetPassword(String),

    // Validation actions
    SetFieldErrors(FieldErrors),
    ClearFieldErrors,

    // Submission actions
    SetSubmitting(bool),
    SetErrorMessage(Option<String>),
}

/// Consolidated state for the registration form.
///
/// `is_submitting` is true only between submit-initiation and the resolution
/// of the register call; `error_message` is cleared at the start of each
/// attempt and set only on failure.
#[derive(Clone, Default)]
pub struct RegistrationState {
    pub form: RegistrationInput,
    pub field_errors: FieldErrors,
    pub is_submitting: bool,
    pub error_message: Option<String>,
}

impl RegistrationState {
    /// In-place reduction to preserve Dioxus Signal reactivity
    pub fn reduce_in_place(&mut self, action: RegistrationAction) {
        match action {
            // Field input actions
            RegistrationAction::SetUsername(username) => {
                self.form.username = username;
            }
            RegistrationAction::SetEmail(email) => {
                self.form.email = email;
            }
            RegistrationAction::SetPassword(password) => {
                self.form.password = password;
            }

            // Validation actions
            RegistrationAction::SetFieldErrors(errors) => {
                self.field_errors = errors;
            }
            RegistrationAction::ClearFieldErrors => {
                self.field_errors = FieldErrors::default();
            }

            // Submission actions
            RegistrationAction::SetSubmitting(submitting) => {
                self.is_submitting = submitting;
            }
            RegistrationAction::SetErrorMessage(message) => {
                self.error_message = message;
            }
        }
    }
}
