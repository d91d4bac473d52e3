//! Inline validation feedback and the submission alert region

use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct FieldErrorFeedbackProps {
    pub error: Option<String>,
}

/// Per-field message rendered directly under the offending input.
#[component]
pub fn FieldErrorFeedback(props: FieldErrorFeedbackProps) -> Element {
    match props.error {
        Some(message) => rsx! {
            div {
                class: "validation-feedback invalid",
                "{message}"
            }
        },
        None => rsx! { div {} },
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct SubmitErrorAlertProps {
    pub message: Option<String>,
}

/// Alert region for the last submission failure. The text is the backend's
/// message, shown verbatim.
#[component]
pub fn SubmitErrorAlert(props: SubmitErrorAlertProps) -> Element {
    match props.message {
        Some(message) => rsx! {
            div {
                class: "alert alert-danger",
                role: "alert",
                "{message}"
            }
        },
        None => rsx! { div {} },
    }
}
