use dioxus::prelude::*;

use crate::components::feedback::{FieldErrorFeedback, SubmitErrorAlert};
use crate::components::inputs::{InputType, ValidatedInput};
use crate::registration::{submit_registration, RegistrationAction, RegistrationState};
use crate::utils::validation::field_class;

#[derive(Props, PartialEq, Clone)]
pub struct RegistrationFormComponentProps {
    pub state: Signal<RegistrationState>,
    pub dispatch: EventHandler<RegistrationAction>,
    pub on_navigate: EventHandler<String>,
}

#[component]
pub fn RegistrationFormComponent(props: RegistrationFormComponentProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let on_navigate = props.on_navigate;

    rsx! {
        div {
            class: "registration-form",

            // Username Input Section
            div {
                class: "input-section",
                ValidatedInput {
                    id: "username".to_string(),
                    label: "Username".to_string(),
                    value: state().form.username,
                    placeholder: "Username".to_string(),
                    input_type: InputType::Text,
                    input_class: field_class(&state().field_errors.username).to_string(),
                    disabled: state().is_submitting,
                    on_change: move |data: String| {
                        dispatch.call(RegistrationAction::SetUsername(data));
                    }
                }
                FieldErrorFeedback { error: state().field_errors.username }
            }

            // Email Input Section
            div {
                class: "input-section",
                ValidatedInput {
                    id: "email".to_string(),
                    label: "Email address".to_string(),
                    value: state().form.email,
                    placeholder: "Email".to_string(),
                    input_type: InputType::Email,
                    input_class: field_class(&state().field_errors.email).to_string(),
                    disabled: state().is_submitting,
                    on_change: move |data: String| {
                        dispatch.call(RegistrationAction::SetEmail(data));
                    }
                }
                FieldErrorFeedback { error: state().field_errors.email }
            }

            // Password Input Section
            div {
                class: "input-section",
                ValidatedInput {
                    id: "password".to_string(),
                    label: "Password".to_string(),
                    value: state().form.password,
                    placeholder: "Password".to_string(),
                    input_type: InputType::Password,
                    input_class: field_class(&state().field_errors.password).to_string(),
                    disabled: state().is_submitting,
                    on_change: move |data: String| {
                        dispatch.call(RegistrationAction::SetPassword(data));
                    }
                }
                FieldErrorFeedback { error: state().field_errors.password }
            }

            // Direct route to login, bypassing validation entirely
            p {
                class: "login-link",
                onclick: move |_| on_navigate.call("/login".to_string()),
                "Login instead?"
            }

            // Submit Button
            div {
                class: "button-section",
                button {
                    class: "submit-button",
                    disabled: state().is_submitting,
                    onclick: move |_| {
                        let input = state().form.clone();
                        spawn(submit_registration(input, dispatch, on_navigate));
                    },
                    if state().is_submitting {
                        "Signing up..."
                    } else {
                        "Sign up"
                    }
                }
            }

            // Last submission failure, if any
            SubmitErrorAlert { message: state().error_message }
        }
    }
}
