use dioxus::prelude::*;

use crate::components::forms::RegistrationFormComponent;
use crate::registration::{RegistrationAction, RegistrationState};

#[derive(Props, PartialEq, Clone)]
pub struct RegistrationServiceProps {
    /// Navigation capability supplied by the routing layer; called with the
    /// target path ("/login") on success or explicit user request.
    pub on_navigate: EventHandler<String>,
}

#[component]
pub fn RegistrationService(props: RegistrationServiceProps) -> Element {
    // Consolidated state management
    let mut state = use_signal(RegistrationState::default);

    // Dispatch function for actions - using in-place reduction to preserve
    // Dioxus Signal reactivity
    let dispatch = EventHandler::new(move |action: RegistrationAction| {
        state.with_mut(|s| {
            s.reduce_in_place(action);
        });
    });

    rsx! {
        div {
            class: "registration-container",

            h1 {
                class: "registration-title",
                "Please register"
            }

            RegistrationFormComponent {
                state: state,
                dispatch: dispatch,
                on_navigate: props.on_navigate
            }
        }
    }
}
