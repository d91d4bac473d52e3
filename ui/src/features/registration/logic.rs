//! Client-side submission flow: validate, call the auth backend, then
//! navigate to login or surface the failure text.

use dioxus::prelude::*;

use crate::features::registration::{
    validate_registration, FieldErrors, RegistrationAction, RegistrationInput,
};
use crate::services::client::{
    AuthClient, ClientRegisterRequest, ClientRegisterResponse, ClientResult,
};
use crate::{console_error, console_info, console_warn};

/// Terminal transition of a submission attempt that reached the backend.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    NavigateToLogin,
    ShowError(String),
}

/// Gate for one submission attempt: either the exact payload to send, or
/// the field errors that block it before any network call.
pub fn prepare_submission(input: &RegistrationInput) -> Result<ClientRegisterRequest, FieldErrors> {
    let errors = validate_registration(input);
    if errors.has_errors() {
        return Err(errors);
    }

    Ok(ClientRegisterRequest {
        username: input.username.clone(),
        email: input.email.clone(),
        password: input.password.clone(),
    })
}

/// Maps the register call's result onto the form's terminal transition.
/// Rejections and transport failures both end as alert text, shown verbatim.
pub fn resolve_submit_result(result: ClientResult<ClientRegisterResponse>) -> SubmitOutcome {
    match result {
        Ok(response) if response.success => SubmitOutcome::NavigateToLogin,
        Ok(response) => SubmitOutcome::ShowError(response.message),
        Err(error) => SubmitOutcome::ShowError(error.to_string()),
    }
}

/// Runs one submission attempt end to end.
///
/// Invalid input blocks the attempt before any network call. A valid attempt
/// holds the submitting flag for the lifetime of the register call and ends
/// in exactly one of: navigation to `/login`, or an error message shown in
/// the alert region. The caller runs this inside a Dioxus `spawn`, so the
/// task is dropped with the component and cannot mutate state after unmount.
pub async fn submit_registration(
    input: RegistrationInput,
    dispatch: EventHandler<RegistrationAction>,
    on_navigate: EventHandler<String>,
) {
    let request = match prepare_submission(&input) {
        Ok(request) => request,
        Err(errors) => {
            console_warn!("[Registration] Submission blocked by field validation");
            dispatch.call(RegistrationAction::SetFieldErrors(errors));
            return;
        }
    };

    dispatch.call(RegistrationAction::ClearFieldErrors);
    dispatch.call(RegistrationAction::SetErrorMessage(None));
    dispatch.call(RegistrationAction::SetSubmitting(true));

    let client = AuthClient::default();
    match resolve_submit_result(client.register(&request).await) {
        SubmitOutcome::NavigateToLogin => {
            console_info!(
                "[Registration] Account created for '{}', redirecting to login",
                request.username
            );
            dispatch.call(RegistrationAction::SetSubmitting(false));
            on_navigate.call("/login".to_string());
        }
        SubmitOutcome::ShowError(message) => {
            console_error!("[Registration] Registration failed: {}", message);
            dispatch.call(RegistrationAction::SetErrorMessage(Some(message)));
            dispatch.call(RegistrationAction::SetSubmitting(false));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::client::ClientError;

    #[test]
    fn test_invalid_input_blocks_before_any_request() {
        let input = RegistrationInput {
            username: "ab".to_string(),
            email: "nope".to_string(),
            password: "short".to_string(),
        };

        let errors = prepare_submission(&input).unwrap_err();
        assert!(errors.username.is_some());
        assert!(errors.email.is_some());
        assert!(errors.password.is_some());
    }

    #[test]
    fn test_valid_input_builds_request_with_exact_values() {
        let input = RegistrationInput {
            username: "abc".to_string(),
            email: "a@b.com".to_string(),
            password: "Abc123!".to_string(),
        };

        let request = prepare_submission(&input).unwrap();
        assert_eq!(
            request,
            ClientRegisterRequest {
                username: "abc".to_string(),
                email: "a@b.com".to_string(),
                password: "Abc123!".to_string(),
            }
        );
    }

    #[test]
    fn test_successful_register_navigates_to_login() {
        let outcome = resolve_submit_result(Ok(ClientRegisterResponse::success(
            "Account created successfully",
        )));
        assert_eq!(outcome, SubmitOutcome::NavigateToLogin);
    }

    #[test]
    fn test_rejected_register_shows_message_verbatim() {
        let outcome = resolve_submit_result(Ok(ClientRegisterResponse::error("Email taken")));
        assert_eq!(outcome, SubmitOutcome::ShowError("Email taken".to_string()));
    }

    #[test]
    fn test_transport_failure_shows_error_text() {
        let outcome = resolve_submit_result(Err(ClientError::NetworkError {
            message: "connection refused".to_string(),
        }));
        assert_eq!(
            outcome,
            SubmitOutcome::ShowError("Network error: connection refused".to_string())
        );
    }
}
