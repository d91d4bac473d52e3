pub mod form_validation;
pub mod logic;
pub mod types;

pub use form_validation::*;
pub use logic::{prepare_submission, resolve_submit_result, submit_registration, SubmitOutcome};
pub use types::*;
