//! This crate contains all shared UI components and client-side services
//! for the user-registration front-end.

pub mod app;
pub use app::RegistrationService;

pub mod components;
pub mod features;
pub mod services;
pub mod utils;

pub use features::registration;
