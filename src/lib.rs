//! Vet call form - controller for the home vet-visit request mini-app
//!
//! The controller validates and submits the request through an injected
//! host environment. A Ratatui-based terminal host lets the form run
//! outside the messaging client.

pub mod app;
pub mod bindings;
pub mod config;
pub mod controller;
pub mod error;
pub mod host;
pub mod payload;
pub mod phone;
pub mod platform;
pub mod state;
pub mod theme;
pub mod ui;
pub mod validation;

pub use controller::FormController;
pub use error::{FormError, HostError};
pub use host::HostEnvironment;
pub use payload::SubmissionPayload;
