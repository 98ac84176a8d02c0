//! Status resolution and dashboard logic for clearance/document requests.
//!
//! Everything here is rendering-agnostic: the types describe what a student or
//! signatory dashboard shows, not how it is drawn.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use error::ClientError;
pub use models::{
    effective_status::EffectiveStatus,
    request::{Request, RequestType},
    signatory::Signatory,
};
pub use services::status_resolver::resolve;
