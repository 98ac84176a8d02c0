pub mod badge;
pub mod endpoints;
pub mod input;
