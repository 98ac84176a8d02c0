pub mod effective_status;
pub mod envelope;
pub(crate) mod lenient;
pub mod request;
pub mod request_status;
pub mod signatory;
