pub mod decision;
pub mod queue;
pub mod status_resolver;
pub mod submission;
pub mod summary;
