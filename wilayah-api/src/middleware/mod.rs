pub mod cors;
pub mod recover;
pub mod request_tracing;
