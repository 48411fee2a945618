pub mod admin_gate;
pub mod cors;
pub mod request_tracing;
