//! API middleware components

pub mod logging;
pub mod negotiation;

pub use logging::logging_middleware;
pub use negotiation::{is_acceptable, negotiation_middleware};
