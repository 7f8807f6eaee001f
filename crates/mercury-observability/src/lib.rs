//! Mercury observability.
//!
//! - [`init_tracing`]: console plus rolling JSON file logging
//! - [`logging_middleware`]: one log line per request, tagged with a request id

pub mod logging;

pub use logging::{TracingGuard, init_tracing, logging_middleware};
