//! CourseHub Observability
//!
//! Console logging for hosts of the representation layer and for tests.
//!
//! ```no_run
//! coursehub_observability::init_basic_console_logging();
//! tracing::info!("ready");
//! ```

pub mod basic_logging;

pub use basic_logging::{init_basic_console_logging, try_init_test_logging};
