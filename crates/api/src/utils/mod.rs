//! Cross-cutting helpers for the HTTP layer

pub mod command_helpers;
pub mod logging;

pub use command_helpers::execute_logged;
pub use logging::{init_tracing, log_command_execution};
