//! HTTP route handlers

mod dates;
mod health;

pub use dates::*;
pub use health::*;
