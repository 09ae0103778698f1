//! In-process adapters for development and tests

pub mod store;
pub mod verifier;

pub use store::{MemoryDateStore, MemoryStoreFactory};
pub use verifier::StaticTokenVerifier;
