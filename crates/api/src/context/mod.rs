//! Application context - dependency injection container

mod session;

use std::sync::Arc;

use datelog_core::{IdentityVerifier, ScopedStoreFactory};
use datelog_domain::{Config, Result};
use datelog_infra::Backend;
use tracing::info;

pub use session::{parse_bearer, AuthenticatedService};

/// Application context - holds the configured collaborators
///
/// Only the verifier and the store factory are shared between requests;
/// per-request storage handles come from [`AuthenticatedService`].
pub struct AppContext {
    pub config: Config,
    pub verifier: Arc<dyn IdentityVerifier>,
    pub stores: Arc<dyn ScopedStoreFactory>,
}

impl AppContext {
    /// Build the collaborators named by `config.backend`.
    pub fn new(config: Config) -> Result<Self> {
        let backend = Backend::from_config(&config.backend)?;
        info!(bind_address = %config.server.bind_address, "application context ready");
        Ok(Self::from_parts(config, backend.verifier, backend.stores))
    }

    /// Assemble a context from explicit collaborators.
    pub fn from_parts(
        config: Config,
        verifier: Arc<dyn IdentityVerifier>,
        stores: Arc<dyn ScopedStoreFactory>,
    ) -> Self {
        Self { config, verifier, stores }
    }
}
