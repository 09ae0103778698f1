//! Collaborator wiring for the configured backend

use std::sync::Arc;

use datelog_core::{IdentityVerifier, ScopedStoreFactory};
use datelog_domain::{BackendConfig, Result};
use tracing::info;

use crate::memory::{MemoryStoreFactory, StaticTokenVerifier};
use crate::supabase::{PostgrestStoreFactory, SupabaseIdentityVerifier, SupabaseProject};

/// Identity verifier and store factory built from one [`BackendConfig`].
#[derive(Clone)]
pub struct Backend {
    pub verifier: Arc<dyn IdentityVerifier>,
    pub stores: Arc<dyn ScopedStoreFactory>,
}

impl Backend {
    pub fn from_config(config: &BackendConfig) -> Result<Self> {
        match config {
            BackendConfig::Supabase(supabase) => {
                let project = SupabaseProject::new(supabase)?;
                info!(url = %project.base_url(), "using Supabase backend");
                Ok(Self {
                    verifier: Arc::new(SupabaseIdentityVerifier::new(project.clone())),
                    stores: Arc::new(PostgrestStoreFactory::new(project)),
                })
            }
            BackendConfig::Memory(memory) => {
                info!(tokens = memory.tokens.len(), "using in-memory backend");
                Ok(Self {
                    verifier: Arc::new(StaticTokenVerifier::from_config(memory)),
                    stores: Arc::new(MemoryStoreFactory::new()),
                })
            }
        }
    }
}
