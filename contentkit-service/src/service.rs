//! The content-type service handle.
//!
//! Operations are split by concern across `directory`, `entries`,
//! `counting` and `batch`; this module only holds the shared state.

use crate::config::ServiceConfig;
use crate::error::ServiceResult;
use crate::query::QueryEngine;
use crate::registry::ContentRegistry;
use std::fmt;
use std::sync::Arc;

/// Uid discovery, entry access, counting and batch runs over a host
/// registry and query engine.
///
/// Cloning is cheap; clones share the same collaborators.
#[derive(Clone)]
pub struct ContentTypeService {
    pub(crate) registry: Arc<dyn ContentRegistry>,
    pub(crate) engine: Arc<dyn QueryEngine>,
    pub(crate) config: ServiceConfig,
}

impl ContentTypeService {
    /// Creates a service with the default configuration.
    pub fn new(registry: Arc<dyn ContentRegistry>, engine: Arc<dyn QueryEngine>) -> Self {
        Self {
            registry,
            engine,
            config: ServiceConfig::default(),
        }
    }

    /// Creates a service with a custom configuration.
    pub fn with_config(
        registry: Arc<dyn ContentRegistry>,
        engine: Arc<dyn QueryEngine>,
        config: ServiceConfig,
    ) -> ServiceResult<Self> {
        config.validate()?;
        Ok(Self {
            registry,
            engine,
            config,
        })
    }

    /// Creates a service over a single collaborator that is both the
    /// registry and the query engine.
    pub fn from_store<S>(store: Arc<S>) -> Self
    where
        S: ContentRegistry + QueryEngine + 'static,
    {
        Self::new(store.clone(), store)
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

impl fmt::Debug for ContentTypeService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentTypeService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
