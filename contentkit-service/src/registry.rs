//! Content registry abstraction.
//!
//! The host owns the registry of content-type definitions. The service only
//! enumerates its uid keys; definitions are never inspected.

use std::collections::BTreeMap;

/// Uid → opaque content-type definition.
pub type ContentTypeMap = BTreeMap<String, serde_json::Value>;

/// Partition name (e.g. `api`, `plugin::users-permissions`) → its content types.
pub type RegistryPartitions = BTreeMap<String, ContentTypeMap>;

/// Read access to the host's content-type registry.
///
/// Implementations return the live state on every call; the service keeps
/// no copy between calls.
pub trait ContentRegistry: Send + Sync {
    /// Returns every partition with the content types it exposes.
    fn partitions(&self) -> RegistryPartitions;

    /// Whether any partition exposes `uid`.
    ///
    /// The default walks [`partitions`](Self::partitions). Entry, count and
    /// batch calls resolve through here, so registries that can look a uid up
    /// directly should override it.
    fn contains(&self, uid: &str) -> bool {
        self.partitions()
            .values()
            .any(|types| types.contains_key(uid))
    }
}

impl ContentRegistry for RegistryPartitions {
    fn partitions(&self) -> RegistryPartitions {
        self.clone()
    }

    fn contains(&self, uid: &str) -> bool {
        self.values().any(|types| types.contains_key(uid))
    }
}
