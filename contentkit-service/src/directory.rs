//! Content-type directory: uid enumeration and validation.
//!
//! Every call reads the registry afresh, so uids registered or removed
//! between calls are seen immediately.

use crate::service::ContentTypeService;
use contentkit_types::TypeUid;
use std::collections::BTreeSet;

impl ContentTypeService {
    /// Lists every uid the registry exposes, across all partitions.
    ///
    /// The result is sorted and free of duplicates.
    pub fn list_type_uids(&self) -> Vec<TypeUid> {
        self.registry
            .partitions()
            .into_values()
            .flat_map(|types| types.into_keys())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(TypeUid::from)
            .collect()
    }

    /// Returns `candidate` as a uid if the registry currently knows it.
    pub fn resolve_type_uid(&self, candidate: &str) -> Option<TypeUid> {
        self.contains(candidate).then(|| TypeUid::new(candidate))
    }

    /// Whether the registry currently knows `candidate`.
    pub fn contains(&self, candidate: &str) -> bool {
        self.registry.contains(candidate)
    }

    /// Collection name of a known uid, e.g. `restaurant` for
    /// `api::restaurant.restaurant`.
    pub fn collection_name(&self, candidate: &str) -> Option<String> {
        self.resolve_type_uid(candidate)
            .map(|uid| uid.collection_name().to_string())
    }
}
