//! In-memory registry and query engine.
//!
//! Backs tests and fixture-driven hosts. Every engine call is recorded so
//! callers can assert on exactly what the service sent.
//!
//! Supported query semantics:
//! - `start`/`limit` slicing in insertion order (`sort` is ignored),
//! - `filters` as top-level equality on entry fields,
//! - `fields` as `"*"`, a single field name, or a list of names (`id` is
//!   always kept),
//! - `live` hides entries whose `publishedAt` is `null`, in listings and
//!   counts alike.

use crate::error::{ServiceError, ServiceResult};
use crate::query::QueryEngine;
use crate::registry::{ContentRegistry, RegistryPartitions};
use async_trait::async_trait;
use contentkit_types::{
    CountOptions, Entry, EntryId, FindOneOptions, PublicationState, QueryOptions, TypeUid,
    WILDCARD,
};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A call received by the in-memory engine.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryCall {
    FindMany {
        uid: TypeUid,
        options: QueryOptions,
    },
    FindOne {
        uid: TypeUid,
        id: EntryId,
        options: FindOneOptions,
    },
    Count {
        uid: TypeUid,
        options: CountOptions,
    },
}

#[derive(Debug, Default)]
struct StoreState {
    partitions: RegistryPartitions,
    entries: BTreeMap<String, Vec<Value>>,
    reported_counts: BTreeMap<String, u64>,
    calls: Vec<QueryCall>,
    failure: Option<String>,
}

/// Registry and query engine over in-memory entries.
#[derive(Debug, Default)]
pub struct InMemoryContentStore {
    state: Mutex<StoreState>,
}

impl InMemoryContentStore {
    /// Creates an empty store: no partitions, no entries.
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Registers `uid` under `partition` with the given entries.
    #[must_use]
    pub fn with_content_type(
        self,
        partition: &str,
        uid: &str,
        entries: impl IntoIterator<Item = Value>,
    ) -> Self {
        self.register(partition, uid);
        self.insert_entries(uid, entries);
        self
    }

    /// Registers `uid` under `partition` with an empty definition.
    pub fn register(&self, partition: &str, uid: &str) {
        self.state()
            .partitions
            .entry(partition.to_string())
            .or_default()
            .insert(uid.to_string(), Value::Object(Map::new()));
    }

    /// Removes `uid` from every partition. Its entries are kept.
    pub fn unregister(&self, uid: &str) {
        let mut state = self.state();
        for types in state.partitions.values_mut() {
            types.remove(uid);
        }
        state.partitions.retain(|_, types| !types.is_empty());
    }

    /// Appends entries to `uid`, whether or not it is registered.
    pub fn insert_entries(&self, uid: &str, entries: impl IntoIterator<Item = Value>) {
        self.state()
            .entries
            .entry(uid.to_string())
            .or_default()
            .extend(entries);
    }

    /// Pins the engine count for `uid` to `count`, regardless of its entries.
    pub fn set_reported_count(&self, uid: &str, count: u64) {
        self.state().reported_counts.insert(uid.to_string(), count);
    }

    /// Makes every engine call fail with [`ServiceError::Query`].
    pub fn fail_with(&self, message: impl Into<String>) {
        self.state().failure = Some(message.into());
    }

    /// Stops failing engine calls.
    pub fn clear_failure(&self) {
        self.state().failure = None;
    }

    /// All engine calls so far, oldest first.
    pub fn calls(&self) -> Vec<QueryCall> {
        self.state().calls.clone()
    }

    /// The options of every `find_many` call so far.
    pub fn find_many_calls(&self) -> Vec<(TypeUid, QueryOptions)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                QueryCall::FindMany { uid, options } => Some((uid, options)),
                _ => None,
            })
            .collect()
    }

    /// The arguments of every `find_one` call so far.
    pub fn find_one_calls(&self) -> Vec<(TypeUid, EntryId, FindOneOptions)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                QueryCall::FindOne { uid, id, options } => Some((uid, id, options)),
                _ => None,
            })
            .collect()
    }

    /// The uids of every `count` call so far.
    pub fn count_calls(&self) -> Vec<TypeUid> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                QueryCall::Count { uid, .. } => Some(uid),
                _ => None,
            })
            .collect()
    }

    /// Forgets recorded calls.
    pub fn clear_calls(&self) {
        self.state().calls.clear();
    }

    fn record(&self, call: QueryCall) -> ServiceResult<MutexGuard<'_, StoreState>> {
        let mut state = self.state();
        state.calls.push(call);
        if let Some(message) = state.failure.clone() {
            return Err(ServiceError::Query(message));
        }
        Ok(state)
    }
}

fn matches_filters(entry: &Value, filters: &Value) -> bool {
    match filters.as_object() {
        Some(conditions) => conditions
            .iter()
            .all(|(field, expected)| entry.get(field) == Some(expected)),
        None => true,
    }
}

fn is_visible(entry: &Value, state: PublicationState) -> bool {
    match state {
        PublicationState::Preview => true,
        PublicationState::Live => !matches!(entry.get("publishedAt"), Some(Value::Null)),
    }
}

fn project(entry: &Value, fields: &Value) -> Value {
    let names: Vec<&str> = match fields {
        Value::String(name) if name == WILDCARD => return entry.clone(),
        Value::String(name) => vec![name.as_str()],
        Value::Array(names) => names.iter().filter_map(Value::as_str).collect(),
        _ => return entry.clone(),
    };
    let Some(source) = entry.as_object() else {
        return entry.clone();
    };
    let projected: Map<String, Value> = source
        .iter()
        .filter(|(key, _)| key.as_str() == "id" || names.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    Value::Object(projected)
}

impl ContentRegistry for InMemoryContentStore {
    fn partitions(&self) -> RegistryPartitions {
        self.state().partitions.clone()
    }

    fn contains(&self, uid: &str) -> bool {
        self.state()
            .partitions
            .values()
            .any(|types| types.contains_key(uid))
    }
}

#[async_trait]
impl QueryEngine for InMemoryContentStore {
    async fn find_many(&self, uid: &TypeUid, options: &QueryOptions) -> ServiceResult<Vec<Entry>> {
        let state = self.record(QueryCall::FindMany {
            uid: uid.clone(),
            options: options.clone(),
        })?;
        let start = usize::try_from(options.start).unwrap_or(usize::MAX);
        let limit = usize::try_from(options.limit).unwrap_or(usize::MAX);
        let entries: Vec<Entry> = state
            .entries
            .get(uid.as_str())
            .map(|entries| {
                entries
                    .iter()
                    .filter(|entry| is_visible(entry, options.publication_state))
                    .filter(|entry| matches_filters(entry, &options.filters))
                    .skip(start)
                    .take(limit)
                    .map(|entry| Entry::new(project(entry, &options.fields)))
                    .collect()
            })
            .unwrap_or_default();
        Ok(entries)
    }

    async fn find_one(
        &self,
        uid: &TypeUid,
        id: &EntryId,
        options: &FindOneOptions,
    ) -> ServiceResult<Entry> {
        let state = self.record(QueryCall::FindOne {
            uid: uid.clone(),
            id: id.clone(),
            options: options.clone(),
        })?;
        let found = state
            .entries
            .get(uid.as_str())
            .and_then(|entries| entries.iter().find(|entry| entry.get("id") == Some(id.as_value())))
            .map_or(Value::Null, |entry| project(entry, &options.fields));
        Ok(Entry::new(found))
    }

    async fn count(&self, uid: &TypeUid, options: &CountOptions) -> ServiceResult<u64> {
        let state = self.record(QueryCall::Count {
            uid: uid.clone(),
            options: options.clone(),
        })?;
        if let Some(count) = state.reported_counts.get(uid.as_str()) {
            return Ok(*count);
        }
        let count = state
            .entries
            .get(uid.as_str())
            .map_or(0, |entries| {
                entries
                    .iter()
                    .filter(|entry| is_visible(entry, options.publication_state))
                    .filter(|entry| matches_filters(entry, &options.filters))
                    .count()
            });
        Ok(count as u64)
    }
}
