//! Query options sent to the query engine.
//!
//! Each option set comes in two shapes: a complete one that the engine
//! receives ([`QueryOptions`], [`FindOneOptions`]) and a partial one that
//! callers build ([`ListOptions`], [`EntryOptions`]). Merging is field by
//! field, so supplying one option never blanks out the others.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Projection/population value meaning "everything".
pub const WILDCARD: &str = "*";

/// Page size used by listings when the caller gives no limit.
pub const DEFAULT_LIST_LIMIT: u64 = 500;

fn wildcard() -> Value {
    Value::String(WILDCARD.to_string())
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}

/// Which revision of entries a listing reads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublicationState {
    /// Published entries only.
    #[default]
    Live,
    /// Published and draft entries.
    Preview,
}

impl PublicationState {
    /// The wire name of the state.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Preview => "preview",
        }
    }
}

impl fmt::Display for PublicationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PublicationState {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        Ok(serde_json::from_value(Value::String(s.to_string()))?)
    }
}

/// Complete listing options, as received by `find_many`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryOptions {
    pub fields: Value,
    pub start: u64,
    pub limit: u64,
    pub filters: Value,
    pub sort: Value,
    pub populate: Value,
    pub publication_state: PublicationState,
}

impl QueryOptions {
    /// Listing defaults with the given page size.
    #[must_use]
    pub fn with_limit(limit: u64) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            fields: wildcard(),
            start: 0,
            limit: DEFAULT_LIST_LIMIT,
            filters: empty_object(),
            sort: empty_object(),
            populate: wildcard(),
            publication_state: PublicationState::Live,
        }
    }
}

/// Caller-supplied listing options. Unset fields fall back to the defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub populate: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication_state: Option<PublicationState>,
}

impl ListOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_fields(mut self, fields: impl Into<Value>) -> Self {
        self.fields = Some(fields.into());
        self
    }

    #[must_use]
    pub fn with_start(mut self, start: u64) -> Self {
        self.start = Some(start);
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn with_filters(mut self, filters: impl Into<Value>) -> Self {
        self.filters = Some(filters.into());
        self
    }

    #[must_use]
    pub fn with_sort(mut self, sort: impl Into<Value>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    #[must_use]
    pub fn with_populate(mut self, populate: impl Into<Value>) -> Self {
        self.populate = Some(populate.into());
        self
    }

    #[must_use]
    pub fn with_publication_state(mut self, state: PublicationState) -> Self {
        self.publication_state = Some(state);
        self
    }

    /// Applies every supplied field over `defaults`.
    #[must_use]
    pub fn merge_over(&self, defaults: QueryOptions) -> QueryOptions {
        QueryOptions {
            fields: self.fields.clone().unwrap_or(defaults.fields),
            start: self.start.unwrap_or(defaults.start),
            limit: self.limit.unwrap_or(defaults.limit),
            filters: self.filters.clone().unwrap_or(defaults.filters),
            sort: self.sort.clone().unwrap_or(defaults.sort),
            populate: self.populate.clone().unwrap_or(defaults.populate),
            publication_state: self.publication_state.unwrap_or(defaults.publication_state),
        }
    }
}

/// Options received by `count`. A count sees the same entries a listing
/// with these filters and publication state would.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CountOptions {
    pub filters: Value,
    pub publication_state: PublicationState,
}

impl CountOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_filters(mut self, filters: impl Into<Value>) -> Self {
        self.filters = filters.into();
        self
    }

    #[must_use]
    pub fn with_publication_state(mut self, state: PublicationState) -> Self {
        self.publication_state = state;
        self
    }
}

impl Default for CountOptions {
    fn default() -> Self {
        Self {
            filters: empty_object(),
            publication_state: PublicationState::Live,
        }
    }
}

impl From<&ListOptions> for CountOptions {
    fn from(options: &ListOptions) -> Self {
        let defaults = Self::default();
        Self {
            filters: options.filters.clone().unwrap_or(defaults.filters),
            publication_state: options
                .publication_state
                .unwrap_or(defaults.publication_state),
        }
    }
}

/// Complete single-entry options, as received by `find_one`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FindOneOptions {
    pub fields: Value,
    pub populate: Value,
}

impl Default for FindOneOptions {
    fn default() -> Self {
        Self {
            fields: wildcard(),
            populate: wildcard(),
        }
    }
}

/// Caller-supplied single-entry options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntryOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub populate: Option<Value>,
}

impl EntryOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_fields(mut self, fields: impl Into<Value>) -> Self {
        self.fields = Some(fields.into());
        self
    }

    #[must_use]
    pub fn with_populate(mut self, populate: impl Into<Value>) -> Self {
        self.populate = Some(populate.into());
        self
    }

    /// Applies the supplied fields over `defaults`.
    #[must_use]
    pub fn merge_over(&self, defaults: FindOneOptions) -> FindOneOptions {
        FindOneOptions {
            fields: self.fields.clone().unwrap_or(defaults.fields),
            populate: self.populate.clone().unwrap_or(defaults.populate),
        }
    }
}
