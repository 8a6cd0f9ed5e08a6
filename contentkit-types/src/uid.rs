//! Content-type identifiers.
//!
//! A uid is an opaque, namespaced string such as `api::restaurant.restaurant`
//! or `plugin::users-permissions.user`. The registry owns the set of valid
//! uids; this type only carries the string and offers a few read helpers.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

const NAMESPACE_SEPARATOR: &str = "::";

/// Unique identifier of a content type within a registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeUid(String);

impl TypeUid {
    /// Wraps a uid string without checking it.
    #[must_use]
    pub fn new(uid: impl Into<String>) -> Self {
        Self(uid.into())
    }

    /// Parses a uid, rejecting empty or whitespace-padded input.
    pub fn parse(s: &str) -> Result<Self> {
        if s.is_empty() || s.trim() != s {
            return Err(Error::InvalidUid(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }

    /// Returns the uid as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The namespace prefix (`api`, `plugin`, ...), if the uid has one.
    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.0
            .split_once(NAMESPACE_SEPARATOR)
            .map(|(namespace, _)| namespace)
    }

    /// The collection name: the segment after the last `.` of the qualified
    /// name, e.g. `restaurant` for `api::restaurant.restaurant`.
    #[must_use]
    pub fn collection_name(&self) -> &str {
        let qualified = self
            .0
            .split_once(NAMESPACE_SEPARATOR)
            .map_or(self.0.as_str(), |(_, rest)| rest);
        qualified
            .rsplit_once('.')
            .map_or(qualified, |(_, name)| name)
    }

    /// Consumes the uid, returning the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for TypeUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TypeUid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<&str> for TypeUid {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for TypeUid {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for TypeUid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for TypeUid {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for TypeUid {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TypeUid {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
