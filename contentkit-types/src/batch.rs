use crate::{Entry, TypeUid};
use serde::{Deserialize, Serialize};

/// One page of entries handed to a batch callback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Batch {
    /// Entries of this page, in engine order.
    pub entries: Vec<Entry>,
    /// The content type the page belongs to.
    pub content_type: TypeUid,
}

impl Batch {
    /// Number of entries in the page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the page holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// What a batch callback produced for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOutput<T> {
    /// Nothing to accumulate.
    Empty,
    /// A single item.
    Single(T),
    /// Zero or more items, appended in order.
    Many(Vec<T>),
}

impl<T> BatchOutput<T> {
    /// Shorthand for [`BatchOutput::Single`].
    pub fn single(item: T) -> Self {
        Self::Single(item)
    }

    /// Number of items this output contributes.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Single(_) => 1,
            Self::Many(items) => items.len(),
        }
    }

    /// Whether this output contributes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends the produced items to `acc`.
    pub fn append_to(self, acc: &mut Vec<T>) {
        match self {
            Self::Empty => {}
            Self::Single(item) => acc.push(item),
            Self::Many(mut items) => acc.append(&mut items),
        }
    }

    /// The produced items as a vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        let mut items = Vec::with_capacity(self.len());
        self.append_to(&mut items);
        items
    }
}

impl<T> Default for BatchOutput<T> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<T> From<()> for BatchOutput<T> {
    fn from((): ()) -> Self {
        Self::Empty
    }
}

impl<T> From<Vec<T>> for BatchOutput<T> {
    fn from(items: Vec<T>) -> Self {
        Self::Many(items)
    }
}

impl<T> From<Option<T>> for BatchOutput<T> {
    fn from(item: Option<T>) -> Self {
        item.map_or(Self::Empty, Self::Single)
    }
}

impl<T> FromIterator<T> for BatchOutput<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::Many(iter.into_iter().collect())
    }
}
