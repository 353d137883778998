//! Keyed entity pool

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Tag;

/// Entities of one kind keyed by a positive tag
///
/// Iteration is always in ascending tag order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pool<T> {
    entries: BTreeMap<Tag, T>,
}

impl<T> Default for Pool<T> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<T> Pool<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert under a fresh tag. Returns false for tag 0, `Tag::MAX` or a
    /// tag in use.
    ///
    /// `Tag::MAX` is kept free so `next_tag` always has a successor.
    pub fn insert(&mut self, tag: Tag, value: T) -> bool {
        if tag == 0 || tag == Tag::MAX || self.entries.contains_key(&tag) {
            return false;
        }
        self.entries.insert(tag, value);
        true
    }

    pub fn remove(&mut self, tag: Tag) -> Option<T> {
        self.entries.remove(&tag)
    }

    pub fn get(&self, tag: Tag) -> Option<&T> {
        self.entries.get(&tag)
    }

    pub fn get_mut(&mut self, tag: Tag) -> Option<&mut T> {
        self.entries.get_mut(&tag)
    }

    pub fn contains(&self, tag: Tag) -> bool {
        self.entries.contains_key(&tag)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// All tags, ascending
    pub fn tags(&self) -> Vec<Tag> {
        self.entries.keys().copied().collect()
    }

    pub fn max_tag(&self) -> Option<Tag> {
        self.entries.keys().next_back().copied()
    }

    /// Largest tag plus one, or 1 when empty. Gaps are never reused.
    ///
    /// Once the pool holds `Tag::MAX - 1` the result is `Tag::MAX`, which
    /// `insert` rejects.
    pub fn next_tag(&self) -> Tag {
        self.max_tag().map_or(1, |tag| tag.saturating_add(1))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Tag, &T)> {
        self.entries.iter().map(|(&tag, value)| (tag, value))
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.entries.values_mut()
    }

    /// Remove every entry the predicate rejects, returning how many went
    pub fn retain(&mut self, mut keep: impl FnMut(Tag, &T) -> bool) -> usize {
        let before = self.entries.len();
        self.entries.retain(|&tag, value| keep(tag, value));
        before - self.entries.len()
    }

    /// Renumber the pool to 1..=len in ascending order of the current tags.
    ///
    /// Returns the moved tags as old -> new; tags already in place are
    /// absent from the map, so a dense pool yields an empty map.
    pub fn renumber(&mut self) -> BTreeMap<Tag, Tag> {
        let moved: BTreeMap<Tag, Tag> = self
            .entries
            .keys()
            .zip(1..)
            .filter(|&(&old, new)| old != new)
            .map(|(&old, new)| (old, new))
            .collect();

        if !moved.is_empty() {
            let entries = std::mem::take(&mut self.entries);
            self.entries = entries.into_values().zip(1..).map(|(value, tag)| (tag, value)).collect();
        }

        moved
    }
}
