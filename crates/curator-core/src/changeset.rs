//! Change tracking for entity tags and user-defined properties.
//!
//! Entities carry these change sets so a write only touches the metadata the
//! caller actually edited. They are reserved marker types: the model builder
//! never publishes them as custom fields.

use indexmap::IndexMap;
use serde::Serialize;
use std::collections::BTreeSet;

/// Pending changes to an entity's tags.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagChangeSet {
    add: BTreeSet<String>,
    remove: BTreeSet<String>,
    reset: bool,
}

impl TagChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues tags to add, keeping previously queued additions. A tag queued
    /// for removal is no longer removed.
    pub fn append(&mut self, tags: impl IntoIterator<Item = impl Into<String>>) {
        for tag in tags {
            let tag = tag.into();
            self.remove.remove(&tag);
            self.add.insert(tag);
        }
    }

    /// Queues tags for removal. A tag queued for addition is no longer
    /// added.
    pub fn remove(&mut self, tags: impl IntoIterator<Item = impl Into<String>>) {
        for tag in tags {
            let tag = tag.into();
            self.add.remove(&tag);
            self.remove.insert(tag);
        }
    }

    /// Replaces the entity's tags with exactly `tags`, discarding any
    /// previously queued edits.
    pub fn set(&mut self, tags: impl IntoIterator<Item = impl Into<String>>) {
        self.clear();
        self.reset = true;
        self.add.extend(tags.into_iter().map(Into::into));
    }

    /// Tags queued for addition, in sorted order.
    pub fn added(&self) -> impl Iterator<Item = &str> {
        self.add.iter().map(String::as_str)
    }

    /// Tags queued for removal, in sorted order.
    pub fn removed(&self) -> impl Iterator<Item = &str> {
        self.remove.iter().map(String::as_str)
    }

    /// True if the write replaces the existing tags instead of editing them.
    pub fn is_reset(&self) -> bool {
        self.reset
    }

    pub fn is_empty(&self) -> bool {
        !self.reset && self.add.is_empty() && self.remove.is_empty()
    }

    pub fn clear(&mut self) {
        self.add.clear();
        self.remove.clear();
        self.reset = false;
    }
}

/// Pending changes to an entity's user-defined properties.
///
/// Insertion order of added properties is preserved in the serialized write.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UdpChangeSet {
    add: IndexMap<String, String>,
    remove: BTreeSet<String>,
    reset: bool,
}

impl UdpChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a property to set. A key queued for removal is no longer
    /// removed.
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        self.remove.remove(&key);
        self.add.insert(key, value.into());
    }

    /// Queues property keys for removal. A key queued for addition is no
    /// longer added.
    pub fn remove(&mut self, keys: impl IntoIterator<Item = impl Into<String>>) {
        for key in keys {
            let key = key.into();
            self.add.shift_remove(&key);
            self.remove.insert(key);
        }
    }

    /// Replaces the entity's properties with exactly `properties`,
    /// discarding any previously queued edits.
    pub fn set(
        &mut self,
        properties: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>,
    ) {
        self.clear();
        self.reset = true;
        self.add.extend(
            properties
                .into_iter()
                .map(|(key, value)| (key.into(), value.into())),
        );
    }

    /// Properties queued to set, in insertion order.
    pub fn added(&self) -> impl Iterator<Item = (&str, &str)> {
        self.add
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Keys queued for removal, in sorted order.
    pub fn removed(&self) -> impl Iterator<Item = &str> {
        self.remove.iter().map(String::as_str)
    }

    /// True if the write replaces the existing properties instead of editing
    /// them.
    pub fn is_reset(&self) -> bool {
        self.reset
    }

    pub fn is_empty(&self) -> bool {
        !self.reset && self.add.is_empty() && self.remove.is_empty()
    }

    pub fn clear(&mut self) {
        self.add.clear();
        self.remove.clear();
        self.reset = false;
    }
}
