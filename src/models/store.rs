// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! In-memory caption store.
//!
//! The store keeps the image filenames in the order of the source JSON
//! object together with one record per filename. The order is fixed when the
//! file is loaded and is never re-sorted.

use super::caption::{CaptionRecord, StoredCaption};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Ordered mapping from image filename to caption record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaptionStore {
    order: Vec<String>,
    records: HashMap<String, CaptionRecord>,
    /// Filenames whose caption was a bare string on disk.
    legacy: HashSet<String>,
}

impl CaptionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a filename, or replace its record if already present.
    pub fn insert(&mut self, name: impl Into<String>, stored: StoredCaption) {
        let name = name.into();
        if stored.is_legacy() {
            self.legacy.insert(name.clone());
        } else {
            self.legacy.remove(&name);
        }
        if !self.records.contains_key(&name) {
            self.order.push(name.clone());
        }
        self.records.insert(name, stored.upgrade());
    }

    /// Replace the record of an existing filename. Unknown names are ignored.
    pub fn set(&mut self, name: &str, record: CaptionRecord) {
        if let Some(slot) = self.records.get_mut(name) {
            *slot = record;
        }
    }

    pub fn get(&self, name: &str) -> Option<&CaptionRecord> {
        self.records.get(name)
    }

    /// Filename at position `index`.
    pub fn name_at(&self, index: usize) -> Option<&str> {
        self.order.get(index).map(String::as_str)
    }

    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.order.iter().position(|n| n == name)
    }

    /// Index of the first record whose caption is empty or whitespace.
    pub fn first_uncaptioned(&self) -> Option<usize> {
        self.order
            .iter()
            .position(|name| self.records.get(name).is_some_and(CaptionRecord::is_uncaptioned))
    }

    #[cfg(test)]
    pub fn names(&self) -> &[String] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn stored_form(&self, name: &str, record: &CaptionRecord) -> StoredCaption {
        if self.legacy.contains(name) && record.is_plain() {
            StoredCaption::Legacy(record.original_text.clone())
        } else {
            StoredCaption::Record(record.clone())
        }
    }
}

impl Serialize for CaptionStore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.order.len()))?;
        for name in &self.order {
            if let Some(record) = self.records.get(name) {
                map.serialize_entry(name, &self.stored_form(name, record))?;
            }
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CaptionStore {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct StoreVisitor;

        impl<'de> Visitor<'de> for StoreVisitor {
            type Value = CaptionStore;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of image filenames to captions")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut store = CaptionStore::new();
                while let Some((name, stored)) = access.next_entry::<String, StoredCaption>()? {
                    store.insert(name, stored);
                }
                Ok(store)
            }
        }

        deserializer.deserialize_map(StoreVisitor)
    }
}
