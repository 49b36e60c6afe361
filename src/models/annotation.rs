// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Span annotation data structures.
//!
//! This module defines the marked character spans of a caption and the
//! ordered set that holds them, serialized as a JSON object keyed by
//! `"{start}-{end}"`.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Correctness tag of a marked span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkKind {
    Correct,
    Incorrect,
}

/// A marked span of the original caption.
///
/// Offsets are character positions in the caption text at the time of
/// marking; `text` is a snapshot of the marked substring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: MarkKind,
    pub start: usize,
    pub end: usize,
}

impl Annotation {
    /// Create a new annotation over `start..end`.
    pub fn new(text: String, kind: MarkKind, start: usize, end: usize) -> Self {
        Self {
            text,
            kind,
            start,
            end,
        }
    }

    /// Key under which the annotation is stored.
    pub fn key(&self) -> String {
        format!("{}-{}", self.start, self.end)
    }
}

/// Annotations of one record in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationSet {
    items: Vec<Annotation>,
}

impl AnnotationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an annotation, replacing any existing one with the same span
    /// key in place.
    pub fn insert(&mut self, annotation: Annotation) {
        match self
            .items
            .iter_mut()
            .find(|a| a.start == annotation.start && a.end == annotation.end)
        {
            Some(existing) => *existing = annotation,
            None => self.items.push(annotation),
        }
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&Annotation> {
        self.items.iter().find(|a| a.key() == key)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Annotation> {
        self.items.iter()
    }
}

impl Serialize for AnnotationSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.items.len()))?;
        for annotation in &self.items {
            map.serialize_entry(&annotation.key(), annotation)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for AnnotationSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SetVisitor;

        impl<'de> Visitor<'de> for SetVisitor {
            type Value = AnnotationSet;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of span keys to annotations")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut set = AnnotationSet::new();
                // The stored start/end are authoritative; the key is rebuilt on save.
                while let Some((_key, annotation)) = access.next_entry::<String, Annotation>()? {
                    set.insert(annotation);
                }
                Ok(set)
            }
        }

        deserializer.deserialize_map(SetVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(start: usize, end: usize, kind: MarkKind) -> Annotation {
        Annotation::new(String::from("x"), kind, start, end)
    }

    #[test]
    fn test_key_format() {
        assert_eq!(span(3, 7, MarkKind::Correct).key(), "3-7");
    }

    #[test]
    fn test_insert_same_key_replaces_in_place() {
        let mut set = AnnotationSet::new();
        set.insert(span(0, 2, MarkKind::Correct));
        set.insert(span(4, 6, MarkKind::Correct));
        set.insert(span(0, 2, MarkKind::Incorrect));

        assert_eq!(set.len(), 2);
        let first = set.iter().next().unwrap();
        assert_eq!(first.key(), "0-2");
        assert_eq!(first.kind, MarkKind::Incorrect);
    }

    #[test]
    fn test_serializes_as_keyed_object_in_order() {
        let mut set = AnnotationSet::new();
        set.insert(span(5, 9, MarkKind::Incorrect));
        set.insert(span(0, 3, MarkKind::Correct));

        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(
            json,
            r#"{"5-9":{"text":"x","type":"incorrect","start":5,"end":9},"0-3":{"text":"x","type":"correct","start":0,"end":3}}"#
        );
    }

    #[test]
    fn test_deserialize_from_keyed_object() {
        let json = r#"{"1-4": {"text": "cat", "type": "correct", "start": 1, "end": 4}}"#;
        let set: AnnotationSet = serde_json::from_str(json).unwrap();

        let annotation = set.get("1-4").unwrap();
        assert_eq!(annotation.text, "cat");
        assert_eq!(annotation.kind, MarkKind::Correct);
    }
}
