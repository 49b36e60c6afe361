// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Caption records.
//!
//! A caption record holds the original caption text, free-text corrections
//! and the marked spans. On disk a caption is either a bare string (the old
//! format) or a full record; [`StoredCaption`] is the tagged union read at
//! the deserialization boundary and upgraded with [`StoredCaption::upgrade`].

use super::annotation::{Annotation, AnnotationSet, MarkKind};
use crate::util::text::{char_len, char_slice};
use serde::{Deserialize, Serialize};

/// Caption text, corrections and span annotations for one image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptionRecord {
    pub original_text: String,
    pub corrections: String,
    pub annotations: AnnotationSet,
}

impl CaptionRecord {
    /// Create a record with the given caption and nothing marked.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            original_text: text.into(),
            ..Default::default()
        }
    }

    /// Mark the characters between `a` and `b` (either order) as `kind`.
    ///
    /// Returns `false` without changing anything when the selection is empty.
    pub fn mark(&mut self, a: usize, b: usize, kind: MarkKind) -> bool {
        let len = char_len(&self.original_text);
        let start = a.min(b).min(len);
        let end = a.max(b).min(len);
        if start == end {
            return false;
        }

        let text = char_slice(&self.original_text, start, end).to_string();
        self.annotations.insert(Annotation::new(text, kind, start, end));
        true
    }

    /// Remove every annotation and empty the corrections.
    pub fn clear_marks(&mut self) {
        self.annotations.clear();
        self.corrections.clear();
    }

    /// True when the record carries only caption text.
    pub fn is_plain(&self) -> bool {
        self.corrections.is_empty() && self.annotations.is_empty()
    }

    /// True when the caption has no visible text.
    pub fn is_uncaptioned(&self) -> bool {
        self.original_text.trim().is_empty()
    }
}

/// A caption value as found in the captions file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredCaption {
    Legacy(String),
    Record(CaptionRecord),
}

impl StoredCaption {
    /// Whether the value used the old bare-string format.
    pub fn is_legacy(&self) -> bool {
        matches!(self, StoredCaption::Legacy(_))
    }

    /// Convert to the current record shape.
    pub fn upgrade(self) -> CaptionRecord {
        match self {
            StoredCaption::Legacy(text) => CaptionRecord::from_text(text),
            StoredCaption::Record(record) => record,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_string_upgrades() {
        let stored: StoredCaption = serde_json::from_str(r#""a cat""#).unwrap();
        assert!(stored.is_legacy());

        let record = stored.upgrade();
        assert_eq!(record.original_text, "a cat");
        assert_eq!(record.corrections, "");
        assert!(record.annotations.is_empty());
    }

    #[test]
    fn test_record_passes_through() {
        let json = r#"{
            "original_text": "a dog",
            "corrections": "it is a cat",
            "annotations": {"2-5": {"text": "dog", "type": "incorrect", "start": 2, "end": 5}}
        }"#;
        let stored: StoredCaption = serde_json::from_str(json).unwrap();
        assert!(!stored.is_legacy());

        let record = stored.upgrade();
        assert_eq!(record.corrections, "it is a cat");
        assert_eq!(record.annotations.get("2-5").unwrap().kind, MarkKind::Incorrect);
    }

    #[test]
    fn test_record_missing_fields_default() {
        let stored: StoredCaption = serde_json::from_str(r#"{"original_text": "x"}"#).unwrap();
        let record = stored.upgrade();
        assert_eq!(record, CaptionRecord::from_text("x"));
    }

    #[test]
    fn test_mark_selection() {
        let mut record = CaptionRecord::from_text("a dog on a mat");
        assert!(record.mark(2, 5, MarkKind::Incorrect));

        assert_eq!(record.annotations.len(), 1);
        let annotation = record.annotations.get("2-5").unwrap();
        assert_eq!(annotation.text, "dog");
        assert_eq!(annotation.kind, MarkKind::Incorrect);
    }

    #[test]
    fn test_mark_reversed_selection_is_sorted() {
        let mut record = CaptionRecord::from_text("a dog on a mat");
        assert!(record.mark(5, 2, MarkKind::Correct));
        assert!(record.annotations.get("2-5").is_some());
    }

    #[test]
    fn test_mark_empty_selection_is_ignored() {
        let mut record = CaptionRecord::from_text("a dog");
        assert!(!record.mark(3, 3, MarkKind::Incorrect));
        assert!(record.annotations.is_empty());
    }

    #[test]
    fn test_clear_marks() {
        let mut record = CaptionRecord::from_text("a dog on a mat");
        record.mark(0, 1, MarkKind::Correct);
        record.mark(2, 5, MarkKind::Incorrect);
        record.corrections = String::from("cat");

        record.clear_marks();
        assert!(record.annotations.is_empty());
        assert!(record.corrections.is_empty());
        assert_eq!(record.original_text, "a dog on a mat");
    }

    #[test]
    fn test_uncaptioned() {
        assert!(CaptionRecord::from_text("  \n").is_uncaptioned());
        assert!(!CaptionRecord::from_text("cat").is_uncaptioned());
    }
}
