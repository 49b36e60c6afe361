// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Caption file serialization and deserialization.
//!
//! This module reads the captions JSON file into a [`CaptionStore`] and
//! writes the whole store back, pretty-printed with 4-space indentation.

use crate::error::{CaptionError, Result};
use crate::models::store::CaptionStore;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Load a captions file.
pub fn load_captions(path: &Path) -> Result<CaptionStore> {
    let json = std::fs::read_to_string(path).map_err(|e| CaptionError::io(path, e))?;
    let store: CaptionStore = serde_json::from_str(&json).map_err(|source| CaptionError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    if store.is_empty() {
        return Err(CaptionError::NoCaptions(path.to_path_buf()));
    }
    log::info!("Loaded {} captions from {}", store.len(), path.display());
    Ok(store)
}

/// Write the whole store to `path`, replacing the file.
pub fn save_captions(store: &CaptionStore, path: &Path) -> Result<()> {
    let json = to_pretty_json(store).map_err(|source| CaptionError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, json).map_err(|e| CaptionError::io(path, e))?;
    log::info!("Saved {} captions to {}", store.len(), path.display());
    Ok(())
}

fn to_pretty_json<T: Serialize>(value: &T) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    Ok(buf)
}

/// Path of the editable copy of a captions file: `<stem>_edited.json`.
pub fn working_copy_path(source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("captions");
    source.with_file_name(format!("{stem}_edited.json"))
}

/// Copy a captions file to its working copy unless the copy already exists.
pub fn prepare_working_copy(source: &Path) -> Result<PathBuf> {
    let copy = working_copy_path(source);
    if copy.exists() {
        log::info!("Reusing existing working copy {}", copy.display());
    } else {
        std::fs::copy(source, &copy).map_err(|e| CaptionError::io(&copy, e))?;
        log::info!("Copied {} to {}", source.display(), copy.display());
    }
    Ok(copy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::annotation::MarkKind;
    use crate::models::caption::CaptionRecord;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let result = load_captions(&dir.path().join("nope.json"));
        assert!(matches!(result, Err(CaptionError::Io { .. })));
    }

    #[test]
    fn test_load_malformed_json_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{\"a.jpg\": ").unwrap();
        assert!(matches!(load_captions(&path), Err(CaptionError::Json { .. })));

        std::fs::write(&path, "[1, 2, 3]").unwrap();
        assert!(matches!(load_captions(&path), Err(CaptionError::Json { .. })));
    }

    #[test]
    fn test_load_empty_mapping_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.json");
        std::fs::write(&path, "{}").unwrap();
        assert!(matches!(load_captions(&path), Err(CaptionError::NoCaptions(_))));
    }

    #[test]
    fn test_save_uses_four_space_indent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("captions.json");
        std::fs::write(&path, r#"{"a.jpg": "cat"}"#).unwrap();

        let store = load_captions(&path).unwrap();
        save_captions(&store, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "{\n    \"a.jpg\": \"cat\"\n}");
    }

    #[test]
    fn test_record_roundtrip_through_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("captions.json");
        std::fs::write(&path, r#"{"a.jpg": "a dog on a mat", "b.jpg": "two birds"}"#).unwrap();

        let mut store = load_captions(&path).unwrap();
        let mut record = CaptionRecord::from_text("a dog on a mat");
        record.mark(2, 5, MarkKind::Incorrect);
        record.mark(9, 14, MarkKind::Correct);
        record.corrections = String::from("a cat on a mat\nsecond line");
        store.set("a.jpg", record.clone());
        save_captions(&store, &path).unwrap();

        let reloaded = load_captions(&path).unwrap();
        assert_eq!(reloaded.get("a.jpg"), Some(&record));
        assert_eq!(reloaded.get("b.jpg"), Some(&CaptionRecord::from_text("two birds")));
        assert_eq!(reloaded.names(), ["a.jpg", "b.jpg"]);
    }

    #[test]
    fn test_working_copy_path() {
        let path = Path::new("/data/set/captions.json");
        assert_eq!(working_copy_path(path), PathBuf::from("/data/set/captions_edited.json"));
    }

    #[test]
    fn test_prepare_working_copy_does_not_overwrite() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("captions.json");
        std::fs::write(&source, r#"{"a.jpg": "cat"}"#).unwrap();

        let copy = prepare_working_copy(&source).unwrap();
        assert_eq!(std::fs::read_to_string(&copy).unwrap(), r#"{"a.jpg": "cat"}"#);

        std::fs::write(&copy, r#"{"a.jpg": "edited"}"#).unwrap();
        let again = prepare_working_copy(&source).unwrap();
        assert_eq!(again, copy);
        assert_eq!(std::fs::read_to_string(&copy).unwrap(), r#"{"a.jpg": "edited"}"#);
    }
}
