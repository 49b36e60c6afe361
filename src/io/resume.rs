// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Resume marker: the last displayed filename, kept beside the captions file.

use crate::error::{CaptionError, Result};
use std::path::{Path, PathBuf};

/// File name of the resume marker.
pub const RESUME_FILE: &str = "last_modified.txt";

/// Location of the resume marker for a captions file.
pub fn marker_path(captions_path: &Path) -> PathBuf {
    captions_path
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(RESUME_FILE)
}

/// Read the marker. A missing, unreadable or blank file yields `None`.
pub fn read_marker(captions_path: &Path) -> Option<String> {
    let path = marker_path(captions_path);
    match std::fs::read_to_string(&path) {
        Ok(contents) => {
            let name = contents.trim();
            (!name.is_empty()).then(|| name.to_string())
        }
        Err(e) => {
            log::debug!("No resume marker at {}: {}", path.display(), e);
            None
        }
    }
}

/// Overwrite the marker with `name`.
pub fn write_marker(captions_path: &Path, name: &str) -> Result<()> {
    let path = marker_path(captions_path);
    std::fs::write(&path, name).map_err(|e| CaptionError::io(&path, e))
}
