// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Error types for caption loading, saving and navigation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced to the user by caption operations.
#[derive(Error, Debug)]
pub enum CaptionError {
    /// I/O error while reading or writing a file
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The captions file is not valid JSON or not a filename mapping
    #[error("Invalid captions file {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The captions file parsed but lists no images
    #[error("Captions file {0:?} contains no images")]
    NoCaptions(PathBuf),

    /// Jump input was not a number
    #[error("Please enter a valid number (got {0:?}).")]
    InvalidNumber(String),

    /// Jump input was outside `1..=len`
    #[error("Please enter a valid image number ({requested} is not in 1-{len}).")]
    OutOfRange { requested: usize, len: usize },

    /// An image could not be decoded
    #[error("Failed to decode image {path:?}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl CaptionError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CaptionError>;
