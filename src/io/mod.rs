// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations for images, caption files and the resume marker.

pub mod media;
pub mod resume;
pub mod serialization;
