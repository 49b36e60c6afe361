// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Caption data model.

pub mod annotation;
pub mod caption;
pub mod cursor;
pub mod store;
