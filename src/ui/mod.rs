// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the caption editor.

pub mod caption_editor;
pub mod dialogs;
pub mod image_pane;
pub mod navigation;
pub mod start_screen;
