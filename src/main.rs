// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Caption Editor
//!
//! A cross-platform desktop application for reviewing image captions,
//! marking correct and incorrect spans, and recording corrections in a
//! JSON sidecar file.

mod app;
mod error;
mod io;
mod models;
mod session;
mod ui;
mod util;

use anyhow::Result;
use app::CaptionApp;

fn main() -> Result<()> {
    // Initialize logging, defaulting to info level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Caption Editor"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Caption Editor",
        options,
        Box::new(|_cc| Ok(Box::new(CaptionApp::new()))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
