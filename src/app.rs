// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! The application owns the start form, the open [`Session`] and the
//! texture of the displayed image. Panels report user actions as
//! [`Command`]s which are dispatched to the session after layout.

use crate::io::media;
use crate::session::{Command, Session};
use crate::ui::{
    caption_editor, dialogs::NativeDialogs, image_pane, image_pane::DisplayedImage, navigation,
    start_screen,
};

/// Main application state.
pub struct CaptionApp {
    /// Start screen selections
    form: start_screen::StartForm,

    /// Open editing session
    session: Option<Session>,

    /// Message of the last failed open
    load_error: Option<String>,

    /// Texture of the current image
    image: Option<DisplayedImage>,

    /// Contents of the jump-to-number field
    goto_input: String,

    dialogs: NativeDialogs,
}

impl Default for CaptionApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CaptionApp {
    /// Create a new application instance.
    pub fn new() -> Self {
        Self {
            form: start_screen::StartForm::default(),
            session: None,
            load_error: None,
            image: None,
            goto_input: String::new(),
            dialogs: NativeDialogs,
        }
    }

    /// Open a session from the start form.
    fn open_session(&mut self) {
        let Some(config) = self.form.to_config() else {
            return;
        };
        match Session::open(config) {
            Ok(session) => {
                self.session = Some(session);
                self.load_error = None;
                self.image = None;
            }
            Err(e) => {
                log::error!("Failed to open captions: {}", e);
                self.load_error = Some(e.to_string());
            }
        }
    }

    /// End the current session, offering to save pending edits.
    /// End the current session. Returns `false` if it has to stay open
    /// because saving its pending edits failed.
    fn close_session(&mut self) -> bool {
        if let Some(session) = self.session.as_mut() {
            if !session.dispatch(Command::Close, &mut self.dialogs) {
                return false;
            }
        }
        self.session = None;
        self.image = None;
        self.goto_input.clear();
        true
    }

    /// Reload the texture when the displayed filename changed.
    fn refresh_image(&mut self, ctx: &egui::Context) {
        let Some(session) = &self.session else {
            return;
        };
        let name = session.current_name();
        if self.image.as_ref().is_some_and(|image| image.name == name) {
            return;
        }

        let mut displayed = DisplayedImage {
            name: name.to_string(),
            texture: None,
            size: (0, 0),
            note: None,
        };
        match media::load_image(&session.config().image_dir, name) {
            Ok(Some(loaded)) => {
                let size = [loaded.width as usize, loaded.height as usize];
                let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &loaded.pixels);
                displayed.texture = Some(ctx.load_texture(name, color_image, egui::TextureOptions::LINEAR));
                displayed.size = (loaded.width, loaded.height);
            }
            Ok(None) => {
                displayed.note = Some(format!("Image not found: {name}"));
            }
            Err(e) => {
                log::warn!("{}", e);
                displayed.note = Some(e.to_string());
            }
        }
        self.image = Some(displayed);
    }

    fn show_menu(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    let has_session = self.session.is_some();
                    if ui.add_enabled(has_session, egui::Button::new("Save (Ctrl+S)")).clicked() {
                        if let Some(session) = self.session.as_mut() {
                            session.dispatch(Command::Save, &mut self.dialogs);
                        }
                        ui.close_menu();
                    }
                    if ui.add_enabled(has_session, egui::Button::new("Close Captions File")).clicked() {
                        self.close_session();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });
    }
}

impl eframe::App for CaptionApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.viewport().close_requested()) {
            if self.close_session() {
                return;
            }
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
        }

        self.show_menu(ctx);

        let Some(session) = self.session.as_mut() else {
            let open = egui::CentralPanel::default()
                .show(ctx, |ui| {
                    start_screen::show(ui, &mut self.form, self.load_error.as_deref())
                })
                .inner;
            if open {
                self.open_session();
            }
            return;
        };

        let mut commands = Vec::new();

        // Keyboard shortcuts
        ctx.input_mut(|i| {
            if i.consume_key(egui::Modifiers::COMMAND, egui::Key::S) {
                commands.push(Command::Save);
            }
            if i.consume_key(egui::Modifiers::ALT, egui::Key::ArrowLeft) {
                commands.push(Command::Previous);
            }
            if i.consume_key(egui::Modifiers::ALT, egui::Key::ArrowRight) {
                commands.push(Command::Next);
            }
        });

        if let Some(command) = egui::TopBottomPanel::bottom("navigation")
            .show(ctx, |ui| navigation::show(ui, session, &mut self.goto_input))
            .inner
        {
            commands.push(command);
        }

        let editor = egui::SidePanel::right("caption_editor")
            .default_width(420.0)
            .min_width(280.0)
            .show(ctx, |ui| caption_editor::show(ui, session.draft_mut()))
            .inner;
        if editor.edited {
            session.touch();
        }
        commands.extend(editor.command);

        egui::CentralPanel::default().show(ctx, |ui| {
            image_pane::show(ui, self.image.as_ref());
        });

        for command in commands {
            session.dispatch(command, &mut self.dialogs);
        }

        self.refresh_image(ctx);
    }
}
