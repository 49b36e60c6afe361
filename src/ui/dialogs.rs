// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Native message boxes.

use crate::session::Dialogs;
use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

/// [`Dialogs`] backed by blocking native message boxes.
#[derive(Default)]
pub struct NativeDialogs;

fn message(level: MessageLevel, title: &str, description: &str) {
    MessageDialog::new()
        .set_level(level)
        .set_title(title)
        .set_description(description)
        .set_buttons(MessageButtons::Ok)
        .show();
}

impl Dialogs for NativeDialogs {
    fn confirm_save(&mut self) -> bool {
        let result = MessageDialog::new()
            .set_level(MessageLevel::Info)
            .set_title("Save Changes")
            .set_description("Do you want to save the changes?")
            .set_buttons(MessageButtons::YesNo)
            .show();
        matches!(result, MessageDialogResult::Yes)
    }

    fn info(&mut self, title: &str, message_text: &str) {
        message(MessageLevel::Info, title, message_text);
    }

    fn warn(&mut self, title: &str, message_text: &str) {
        message(MessageLevel::Warning, title, message_text);
    }

    fn error(&mut self, title: &str, message_text: &str) {
        message(MessageLevel::Error, title, message_text);
    }
}
