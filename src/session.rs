// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Editing session state and command dispatch.
//!
//! A [`Session`] owns everything the editor mutates: the caption store, the
//! navigation cursor, the working draft of the displayed record and the set
//! of changed files. The UI turns user actions into [`Command`]s and hands
//! them to [`Session::dispatch`] together with a [`Dialogs`] implementation,
//! which keeps the editor state machine independent of the toolkit.

use crate::error::{CaptionError, Result};
use crate::io::{resume, serialization};
use crate::models::{
    annotation::MarkKind, caption::CaptionRecord, cursor::Cursor, store::CaptionStore,
};
use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};

/// Where to start when no usable resume marker exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StartPolicy {
    /// First image whose caption is empty or whitespace.
    #[default]
    FirstUncaptioned,
    /// Always the first image.
    Beginning,
}

/// Choices made on the start screen.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub image_dir: PathBuf,
    pub captions_path: PathBuf,
    /// Edit `<stem>_edited.json` instead of the chosen file.
    pub work_on_copy: bool,
    pub start_policy: StartPolicy,
}

/// User-facing prompts and notifications.
pub trait Dialogs {
    /// Ask whether pending changes should be saved.
    fn confirm_save(&mut self) -> bool;
    fn info(&mut self, title: &str, message: &str);
    fn warn(&mut self, title: &str, message: &str);
    fn error(&mut self, title: &str, message: &str);
}

/// Actions the editor can request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Next,
    Previous,
    /// Jump to a 1-based image number typed by the user.
    Goto(String),
    Save,
    Mark(MarkKind),
    ClearMarks,
    Close,
}

/// Editor state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    Idle,
    Modified,
}

/// Working copy of the displayed record.
#[derive(Debug, Clone, Default)]
pub struct Draft {
    pub record: CaptionRecord,
    /// Current selection in the caption text as character offsets.
    pub selection: Option<(usize, usize)>,
}

/// Report written to the log when the window closes.
#[derive(Debug, Clone)]
pub struct SessionSummary {
    pub changed: Vec<String>,
    pub output_path: PathBuf,
    pub last_image: String,
}

impl fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.changed.is_empty() {
            write!(f, "Files changed: none")?;
        } else {
            write!(f, "Files changed: {}", self.changed.join(", "))?;
        }
        write!(
            f,
            "; changes saved to: {}; last image: {}",
            self.output_path.display(),
            self.last_image
        )
    }
}

/// Pick the starting index from the resume marker and start policy.
pub fn starting_index(store: &CaptionStore, marker: Option<&str>, policy: StartPolicy) -> usize {
    if let Some(index) = marker.and_then(|name| store.position_of(name)) {
        return index;
    }
    match policy {
        StartPolicy::FirstUncaptioned => store.first_uncaptioned().unwrap_or(0),
        StartPolicy::Beginning => 0,
    }
}

/// State of one editing session.
pub struct Session {
    config: SessionConfig,
    /// File that saves are written to.
    output_path: PathBuf,
    store: CaptionStore,
    cursor: Cursor,
    draft: Draft,
    state: EditorState,
    changed: BTreeSet<String>,
}

impl Session {
    /// Open the captions file named in `config` and position the cursor.
    pub fn open(config: SessionConfig) -> Result<Self> {
        let output_path = if config.work_on_copy {
            serialization::prepare_working_copy(&config.captions_path)?
        } else {
            config.captions_path.clone()
        };

        let store = serialization::load_captions(&output_path)?;
        let marker = resume::read_marker(&output_path);
        let start = starting_index(&store, marker.as_deref(), config.start_policy);
        let cursor =
            Cursor::new(start, store.len()).ok_or_else(|| CaptionError::NoCaptions(output_path.clone()))?;

        let mut session = Self {
            config,
            output_path,
            store,
            cursor,
            draft: Draft::default(),
            state: EditorState::Idle,
            changed: BTreeSet::new(),
        };
        session.reload_draft();
        log::info!(
            "Opened session at image {} of {} ({})",
            session.cursor.index() + 1,
            session.cursor.len(),
            session.current_name()
        );
        Ok(session)
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    #[cfg(test)]
    pub fn store(&self) -> &CaptionStore {
        &self.store
    }

    pub fn index(&self) -> usize {
        self.cursor.index()
    }

    pub fn len(&self) -> usize {
        self.cursor.len()
    }

    /// Filename of the displayed image.
    pub fn current_name(&self) -> &str {
        self.store.name_at(self.cursor.index()).unwrap_or_default()
    }

    #[cfg(test)]
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Mutable access for the text editors. Call [`Session::touch`] when the
    /// user changes any text.
    pub fn draft_mut(&mut self) -> &mut Draft {
        &mut self.draft
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn is_modified(&self) -> bool {
        self.state == EditorState::Modified
    }

    pub fn changed_files(&self) -> &BTreeSet<String> {
        &self.changed
    }

    /// Record that the draft was edited.
    pub fn touch(&mut self) {
        if self.state != EditorState::Modified {
            log::debug!("{} modified", self.current_name());
        }
        self.state = EditorState::Modified;
    }

    /// Run a command.
    ///
    /// Returns `false` when the command was rejected or could not complete:
    /// invalid jump input, an empty selection, or a save that failed. For
    /// [`Command::Close`], `false` means the session must stay open.
    pub fn dispatch(&mut self, command: Command, dialogs: &mut dyn Dialogs) -> bool {
        log::debug!("Dispatch {:?}", command);
        match command {
            Command::Next => self.navigate(dialogs, Cursor::next),
            Command::Previous => self.navigate(dialogs, Cursor::previous),
            Command::Goto(input) => {
                let mut target = self.cursor;
                match Cursor::parse_number(&input).and_then(|number| target.goto(number)) {
                    Ok(()) => self.navigate(dialogs, move |cursor| *cursor = target),
                    Err(e) => {
                        let title = match e {
                            CaptionError::InvalidNumber(_) => "Invalid Input",
                            _ => "Invalid Image Number",
                        };
                        dialogs.warn(title, &e.to_string());
                        false
                    }
                }
            }
            Command::Save => {
                let saved = self.save(dialogs);
                if saved {
                    dialogs.info("Success", "Annotations saved successfully!");
                }
                saved
            }
            Command::Mark(kind) => self.mark(kind),
            Command::ClearMarks => {
                self.draft.record.clear_marks();
                self.touch();
                true
            }
            Command::Close => self.close(dialogs),
        }
    }

    fn mark(&mut self, kind: MarkKind) -> bool {
        let Some((a, b)) = self.draft.selection else {
            return false;
        };
        if !self.draft.record.mark(a, b, kind) {
            return false;
        }
        log::info!("Marked {}..{} of {} as {:?}", a.min(b), a.max(b), self.current_name(), kind);
        self.touch();
        true
    }

    /// Write the draft into the store and flush everything to disk.
    ///
    /// Returns `false` if writing failed; the store entry is restored and the
    /// draft keeps the edits so the user can retry.
    fn save(&mut self, dialogs: &mut dyn Dialogs) -> bool {
        let name = self.current_name().to_string();
        let previous = self.store.get(&name).cloned();
        let differs = previous.as_ref() != Some(&self.draft.record);

        self.store.set(&name, self.draft.record.clone());
        if let Err(e) = serialization::save_captions(&self.store, &self.output_path) {
            log::error!("Failed to save captions: {}", e);
            if let Some(previous) = previous {
                self.store.set(&name, previous);
            }
            dialogs.error("Save Failed", &e.to_string());
            return false;
        }

        if differs {
            self.changed.insert(name.clone());
        }
        if let Err(e) = resume::write_marker(&self.output_path, &name) {
            log::warn!("Failed to update resume marker: {}", e);
            dialogs.warn(
                "Resume Marker",
                &format!("Captions were saved, but the resume position was not: {e}"),
            );
        }
        self.state = EditorState::Idle;
        true
    }

    /// Move the cursor with `step`, offering to save pending edits first.
    ///
    /// Declining drops the draft; the store still holds the last saved
    /// record. A failed save keeps the cursor where it is.
    fn navigate(&mut self, dialogs: &mut dyn Dialogs, step: impl FnOnce(&mut Cursor)) -> bool {
        if self.is_modified() {
            if dialogs.confirm_save() {
                if !self.save(dialogs) {
                    return false;
                }
            } else {
                log::info!("Discarded unsaved edits to {}", self.current_name());
            }
        }
        step(&mut self.cursor);
        self.reload_draft();
        log::debug!("Showing image {} of {}", self.cursor.index() + 1, self.cursor.len());
        true
    }

    fn reload_draft(&mut self) {
        self.draft = Draft {
            record: self.store.get(self.current_name()).cloned().unwrap_or_default(),
            selection: None,
        };
        self.state = EditorState::Idle;
    }

    /// Offer to save pending edits before the session ends.
    ///
    /// Returns `false` if the user chose to save and the save failed; the
    /// session then stays open with its edits.
    fn close(&mut self, dialogs: &mut dyn Dialogs) -> bool {
        if self.is_modified() && dialogs.confirm_save() && !self.save(dialogs) {
            log::warn!("Close refused: unsaved edits to {}", self.current_name());
            return false;
        }
        log::info!("{}", self.summary());
        true
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            changed: self.changed.iter().cloned().collect(),
            output_path: self.output_path.clone(),
            last_image: self.current_name().to_string(),
        }
    }
}
