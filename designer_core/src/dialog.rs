//! # File Dialog Boundary
//!
//! Persistence operations ask the host for a path through [`FileDialogs`].
//! The desktop app answers with native dialogs; the CLI and the tests
//! answer with [`ScriptedDialogs`].
//!
//! A dialog returns `Ok(None)` when the user cancels. `Err` is reserved for
//! the host failing to show the dialog at all.

use std::collections::VecDeque;
use std::path::PathBuf;

use crate::errors::{DesignError, DesignResult};

/// A named file-type filter, e.g. `("JSON Files", "*.json")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFilter {
    pub display_name: String,
    /// Semicolon-separated glob patterns such as `*.json` or `*.png;*.jpg`
    pub pattern: String,
}

impl FileFilter {
    pub fn new(display_name: impl Into<String>, pattern: impl Into<String>) -> Self {
        FileFilter {
            display_name: display_name.into(),
            pattern: pattern.into(),
        }
    }

    /// Bare extensions for dialog crates that take `["json"]` rather than `*.json`.
    ///
    /// ```rust
    /// use designer_core::dialog::FileFilter;
    ///
    /// let filter = FileFilter::new("Images", "*.png; *.JPG");
    /// assert_eq!(filter.extensions(), vec!["png", "JPG"]);
    /// ```
    pub fn extensions(&self) -> Vec<&str> {
        self.pattern
            .split(';')
            .map(str::trim)
            .map(|p| p.trim_start_matches('*').trim_start_matches('.'))
            .filter(|ext| !ext.is_empty() && *ext != "*")
            .collect()
    }
}

/// Options for a save dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveDialogOptions {
    pub title: String,
    pub default_filename: String,
    pub filters: Vec<FileFilter>,
}

/// Options for an open dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenDialogOptions {
    pub title: String,
    pub filters: Vec<FileFilter>,
}

/// The host's file dialogs. Calls block until the user answers.
pub trait FileDialogs {
    /// Ask for a path to write to. `Ok(None)` means the user cancelled.
    fn save_file(&mut self, options: &SaveDialogOptions) -> DesignResult<Option<PathBuf>>;

    /// Ask for an existing file to read. `Ok(None)` means the user cancelled.
    fn open_file(&mut self, options: &OpenDialogOptions) -> DesignResult<Option<PathBuf>>;
}

/// A prepared answer for [`ScriptedDialogs`]
#[derive(Debug, Clone, PartialEq)]
pub enum DialogAnswer {
    /// The user picked this path
    Path(PathBuf),
    /// The user dismissed the dialog
    Cancel,
    /// The host failed to show the dialog
    Fail(String),
}

/// Dialogs that replay prepared answers in order.
///
/// Every prompt is recorded by title, so callers can check whether a dialog
/// was shown. Running out of answers counts as a cancel.
#[derive(Debug, Default)]
pub struct ScriptedDialogs {
    answers: VecDeque<DialogAnswer>,
    prompts: Vec<String>,
}

impl ScriptedDialogs {
    pub fn new() -> Self {
        ScriptedDialogs::default()
    }

    /// Dialogs that answer the next prompt with `path`.
    pub fn answering(path: impl Into<PathBuf>) -> Self {
        let mut dialogs = ScriptedDialogs::new();
        dialogs.push(DialogAnswer::Path(path.into()));
        dialogs
    }

    /// Queue another answer
    pub fn push(&mut self, answer: DialogAnswer) -> &mut Self {
        self.answers.push_back(answer);
        self
    }

    /// Titles of every dialog shown so far, oldest first
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Answers not yet consumed
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn answer(&mut self, title: &str) -> DesignResult<Option<PathBuf>> {
        self.prompts.push(title.to_string());
        match self.answers.pop_front() {
            Some(DialogAnswer::Path(path)) => Ok(Some(path)),
            Some(DialogAnswer::Cancel) | None => Ok(None),
            Some(DialogAnswer::Fail(reason)) => Err(DesignError::dialog(title, reason)),
        }
    }
}

impl FileDialogs for ScriptedDialogs {
    fn save_file(&mut self, options: &SaveDialogOptions) -> DesignResult<Option<PathBuf>> {
        self.answer(&options.title)
    }

    fn open_file(&mut self, options: &OpenDialogOptions) -> DesignResult<Option<PathBuf>> {
        self.answer(&options.title)
    }
}
