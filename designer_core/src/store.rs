//! # Design Store
//!
//! Holds the design being edited and the path it was last saved to or
//! loaded from. The store is an ordinary owned value: the host creates one
//! and passes it to whatever needs it. Nothing here is global.
//!
//! The file operations that prompt through dialogs live in
//! [`persistence`](crate::persistence); this module is the plain state.
//!
//! ## Example
//!
//! ```rust
//! use designer_core::design::GuiElement;
//! use designer_core::store::DesignStore;
//!
//! let mut store = DesignStore::new();
//!
//! let mut design = store.get_design();
//! design.elements.push(GuiElement::new("e1", "button"));
//! store.set_design(design);
//!
//! assert_eq!(store.design().element_count(), 1);
//! assert!(store.current_file_path().is_none());
//! ```

use std::path::{Path, PathBuf};

use crate::config::FileNames;
use crate::design::GuiDesign;

/// The current design plus its remembered path.
#[derive(Debug, Clone, Default)]
pub struct DesignStore {
    pub(crate) design: GuiDesign,

    /// Last successful save or load. `None` means the design is unsaved.
    pub(crate) current_file_path: Option<PathBuf>,

    /// Names the save and export dialogs are pre-filled with
    pub(crate) file_names: FileNames,
}

impl DesignStore {
    /// A store holding a new default design with no remembered path.
    pub fn new() -> Self {
        DesignStore::default()
    }

    /// Like [`new`](Self::new), with dialog file names from configuration.
    pub fn with_file_names(file_names: FileNames) -> Self {
        DesignStore {
            file_names,
            ..DesignStore::default()
        }
    }

    /// A copy of the current design.
    pub fn get_design(&self) -> GuiDesign {
        self.design.clone()
    }

    /// Borrow the current design.
    pub fn design(&self) -> &GuiDesign {
        &self.design
    }

    /// Replace the current design wholesale. No validation or merging is done,
    /// and the remembered path is kept.
    pub fn set_design(&mut self, design: GuiDesign) {
        self.design = design;
    }

    /// Reset to the default design and forget the remembered path.
    ///
    /// Returns a copy of the new design.
    pub fn new_design(&mut self) -> GuiDesign {
        self.design = GuiDesign::new_default();
        self.current_file_path = None;
        self.design.clone()
    }

    /// Path of the last successful save or load, if any.
    pub fn current_file_path(&self) -> Option<&Path> {
        self.current_file_path.as_deref()
    }

    pub fn file_names(&self) -> &FileNames {
        &self.file_names
    }
}
