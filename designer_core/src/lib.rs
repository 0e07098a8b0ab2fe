//! # designer_core - GUI Design Document Engine
//!
//! `designer_core` is the backend of the DKST GUI Designer. It holds the
//! design being edited (a canvas plus an ordered list of placed elements),
//! and saves, loads and exports it. Rendering and editing happen in a
//! front end; this crate only owns the document.
//!
//! ## Design Philosophy
//!
//! - **Explicit state**: one [`DesignStore`] value, owned and passed by the host
//! - **Dialogs at the edge**: file prompts go through the [`FileDialogs`] trait
//! - **Cancel is not failure**: a dismissed dialog returns `Ok(None)`
//! - **All-or-nothing**: the store changes only after a fully successful read or write
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use designer_core::dialog::ScriptedDialogs;
//! use designer_core::store::DesignStore;
//!
//! let mut store = DesignStore::new();
//! let mut dialogs = ScriptedDialogs::answering("login.guidesign");
//!
//! if let Some(path) = store.save_design(&mut dialogs)? {
//!     println!("saved to {}", path.display());
//! }
//! # Ok::<(), designer_core::errors::DesignError>(())
//! ```
//!
//! ## Modules
//!
//! - [`design`] - Canvas, element and design data structures
//! - [`store`] - The current design and its remembered path
//! - [`persistence`] - Save, Save As, Load, Export JSON, Export XML
//! - [`dialog`] - The file dialog boundary
//! - [`file_io`] - Whole-file reads and writes
//! - [`xml_export`] - XML rendering
//! - [`config`] - `config.toml` settings
//! - [`errors`] - Structured error types

pub mod config;
pub mod design;
pub mod dialog;
pub mod errors;
pub mod file_io;
pub mod persistence;
pub mod store;
pub mod xml_export;

// Re-export commonly used types at crate root for convenience
pub use config::{DesignerConfig, FileNames};
pub use design::{CanvasConfig, ElementProperties, GuiDesign, GuiElement};
pub use dialog::{DialogAnswer, FileDialogs, FileFilter, OpenDialogOptions, SaveDialogOptions, ScriptedDialogs};
pub use errors::{DesignError, DesignResult};
pub use store::DesignStore;
