//! Native file dialogs via `rfd`.
//!
//! The dialogs block the UI thread until answered, the same way the
//! desktop host always treated them.

use std::path::PathBuf;

use designer_core::dialog::{FileDialogs, FileFilter, OpenDialogOptions, SaveDialogOptions};
use designer_core::errors::DesignResult;

/// [`FileDialogs`] backed by the platform's native dialogs
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeDialogs;

fn with_filters(mut dialog: rfd::FileDialog, filters: &[FileFilter]) -> rfd::FileDialog {
    for filter in filters {
        let extensions = filter.extensions();
        dialog = dialog.add_filter(filter.display_name.as_str(), extensions.as_slice());
    }
    dialog
}

impl FileDialogs for NativeDialogs {
    fn save_file(&mut self, options: &SaveDialogOptions) -> DesignResult<Option<PathBuf>> {
        let dialog = rfd::FileDialog::new()
            .set_title(options.title.as_str())
            .set_file_name(options.default_filename.as_str());
        Ok(with_filters(dialog, &options.filters).save_file())
    }

    fn open_file(&mut self, options: &OpenDialogOptions) -> DesignResult<Option<PathBuf>> {
        let dialog = rfd::FileDialog::new().set_title(options.title.as_str());
        Ok(with_filters(dialog, &options.filters).pick_file())
    }
}
