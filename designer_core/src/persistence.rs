//! # Persistence Operations
//!
//! Save, Save As, Load and the two exports. Every operation has the same shape:
//!
//! 1. Ask the host for a path through [`FileDialogs`] (Save skips this when
//!    a path is already remembered).
//! 2. A cancelled dialog ends the operation with `Ok(None)`; nothing changes.
//! 3. Serialize (or read and parse) the design.
//! 4. Write (or read) the whole file. Any failure is returned as-is.
//! 5. Only after full success is the store updated.
//!
//! Exports never touch the remembered path: they are side artifacts, not the
//! working file.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::design::GuiDesign;
use crate::dialog::{FileDialogs, FileFilter, OpenDialogOptions, SaveDialogOptions};
use crate::errors::DesignResult;
use crate::file_io::{read_design, to_json_pretty, write_file, DESIGN_EXTENSION};
use crate::store::DesignStore;
use crate::xml_export::to_xml;

fn design_filter() -> FileFilter {
    FileFilter::new("GUI Design Files", format!("*.{}", DESIGN_EXTENSION))
}

fn json_filter() -> FileFilter {
    FileFilter::new("JSON Files", "*.json")
}

fn xml_filter() -> FileFilter {
    FileFilter::new("XML Files", "*.xml")
}

impl DesignStore {
    /// Options for the "Save Design" / "Save Design As" dialog
    pub fn save_dialog_options(&self, title: &str) -> SaveDialogOptions {
        SaveDialogOptions {
            title: title.to_string(),
            default_filename: self.file_names.design.clone(),
            filters: vec![design_filter()],
        }
    }

    /// Options for the "Open Design" dialog
    pub fn open_dialog_options(&self) -> OpenDialogOptions {
        OpenDialogOptions {
            title: "Open Design".to_string(),
            filters: vec![design_filter(), json_filter()],
        }
    }

    /// Options for the "Export as JSON" dialog
    pub fn json_export_options(&self) -> SaveDialogOptions {
        SaveDialogOptions {
            title: "Export as JSON".to_string(),
            default_filename: self.file_names.json_export.clone(),
            filters: vec![json_filter()],
        }
    }

    /// Options for the "Export as XML" dialog
    pub fn xml_export_options(&self) -> SaveDialogOptions {
        SaveDialogOptions {
            title: "Export as XML".to_string(),
            default_filename: self.file_names.xml_export.clone(),
            filters: vec![xml_filter()],
        }
    }

    /// Save the design.
    ///
    /// With a remembered path the file is rewritten in place and no dialog is
    /// shown. Otherwise this is [`save_design_as`](Self::save_design_as).
    ///
    /// Returns the path written, or `None` if the user cancelled.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use designer_core::dialog::ScriptedDialogs;
    /// use designer_core::store::DesignStore;
    ///
    /// let mut store = DesignStore::new();
    /// let mut dialogs = ScriptedDialogs::answering("login.guidesign");
    ///
    /// store.save_design(&mut dialogs)?; // prompts once
    /// store.save_design(&mut dialogs)?; // rewrites login.guidesign silently
    /// assert_eq!(dialogs.prompts().len(), 1);
    /// # Ok::<(), designer_core::errors::DesignError>(())
    /// ```
    pub fn save_design<D>(&mut self, dialogs: &mut D) -> DesignResult<Option<PathBuf>>
    where
        D: FileDialogs + ?Sized,
    {
        if let Some(path) = self.current_file_path.clone() {
            self.save_to_path(&path)?;
            return Ok(Some(path));
        }
        self.prompt_and_save(dialogs, "Save Design")
    }

    /// Always ask for a path, save there, and remember it.
    pub fn save_design_as<D>(&mut self, dialogs: &mut D) -> DesignResult<Option<PathBuf>>
    where
        D: FileDialogs + ?Sized,
    {
        self.prompt_and_save(dialogs, "Save Design As")
    }

    /// Ask for a `.guidesign` or `.json` file and make it the current design.
    ///
    /// On success the store holds the loaded design, the path is remembered,
    /// and a copy of the design is returned. On cancel or failure the store
    /// is unchanged.
    pub fn load_design<D>(&mut self, dialogs: &mut D) -> DesignResult<Option<GuiDesign>>
    where
        D: FileDialogs + ?Sized,
    {
        let options = self.open_dialog_options();
        let path = match dialogs.open_file(&options) {
            Ok(Some(path)) => path,
            Ok(None) => {
                debug!(title = %options.title, "dialog cancelled");
                return Ok(None);
            }
            Err(e) => {
                warn!(error = %e, "open dialog failed");
                return Err(e);
            }
        };

        let design = read_design(&path).inspect_err(|e| {
            warn!(path = %path.display(), error = %e, "failed to load design");
        })?;

        info!(
            path = %path.display(),
            elements = design.element_count(),
            "design loaded"
        );
        self.design = design.clone();
        self.current_file_path = Some(path);
        Ok(Some(design))
    }

    /// Export the current design as indented JSON. The remembered path is not changed.
    pub fn export_json<D>(&self, dialogs: &mut D) -> DesignResult<Option<PathBuf>>
    where
        D: FileDialogs + ?Sized,
    {
        let options = self.json_export_options();
        let Some(path) = prompt_save(dialogs, &options)? else {
            return Ok(None);
        };
        let json = to_json_pretty(&self.design)?;
        write_logged(&path, json.as_bytes(), "design exported as JSON")?;
        Ok(Some(path))
    }

    /// Export the current design as an XML document. The remembered path is not changed.
    pub fn export_xml<D>(&self, dialogs: &mut D) -> DesignResult<Option<PathBuf>>
    where
        D: FileDialogs + ?Sized,
    {
        let options = self.xml_export_options();
        let Some(path) = prompt_save(dialogs, &options)? else {
            return Ok(None);
        };
        let xml = to_xml(&self.design)?;
        write_logged(&path, xml.as_bytes(), "design exported as XML")?;
        Ok(Some(path))
    }

    fn prompt_and_save<D>(&mut self, dialogs: &mut D, title: &str) -> DesignResult<Option<PathBuf>>
    where
        D: FileDialogs + ?Sized,
    {
        let options = self.save_dialog_options(title);
        let Some(path) = prompt_save(dialogs, &options)? else {
            return Ok(None);
        };
        self.save_to_path(&path)?;
        self.current_file_path = Some(path.clone());
        Ok(Some(path))
    }

    fn save_to_path(&self, path: &Path) -> DesignResult<()> {
        let json = to_json_pretty(&self.design)?;
        write_logged(path, json.as_bytes(), "design saved")
    }
}

/// Show a save dialog, logging cancels and failures.
fn prompt_save<D>(dialogs: &mut D, options: &SaveDialogOptions) -> DesignResult<Option<PathBuf>>
where
    D: FileDialogs + ?Sized,
{
    match dialogs.save_file(options) {
        Ok(None) => {
            debug!(title = %options.title, "dialog cancelled");
            Ok(None)
        }
        Err(e) => {
            warn!(title = %options.title, error = %e, "save dialog failed");
            Err(e)
        }
        answer => answer,
    }
}

fn write_logged(path: &Path, bytes: &[u8], message: &str) -> DesignResult<()> {
    match write_file(path, bytes) {
        Ok(()) => {
            info!(path = %path.display(), bytes = bytes.len(), "{}", message);
            Ok(())
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "write failed");
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FileNames;
    use crate::design::{CanvasConfig, ElementProperties, GuiElement};
    use crate::dialog::{DialogAnswer, ScriptedDialogs};
    use std::env::temp_dir;
    use std::fs;

    fn temp_path(name: &str, ext: &str) -> PathBuf {
        temp_dir().join(format!("designer_persistence_{}_{}.{}", name, std::process::id(), ext))
    }

    fn edited_store() -> DesignStore {
        let mut store = DesignStore::new();
        let mut design = store.get_design();
        design.canvas.title = "Edited".to_string();
        design.elements.push(GuiElement::new("e1", "button").at(5, 5).sized(60, 20).with_text("Go"));
        store.set_design(design);
        store
    }

    #[test]
    fn test_save_prompts_then_reuses_remembered_path() {
        let path = temp_path("save_reuse", "guidesign");
        let mut store = edited_store();
        let mut dialogs = ScriptedDialogs::answering(&path);

        assert_eq!(store.save_design(&mut dialogs).unwrap(), Some(path.clone()));
        assert_eq!(store.current_file_path(), Some(path.as_path()));
        assert_eq!(dialogs.prompts(), ["Save Design"]);

        let mut design = store.get_design();
        design.canvas.width = 1024;
        store.set_design(design);

        // No answers queued: a prompt would cancel and return None
        assert_eq!(store.save_design(&mut dialogs).unwrap(), Some(path.clone()));
        assert_eq!(dialogs.prompts().len(), 1);
        assert_eq!(read_design(&path).unwrap().canvas.width, 1024);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_save_as_always_prompts() {
        let first = temp_path("save_as_first", "guidesign");
        let second = temp_path("save_as_second", "guidesign");
        let mut store = edited_store();

        let mut dialogs = ScriptedDialogs::new();
        dialogs
            .push(DialogAnswer::Path(first.clone()))
            .push(DialogAnswer::Path(second.clone()));

        store.save_design_as(&mut dialogs).unwrap();
        store.save_design_as(&mut dialogs).unwrap();

        assert_eq!(dialogs.prompts(), ["Save Design As", "Save Design As"]);
        assert_eq!(store.current_file_path(), Some(second.as_path()));
        assert!(first.exists() && second.exists());

        let _ = fs::remove_file(&first);
        let _ = fs::remove_file(&second);
    }

    #[test]
    fn test_cancel_leaves_state_unchanged() {
        let remembered = PathBuf::from("/nonexistent/remembered.guidesign");
        let mut store = edited_store();
        store.current_file_path = Some(remembered.clone());
        let before = store.get_design();

        let mut dialogs = ScriptedDialogs::new();
        for _ in 0..4 {
            dialogs.push(DialogAnswer::Cancel);
        }

        assert_eq!(store.save_design_as(&mut dialogs).unwrap(), None);
        assert_eq!(store.load_design(&mut dialogs).unwrap(), None);
        assert_eq!(store.export_json(&mut dialogs).unwrap(), None);
        assert_eq!(store.export_xml(&mut dialogs).unwrap(), None);

        assert_eq!(store.get_design(), before);
        assert_eq!(store.current_file_path(), Some(remembered.as_path()));
    }

    #[test]
    fn test_cancelled_first_save_stays_unsaved() {
        let mut store = edited_store();
        let mut dialogs = ScriptedDialogs::new();
        dialogs.push(DialogAnswer::Cancel);

        assert_eq!(store.save_design(&mut dialogs).unwrap(), None);
        assert_eq!(dialogs.prompts(), ["Save Design"]);
        assert!(store.current_file_path().is_none());
    }

    #[test]
    fn test_dialog_failure_is_returned() {
        let mut store = edited_store();
        let before = store.get_design();
        let mut dialogs = ScriptedDialogs::new();
        dialogs
            .push(DialogAnswer::Fail("no display".to_string()))
            .push(DialogAnswer::Fail("no display".to_string()));

        let err = store.save_design(&mut dialogs).unwrap_err();
        assert_eq!(err.error_code(), "DIALOG_ERROR");
        let err = store.load_design(&mut dialogs).unwrap_err();
        assert_eq!(err.error_code(), "DIALOG_ERROR");

        assert_eq!(store.get_design(), before);
        assert!(store.current_file_path().is_none());
    }

    #[test]
    fn test_failed_write_does_not_remember_path() {
        let bad = temp_dir()
            .join(format!("designer_missing_dir_{}", std::process::id()))
            .join("design.guidesign");
        let mut store = edited_store();
        let mut dialogs = ScriptedDialogs::answering(&bad);

        let err = store.save_design_as(&mut dialogs).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
        assert!(store.current_file_path().is_none());
    }

    #[test]
    fn test_load_example_file() {
        let path = temp_path("load_example", "json");
        fs::write(
            &path,
            r#"{"canvas":{"width":320,"height":240,"flexible":true,"title":"T"},"elements":[{"id":"e1","type":"button","name":"Btn","x":10,"y":20,"width":80,"height":30,"properties":{"text":"OK"}}]}"#,
        )
        .unwrap();

        let expected = GuiDesign {
            canvas: CanvasConfig {
                width: 320,
                height: 240,
                flexible: true,
                title: "T".to_string(),
            },
            elements: vec![GuiElement {
                id: "e1".to_string(),
                element_type: "button".to_string(),
                name: "Btn".to_string(),
                description: String::new(),
                x: 10,
                y: 20,
                width: 80,
                height: 30,
                properties: ElementProperties {
                    text: "OK".to_string(),
                    ..ElementProperties::default()
                },
            }],
        };

        let mut store = DesignStore::new();
        let mut dialogs = ScriptedDialogs::answering(&path);
        let loaded = store.load_design(&mut dialogs).unwrap();

        assert_eq!(loaded, Some(expected.clone()));
        assert_eq!(store.get_design(), expected);
        assert_eq!(store.current_file_path(), Some(path.as_path()));
        assert_eq!(dialogs.prompts(), ["Open Design"]);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_save_after_load_writes_loaded_file_without_prompt() {
        let path = temp_path("save_after_load", "guidesign");
        fs::write(&path, r#"{"canvas":{"width":320,"height":240,"title":"Loaded"},"elements":[]}"#).unwrap();

        let mut store = DesignStore::new();
        store.load_design(&mut ScriptedDialogs::answering(&path)).unwrap();

        let mut design = store.get_design();
        design.canvas.title = "Changed after load".to_string();
        design.elements.push(GuiElement::new("added", "label").with_text("Hi"));
        store.set_design(design.clone());

        let mut dialogs = ScriptedDialogs::new();
        assert_eq!(store.save_design(&mut dialogs).unwrap(), Some(path.clone()));
        assert!(dialogs.prompts().is_empty());
        assert_eq!(read_design(&path).unwrap(), design);
        assert_eq!(store.current_file_path(), Some(path.as_path()));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_invalid_file_keeps_state() {
        let path = temp_path("load_invalid", "guidesign");
        fs::write(&path, "<GUIDesign/>").unwrap();

        let mut store = edited_store();
        let before = store.get_design();
        let mut dialogs = ScriptedDialogs::answering(&path);

        let err = store.load_design(&mut dialogs).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
        assert_eq!(store.get_design(), before);
        assert!(store.current_file_path().is_none());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_exports_do_not_touch_remembered_path() {
        let json_path = temp_path("export", "json");
        let xml_path = temp_path("export", "xml");
        let mut store = edited_store();

        let mut dialogs = ScriptedDialogs::new();
        dialogs
            .push(DialogAnswer::Path(json_path.clone()))
            .push(DialogAnswer::Path(xml_path.clone()));

        assert_eq!(store.export_json(&mut dialogs).unwrap(), Some(json_path.clone()));
        assert_eq!(store.export_xml(&mut dialogs).unwrap(), Some(xml_path.clone()));
        assert_eq!(dialogs.prompts(), ["Export as JSON", "Export as XML"]);
        assert!(store.current_file_path().is_none());

        assert_eq!(read_design(&json_path).unwrap(), store.get_design());
        let xml = fs::read_to_string(&xml_path).unwrap();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<GUIDesign>"));
        assert!(xml.contains("<element id=\"e1\">"));

        // A later plain save still has to ask where to go
        store.new_design();
        let mut cancel = ScriptedDialogs::new();
        assert_eq!(store.save_design(&mut cancel).unwrap(), None);
        assert_eq!(cancel.prompts(), ["Save Design"]);

        let _ = fs::remove_file(&json_path);
        let _ = fs::remove_file(&xml_path);
    }

    #[test]
    fn test_dialog_options_use_configured_names() {
        let store = DesignStore::with_file_names(FileNames {
            design: "login.guidesign".to_string(),
            json_export: "login.json".to_string(),
            xml_export: "login.xml".to_string(),
        });

        let save = store.save_dialog_options("Save Design");
        assert_eq!(save.default_filename, "login.guidesign");
        assert_eq!(save.filters, vec![FileFilter::new("GUI Design Files", "*.guidesign")]);

        let open = store.open_dialog_options();
        assert_eq!(open.title, "Open Design");
        assert_eq!(open.filters.len(), 2);
        assert_eq!(open.filters[1].pattern, "*.json");

        assert_eq!(store.json_export_options().default_filename, "login.json");
        assert_eq!(store.xml_export_options().filters[0].display_name, "XML Files");
    }

    #[test]
    fn test_new_design_forgets_path_after_load() {
        let path = temp_path("new_after_load", "guidesign");
        let mut store = edited_store();
        let mut dialogs = ScriptedDialogs::answering(&path);
        store.save_design(&mut dialogs).unwrap();

        let mut dialogs = ScriptedDialogs::answering(&path);
        store.load_design(&mut dialogs).unwrap();
        assert!(store.current_file_path().is_some());

        store.new_design();
        assert!(store.current_file_path().is_none());
        assert_eq!(store.get_design(), GuiDesign::new_default());

        let _ = fs::remove_file(&path);
    }
}
