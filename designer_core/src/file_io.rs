//! # File I/O Module
//!
//! Whole-file reads and writes for designs and exports.
//!
//! ## File Format
//!
//! Designs are saved as `.guidesign` files containing two-space indented
//! JSON (`{"canvas": {...}, "elements": [...]}`). Plain `.json` files with the
//! same shape load the same way.
//!
//! Writes open the target in place and truncate it, so symlinks keep
//! pointing at the same file and an existing file keeps its permissions.
//! On Unix a newly created file is world-readable and owner-writable (0644).
//! A write that fails halfway can leave the file truncated.
//!
//! ## Example
//!
//! ```rust,no_run
//! use designer_core::design::GuiDesign;
//! use designer_core::file_io::{read_design, save_design_file};
//! use std::path::Path;
//!
//! let design = GuiDesign::new_default();
//! let path = Path::new("login.guidesign");
//!
//! save_design_file(&design, path)?;
//! let loaded = read_design(path)?;
//! assert_eq!(loaded, design);
//! # Ok::<(), designer_core::errors::DesignError>(())
//! ```

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::design::GuiDesign;
use crate::errors::{DesignError, DesignResult};

/// Extension of native design files
pub const DESIGN_EXTENSION: &str = "guidesign";

/// Serialize a design to two-space indented JSON.
pub fn to_json_pretty(design: &GuiDesign) -> DesignResult<String> {
    serde_json::to_string_pretty(design).map_err(|e| DesignError::serialization("json", e.to_string()))
}

/// Write `bytes` to `path`, replacing the contents of any existing file.
pub fn write_file(path: &Path, bytes: &[u8]) -> DesignResult<()> {
    let mut file = create_file(path).map_err(|e| {
        DesignError::file_error("open for writing", path.display().to_string(), e.to_string())
    })?;

    file.write_all(bytes).map_err(|e| {
        DesignError::file_error("write", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}

/// Save a design as indented JSON.
pub fn save_design_file(design: &GuiDesign, path: &Path) -> DesignResult<()> {
    let json = to_json_pretty(design)?;
    write_file(path, json.as_bytes())
}

/// Load a design from a `.guidesign` or `.json` file.
///
/// # Returns
///
/// * `Ok(GuiDesign)` - Successfully loaded design
/// * `Err(DesignError::SerializationError)` - Invalid JSON
/// * `Err(DesignError::FileError)` - I/O error
pub fn read_design(path: &Path) -> DesignResult<GuiDesign> {
    let contents = fs::read(path).map_err(|e| {
        DesignError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    serde_json::from_slice(&contents).map_err(|e| {
        DesignError::serialization("json", format!("Invalid JSON in {}: {}", path.display(), e))
    })
}

/// Existing files keep their mode; new ones get 0644 minus the umask.
#[cfg(unix)]
fn create_file(path: &Path) -> std::io::Result<File> {
    use std::os::unix::fs::OpenOptionsExt;

    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o644)
        .open(path)
}

#[cfg(not(unix))]
fn create_file(path: &Path) -> std::io::Result<File> {
    OpenOptions::new().write(true).create(true).truncate(true).open(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::GuiElement;
    use std::env::temp_dir;
    use std::path::PathBuf;

    fn temp_design_path(name: &str) -> PathBuf {
        temp_dir().join(format!("designer_file_io_{}_{}.guidesign", name, std::process::id()))
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_design_path("roundtrip");

        let mut design = GuiDesign::new_default();
        design.elements.push(GuiElement::new("e1", "button").at(1, 2).sized(3, 4).with_text("OK"));
        design.elements.push(GuiElement::new("e0", "label"));
        save_design_file(&design, &path).unwrap();

        let loaded = read_design(&path).unwrap();
        assert_eq!(loaded, design);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_saved_json_is_two_space_indented() {
        let path = temp_design_path("indent");
        save_design_file(&GuiDesign::new_default(), &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("{\n  \"canvas\": {\n    \"width\": 800,"));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_write_replaces_contents() {
        let path = temp_design_path("overwrite");
        write_file(&path, b"a much longer first write").unwrap();
        write_file(&path, b"second").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"second");

        let _ = fs::remove_file(&path);
    }

    #[cfg(unix)]
    #[test]
    fn test_new_file_mode() {
        use std::os::unix::fs::PermissionsExt;

        let path = temp_design_path("mode");
        write_file(&path, b"{}").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        // umask can only remove bits
        assert_eq!(mode & !0o644, 0);
        assert_ne!(mode & 0o600, 0);

        let _ = fs::remove_file(&path);
    }

    #[cfg(unix)]
    #[test]
    fn test_save_through_symlink_keeps_link_and_mode() {
        use std::os::unix::fs::{symlink, PermissionsExt};

        let target = temp_design_path("link_target");
        let link = temp_design_path("link");
        let _ = fs::remove_file(&link);

        fs::write(&target, "{}").unwrap();
        fs::set_permissions(&target, fs::Permissions::from_mode(0o600)).unwrap();
        symlink(&target, &link).unwrap();

        let mut design = GuiDesign::new_default();
        design.canvas.title = "Through link".to_string();
        save_design_file(&design, &link).unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(read_design(&target).unwrap(), design);
        assert_eq!(fs::metadata(&target).unwrap().permissions().mode() & 0o777, 0o600);

        design.canvas.title = "Direct".to_string();
        save_design_file(&design, &target).unwrap();
        assert_eq!(read_design(&link).unwrap().canvas.title, "Direct");
        assert_eq!(fs::metadata(&target).unwrap().permissions().mode() & 0o777, 0o600);

        let _ = fs::remove_file(&link);
        let _ = fs::remove_file(&target);
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_design(&temp_design_path("missing_never_written")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_read_invalid_json() {
        let path = temp_design_path("invalid");
        fs::write(&path, "{ not json").unwrap();

        let err = read_design(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_read_invalid_utf8() {
        let path = temp_design_path("invalid_utf8");
        fs::write(&path, [b'{', b'"', 0xff, 0xfe, b'"', b':', b'1', b'}']).unwrap();

        let err = read_design(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");

        let _ = fs::remove_file(&path);
    }
}
