//! # Designer Configuration
//!
//! Optional `config.toml` read at startup by both front ends. Every key has
//! a default, so a missing file or a partial file is fine:
//!
//! ```toml
//! [window]
//! title = "DKST GUI Designer"
//! width = 1400
//! height = 900
//!
//! [files]
//! design = "design.guidesign"
//! json_export = "gui_design.json"
//! xml_export = "gui_design.xml"
//!
//! [logging]
//! filter = "info"
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{DesignError, DesignResult};

/// Directory name under the platform config directory
pub const CONFIG_DIR_NAME: &str = "dkst-gui-designer";

/// Config file name inside [`CONFIG_DIR_NAME`]
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignerConfig {
    pub window: WindowConfig,
    pub files: FileNames,
    pub logging: LoggingConfig,
}

/// Desktop window settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
    pub min_width: f32,
    pub min_height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            title: "DKST GUI Designer".to_string(),
            width: 1400.0,
            height: 900.0,
            min_width: 1024.0,
            min_height: 768.0,
        }
    }
}

/// File names the save and export dialogs are pre-filled with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileNames {
    pub design: String,
    pub json_export: String,
    pub xml_export: String,
}

impl Default for FileNames {
    fn default() -> Self {
        FileNames {
            design: "design.guidesign".to_string(),
            json_export: "gui_design.json".to_string(),
            xml_export: "gui_design.xml".to_string(),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive, used when `RUST_LOG` is unset
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            filter: "info".to_string(),
        }
    }
}

impl DesignerConfig {
    /// Default location: `<config dir>/dkst-gui-designer/config.toml`.
    ///
    /// `None` when the platform has no config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load from `path`, or from [`default_path`](Self::default_path) when
    /// `path` is `None`. A file that does not exist yields the defaults.
    pub fn load(path: Option<&Path>) -> DesignResult<Self> {
        let path = match path.map(Path::to_path_buf).or_else(Self::default_path) {
            Some(path) => path,
            None => return Ok(DesignerConfig::default()),
        };

        match fs::read_to_string(&path) {
            Ok(contents) => Self::from_toml_str(&contents)
                .map_err(|reason| DesignError::config(path.display().to_string(), reason)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(DesignerConfig::default()),
            Err(e) => Err(DesignError::file_error("read config", path.display().to_string(), e.to_string())),
        }
    }

    /// Parse TOML text, returning the parser's message on failure.
    pub fn from_toml_str(contents: &str) -> Result<Self, String> {
        toml::from_str(contents).map_err(|e| e.to_string())
    }
}
