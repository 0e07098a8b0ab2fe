//! # DKST GUI Designer Desktop Application
//!
//! Window host for `designer_core`. The toolbar drives the store's file
//! operations through native dialogs; the center panel shows the design
//! being edited. Each action runs to completion inside `update`, so the
//! store only ever sees one caller at a time.

mod dialogs;
mod ui;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use iced::widget::column;
use iced::{window, Element, Size};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use designer_core::config::WindowConfig;
use designer_core::{DesignResult, DesignStore, DesignerConfig};

use crate::dialogs::NativeDialogs;

#[derive(Parser)]
#[command(name = "designer_gui", version, about = "DKST GUI Designer")]
struct Args {
    /// Config file (defaults to the platform config directory)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

/// Toolbar actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    NewDesign,
    OpenDesign,
    SaveDesign,
    SaveDesignAs,
    ExportJson,
    ExportXml,
}

/// Application state
pub struct App {
    store: DesignStore,
    dialogs: NativeDialogs,
    window: WindowConfig,
    status: String,
}

impl App {
    fn new(config: &DesignerConfig) -> Self {
        App {
            store: DesignStore::with_file_names(config.files.clone()),
            dialogs: NativeDialogs,
            window: config.window.clone(),
            status: "Ready".to_string(),
        }
    }

    fn title(&self) -> String {
        let file = self
            .store
            .current_file_path()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Untitled".to_string());
        format!("{} - {}", self.window.title, file)
    }

    fn update(&mut self, message: Message) {
        match message {
            Message::NewDesign => {
                self.store.new_design();
                self.status = "New design".to_string();
            }
            Message::OpenDesign => {
                let result = self
                    .store
                    .load_design(&mut self.dialogs)
                    .map(|loaded| loaded.and(self.store.current_file_path().map(Path::to_path_buf)));
                self.report_path(result, "Opened");
            }
            Message::SaveDesign => {
                let result = self.store.save_design(&mut self.dialogs);
                self.report_path(result, "Saved");
            }
            Message::SaveDesignAs => {
                let result = self.store.save_design_as(&mut self.dialogs);
                self.report_path(result, "Saved");
            }
            Message::ExportJson => {
                let result = self.store.export_json(&mut self.dialogs);
                self.report_path(result, "Exported JSON to");
            }
            Message::ExportXml => {
                let result = self.store.export_xml(&mut self.dialogs);
                self.report_path(result, "Exported XML to");
            }
        }
    }

    fn report_path(&mut self, result: DesignResult<Option<PathBuf>>, verb: &str) {
        match result {
            Ok(Some(path)) => {
                self.status = format!("{} {} at {}", verb, path.display(), Local::now().format("%H:%M:%S"));
            }
            Ok(None) => self.status = "Cancelled".to_string(),
            Err(e) => {
                error!(error = %e, code = e.error_code(), "file operation failed");
                self.status = format!("Error: {}", e);
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        column![
            ui::toolbar::view_header(self.title()),
            ui::toolbar::view_toolbar(),
            ui::design_panel::view_design_panel(self.store.design()),
            ui::status_bar::view_status_bar(
                self.store.current_file_path(),
                self.store.design().element_count(),
                &self.status,
            ),
        ]
        .spacing(4)
        .padding(8)
        .into()
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = DesignerConfig::load(args.config.as_deref()).context("Failed to load config")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .init();

    info!(title = %config.window.title, "starting designer");

    let window_settings = window::Settings {
        size: Size::new(config.window.width, config.window.height),
        min_size: Some(Size::new(config.window.min_width, config.window.min_height)),
        ..window::Settings::default()
    };

    iced::application(move || App::new(&config), App::update, App::view)
        .title(App::title)
        .window(window_settings)
        .run()
        .map_err(|e| anyhow::anyhow!("Designer window failed: {}", e))
}
