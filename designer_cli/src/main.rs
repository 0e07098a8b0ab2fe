//! # DKST GUI Designer CLI
//!
//! Headless front end over `designer_core`. Each subcommand drives the same
//! store operations as the desktop app; the file dialogs are answered with
//! the paths given on the command line.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use designer_core::{DesignStore, DesignerConfig, GuiDesign, GuiElement, ScriptedDialogs};

#[derive(Parser)]
#[command(name = "designer_cli", version, about = "Create, inspect and export GUI design files")]
struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a new, empty design
    New {
        /// Output file (.guidesign)
        #[arg(value_name = "OUT")]
        out: PathBuf,

        /// Canvas title
        #[arg(long)]
        title: Option<String>,
    },

    /// Print a design's canvas and elements
    Show {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print the design as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Export a design as indented JSON
    ExportJson {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        #[arg(value_name = "OUT")]
        out: PathBuf,
    },

    /// Export a design as XML
    ExportXml {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        #[arg(value_name = "OUT")]
        out: PathBuf,
    },

    /// Append an element to a design and save it in place
    Add {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Component type, e.g. button, input, label
        #[arg(long = "type", value_name = "TYPE")]
        element_type: String,

        /// Element ID (generated when omitted)
        #[arg(long)]
        id: Option<String>,

        #[arg(long, default_value = "")]
        name: String,

        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        x: i64,

        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        y: i64,

        #[arg(long, default_value_t = 100)]
        width: i64,

        #[arg(long, default_value_t = 40)]
        height: i64,

        /// Text property
        #[arg(long)]
        text: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = DesignerConfig::load(cli.config.as_deref()).context("Failed to load config")?;

    // Logs go to stderr so `show --json` output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut store = DesignStore::with_file_names(config.files.clone());

    match cli.command {
        Command::New { out, title } => {
            let mut design = store.new_design();
            if let Some(title) = title {
                design.canvas.title = title;
            }
            store.set_design(design);
            let path = require(store.save_design(&mut ScriptedDialogs::answering(&out)), "save")?;
            println!("Created {}", path.display());
        }
        Command::Show { file, json } => {
            let design = load(&mut store, &file)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&design)?);
            } else {
                print_summary(&file, &design);
            }
        }
        Command::ExportJson { file, out } => {
            load(&mut store, &file)?;
            let path = require(store.export_json(&mut ScriptedDialogs::answering(&out)), "JSON export")?;
            println!("Exported {}", path.display());
        }
        Command::ExportXml { file, out } => {
            load(&mut store, &file)?;
            let path = require(store.export_xml(&mut ScriptedDialogs::answering(&out)), "XML export")?;
            println!("Exported {}", path.display());
        }
        Command::Add {
            file,
            element_type,
            id,
            name,
            x,
            y,
            width,
            height,
            text,
        } => {
            let mut design = load(&mut store, &file)?;
            let id = id.unwrap_or_else(|| format!("elem_{}", Uuid::new_v4().simple()));

            let mut element = GuiElement::new(&id, element_type).named(name).at(x, y).sized(width, height);
            if let Some(text) = text {
                element = element.with_text(text);
            }
            design.elements.push(element);
            store.set_design(design);

            // The load remembered the path, so this never prompts
            let path = require(store.save_design(&mut ScriptedDialogs::new()), "save")?;
            println!("Added {} to {}", id, path.display());
        }
    }

    Ok(())
}

fn load(store: &mut DesignStore, file: &Path) -> Result<GuiDesign> {
    let design = store
        .load_design(&mut ScriptedDialogs::answering(file))
        .with_context(|| format!("Failed to load {}", file.display()))?;
    match design {
        Some(design) => Ok(design),
        None => bail!("No design loaded from {}", file.display()),
    }
}

/// Scripted dialogs always answer, so `None` would mean nothing was written.
fn require<E>(result: Result<Option<PathBuf>, E>, operation: &str) -> Result<PathBuf>
where
    E: std::error::Error + Send + Sync + 'static,
{
    match result.with_context(|| format!("{} failed", operation))? {
        Some(path) => Ok(path),
        None => bail!("{} was cancelled", operation),
    }
}

fn print_summary(file: &Path, design: &GuiDesign) {
    let canvas = &design.canvas;
    println!("{}", file.display());
    println!("═══════════════════════════════════════");
    println!(
        "  Canvas: \"{}\" {}x{}{}",
        canvas.title,
        canvas.width,
        canvas.height,
        if canvas.flexible { " (flexible)" } else { "" }
    );
    println!("  Elements: {}", design.element_count());
    println!("═══════════════════════════════════════");

    for (index, element) in design.elements.iter().enumerate() {
        println!(
            "  {:>3}. {:<12} {:<16} @ ({}, {}) {}x{}  {}",
            index + 1,
            element.element_type,
            element.id,
            element.x,
            element.y,
            element.width,
            element.height,
            element.name
        );
        for (key, value) in element.properties.present() {
            println!("       {}: {}", key, value);
        }
    }
}
