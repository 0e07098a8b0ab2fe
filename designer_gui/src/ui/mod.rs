//! UI module for the designer window
//!
//! # Panel Structure
//! - `toolbar` - Header and file operations (New, Open, Save, Save As, Export JSON, Export XML)
//! - `design_panel` - Read-only canvas summary and element list
//! - `status_bar` - Current file, element count, status messages

pub mod design_panel;
pub mod status_bar;
pub mod toolbar;
