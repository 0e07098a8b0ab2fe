//! Status Bar (Bottom)
//!
//! Displays:
//! - Current file path
//! - Element count
//! - Status messages

use std::path::Path;

use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use crate::Message;

/// Render the status bar
pub fn view_status_bar<'a>(
    current_file: Option<&Path>,
    element_count: usize,
    status: &'a str,
) -> Element<'a, Message> {
    let file_info = match current_file {
        Some(path) => path.display().to_string(),
        None => "Untitled".to_string(),
    };

    row![
        text(file_info).size(10),
        text(format!("  {} element(s)", element_count)).size(10).color([0.5, 0.5, 0.5]),
        Space::new().width(Length::Fill),
        text(status).size(10),
    ]
    .padding(Padding::from([4, 0]))
    .into()
}
