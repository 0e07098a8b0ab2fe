//! Toolbar component
//!
//! Contains the file operations: New, Open, Save, Save As, Export JSON, Export XML.

use iced::widget::{button, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use crate::Message;

/// Render the application header with the window title
pub fn view_header(window_title: String) -> Element<'static, Message> {
    row![
        text("DKST GUI Designer").size(24),
        Space::new().width(Length::Fill),
        text(window_title).size(14),
    ]
    .align_y(Alignment::Center)
    .into()
}

fn file_button(label: &'static str, message: Message) -> iced::widget::Button<'static, Message> {
    button(text(label).size(11))
        .on_press(message)
        .padding(Padding::from([4, 8]))
        .style(button::secondary)
}

/// Render the toolbar with file operations
pub fn view_toolbar() -> Element<'static, Message> {
    let file_buttons = row![
        file_button("New", Message::NewDesign),
        file_button("Open", Message::OpenDesign),
        file_button("Save", Message::SaveDesign),
        file_button("Save As", Message::SaveDesignAs),
    ]
    .spacing(4);

    let export_buttons = row![
        file_button("Export JSON", Message::ExportJson).style(button::primary),
        file_button("Export XML", Message::ExportXml).style(button::primary),
    ]
    .spacing(4);

    row![file_buttons, Space::new().width(Length::Fill), export_buttons]
        .padding(Padding::from([4, 0]))
        .align_y(Alignment::Center)
        .into()
}
