//! Design Panel (Center)
//!
//! Read-only view of the current design:
//! - Canvas section: size, flexible flag, title
//! - Elements section: one row per element, in z-order

use iced::widget::{column, container, row, rule, scrollable, text, Column, Space};
use iced::{Alignment, Element, Length, Padding};

use designer_core::design::{GuiDesign, GuiElement};

use crate::Message;

/// Render the design panel
pub fn view_design_panel(design: &GuiDesign) -> Element<'_, Message> {
    let canvas = &design.canvas;
    let mut panel_content: Column<'_, Message> = column![].spacing(2);

    // ===== Canvas Section =====
    panel_content = panel_content.push(text("Canvas").size(12));
    panel_content = panel_content.push(
        column![
            text(format!("Title: {}", canvas.title)).size(10),
            text(format!("Size: {} x {}", canvas.width, canvas.height)).size(10),
            text(format!("Flexible: {}", if canvas.flexible { "yes" } else { "no" })).size(10),
        ]
        .spacing(2)
        .padding(Padding::from([4, 16])),
    );

    panel_content = panel_content.push(rule::horizontal(1));

    // ===== Elements Section =====
    panel_content = panel_content.push(text(format!("Elements ({})", design.element_count())).size(12));

    if design.elements.is_empty() {
        panel_content = panel_content.push(
            container(text("No elements").size(10).color([0.5, 0.5, 0.5])).padding(Padding::from([4, 16])),
        );
    } else {
        for element in &design.elements {
            panel_content = panel_content.push(view_element_row(element));
        }
    }

    container(scrollable(panel_content.padding(8)))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(5)
        .into()
}

fn view_element_row(element: &GuiElement) -> Element<'_, Message> {
    let label = if element.name.is_empty() {
        element.id.clone()
    } else {
        format!("{} ({})", element.name, element.id)
    };

    row![
        text(element.element_type.as_str()).size(10).width(Length::Fixed(90.0)),
        text(label).size(10),
        Space::new().width(Length::Fill),
        text(format!(
            "@ {}, {}  {} x {}",
            element.x, element.y, element.width, element.height
        ))
        .size(10)
        .color([0.5, 0.5, 0.5]),
    ]
    .padding(Padding::from([2, 16]))
    .align_y(Alignment::Center)
    .into()
}
