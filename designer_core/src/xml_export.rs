//! # XML Export
//!
//! Renders a design as an XML document for tools that do not read JSON:
//!
//! ```text
//! <?xml version="1.0" encoding="UTF-8"?>
//! <GUIDesign>
//!   <canvas>
//!     <width>800</width>
//!     ...
//!   </canvas>
//!   <elements>
//!     <element id="e1">
//!       <type>button</type>
//!       ...
//!       <properties>
//!         <text>OK</text>
//!       </properties>
//!     </element>
//!   </elements>
//! </GUIDesign>
//! ```
//!
//! `<elements>` is left out entirely for a design without elements, and
//! unset properties are left out of `<properties>`.

use std::fmt::Display;

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::design::{CanvasConfig, GuiDesign, GuiElement};
use crate::errors::{DesignError, DesignResult};

/// Declaration written before the root element
pub const XML_HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// Name of the document's root element
pub const ROOT_ELEMENT: &str = "GUIDesign";

/// Render `design` as an indented XML document, declaration included.
///
/// # Example
///
/// ```rust
/// use designer_core::design::GuiDesign;
/// use designer_core::xml_export::to_xml;
///
/// let xml = to_xml(&GuiDesign::new_default()).unwrap();
/// assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<GUIDesign>"));
/// assert!(xml.contains("<title>New Design</title>"));
/// ```
pub fn to_xml(design: &GuiDesign) -> DesignResult<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    emit(&mut writer, Event::Start(BytesStart::new(ROOT_ELEMENT)))?;
    write_canvas(&mut writer, &design.canvas)?;

    if !design.elements.is_empty() {
        emit(&mut writer, Event::Start(BytesStart::new("elements")))?;
        for element in &design.elements {
            write_element(&mut writer, element)?;
        }
        emit(&mut writer, Event::End(BytesEnd::new("elements")))?;
    }

    emit(&mut writer, Event::End(BytesEnd::new(ROOT_ELEMENT)))?;

    let body = String::from_utf8(writer.into_inner())
        .map_err(|e| DesignError::serialization("xml", e.to_string()))?;

    let mut document = String::with_capacity(XML_HEADER.len() + body.len());
    document.push_str(XML_HEADER);
    document.push_str(&body);
    Ok(document)
}

fn write_canvas(writer: &mut Writer<Vec<u8>>, canvas: &CanvasConfig) -> DesignResult<()> {
    emit(writer, Event::Start(BytesStart::new("canvas")))?;
    write_leaf(writer, "width", canvas.width)?;
    write_leaf(writer, "height", canvas.height)?;
    write_leaf(writer, "flexible", canvas.flexible)?;
    write_leaf(writer, "title", &canvas.title)?;
    emit(writer, Event::End(BytesEnd::new("canvas")))
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &GuiElement) -> DesignResult<()> {
    let mut start = BytesStart::new("element");
    start.push_attribute(("id", element.id.as_str()));
    emit(writer, Event::Start(start))?;

    write_leaf(writer, "type", &element.element_type)?;
    write_leaf(writer, "name", &element.name)?;
    write_leaf(writer, "description", &element.description)?;
    write_leaf(writer, "x", element.x)?;
    write_leaf(writer, "y", element.y)?;
    write_leaf(writer, "width", element.width)?;
    write_leaf(writer, "height", element.height)?;

    emit(writer, Event::Start(BytesStart::new("properties")))?;
    if element.properties.is_empty() {
        // keeps </properties> on the same line as its start tag
        emit(writer, Event::Text(BytesText::new("")))?;
    }
    for (name, value) in element.properties.present() {
        write_leaf(writer, name, value)?;
    }
    emit(writer, Event::End(BytesEnd::new("properties")))?;

    emit(writer, Event::End(BytesEnd::new("element")))
}

/// `<name>value</name>` on one line. Empty values still produce both tags.
fn write_leaf(writer: &mut Writer<Vec<u8>>, name: &str, value: impl Display) -> DesignResult<()> {
    let text = value.to_string();
    emit(writer, Event::Start(BytesStart::new(name)))?;
    emit(writer, Event::Text(BytesText::new(&text)))?;
    emit(writer, Event::End(BytesEnd::new(name)))
}

fn emit(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> DesignResult<()> {
    writer
        .write_event(event)
        .map_err(|e| DesignError::serialization("xml", e.to_string()))
}
