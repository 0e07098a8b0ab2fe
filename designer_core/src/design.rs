//! # Design Data Structures
//!
//! The `GuiDesign` struct is the root document edited by the designer.
//! Designs serialize to `.guidesign` files as human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! GuiDesign
//! ├── canvas: CanvasConfig (size, flexible, title)
//! └── elements: Vec<GuiElement> (ordered; order is z-order)
//!     └── properties: ElementProperties (text, placeholder, options, style)
//! ```
//!
//! Nothing here is validated: element IDs need not be unique and geometry
//! may fall outside the canvas. The front-end owns those rules.
//!
//! ## Example
//!
//! ```rust
//! use designer_core::design::{GuiDesign, GuiElement};
//!
//! let mut design = GuiDesign::new_default();
//! design.elements.push(GuiElement::new("e1", "button").at(10, 20).sized(80, 30));
//!
//! let json = serde_json::to_string_pretty(&design).unwrap();
//! assert!(json.contains("\"type\": \"button\""));
//! ```

use serde::{Deserialize, Deserializer, Serialize};

/// Canvas width for a new design, in pixels
pub const DEFAULT_CANVAS_WIDTH: i64 = 800;

/// Canvas height for a new design, in pixels
pub const DEFAULT_CANVAS_HEIGHT: i64 = 600;

/// Canvas title for a new design
pub const DEFAULT_CANVAS_TITLE: &str = "New Design";

/// Canvas settings: the surface elements are placed on.
///
/// `Default` is the all-zero canvas a file without a `canvas` key loads as.
/// Use [`GuiDesign::new_default`] for the canvas of a fresh design.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Width in pixels
    pub width: i64,

    /// Height in pixels
    pub height: i64,

    /// Whether the canvas resizes with its window
    pub flexible: bool,

    /// Window title shown by the designed GUI
    pub title: String,
}

/// Free-form, component-specific properties.
///
/// An empty string means the property is not set; empty values are left out
/// of both JSON and XML output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementProperties {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub text: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub placeholder: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub options: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub style: String,
}

impl ElementProperties {
    /// Iterate over the properties that are set, in output order.
    pub fn present(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("text", self.text.as_str()),
            ("placeholder", self.placeholder.as_str()),
            ("options", self.options.as_str()),
            ("style", self.style.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
    }

    /// True when no property is set
    pub fn is_empty(&self) -> bool {
        self.present().next().is_none()
    }
}

/// A single placed GUI component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuiElement {
    /// Caller-assigned identifier (uniqueness is not enforced)
    pub id: String,

    /// Component type tag, e.g. "button" or "input" (open-ended)
    #[serde(rename = "type")]
    pub element_type: String,

    /// Display name
    pub name: String,

    pub description: String,

    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,

    pub properties: ElementProperties,
}

impl GuiElement {
    /// Create an element with the given ID and type tag at the origin with zero size.
    pub fn new(id: impl Into<String>, element_type: impl Into<String>) -> Self {
        GuiElement {
            id: id.into(),
            element_type: element_type.into(),
            ..GuiElement::default()
        }
    }

    /// Set the display name
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the position
    pub fn at(mut self, x: i64, y: i64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Set the size
    pub fn sized(mut self, width: i64, height: i64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the text property
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.properties.text = text.into();
        self
    }
}

/// Root design container.
///
/// This is the top-level struct that gets serialized to `.guidesign` files.
/// Elements are kept in a `Vec` because their order is the z-order and must
/// survive save/load unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuiDesign {
    #[serde(default)]
    pub canvas: CanvasConfig,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub elements: Vec<GuiElement>,
}

impl GuiDesign {
    /// Create the design every new document starts from: an 800x600 fixed
    /// canvas titled "New Design" with no elements.
    ///
    /// # Example
    ///
    /// ```rust
    /// use designer_core::design::GuiDesign;
    ///
    /// let design = GuiDesign::new_default();
    /// assert_eq!(design.canvas.width, 800);
    /// assert!(design.elements.is_empty());
    /// ```
    pub fn new_default() -> Self {
        GuiDesign {
            canvas: CanvasConfig {
                width: DEFAULT_CANVAS_WIDTH,
                height: DEFAULT_CANVAS_HEIGHT,
                flexible: false,
                title: DEFAULT_CANVAS_TITLE.to_string(),
            },
            elements: Vec::new(),
        }
    }

    /// Find the first element with the given ID.
    pub fn element(&self, id: &str) -> Option<&GuiElement> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }
}

impl Default for GuiDesign {
    fn default() -> Self {
        GuiDesign::new_default()
    }
}

/// Files written by older builds may carry `"elements": null`.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<GuiElement>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<GuiElement>>::deserialize(deserializer)?.unwrap_or_default())
}
