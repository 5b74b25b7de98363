//! Item model: the default prize record and strip orientation.
//!
//! The engine is generic over the caller's item type and never inspects
//! item contents; it selects and repeats items by position only. `Prize` is
//! the record used by the demo and by JSON item files. `Label` is the one
//! capability the default renderers need.

#[cfg(test)]
#[path = "item_test.rs"]
mod item_test;

use serde::{Deserialize, Serialize};

/// A selectable entry on the strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prize {
    /// Unique identifier, used for identity only.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Optional image URL for hosts that draw one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Opaque caller payload.
    #[serde(default)]
    pub value: serde_json::Value,
}

impl Prize {
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self { id: id.into(), label: label.into(), image: None, value: serde_json::Value::Null }
    }
}

/// Access to an item's display label, used by the default renderers.
pub trait Label {
    fn label(&self) -> &str;
}

impl Label for Prize {
    fn label(&self) -> &str {
        &self.label
    }
}

impl Label for String {
    fn label(&self) -> &str {
        self
    }
}

impl Label for &str {
    fn label(&self) -> &str {
        self
    }
}

/// Axis the strip scrolls along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Items laid out left to right; the container width is the viewport.
    #[default]
    Horizontal,
    /// Items stacked top to bottom; the container height is the viewport.
    Vertical,
}

impl Orientation {
    /// Pick the container extent along this axis from a `(width, height)` pair.
    #[must_use]
    pub fn extent(self, width: f64, height: f64) -> f64 {
        match self {
            Self::Horizontal => width,
            Self::Vertical => height,
        }
    }
}
