//! Layout parameters and basic 2D types
//!
//! `DockLayout` is supplied once by the caller and never mutated by the core.

use serde::{Deserialize, Serialize};

use crate::error::{DockError, Result};

/// A 2D coordinate in logical units
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    #[inline]
    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Axis-aligned rectangle, origin at the top-left
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// True once the container has a usable (non-empty) size
    pub fn is_measured(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

fn default_item_size() -> f64 {
    64.0
}

fn default_spacing() -> f64 {
    12.0
}

fn default_magnification_factor() -> f64 {
    2.0
}

fn default_magnification_radius() -> f64 {
    150.0
}

fn default_padding() -> f64 {
    8.0
}

/// Dock layout parameters, in logical units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DockLayout {
    /// Nominal width and height of one item
    #[serde(default = "default_item_size")]
    pub item_size: f64,
    /// Gap between adjacent items
    #[serde(default = "default_spacing")]
    pub spacing: f64,
    /// Scale at distance 0 from the pointer. Values <= 1.0 disable magnification.
    #[serde(default = "default_magnification_factor")]
    pub magnification_factor: f64,
    /// Distance at which magnification falls off to 1.0
    #[serde(default = "default_magnification_radius")]
    pub magnification_radius: f64,
    /// Inset between the container edge and the first item
    #[serde(default = "default_padding")]
    pub padding: f64,
}

impl Default for DockLayout {
    fn default() -> Self {
        Self {
            item_size: default_item_size(),
            spacing: default_spacing(),
            magnification_factor: default_magnification_factor(),
            magnification_radius: default_magnification_radius(),
            padding: default_padding(),
        }
    }
}

impl DockLayout {
    /// Distance between the leading edges of two adjacent items
    #[inline]
    pub fn step(&self) -> f64 {
        self.item_size + self.spacing
    }

    /// Reject parameters the geometry cannot work with
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("item_size", self.item_size),
            ("spacing", self.spacing),
            ("magnification_factor", self.magnification_factor),
            ("magnification_radius", self.magnification_radius),
            ("padding", self.padding),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(DockError::InvalidLayout(format!("{} must be finite", name)));
        }
        if self.item_size <= 0.0 {
            return Err(DockError::InvalidLayout(format!(
                "item_size must be positive, got {}",
                self.item_size
            )));
        }
        if self.magnification_radius <= 0.0 {
            return Err(DockError::InvalidLayout(format!(
                "magnification_radius must be positive, got {}",
                self.magnification_radius
            )));
        }
        if self.spacing < 0.0 || self.padding < 0.0 {
            return Err(DockError::InvalidLayout(
                "spacing and padding must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}
