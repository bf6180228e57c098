//! Visual attributes handed to the renderer along with each feature.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    pub const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);

    pub const fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self { red, green, blue, alpha }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OffsetUnit {
    Fraction,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Offset {
    pub x_unit: OffsetUnit,
    pub x: f64,
    pub y_unit: OffsetUnit,
    pub y: f64,
}

impl Offset {
    pub fn fraction(x: f64, y: f64) -> Self {
        Self { x_unit: OffsetUnit::Fraction, x, y_unit: OffsetUnit::Fraction, y }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacemarkAttributes {
    pub image_scale: f64,
    pub image_color: Color,
    pub label_offset: Offset,
    pub image_source: Option<String>,
}

impl Default for PlacemarkAttributes {
    fn default() -> Self {
        Self {
            image_scale: 1.0,
            image_color: Color::WHITE,
            label_offset: Offset::fraction(0.5, 0.0),
            image_source: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeAttributes {
    pub draw_interior: bool,
    pub draw_outline: bool,
    pub interior_color: Color,
    pub outline_color: Color,
    pub outline_width: f64,
}

impl Default for ShapeAttributes {
    fn default() -> Self {
        Self {
            draw_interior: true,
            draw_outline: true,
            interior_color: Color::WHITE,
            outline_color: Color::RED,
            outline_width: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StyleAttributes {
    Placemark(PlacemarkAttributes),
    Shape(ShapeAttributes),
}

/// Per-feature result of the styling callback. `None` attributes leave the
/// renderer defaults in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StyleConfiguration {
    pub attributes: Option<StyleAttributes>,
    pub name: Option<String>,
}
