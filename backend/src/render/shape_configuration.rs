//! Per-feature styling callback.

use std::sync::Mutex;

use common::{
    geometry::GeometryKind,
    properties::PropertyMap,
    style::{Color, Offset, PlacemarkAttributes, ShapeAttributes, StyleAttributes, StyleConfiguration},
};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::config::FeedConfig;

pub const PLACEMARK_IMAGE_SCALE: f64 = 0.05;
pub const POPULATION_SCALE_FACTOR: f64 = 0.01;
pub const LINE_OUTLINE_WIDTH: f64 = 2.0;

/// Maps a feature's geometry kind and properties to its visual style.
pub trait ShapeConfigurator: Send + Sync + 'static {
    fn configure(&self, kind: GeometryKind, properties: &PropertyMap) -> StyleConfiguration;
}

pub struct MeteoriteShapeConfigurator {
    placemark_attributes: PlacemarkAttributes,
    rng: Mutex<StdRng>,
}

impl MeteoriteShapeConfigurator {
    pub fn new(config: &FeedConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Deterministic pastel colours.
    pub fn with_seed(config: &FeedConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: &FeedConfig, rng: StdRng) -> Self {
        let placemark_attributes = PlacemarkAttributes {
            image_scale: PLACEMARK_IMAGE_SCALE,
            image_color: Color::WHITE,
            label_offset: Offset::fraction(0.5, 1.5),
            image_source: Some(format!("{}images/white-dot.png", config.image_base_url)),
        };
        Self { placemark_attributes, rng: Mutex::new(rng) }
    }

    pub fn placemark_attributes(&self) -> &PlacemarkAttributes {
        &self.placemark_attributes
    }

    fn point_style(&self, properties: &PropertyMap) -> StyleConfiguration {
        let mut attributes = self.placemark_attributes.clone();
        if let Some(population) = properties.number("POP_MAX") {
            attributes.image_scale = POPULATION_SCALE_FACTOR * population.ln();
        }
        StyleConfiguration {
            attributes: Some(StyleAttributes::Placemark(attributes)),
            name: properties.text_ignore_case("name"),
        }
    }

    fn line_style(&self) -> StyleConfiguration {
        let mut attributes = ShapeAttributes::default();
        let interior = attributes.interior_color;
        attributes.draw_outline = true;
        attributes.outline_color = Color::new(0.1 * interior.red, 0.3 * interior.green, 0.7 * interior.blue, 1.0);
        attributes.outline_width = LINE_OUTLINE_WIDTH;
        StyleConfiguration { attributes: Some(StyleAttributes::Shape(attributes)), name: None }
    }

    fn polygon_style(&self) -> StyleConfiguration {
        let mut attributes = ShapeAttributes::default();
        let interior = {
            let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
            Color::new(
                0.375 + 0.5 * rng.random::<f64>(),
                0.375 + 0.5 * rng.random::<f64>(),
                0.375 + 0.5 * rng.random::<f64>(),
                0.5,
            )
        };
        attributes.interior_color = interior;
        // darker variant of the interior
        attributes.outline_color = Color::new(0.5 * interior.red, 0.5 * interior.green, 0.5 * interior.blue, 1.0);
        StyleConfiguration { attributes: Some(StyleAttributes::Shape(attributes)), name: None }
    }
}

impl ShapeConfigurator for MeteoriteShapeConfigurator {
    fn configure(&self, kind: GeometryKind, properties: &PropertyMap) -> StyleConfiguration {
        if kind.is_point_type() {
            self.point_style(properties)
        } else if kind.is_line_string_type() {
            self.line_style()
        } else if kind.is_polygon_type() {
            self.polygon_style()
        } else {
            StyleConfiguration::default()
        }
    }
}
