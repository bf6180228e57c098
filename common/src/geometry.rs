//! GeoJSON feature model as served by the meteorite feed.

use serde::{Deserialize, Serialize};

use crate::properties::PropertyMap;

pub type Position = Vec<f64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeometryKind {
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
    GeometryCollection,
}

impl GeometryKind {
    pub fn is_point_type(&self) -> bool {
        matches!(self, GeometryKind::Point | GeometryKind::MultiPoint)
    }

    pub fn is_line_string_type(&self) -> bool {
        matches!(self, GeometryKind::LineString | GeometryKind::MultiLineString)
    }

    pub fn is_polygon_type(&self) -> bool {
        matches!(self, GeometryKind::Polygon | GeometryKind::MultiPolygon)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FeedGeometry {
    Point { coordinates: Position },
    MultiPoint { coordinates: Vec<Position> },
    LineString { coordinates: Vec<Position> },
    MultiLineString { coordinates: Vec<Vec<Position>> },
    Polygon { coordinates: Vec<Vec<Position>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<Position>>> },
    GeometryCollection { geometries: Vec<FeedGeometry> },
}

impl FeedGeometry {
    pub fn kind(&self) -> GeometryKind {
        match self {
            FeedGeometry::Point { .. } => GeometryKind::Point,
            FeedGeometry::MultiPoint { .. } => GeometryKind::MultiPoint,
            FeedGeometry::LineString { .. } => GeometryKind::LineString,
            FeedGeometry::MultiLineString { .. } => GeometryKind::MultiLineString,
            FeedGeometry::Polygon { .. } => GeometryKind::Polygon,
            FeedGeometry::MultiPolygon { .. } => GeometryKind::MultiPolygon,
            FeedGeometry::GeometryCollection { .. } => GeometryKind::GeometryCollection,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedFeature {
    // records without a known landing site come back with a null geometry
    #[serde(default)]
    pub geometry: Option<FeedGeometry>,
    #[serde(default)]
    pub properties: PropertyMap,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FeedFeatureCollection {
    #[serde(default)]
    pub features: Vec<FeedFeature>,
}
