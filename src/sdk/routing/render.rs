//! Rendering collaborators fed with the final waypoint list.
//!
//! The core only hands over ordered waypoints; drawing them is up to the
//! renderer. [`GeoJsonRenderer`] emits what a web map needs: one marker per
//! waypoint, the connecting line, and the bounds to fit the viewport to.

use super::types::Waypoint;
use serde_json::{json, Value};

pub trait MapRenderer {
    type Output;

    fn render(&self, waypoints: &[Waypoint]) -> Self::Output;
}

/// Axis-aligned bounds in GeoJSON order: `[west, south, east, north]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl Bounds {
    pub fn fit(waypoints: &[Waypoint]) -> Option<Self> {
        let first = waypoints.first()?.position;
        let start = Bounds {
            west: first.longitude,
            south: first.latitude,
            east: first.longitude,
            north: first.latitude,
        };
        Some(waypoints.iter().skip(1).fold(start, |b, w| Bounds {
            west: b.west.min(w.position.longitude),
            south: b.south.min(w.position.latitude),
            east: b.east.max(w.position.longitude),
            north: b.north.max(w.position.latitude),
        }))
    }

    /// Grows each side by `fraction` of the span on that axis.
    pub fn padded(self, fraction: f64) -> Self {
        let d_lng = (self.east - self.west) * fraction;
        let d_lat = (self.north - self.south) * fraction;
        Bounds {
            west: self.west - d_lng,
            south: self.south - d_lat,
            east: self.east + d_lng,
            north: self.north + d_lat,
        }
    }

    pub fn to_bbox(self) -> [f64; 4] {
        [self.west, self.south, self.east, self.north]
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GeoJsonRenderer {
    pub padding: f64,
}

impl MapRenderer for GeoJsonRenderer {
    type Output = Value;

    fn render(&self, waypoints: &[Waypoint]) -> Value {
        let mut features: Vec<Value> = waypoints
            .iter()
            .map(|w| {
                json!({
                    "type": "Feature",
                    "geometry": {
                        "type": "Point",
                        "coordinates": [w.position.longitude, w.position.latitude],
                    },
                    "properties": { "label": w.label },
                })
            })
            .collect();

        if waypoints.len() > 1 {
            let line: Vec<[f64; 2]> = waypoints
                .iter()
                .map(|w| [w.position.longitude, w.position.latitude])
                .collect();
            features.push(json!({
                "type": "Feature",
                "geometry": { "type": "LineString", "coordinates": line },
                "properties": { "kind": "route" },
            }));
        }

        let mut collection = json!({
            "type": "FeatureCollection",
            "features": features,
        });
        if let Some(bounds) = Bounds::fit(waypoints) {
            collection["bbox"] = json!(bounds.padded(self.padding).to_bbox());
        }
        collection
    }
}
