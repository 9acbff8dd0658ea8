use serde::{Deserialize, Serialize};
use std::fmt;

/// A point on the globe, in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

impl Position {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// True when latitude is within [-90, 90] and longitude within [-180, 180].
    pub fn is_in_bounds(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// A resolved, labeled point ready for plotting and distance computation.
///
/// Only the resolver builds these, and only from input that resolved
/// successfully.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub label: String,
    pub position: Position,
}

impl Waypoint {
    pub fn new(label: impl Into<String>, position: Position) -> Self {
        Self {
            label: label.into(),
            position,
        }
    }

    /// Label used for coordinate rows, e.g. `(16.5,80.6)`.
    pub fn coordinate_label(position: Position) -> String {
        // `+ 0.0` turns -0 into 0
        format!("({},{})", position.latitude + 0.0, position.longitude + 0.0)
    }
}

impl fmt::Display for Waypoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Which kind of rows a whole input set is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Coords,
    Places,
}

/// One user-entered row, exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawInputRow {
    Coordinate { lat_text: String, lng_text: String },
    Place { place_text: String },
}

impl RawInputRow {
    pub fn coordinate(lat_text: impl Into<String>, lng_text: impl Into<String>) -> Self {
        RawInputRow::Coordinate {
            lat_text: lat_text.into(),
            lng_text: lng_text.into(),
        }
    }

    pub fn place(place_text: impl Into<String>) -> Self {
        RawInputRow::Place {
            place_text: place_text.into(),
        }
    }

    pub fn mode(&self) -> InputMode {
        match self {
            RawInputRow::Coordinate { .. } => InputMode::Coords,
            RawInputRow::Place { .. } => InputMode::Places,
        }
    }
}
