use std::fmt;

use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in page-relative coordinates.
///
/// Coordinates are normalized to the page (typically in `[0, 1]`) with `y`
/// growing downward, so smaller `y` values are closer to the top.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl BoundingBox {
    /// Horizontal center of the box.
    pub fn x_avg(&self) -> f64 {
        (self.x_min + self.x_max) / 2.0
    }

    /// Vertical center of the box.
    pub fn y_avg(&self) -> f64 {
        (self.y_min + self.y_max) / 2.0
    }

    pub fn is_finite(&self) -> bool {
        self.x_min.is_finite()
            && self.x_max.is_finite()
            && self.y_min.is_finite()
            && self.y_max.is_finite()
    }
}

/// A single recognized word and where it sits on the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordBox {
    pub text: String,
    pub bbox: BoundingBox,
}

impl WordBox {
    pub fn new(text: impl Into<String>, bbox: BoundingBox) -> Self {
        WordBox {
            text: text.into(),
            bbox,
        }
    }
}

/// First and last name found after a title marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientName {
    pub first_name: String,
    pub last_name: String,
}

impl PatientName {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        PatientName {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

impl fmt::Display for PatientName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

/// A [`PatientName`] together with where it was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameMatch {
    #[serde(flatten)]
    pub name: PatientName,
    /// Zero-based index of the line the name was read from.
    pub line: usize,
    /// The marker that introduced the name.
    pub marker: String,
}
