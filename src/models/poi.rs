// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Point-of-interest model and tag map.

use std::collections::BTreeMap;

use geo::Point;
use serde::{Deserialize, Serialize};

use crate::models::PoiCategory;

/// String-keyed POI metadata map.
///
/// Keys the engine understands: `fee`, `stars`/`rating`,
/// `internet_access`/`wifi`, `power_supply`/`electricity`,
/// `pet_friendly`/`dogs`, `open_now`/`opening_hours`. Everything else is
/// carried through untouched for the presentation layer.
pub type Tags = BTreeMap<String, TagValue>;

/// A single tag value.
///
/// Upstream data mixes booleans, numbers and free-form strings for the same
/// keys, so the engine parses on read instead of at the boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl TagValue {
    /// Numeric view of the value.
    ///
    /// Numeric strings parse; anything else (including `"free"`, `"varies"`)
    /// is treated as absent, never as an error.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            TagValue::Number(n) => Some(*n),
            TagValue::Text(s) => s.trim().parse::<f64>().ok(),
            TagValue::Bool(_) => None,
        }
    }

    /// Whether the value affirms a boolean amenity (`true`, `"yes"`, `"true"`).
    pub fn is_truthy(&self) -> bool {
        match self {
            TagValue::Bool(b) => *b,
            TagValue::Text(s) => matches!(s.trim(), "yes" | "true"),
            TagValue::Number(_) => false,
        }
    }
}

impl From<&str> for TagValue {
    fn from(s: &str) -> Self {
        TagValue::Text(s.to_string())
    }
}

impl From<f64> for TagValue {
    fn from(n: f64) -> Self {
        TagValue::Number(n)
    }
}

impl From<bool> for TagValue {
    fn from(b: bool) -> Self {
        TagValue::Bool(b)
    }
}

/// A discoverable point of interest.
///
/// Owned by the POI source; the engine only reads these, attaching
/// `distance_from_user` as the single computed field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Poi {
    /// Source-assigned unique ID
    pub id: String,
    /// Category tag
    pub category: PoiCategory,
    /// Display name, if the source has one
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,
    /// Latitude (WGS84 degrees)
    pub latitude: f64,
    /// Longitude (WGS84 degrees)
    pub longitude: f64,
    /// Metadata tags
    #[serde(default)]
    pub tags: Tags,
    /// Great-circle distance from the user (km); computed, not persisted
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub distance_from_user: Option<f64>,
}

impl Poi {
    /// Look up a tag value by key.
    pub fn tag(&self, key: &str) -> Option<&TagValue> {
        self.tags.get(key)
    }

    /// Look up the first present tag among alias keys.
    pub fn first_tag(&self, keys: &[&str]) -> Option<&TagValue> {
        keys.iter().find_map(|k| self.tags.get(*k))
    }

    /// Position as a geo point (x = longitude, y = latitude).
    pub fn point(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }
}

/// User location from the location provider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserLocation {
    pub latitude: f64,
    pub longitude: f64,
}

impl UserLocation {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Position as a geo point (x = longitude, y = latitude).
    pub fn point(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }
}
