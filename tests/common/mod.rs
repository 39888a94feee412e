// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use velopoi::models::{TagValue, Tags};
use velopoi::{Poi, PoiCategory};

/// Build a POI at the origin with no tags.
#[allow(dead_code)]
pub fn make_poi(id: &str, category: PoiCategory) -> Poi {
    make_poi_at(id, category, 0.0, 0.0)
}

/// Build a POI at a position with no tags.
#[allow(dead_code)]
pub fn make_poi_at(id: &str, category: PoiCategory, latitude: f64, longitude: f64) -> Poi {
    Poi {
        id: id.to_string(),
        category,
        name: Some(format!("Test POI {}", id)),
        latitude,
        longitude,
        tags: Tags::new(),
        distance_from_user: None,
    }
}

/// Attach tags to a POI.
#[allow(dead_code)]
pub fn with_tags(mut poi: Poi, tags: &[(&str, TagValue)]) -> Poi {
    for (key, value) in tags {
        poi.tags.insert(key.to_string(), value.clone());
    }
    poi
}
