// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! POI catalog loading and viewport queries.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use geo::{Contains, Rect};
use geojson::GeoJson;

use crate::models::{Poi, PoiCategory, TagValue, Tags};

/// An in-memory POI catalog backed by a GeoJSON document.
///
/// Document order is the relevance order later preserved by
/// `SortOption::Relevance`. Fetching and caching of the document itself is
/// the data source's concern; the catalog consumes what it is given.
#[derive(Debug, Default, Clone)]
pub struct PoiCatalog {
    pois: Vec<Poi>,
}

impl PoiCatalog {
    /// Load a catalog from a GeoJSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let json_data =
            fs::read_to_string(path.as_ref()).map_err(|e| CatalogError::IoError(e.to_string()))?;
        Self::load_from_json(&json_data)
    }

    /// Load a catalog from a GeoJSON string.
    ///
    /// Point features with a known `category` property become POIs; features
    /// without a category or without point geometry are skipped. A category
    /// string the taxonomy does not know aborts the load: that is an
    /// upstream data bug, not something to paper over.
    pub fn load_from_json(json_data: &str) -> Result<Self, CatalogError> {
        let geojson: GeoJson = json_data
            .parse()
            .map_err(|e: geojson::Error| CatalogError::ParseError(e.to_string()))?;

        let mut pois = Vec::new();

        if let GeoJson::FeatureCollection(collection) = geojson {
            for (index, feature) in collection.features.into_iter().enumerate() {
                let Some((longitude, latitude)) = point_of(feature.geometry.as_ref()) else {
                    tracing::warn!(index, "Skipping feature without point geometry");
                    continue;
                };

                let Some(category_str) = feature.property("category").and_then(|v| v.as_str())
                else {
                    tracing::warn!(index, "Skipping feature without category");
                    continue;
                };
                let category = PoiCategory::from_str(category_str)?;

                let id = feature
                    .property("id")
                    .and_then(|v| v.as_str())
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("poi-{}", index));

                let name = feature
                    .property("name")
                    .and_then(|v| v.as_str())
                    .map(str::to_string);

                let tags = collect_tags(feature.properties.as_ref());

                pois.push(Poi {
                    id,
                    category,
                    name,
                    latitude,
                    longitude,
                    tags,
                    distance_from_user: None,
                });
            }
        }

        tracing::info!(count = pois.len(), "Loaded POI catalog");
        Ok(Self { pois })
    }

    /// All POIs in document (relevance) order.
    pub fn pois(&self) -> &[Poi] {
        &self.pois
    }

    /// POIs inside a viewport, in relevance order.
    pub fn pois_within(&self, bounds: &Rect<f64>) -> Vec<Poi> {
        self.pois
            .iter()
            .filter(|poi| bounds.contains(&poi.point()))
            .cloned()
            .collect()
    }
}

/// Extract (longitude, latitude) from a point geometry.
fn point_of(geometry: Option<&geojson::Geometry>) -> Option<(f64, f64)> {
    match geometry.map(|g| &g.value) {
        Some(geojson::Value::Point(coords)) if coords.len() >= 2 => Some((coords[0], coords[1])),
        _ => None,
    }
}

/// Collect non-reserved properties into the POI tag map.
fn collect_tags(properties: Option<&geojson::JsonObject>) -> Tags {
    let mut tags = Tags::new();
    let Some(properties) = properties else {
        return tags;
    };
    for (key, value) in properties {
        if matches!(key.as_str(), "id" | "category" | "name") {
            continue;
        }
        let tag = match value {
            serde_json::Value::Bool(b) => TagValue::Bool(*b),
            serde_json::Value::Number(n) => match n.as_f64() {
                Some(f) => TagValue::Number(f),
                None => continue,
            },
            serde_json::Value::String(s) => TagValue::Text(s.clone()),
            // Nested structures carry no filterable signal
            _ => continue,
        };
        tags.insert(key.clone(), tag);
    }
    tags
}

/// Errors from catalog operations.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read file: {0}")]
    IoError(String),

    #[error("Failed to parse GeoJSON: {0}")]
    ParseError(String),

    #[error(transparent)]
    Category(#[from] crate::error::EngineError),
}
