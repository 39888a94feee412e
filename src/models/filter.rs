// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Filter state value type and its pure transformations.
//!
//! The engine never holds a `FilterState` of its own; the embedding store
//! owns the current value, applies setters on user interaction and passes
//! the result back into `project()`.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::PoiCategory;

/// Default search radius (km).
pub const DEFAULT_MAX_DISTANCE_KM: f64 = 20.0;

/// Boolean amenity dimensions of a [`FilterState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BooleanDimension {
    Electricity,
    Wifi,
    PetFriendly,
    OpenNow,
}

/// Current filter selections.
///
/// `None` on an optional field means "no constraint on this dimension",
/// which is distinct from `Some(false)` / `Some(0.0)` (an active
/// constraint). All setters are pure: they consume the state and return the
/// updated value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    /// Selected categories; empty means all categories pass
    pub categories: HashSet<PoiCategory>,
    /// Search radius around the user (km), always > 0
    pub max_distance_km: f64,
    /// Whether matches are drawn on the map (presentation toggle)
    pub show_on_map: bool,
    /// Price ceiling (same currency unit as the `fee` tag)
    pub max_price: Option<f64>,
    /// Minimum rating floor (same scale as the `stars`/`rating` tag)
    pub min_rating: Option<f64>,
    pub has_electricity: Option<bool>,
    pub has_wifi: Option<bool>,
    pub is_pet_friendly: Option<bool>,
    pub is_open_now: Option<bool>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            categories: HashSet::new(),
            max_distance_km: DEFAULT_MAX_DISTANCE_KM,
            show_on_map: true,
            max_price: None,
            min_rating: None,
            has_electricity: None,
            has_wifi: None,
            is_pet_friendly: None,
            is_open_now: None,
        }
    }
}

impl FilterState {
    /// The canonical default state (all constraints off).
    pub fn clear() -> Self {
        Self::default()
    }

    /// Add the category if absent, remove it if present.
    #[must_use]
    pub fn toggle_category(mut self, category: PoiCategory) -> Self {
        if !self.categories.remove(&category) {
            self.categories.insert(category);
        }
        self
    }

    #[must_use]
    pub fn set_max_price(mut self, max_price: Option<f64>) -> Self {
        self.max_price = max_price;
        self
    }

    #[must_use]
    pub fn set_min_rating(mut self, min_rating: Option<f64>) -> Self {
        self.min_rating = min_rating;
        self
    }

    /// Set the search radius. Non-positive input falls back to the default
    /// so the radius invariant holds across every state the engine sees.
    #[must_use]
    pub fn set_max_distance(mut self, km: f64) -> Self {
        self.max_distance_km = if km > 0.0 {
            km
        } else {
            DEFAULT_MAX_DISTANCE_KM
        };
        self
    }

    #[must_use]
    pub fn set_show_on_map(mut self, show_on_map: bool) -> Self {
        self.show_on_map = show_on_map;
        self
    }

    #[must_use]
    pub fn set_boolean(mut self, dimension: BooleanDimension, value: Option<bool>) -> Self {
        match dimension {
            BooleanDimension::Electricity => self.has_electricity = value,
            BooleanDimension::Wifi => self.has_wifi = value,
            BooleanDimension::PetFriendly => self.is_pet_friendly = value,
            BooleanDimension::OpenNow => self.is_open_now = value,
        }
        self
    }

    /// Current constraint value for a boolean dimension.
    pub fn boolean(&self, dimension: BooleanDimension) -> Option<bool> {
        match dimension {
            BooleanDimension::Electricity => self.has_electricity,
            BooleanDimension::Wifi => self.has_wifi,
            BooleanDimension::PetFriendly => self.is_pet_friendly,
            BooleanDimension::OpenNow => self.is_open_now,
        }
    }

    /// Number of non-default filter dimensions.
    ///
    /// A non-empty category selection counts once (not per category); each
    /// `Some` optional field counts once; a non-default radius counts once.
    /// `show_on_map` is presentation state, not a filter.
    pub fn active_filter_count(&self) -> usize {
        let mut count = 0;
        if !self.categories.is_empty() {
            count += 1;
        }
        if self.max_distance_km != DEFAULT_MAX_DISTANCE_KM {
            count += 1;
        }
        count += [
            self.max_price.is_some(),
            self.min_rating.is_some(),
            self.has_electricity.is_some(),
            self.has_wifi.is_some(),
            self.is_pet_friendly.is_some(),
            self.is_open_now.is_some(),
        ]
        .iter()
        .filter(|active| **active)
        .count();
        count
    }
}
