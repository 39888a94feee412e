// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Quick filters: one-tap shortcuts onto filter dimensions.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::{BooleanDimension, FilterState};

/// The filter mutation a quick filter stands for.
#[derive(Debug, Clone, Copy)]
pub enum QuickFilterAction {
    /// Force a boolean amenity constraint on
    Require(BooleanDimension),
    /// Cap the price ceiling
    CapPrice(f64),
    /// Tighten the search radius (km)
    CapDistance(f64),
}

/// Static definition of a quick filter chip.
#[derive(Debug, Clone, Copy)]
pub struct QuickFilterDef {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: Option<&'static str>,
    pub action: QuickFilterAction,
}

impl QuickFilterDef {
    /// Apply this quick filter on top of an existing state.
    #[must_use]
    pub fn apply(&self, state: FilterState) -> FilterState {
        match self.action {
            QuickFilterAction::Require(dimension) => state.set_boolean(dimension, Some(true)),
            QuickFilterAction::CapPrice(ceiling) => state.set_max_price(Some(ceiling)),
            QuickFilterAction::CapDistance(km) => state.set_max_distance(km),
        }
    }

    /// Whether the state already carries this quick filter's mutation.
    pub fn is_active(&self, state: &FilterState) -> bool {
        match self.action {
            QuickFilterAction::Require(dimension) => state.boolean(dimension) == Some(true),
            QuickFilterAction::CapPrice(ceiling) => state.max_price == Some(ceiling),
            QuickFilterAction::CapDistance(km) => state.max_distance_km == km,
        }
    }
}

/// The quick filter chips shown above the result list, in display order.
pub static QUICK_FILTERS: [QuickFilterDef; 6] = [
    QuickFilterDef {
        id: "wifi",
        label: "WiFi",
        icon: Some("wifi"),
        action: QuickFilterAction::Require(BooleanDimension::Wifi),
    },
    QuickFilterDef {
        id: "electricity",
        label: "Electricity",
        icon: Some("plug"),
        action: QuickFilterAction::Require(BooleanDimension::Electricity),
    },
    QuickFilterDef {
        id: "pet_friendly",
        label: "Pet friendly",
        icon: Some("paw"),
        action: QuickFilterAction::Require(BooleanDimension::PetFriendly),
    },
    QuickFilterDef {
        id: "open_now",
        label: "Open now",
        icon: Some("clock"),
        action: QuickFilterAction::Require(BooleanDimension::OpenNow),
    },
    QuickFilterDef {
        id: "free",
        label: "Free",
        icon: None,
        action: QuickFilterAction::CapPrice(0.0),
    },
    QuickFilterDef {
        id: "nearby",
        label: "Nearby",
        icon: Some("location"),
        action: QuickFilterAction::CapDistance(5.0),
    },
];

/// Look up a quick filter definition by ID.
pub fn quick_filter(id: &str) -> Option<&'static QuickFilterDef> {
    QUICK_FILTERS.iter().find(|def| def.id == id)
}

/// A quick filter chip materialized for presentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickFilter {
    pub id: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub icon: Option<String>,
    pub is_active: bool,
    /// How many POIs would match with this filter also applied
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub count: Option<usize>,
}

/// Materialize all quick filter chips against a state and count map.
pub fn quick_filter_chips(
    state: &FilterState,
    counts: &HashMap<&'static str, usize>,
) -> Vec<QuickFilter> {
    QUICK_FILTERS
        .iter()
        .map(|def| QuickFilter {
            id: def.id.to_string(),
            label: def.label.to_string(),
            icon: def.icon.map(str::to_string),
            is_active: def.is_active(state),
            count: counts.get(def.id).copied(),
        })
        .collect()
}
