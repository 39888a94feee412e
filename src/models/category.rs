// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! POI category tags and category groups.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Category tag for a point of interest.
///
/// The full set is fixed by the taxonomy (see [`crate::taxonomy`]); variants
/// are never created at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoiCategory {
    // Camping
    Campsite,
    WildCamping,
    MotorhomeSpot,
    Shelter,
    // Accommodation
    Hotel,
    Hostel,
    Guesthouse,
    // Food & drink
    Restaurant,
    Cafe,
    Bakery,
    Supermarket,
    // Services
    ServiceArea,
    DrinkingWater,
    FuelStation,
    BikeShop,
    // Nature & leisure
    Viewpoint,
    SwimmingSpot,
    PicnicSite,
}

impl PoiCategory {
    /// All categories, in taxonomy order.
    pub const ALL: [PoiCategory; 18] = [
        PoiCategory::Campsite,
        PoiCategory::WildCamping,
        PoiCategory::MotorhomeSpot,
        PoiCategory::Shelter,
        PoiCategory::Hotel,
        PoiCategory::Hostel,
        PoiCategory::Guesthouse,
        PoiCategory::Restaurant,
        PoiCategory::Cafe,
        PoiCategory::Bakery,
        PoiCategory::Supermarket,
        PoiCategory::ServiceArea,
        PoiCategory::DrinkingWater,
        PoiCategory::FuelStation,
        PoiCategory::BikeShop,
        PoiCategory::Viewpoint,
        PoiCategory::SwimmingSpot,
        PoiCategory::PicnicSite,
    ];

    /// Stable string form, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            PoiCategory::Campsite => "campsite",
            PoiCategory::WildCamping => "wild_camping",
            PoiCategory::MotorhomeSpot => "motorhome_spot",
            PoiCategory::Shelter => "shelter",
            PoiCategory::Hotel => "hotel",
            PoiCategory::Hostel => "hostel",
            PoiCategory::Guesthouse => "guesthouse",
            PoiCategory::Restaurant => "restaurant",
            PoiCategory::Cafe => "cafe",
            PoiCategory::Bakery => "bakery",
            PoiCategory::Supermarket => "supermarket",
            PoiCategory::ServiceArea => "service_area",
            PoiCategory::DrinkingWater => "drinking_water",
            PoiCategory::FuelStation => "fuel_station",
            PoiCategory::BikeShop => "bike_shop",
            PoiCategory::Viewpoint => "viewpoint",
            PoiCategory::SwimmingSpot => "swimming_spot",
            PoiCategory::PicnicSite => "picnic_site",
        }
    }
}

impl std::str::FromStr for PoiCategory {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PoiCategory::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| EngineError::UnknownCategory(s.to_string()))
    }
}

impl std::fmt::Display for PoiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named, ordered group of categories for filter pickers.
///
/// In the canonical grouping every category belongs to exactly one group.
/// The primary grid is a separate overlapping index and may repeat
/// categories that also appear in a canonical group.
#[derive(Debug, Clone, Serialize)]
pub struct PoiCategoryGroup {
    /// Stable group identifier (e.g. "camping")
    pub id: &'static str,
    /// Display name (e.g. "Camping")
    pub name: &'static str,
    /// Icon name understood by the presentation layer
    pub icon: &'static str,
    /// Member categories, in display order
    pub categories: &'static [PoiCategory],
}
