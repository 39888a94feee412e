// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Static category taxonomy.
//!
//! Two indexes over the same 18 categories: the canonical grouping (every
//! category in exactly one of 5 groups, used by the full filter modal) and
//! the primary grid (4 single-category shortcut groups, used by the compact
//! picker). The primary grid intentionally repeats categories that already
//! live in a canonical group.

use crate::error::{EngineError, Result};
use crate::models::{PoiCategory, PoiCategoryGroup};

static GROUPS: [PoiCategoryGroup; 5] = [
    PoiCategoryGroup {
        id: "camping",
        name: "Camping",
        icon: "tent",
        categories: &[
            PoiCategory::Campsite,
            PoiCategory::WildCamping,
            PoiCategory::MotorhomeSpot,
            PoiCategory::Shelter,
        ],
    },
    PoiCategoryGroup {
        id: "accommodation",
        name: "Accommodation",
        icon: "bed",
        categories: &[
            PoiCategory::Hotel,
            PoiCategory::Hostel,
            PoiCategory::Guesthouse,
        ],
    },
    PoiCategoryGroup {
        id: "food_drink",
        name: "Food & Drink",
        icon: "cutlery",
        categories: &[
            PoiCategory::Restaurant,
            PoiCategory::Cafe,
            PoiCategory::Bakery,
            PoiCategory::Supermarket,
        ],
    },
    PoiCategoryGroup {
        id: "services",
        name: "Services",
        icon: "wrench",
        categories: &[
            PoiCategory::ServiceArea,
            PoiCategory::DrinkingWater,
            PoiCategory::FuelStation,
            PoiCategory::BikeShop,
        ],
    },
    PoiCategoryGroup {
        id: "nature_leisure",
        name: "Nature & Leisure",
        icon: "tree",
        categories: &[
            PoiCategory::Viewpoint,
            PoiCategory::SwimmingSpot,
            PoiCategory::PicnicSite,
        ],
    },
];

static PRIMARY_GRID: [PoiCategoryGroup; 4] = [
    PoiCategoryGroup {
        id: "grid_campsite",
        name: "Campsites",
        icon: "tent",
        categories: &[PoiCategory::Campsite],
    },
    PoiCategoryGroup {
        id: "grid_motorhome",
        name: "Motorhome spots",
        icon: "van",
        categories: &[PoiCategory::MotorhomeSpot],
    },
    PoiCategoryGroup {
        id: "grid_service_area",
        name: "Service areas",
        icon: "wrench",
        categories: &[PoiCategory::ServiceArea],
    },
    PoiCategoryGroup {
        id: "grid_wild_camping",
        name: "Wild camping",
        icon: "mountain",
        categories: &[PoiCategory::WildCamping],
    },
];

/// Canonical grouping, in display order.
pub fn groups() -> &'static [PoiCategoryGroup] {
    &GROUPS
}

/// The canonical group a category belongs to.
pub fn group_for(category: PoiCategory) -> Result<&'static PoiCategoryGroup> {
    GROUPS
        .iter()
        .find(|group| group.categories.contains(&category))
        .ok_or_else(|| EngineError::UnknownCategory(category.as_str().to_string()))
}

/// Shortcut grid for the compact picker, in display order.
pub fn primary_grid() -> &'static [PoiCategoryGroup] {
    &PRIMARY_GRID
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_in_exactly_one_group() {
        for category in PoiCategory::ALL {
            let containing: Vec<&str> = groups()
                .iter()
                .filter(|g| g.categories.contains(&category))
                .map(|g| g.id)
                .collect();
            assert_eq!(
                containing.len(),
                1,
                "Category {} should be in exactly one group, found {:?}",
                category,
                containing
            );
        }
    }

    #[test]
    fn test_group_shape() {
        assert_eq!(groups().len(), 5);
        let total: usize = groups().iter().map(|g| g.categories.len()).sum();
        assert_eq!(total, 18);
    }

    #[test]
    fn test_group_for_agrees_with_membership() {
        let group = group_for(PoiCategory::BikeShop).expect("bike shop group");
        assert_eq!(group.id, "services");

        let group = group_for(PoiCategory::WildCamping).expect("wild camping group");
        assert_eq!(group.id, "camping");
    }

    #[test]
    fn test_primary_grid_is_single_category_shortcuts() {
        assert_eq!(primary_grid().len(), 4);
        for group in primary_grid() {
            assert_eq!(
                group.categories.len(),
                1,
                "Primary grid group {} should hold one category",
                group.id
            );
        }
        // The grid overlaps the canonical grouping on purpose
        let grid_categories: Vec<PoiCategory> = primary_grid()
            .iter()
            .flat_map(|g| g.categories.iter().copied())
            .collect();
        assert_eq!(
            grid_categories,
            vec![
                PoiCategory::Campsite,
                PoiCategory::MotorhomeSpot,
                PoiCategory::ServiceArea,
                PoiCategory::WildCamping,
            ]
        );
    }
}
