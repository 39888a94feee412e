// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Filter match evaluation.
//!
//! Dimensions combine with AND; within the category dimension the selected
//! categories combine with OR. A dimension whose constraint is unset passes
//! unconditionally. Missing or malformed data resolves per dimension:
//! price fails open (a POI without a fee tag is not hidden by a price cap),
//! rating fails closed (an unrated POI cannot prove it meets a rating
//! floor), boolean amenities fail closed only under a `Some(true)`
//! constraint. `matches` never panics.

use crate::models::{BooleanDimension, FilterState, Poi};

/// Tag keys carrying the fee, first match wins.
pub(crate) const FEE_KEYS: &[&str] = &["fee"];
/// Tag keys carrying the rating, first match wins.
pub(crate) const RATING_KEYS: &[&str] = &["stars", "rating"];

const ELECTRICITY_KEYS: &[&str] = &["power_supply", "electricity"];
const WIFI_KEYS: &[&str] = &["internet_access", "wifi"];
const PET_KEYS: &[&str] = &["pet_friendly", "dogs"];
const OPEN_NOW_KEYS: &[&str] = &["open_now"];

/// Decide whether a POI passes the current filter state.
pub fn matches(poi: &Poi, state: &FilterState) -> bool {
    matches_category(poi, state)
        && matches_price(poi, state)
        && matches_rating(poi, state)
        && matches_boolean(poi, state, BooleanDimension::Electricity)
        && matches_boolean(poi, state, BooleanDimension::Wifi)
        && matches_boolean(poi, state, BooleanDimension::PetFriendly)
        && matches_boolean(poi, state, BooleanDimension::OpenNow)
        && matches_distance(poi, state)
}

fn matches_category(poi: &Poi, state: &FilterState) -> bool {
    state.categories.is_empty() || state.categories.contains(&poi.category)
}

fn matches_price(poi: &Poi, state: &FilterState) -> bool {
    let Some(ceiling) = state.max_price else {
        return true;
    };
    match poi.first_tag(FEE_KEYS).and_then(|v| v.as_f64()) {
        Some(fee) => fee <= ceiling,
        // Absence of price data is not an exclusion
        None => true,
    }
}

fn matches_rating(poi: &Poi, state: &FilterState) -> bool {
    let Some(floor) = state.min_rating else {
        return true;
    };
    // An unrated POI cannot prove satisfaction
    poi.first_tag(RATING_KEYS)
        .and_then(|v| v.as_f64())
        .is_some_and(|rating| rating >= floor)
}

fn matches_boolean(poi: &Poi, state: &FilterState, dimension: BooleanDimension) -> bool {
    // There is no exclude-if-present mode: only Some(true) constrains.
    if state.boolean(dimension) != Some(true) {
        return true;
    }
    match dimension {
        BooleanDimension::Electricity => has_truthy_tag(poi, ELECTRICITY_KEYS),
        BooleanDimension::Wifi => has_truthy_tag(poi, WIFI_KEYS),
        BooleanDimension::PetFriendly => has_truthy_tag(poi, PET_KEYS),
        BooleanDimension::OpenNow => is_open_now(poi),
    }
}

fn has_truthy_tag(poi: &Poi, keys: &[&str]) -> bool {
    poi.first_tag(keys).is_some_and(|v| v.is_truthy())
}

/// Open-now without a clock: a truthy `open_now` tag (precomputed by the POI
/// source) or an always-open `opening_hours` value.
fn is_open_now(poi: &Poi) -> bool {
    if has_truthy_tag(poi, OPEN_NOW_KEYS) {
        return true;
    }
    matches!(
        poi.tag("opening_hours"),
        Some(crate::models::TagValue::Text(hours)) if hours.trim() == "24/7"
    )
}

fn matches_distance(poi: &Poi, state: &FilterState) -> bool {
    match poi.distance_from_user {
        Some(km) => km <= state.max_distance_km,
        // Distance not computed yet (no user location)
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PoiCategory, TagValue, Tags};

    fn poi_with_tags(category: PoiCategory, tags: &[(&str, TagValue)]) -> Poi {
        Poi {
            id: "test".to_string(),
            category,
            name: None,
            latitude: 0.0,
            longitude: 0.0,
            tags: tags
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect::<Tags>(),
            distance_from_user: None,
        }
    }

    #[test]
    fn test_empty_category_selection_passes_everything() {
        let state = FilterState::default();
        for category in PoiCategory::ALL {
            let poi = poi_with_tags(category, &[]);
            assert!(matches(&poi, &state), "{} should pass", category);
        }
    }

    #[test]
    fn test_selected_categories_combine_with_or() {
        let state = FilterState::default()
            .toggle_category(PoiCategory::Campsite)
            .toggle_category(PoiCategory::Hotel);

        assert!(matches(&poi_with_tags(PoiCategory::Campsite, &[]), &state));
        assert!(matches(&poi_with_tags(PoiCategory::Hotel, &[]), &state));
        assert!(!matches(&poi_with_tags(PoiCategory::Cafe, &[]), &state));
    }

    #[test]
    fn test_price_cap_fails_open_on_missing_fee() {
        let state = FilterState::default().set_max_price(Some(15.0));

        let cheap = poi_with_tags(PoiCategory::Campsite, &[("fee", TagValue::from("10"))]);
        let pricey = poi_with_tags(PoiCategory::Campsite, &[("fee", TagValue::from("20"))]);
        let unknown = poi_with_tags(PoiCategory::Campsite, &[]);
        let malformed = poi_with_tags(PoiCategory::Campsite, &[("fee", TagValue::from("varies"))]);

        assert!(matches(&cheap, &state));
        assert!(!matches(&pricey, &state));
        assert!(matches(&unknown, &state));
        assert!(matches(&malformed, &state));
    }

    #[test]
    fn test_rating_floor_fails_closed_on_missing_rating() {
        let rated = poi_with_tags(PoiCategory::Hotel, &[("stars", TagValue::from("4.2"))]);
        let unrated = poi_with_tags(PoiCategory::Hotel, &[]);

        let state = FilterState::default().set_min_rating(Some(4.0));
        assert!(matches(&rated, &state));
        assert!(!matches(&unrated, &state));

        let state = FilterState::default().set_min_rating(Some(4.5));
        assert!(!matches(&rated, &state));
    }

    #[test]
    fn test_rating_alias_key() {
        let state = FilterState::default().set_min_rating(Some(3.0));
        let poi = poi_with_tags(PoiCategory::Hotel, &[("rating", TagValue::Number(3.5))]);
        assert!(matches(&poi, &state));
    }

    #[test]
    fn test_boolean_amenity_requires_truthy_tag() {
        let state = FilterState::default().set_boolean(BooleanDimension::Wifi, Some(true));

        let with_wifi =
            poi_with_tags(PoiCategory::Campsite, &[("internet_access", TagValue::from("yes"))]);
        let wifi_no = poi_with_tags(PoiCategory::Campsite, &[("wifi", TagValue::from("no"))]);
        let untagged = poi_with_tags(PoiCategory::Campsite, &[]);

        assert!(matches(&with_wifi, &state));
        assert!(!matches(&wifi_no, &state));
        assert!(!matches(&untagged, &state));
    }

    #[test]
    fn test_false_constraint_never_excludes() {
        // No exclude-if-present mode in this design
        let state = FilterState::default().set_boolean(BooleanDimension::Wifi, Some(false));
        let with_wifi = poi_with_tags(PoiCategory::Campsite, &[("wifi", TagValue::Bool(true))]);
        assert!(matches(&with_wifi, &state));
    }

    #[test]
    fn test_open_now_accepts_around_the_clock_hours() {
        let state = FilterState::default().set_boolean(BooleanDimension::OpenNow, Some(true));

        let always_open =
            poi_with_tags(PoiCategory::ServiceArea, &[("opening_hours", TagValue::from("24/7"))]);
        let precomputed =
            poi_with_tags(PoiCategory::ServiceArea, &[("open_now", TagValue::Bool(true))]);
        let day_hours =
            poi_with_tags(PoiCategory::ServiceArea, &[("opening_hours", TagValue::from("08:00-18:00"))]);

        assert!(matches(&always_open, &state));
        assert!(matches(&precomputed, &state));
        assert!(!matches(&day_hours, &state));
    }

    #[test]
    fn test_distance_dimension() {
        let state = FilterState::default().set_max_distance(10.0);

        let mut near = poi_with_tags(PoiCategory::Campsite, &[]);
        near.distance_from_user = Some(8.0);
        let mut far = poi_with_tags(PoiCategory::Campsite, &[]);
        far.distance_from_user = Some(12.0);
        let uncomputed = poi_with_tags(PoiCategory::Campsite, &[]);

        assert!(matches(&near, &state));
        assert!(!matches(&far, &state));
        // Not yet computed means no distance constraint
        assert!(matches(&uncomputed, &state));
    }

    #[test]
    fn test_dimensions_combine_with_and() {
        let state = FilterState::default()
            .toggle_category(PoiCategory::Hotel)
            .set_max_price(Some(25.0));

        let hotel = poi_with_tags(PoiCategory::Hotel, &[("fee", TagValue::from("20"))]);
        let campsite = poi_with_tags(PoiCategory::Campsite, &[]);

        assert!(matches(&hotel, &state));
        assert!(!matches(&campsite, &state), "category dimension must fail");

        let state = state.set_max_price(Some(15.0));
        assert!(!matches(&hotel, &state), "price dimension must fail");
    }
}
