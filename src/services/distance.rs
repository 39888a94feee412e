// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Distance computation and result ordering.

use geo::{Distance, HaversineMeasure};

use crate::models::{Poi, SortOption, UserLocation};

/// Great-circle radius used for distances (m).
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Attach `distance_from_user` (km) to each POI.
///
/// Without a user location the distances stay unset and distance-based
/// sorting degrades to a stable no-op.
pub fn with_distances(pois: Vec<Poi>, user_location: Option<UserLocation>) -> Vec<Poi> {
    let Some(location) = user_location else {
        return pois;
    };
    let origin = location.point();
    let metric = HaversineMeasure::new(EARTH_RADIUS_M);

    pois.into_iter()
        .map(|mut poi| {
            let meters = metric.distance(origin, poi.point());
            poi.distance_from_user = Some(meters / 1000.0);
            poi
        })
        .collect()
}

/// Order POIs by the given criterion.
///
/// All orders are stable: POIs with equal keys, and POIs missing the key
/// (which sort last), keep their original relative order. `Relevance` is the
/// identity order of the POI source and never reorders.
pub fn sort_by(mut pois: Vec<Poi>, option: SortOption) -> Vec<Poi> {
    match option {
        SortOption::Relevance => {}
        SortOption::Distance => {
            pois.sort_by(|a, b| cmp_missing_last(a.distance_from_user, b.distance_from_user))
        }
        SortOption::Rating => {
            pois.sort_by(|a, b| cmp_missing_last_desc(rating_of(a), rating_of(b)))
        }
        SortOption::Price => pois.sort_by(|a, b| cmp_missing_last(price_of(a), price_of(b))),
    }
    pois
}

fn rating_of(poi: &Poi) -> Option<f64> {
    poi.first_tag(super::evaluator::RATING_KEYS)
        .and_then(|v| v.as_f64())
}

fn price_of(poi: &Poi) -> Option<f64> {
    poi.first_tag(super::evaluator::FEE_KEYS)
        .and_then(|v| v.as_f64())
}

/// Ascending comparison where a missing key sorts after any present key.
fn cmp_missing_last(a: Option<f64>, b: Option<f64>) -> std::cmp::Ordering {
    use std::cmp::Ordering;
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Descending comparison where a missing key still sorts last.
fn cmp_missing_last_desc(a: Option<f64>, b: Option<f64>) -> std::cmp::Ordering {
    use std::cmp::Ordering;
    match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PoiCategory;

    fn poi_at(id: &str, latitude: f64, longitude: f64) -> Poi {
        Poi {
            id: id.to_string(),
            category: PoiCategory::Campsite,
            name: None,
            latitude,
            longitude,
            tags: Default::default(),
            distance_from_user: None,
        }
    }

    #[test]
    fn test_with_distances_haversine() {
        // 0.1 degrees of latitude is roughly 11.1 km
        let pois = vec![poi_at("origin", 0.0, 0.0), poi_at("north", 0.1, 0.0)];
        let pois = with_distances(pois, Some(UserLocation::new(0.0, 0.0)));

        let origin = pois[0].distance_from_user.expect("distance set");
        let north = pois[1].distance_from_user.expect("distance set");
        assert!(origin.abs() < 0.2, "Expected ~0 km, got {}", origin);
        assert!(
            (north - 11.1).abs() < 0.2,
            "Expected ~11.1 km, got {}",
            north
        );
    }

    #[test]
    fn test_with_distances_without_location() {
        let pois = with_distances(vec![poi_at("a", 10.0, 10.0)], None);
        assert!(pois[0].distance_from_user.is_none());
    }

    #[test]
    fn test_distance_sort_puts_missing_last() {
        let mut near = poi_at("near", 0.0, 0.0);
        near.distance_from_user = Some(1.0);
        let mut far = poi_at("far", 0.0, 0.0);
        far.distance_from_user = Some(9.0);
        let unknown = poi_at("unknown", 0.0, 0.0);

        let sorted = sort_by(vec![unknown, far, near], SortOption::Distance);
        let ids: Vec<&str> = sorted.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["near", "far", "unknown"]);
    }

    #[test]
    fn test_relevance_is_identity() {
        let pois = vec![poi_at("b", 2.0, 2.0), poi_at("a", 1.0, 1.0)];
        let sorted = sort_by(pois.clone(), SortOption::Relevance);
        let ids: Vec<&str> = sorted.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }
}
