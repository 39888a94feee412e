// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Result projection.
//!
//! The single read entry point for presentation: attach distances, filter,
//! sort, count. Recomputed from scratch on every state or POI-set change;
//! viewport-sized inputs make O(n) recomputation cheaper than an
//! incremental cache would be to get right.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::{
    quick_filter_chips, FilterState, Poi, QuickFilter, SortOption, UserLocation, QUICK_FILTERS,
};
use crate::services::distance::{sort_by, with_distances};
use crate::services::evaluator::matches;

/// The ordered, filtered list plus aggregate counts.
#[derive(Debug, Clone, Serialize)]
pub struct Projection {
    /// Filtered POIs in the requested order
    pub items: Vec<Poi>,
    /// Number of items after filtering
    pub total_count: usize,
    /// Per-quick-filter compound match counts, keyed by quick filter ID
    pub quick_filter_counts: HashMap<&'static str, usize>,
}

impl Projection {
    /// Materialize the quick filter chips for this projection.
    pub fn chips(&self, state: &FilterState) -> Vec<QuickFilter> {
        quick_filter_chips(state, &self.quick_filter_counts)
    }
}

/// Produce the final ordered, filtered list and aggregate counts.
///
/// Each quick-filter count answers "how many would match if you also turned
/// this on": the evaluator re-runs with that quick filter applied on top of
/// the current state, not independently of it.
pub fn project(
    pois: &[Poi],
    state: &FilterState,
    sort: SortOption,
    user_location: Option<UserLocation>,
) -> Projection {
    // 1. Attach distances once; both the item list and the counts see them.
    let annotated = with_distances(pois.to_vec(), user_location);

    // 2. Filter.
    let items: Vec<Poi> = annotated
        .iter()
        .filter(|poi| matches(poi, state))
        .cloned()
        .collect();

    // 3. Sort.
    let items = sort_by(items, sort);

    // 4. Compound quick-filter counts.
    let quick_filter_counts: HashMap<&'static str, usize> = QUICK_FILTERS
        .iter()
        .map(|def| {
            let compound = def.apply(state.clone());
            let count = annotated.iter().filter(|poi| matches(poi, &compound)).count();
            (def.id, count)
        })
        .collect();

    tracing::debug!(
        input = pois.len(),
        total = items.len(),
        sort = sort.as_str(),
        active_filters = state.active_filter_count(),
        "Projected POI list"
    );

    Projection {
        total_count: items.len(),
        items,
        quick_filter_counts,
    }
}
