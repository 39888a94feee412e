// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the engine.

pub mod category;
pub mod filter;
pub mod poi;
pub mod quick_filter;
pub mod sort;

pub use category::{PoiCategory, PoiCategoryGroup};
pub use filter::{BooleanDimension, FilterState, DEFAULT_MAX_DISTANCE_KM};
pub use poi::{Poi, TagValue, Tags, UserLocation};
pub use quick_filter::{quick_filter, quick_filter_chips, QuickFilter, QuickFilterDef, QUICK_FILTERS};
pub use sort::SortOption;
