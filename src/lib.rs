// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Velopoi: POI discovery engine for cycling route planning
//!
//! This crate provides the filter and discovery engine behind the map and
//! journal screens: category taxonomy, filter state, match evaluation,
//! distance computation and result projection. It is synchronous and
//! side-effect-free; callers own the `FilterState` and thread it through
//! every call.

pub mod error;
pub mod models;
pub mod services;
pub mod taxonomy;

pub use error::{EngineError, Result};
pub use models::{
    BooleanDimension, FilterState, Poi, PoiCategory, PoiCategoryGroup, QuickFilter, SortOption,
    UserLocation,
};
pub use services::{project, sort_by, with_distances, PoiCatalog, Projection};
