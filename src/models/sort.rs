// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Sort criteria for result lists.

use serde::{Deserialize, Serialize};

/// Ordering criterion for a projected result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOption {
    /// Identity order as presented by the POI source
    Relevance,
    /// Ascending distance from the user
    Distance,
    /// Descending rating
    Rating,
    /// Ascending price
    Price,
}

impl SortOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Relevance => "relevance",
            SortOption::Distance => "distance",
            SortOption::Rating => "rating",
            SortOption::Price => "price",
        }
    }
}
