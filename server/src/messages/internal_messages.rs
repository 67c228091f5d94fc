use crate::errors::{SearchError, StorageError};
use actix::Message;
use common::types::dtos::{SearchQuery, SearchResponse};
use common::types::filters::SearchFilters;
use common::types::restaurant_info::RestaurantRecord;
use serde::Serialize;

/////////////////////////////////////////////////////////////////////
// Storage messages
/////////////////////////////////////////////////////////////////////

/// Store-level narrowing applied while fetching restaurants.
///
/// ## Contents
/// - `cuisines`: keep restaurants serving at least one of these. Empty keeps all.
/// - `min_rating`: keep restaurants rated at least this much.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreQuery {
    pub cuisines: Vec<String>,
    pub min_rating: Option<f64>,
}

impl From<&SearchFilters> for StoreQuery {
    fn from(filters: &SearchFilters) -> Self {
        Self {
            cuisines: filters.cuisines().to_vec(),
            min_rating: filters.min_rating,
        }
    }
}

/// Message to fetch every restaurant, with menus and dishes, matching a
/// [`StoreQuery`].
///
/// ## Purpose
/// The single retrieval a nearby search performs. Results keep storage order.
#[derive(Message, Debug, Clone)]
#[rtype(result = "Result<Vec<RestaurantRecord>, StorageError>")]
pub struct FetchRestaurants {
    pub query: StoreQuery,
}

/// Message to ask the storage whether it can serve fetches.
#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "StorageStatus")]
pub struct GetStorageStatus;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageStatus {
    pub available: bool,
    pub restaurant_count: usize,
}

/////////////////////////////////////////////////////////////////////
// Search messages
/////////////////////////////////////////////////////////////////////

/// Message to run a validated nearby search.
#[derive(Message, Debug, Clone)]
#[rtype(result = "Result<SearchResponse, SearchError>")]
pub struct RequestNearbyRestaurants {
    pub query: SearchQuery,
}
