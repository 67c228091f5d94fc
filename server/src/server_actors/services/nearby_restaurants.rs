use crate::errors::{SearchError, StorageError};
use crate::messages::internal_messages::{FetchRestaurants, RequestNearbyRestaurants, StoreQuery};
use crate::server_actors::storage::Storage;
use actix::prelude::*;
use colored::Color;
use common::logger::Logger;
use common::types::dtos::{RankedResult, SearchQuery, SearchResponse};
use common::types::filters::DishCriteria;
use common::types::geo_point::GeoPoint;
use common::types::restaurant_info::RestaurantRecord;
use common::utils::{calculate_distance, filter_dishes, matches_service_types};

/// The `NearbyRestaurantsService` actor answers nearby searches. It fetches
/// candidate restaurants from the storage, measures and filters them against
/// the caller's position and filters, and returns them nearest first.
///
/// ## Responsibilities:
/// - Retrieve candidate restaurants from the storage in a single fetch.
/// - Narrow every menu down to the dishes matching the request.
/// - Drop restaurants that are too far, lack a requested service, or are left
///   without dishes when dish filters were given.
/// - Sort by distance and cut the list at the requested limit.
pub struct NearbyRestaurantsService {
    /// The address of the Storage actor to fetch restaurants from.
    pub storage_addr: Addr<Storage>,
    /// Logger instance for events
    pub logger: Logger,
}

impl NearbyRestaurantsService {
    /// Creates a new instance of `NearbyRestaurantsService`.
    ///
    /// ## Arguments
    /// * `storage_addr` - The address of the Storage actor.
    pub fn new(storage_addr: Addr<Storage>) -> Self {
        let logger = Logger::new("Nearby Restaurants Service", Color::Green);
        NearbyRestaurantsService {
            storage_addr,
            logger,
        }
    }

    /// Ranks the fetched restaurants for a search.
    ///
    /// ## Arguments
    /// * `restaurants` - Candidates in storage order.
    /// * `query` - The validated search.
    ///
    /// ## Returns
    /// At most `query.limit` restaurants within `query.radius_km`, sorted by
    /// ascending distance. Ties keep storage order.
    pub fn get_nearby_restaurants(
        restaurants: Vec<RestaurantRecord>,
        query: &SearchQuery,
    ) -> Vec<RankedResult> {
        let criteria = query.filters.dish_criteria();
        let service_types = query.filters.service_types();

        let mut nearby: Vec<RankedResult> = restaurants
            .into_iter()
            .map(|restaurant| Self::rank_candidate(restaurant, query.center, &criteria))
            .filter(|candidate| candidate.distance <= query.radius_km)
            .filter(|candidate| matches_service_types(&candidate.restaurant, service_types))
            // checked after the dishes were narrowed down
            .filter(|candidate| !criteria.is_restrictive() || candidate.restaurant.dish_count() > 0)
            .collect();

        nearby.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        nearby.truncate(query.limit);
        nearby
    }

    /// Measures the restaurant and narrows each of its menus. Menus left
    /// empty are kept.
    fn rank_candidate(
        mut restaurant: RestaurantRecord,
        center: GeoPoint,
        criteria: &DishCriteria<'_>,
    ) -> RankedResult {
        let distance = calculate_distance(center, restaurant.location);
        for menu in &mut restaurant.menus {
            menu.dishes = filter_dishes(std::mem::take(&mut menu.dishes), criteria);
        }
        RankedResult {
            restaurant,
            distance,
        }
    }
}

impl Actor for NearbyRestaurantsService {
    type Context = Context<Self>;
}

impl Handler<RequestNearbyRestaurants> for NearbyRestaurantsService {
    type Result = ResponseActFuture<Self, Result<SearchResponse, SearchError>>;

    /// Handles the `RequestNearbyRestaurants` message by fetching the candidates
    /// from storage and ranking them against the query.
    fn handle(&mut self, msg: RequestNearbyRestaurants, _ctx: &mut Self::Context) -> Self::Result {
        let query = msg.query;
        let logger = self.logger.clone();
        logger.info(format!(
            "Searching restaurants within {} km of {}",
            query.radius_km, query.center
        ));

        let fetch = FetchRestaurants {
            query: StoreQuery::from(&query.filters),
        };

        Box::pin(
            self.storage_addr
                .send(fetch)
                .into_actor(self)
                .map(move |res, _act, _ctx| {
                    let restaurants = res
                        .map_err(StorageError::from)
                        .and_then(|fetched| fetched)
                        .map_err(|err| {
                            logger.error(format!(
                                "Error retrieving restaurants for search at {}: {}",
                                query.center, err
                            ));
                            SearchError::from(err)
                        })?;

                    logger.debug(format!(
                        "Retrieved {} restaurants from storage.",
                        restaurants.len()
                    ));
                    let nearby = Self::get_nearby_restaurants(restaurants, &query);
                    if nearby.is_empty() {
                        logger.warn(format!("No nearby restaurants found around {}", query.center));
                    } else {
                        logger.info(format!(
                            "Found {} nearby restaurants around {}",
                            nearby.len(),
                            query.center
                        ));
                    }

                    Ok(SearchResponse::new(&query, nearby))
                }),
        )
    }
}
