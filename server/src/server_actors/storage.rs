use crate::errors::StorageError;
use crate::messages::internal_messages::{
    FetchRestaurants, GetStorageStatus, StorageStatus, StoreQuery,
};
use actix::prelude::*;
use colored::Color;
use common::logger::Logger;
use common::types::restaurant_info::RestaurantRecord;
use common::utils::{matches_cuisines, meets_min_rating};
use std::fs;
use std::path::Path;

/// The `Storage` actor holds the read-only restaurant snapshot that nearby
/// searches are answered from.
///
/// # Responsibilities
/// - Loads the snapshot once, at startup, from a JSON file.
/// - Answers fetches with a pre-filtered copy of the snapshot, in storage order.
/// - Refuses every fetch when the snapshot could not be loaded.
pub struct Storage {
    /// Restaurants in retrieval order.
    pub restaurants: Vec<RestaurantRecord>,
    /// Set when the snapshot is missing; every fetch fails with it.
    pub unavailable_reason: Option<String>,
    /// Logger for storage events.
    pub logger: Logger,
}

impl Storage {
    /// Creates a `Storage` serving the given restaurants.
    pub fn new(restaurants: Vec<RestaurantRecord>) -> Self {
        Self {
            restaurants,
            unavailable_reason: None,
            logger: Logger::new("Storage", Color::White),
        }
    }

    /// Creates a `Storage` that fails every fetch with `reason`.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            restaurants: Vec::new(),
            unavailable_reason: Some(reason.into()),
            logger: Logger::new("Storage", Color::White),
        }
    }

    /// Loads the snapshot from `path`.
    ///
    /// A file that cannot be read or parsed does not stop the server: the
    /// storage comes up unavailable and searches report a retrieval failure.
    ///
    /// # Arguments
    /// * `path` - JSON file holding an array of restaurants.
    pub fn from_file(path: &Path) -> Self {
        match load_restaurants(path) {
            Ok(restaurants) => {
                let storage = Self::new(restaurants);
                storage.logger.info(format!(
                    "Loaded {} restaurants from {}",
                    storage.restaurants.len(),
                    path.display()
                ));
                storage
            }
            Err(err) => {
                let storage = Self::unavailable(err.to_string());
                storage.logger.error(format!(
                    "Could not load restaurants from {}: {}",
                    path.display(),
                    err
                ));
                storage
            }
        }
    }

    fn matches(restaurant: &RestaurantRecord, query: &StoreQuery) -> bool {
        matches_cuisines(restaurant, &query.cuisines)
            && meets_min_rating(restaurant, query.min_rating)
    }
}

fn load_restaurants(path: &Path) -> Result<Vec<RestaurantRecord>, StorageError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

impl Actor for Storage {
    type Context = Context<Self>;
}

/// Returns the restaurants matching the store query, with all their menus.
impl Handler<FetchRestaurants> for Storage {
    type Result = Result<Vec<RestaurantRecord>, StorageError>;

    fn handle(&mut self, msg: FetchRestaurants, _ctx: &mut Self::Context) -> Self::Result {
        if let Some(reason) = &self.unavailable_reason {
            self.logger
                .error(format!("Rejecting fetch, storage unavailable: {reason}"));
            return Err(StorageError::Unavailable(reason.clone()));
        }

        let restaurants: Vec<RestaurantRecord> = self
            .restaurants
            .iter()
            .filter(|restaurant| Self::matches(restaurant, &msg.query))
            .cloned()
            .collect();

        self.logger.debug(format!(
            "Fetched {} of {} restaurants for {:?}",
            restaurants.len(),
            self.restaurants.len(),
            msg.query
        ));
        Ok(restaurants)
    }
}

impl Handler<GetStorageStatus> for Storage {
    type Result = MessageResult<GetStorageStatus>;

    fn handle(&mut self, _msg: GetStorageStatus, _ctx: &mut Self::Context) -> Self::Result {
        MessageResult(StorageStatus {
            available: self.unavailable_reason.is_none(),
            restaurant_count: self.restaurants.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server_actors::fixtures::{restaurant_at, with_cuisines};
    use common::types::geo_point::GeoPoint;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn names(restaurants: &[RestaurantRecord]) -> Vec<&str> {
        restaurants.iter().map(|r| r.name.as_str()).collect()
    }

    fn sample() -> Vec<RestaurantRecord> {
        let center = GeoPoint::new(40.7128, -74.0060);
        let mut trattoria = with_cuisines(restaurant_at("Trattoria", center), &["italian"]);
        trattoria.rating = 4.6;
        let mut noodle_bar = with_cuisines(restaurant_at("Noodle Bar", center), &["thai", "noodles"]);
        noodle_bar.rating = 3.9;
        let mut pizzeria = with_cuisines(restaurant_at("Pizzeria", center), &["italian", "pizza"]);
        pizzeria.rating = 4.1;
        vec![trattoria, noodle_bar, pizzeria]
    }

    #[actix_rt::test]
    async fn fetch_without_query_returns_everything_in_order() {
        let storage = Storage::new(sample()).start();

        let restaurants = storage
            .send(FetchRestaurants {
                query: StoreQuery::default(),
            })
            .await
            .unwrap()
            .unwrap();

        assert_eq!(names(&restaurants), ["Trattoria", "Noodle Bar", "Pizzeria"]);
    }

    #[actix_rt::test]
    async fn fetch_applies_cuisine_and_rating_prefilter() {
        let storage = Storage::new(sample()).start();

        let italian = storage
            .send(FetchRestaurants {
                query: StoreQuery {
                    cuisines: vec!["pizza".into(), "italian".into()],
                    min_rating: None,
                },
            })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(names(&italian), ["Trattoria", "Pizzeria"]);

        let well_rated = storage
            .send(FetchRestaurants {
                query: StoreQuery {
                    cuisines: Vec::new(),
                    min_rating: Some(4.1),
                },
            })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(names(&well_rated), ["Trattoria", "Pizzeria"]);
    }

    #[actix_rt::test]
    async fn unavailable_storage_fails_fetches() {
        let storage = Storage::unavailable("disk on fire").start();

        let result = storage
            .send(FetchRestaurants {
                query: StoreQuery::default(),
            })
            .await
            .unwrap();

        assert!(matches!(result, Err(StorageError::Unavailable(reason)) if reason == "disk on fire"));
        let status = storage.send(GetStorageStatus).await.unwrap();
        assert_eq!(
            status,
            StorageStatus {
                available: false,
                restaurant_count: 0
            }
        );
    }

    #[test]
    fn loads_snapshot_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(serde_json::to_string(&sample()).unwrap().as_bytes())
            .unwrap();

        let storage = Storage::from_file(file.path());

        assert!(storage.unavailable_reason.is_none());
        assert_eq!(names(&storage.restaurants), ["Trattoria", "Noodle Bar", "Pizzeria"]);
    }

    #[test]
    fn unreadable_or_invalid_file_makes_storage_unavailable() {
        let missing = Storage::from_file(Path::new("/definitely/not/here.json"));
        assert!(missing.unavailable_reason.is_some());

        let mut garbage = NamedTempFile::new().unwrap();
        garbage.write_all(b"{ not json").unwrap();
        let invalid = Storage::from_file(garbage.path());
        assert!(
            invalid
                .unavailable_reason
                .as_deref()
                .is_some_and(|reason| reason.starts_with("failed to parse"))
        );
    }

    #[actix_rt::test]
    async fn bundled_dataset_loads() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../data/restaurants.json");

        let storage = Storage::from_file(&path).start();
        let status = storage.send(GetStorageStatus).await.unwrap();

        assert!(status.available);
        assert!(status.restaurant_count > 0);
    }
}
