use crate::errors::SearchError;
use crate::messages::internal_messages::{GetStorageStatus, RequestNearbyRestaurants, StorageStatus};
use crate::server_actors::services::nearby_restaurants::NearbyRestaurantsService;
use crate::server_actors::storage::Storage;
use actix::Addr;
use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{
        HeaderName, Method,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    response::{IntoResponse, Response},
    routing::{get, post},
};
use colored::Color;
use common::logger::Logger;
use common::types::dtos::{SearchRequest, SearchResponse, ValidationError};
use std::any::Any;
use std::time::Duration;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};

pub const NEARBY_RESTAURANTS_PATH: &str = "/nearby-restaurants";
pub const HEALTH_PATH: &str = "/health";

/// Handles shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub search_addr: Addr<NearbyRestaurantsService>,
    pub storage_addr: Addr<Storage>,
    pub logger: Logger,
}

impl AppState {
    pub fn new(search_addr: Addr<NearbyRestaurantsService>, storage_addr: Addr<Storage>) -> Self {
        Self {
            search_addr,
            storage_addr,
            logger: Logger::new("Routes", Color::Magenta),
        }
    }
}

pub fn router(state: AppState, cors_max_age: Duration) -> Router {
    Router::new()
        .route("/", post(nearby_restaurants_handler))
        .route(NEARBY_RESTAURANTS_PATH, post(nearby_restaurants_handler))
        .route(HEALTH_PATH, get(health_handler))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors_layer(cors_max_age))
        .with_state(state)
}

fn cors_layer(max_age: Duration) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods([Method::POST, Method::GET, Method::OPTIONS])
        .allow_headers([
            AUTHORIZATION,
            CONTENT_TYPE,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
        ])
        .max_age(max_age)
}

fn panic_response(_err: Box<dyn Any + Send + 'static>) -> Response {
    SearchError::Unexpected("request handler panicked".to_string()).into_response()
}

pub async fn nearby_restaurants_handler(
    State(state): State<AppState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResponse>, SearchError> {
    let Json(request) = payload.map_err(|rejection| {
        state
            .logger
            .warn(format!("Rejected malformed search body: {}", rejection.body_text()));
        ValidationError::MalformedBody
    })?;

    let query = request.into_query().inspect_err(|err| {
        state.logger.warn(format!("Rejected search request: {err}"));
    })?;

    state
        .search_addr
        .send(RequestNearbyRestaurants { query })
        .await
        .map_err(|err| {
            state
                .logger
                .error(format!("Nearby restaurants service unreachable: {err}"));
            SearchError::Unexpected(err.to_string())
        })?
        .map(Json)
}

pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<StorageStatus>, SearchError> {
    state
        .storage_addr
        .send(GetStorageStatus)
        .await
        .map(Json)
        .map_err(|err| {
            state
                .logger
                .error(format!("Storage unreachable from health check: {err}"));
            SearchError::Unexpected(err.to_string())
        })
}
