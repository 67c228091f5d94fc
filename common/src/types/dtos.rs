use crate::constants::{DEFAULT_RADIUS_KM, DEFAULT_RESULT_LIMIT};
use crate::types::filters::SearchFilters;
use crate::types::geo_point::GeoPoint;
use crate::types::restaurant_info::RestaurantRecord;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Reasons a search request is refused before any lookup happens.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Latitude and longitude are required")]
    MissingCoordinates,
    #[error("Invalid request body")]
    MalformedBody,
}

/// Body of a nearby search as sent by the caller.
///
/// Coordinates are kept as raw JSON so that a missing value and a
/// non-numeric value are reported the same way by [`SearchRequest::into_query`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    #[serde(default)]
    pub latitude: Option<Value>,
    #[serde(default)]
    pub longitude: Option<Value>,
    #[serde(default)]
    pub radius_km: Option<f64>,
    /// Any JSON number; see [`SearchRequest::into_query`].
    #[serde(default)]
    pub limit: Option<f64>,
    #[serde(default)]
    pub filters: Option<SearchFilters>,
}

impl SearchRequest {
    /// Validates the coordinates and fills in defaults.
    ///
    /// ## Returns
    /// A [`SearchQuery`] or [`ValidationError::MissingCoordinates`] when either
    /// coordinate is absent, `null`, or not a JSON number. A fractional limit
    /// is floored and a negative one becomes 0.
    pub fn into_query(self) -> Result<SearchQuery, ValidationError> {
        let latitude = self.latitude.as_ref().and_then(Value::as_f64);
        let longitude = self.longitude.as_ref().and_then(Value::as_f64);
        let (Some(latitude), Some(longitude)) = (latitude, longitude) else {
            return Err(ValidationError::MissingCoordinates);
        };

        Ok(SearchQuery {
            center: GeoPoint::new(latitude, longitude),
            radius_km: self.radius_km.unwrap_or(DEFAULT_RADIUS_KM),
            limit: self.limit.map_or(DEFAULT_RESULT_LIMIT, |limit| {
                limit.max(0.0).floor() as usize
            }),
            filters: self.filters.unwrap_or_default(),
        })
    }
}

/// A validated nearby search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub center: GeoPoint,
    pub radius_km: f64,
    pub limit: usize,
    pub filters: SearchFilters,
}

impl SearchQuery {
    pub fn new(center: GeoPoint) -> Self {
        Self {
            center,
            radius_km: DEFAULT_RADIUS_KM,
            limit: DEFAULT_RESULT_LIMIT,
            filters: SearchFilters::default(),
        }
    }
}

/// A restaurant that survived the search, annotated with its distance from
/// the caller and with only the dishes that passed the filters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    #[serde(flatten)]
    pub restaurant: RestaurantRecord,
    /// Kilometers from the search center.
    pub distance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub restaurants: Vec<RankedResult>,
    pub total_count: usize,
    pub search_radius: f64,
    pub center_point: GeoPoint,
    pub applied_filters: SearchFilters,
}

impl SearchResponse {
    pub fn new(query: &SearchQuery, restaurants: Vec<RankedResult>) -> Self {
        Self {
            total_count: restaurants.len(),
            restaurants,
            search_radius: query.radius_km,
            center_point: query.center,
            applied_filters: query.filters.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: Value) -> SearchRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn fills_in_default_radius_and_limit() {
        let query = request(json!({ "latitude": 40.7128, "longitude": -74.0060 }))
            .into_query()
            .unwrap();

        assert_eq!(query.center, GeoPoint::new(40.7128, -74.0060));
        assert_eq!(query.radius_km, DEFAULT_RADIUS_KM);
        assert_eq!(query.limit, DEFAULT_RESULT_LIMIT);
        assert_eq!(query.filters, SearchFilters::default());
    }

    #[test]
    fn keeps_explicit_radius_limit_and_filters() {
        let query = request(json!({
            "latitude": 1.5,
            "longitude": 2,
            "radiusKm": 12.5,
            "limit": 3,
            "filters": { "dietaryTags": ["vegan"], "serviceTypes": ["takeout"] }
        }))
        .into_query()
        .unwrap();

        assert_eq!(query.center, GeoPoint::new(1.5, 2.0));
        assert_eq!(query.radius_km, 12.5);
        assert_eq!(query.limit, 3);
        assert_eq!(query.filters.dietary_tags(), ["vegan".to_string()]);
        assert_eq!(query.filters.service_types(), ["takeout".to_string()]);
    }

    #[test]
    fn fractional_limit_is_floored() {
        let limit_of = |limit: Value| {
            request(json!({ "latitude": 0, "longitude": 0, "limit": limit }))
                .into_query()
                .unwrap()
                .limit
        };

        assert_eq!(limit_of(json!(10.0)), 10);
        assert_eq!(limit_of(json!(2.9)), 2);
    }

    #[test]
    fn negative_limit_becomes_zero() {
        let query = request(json!({ "latitude": 0, "longitude": 0, "limit": -3 }))
            .into_query()
            .unwrap();
        assert_eq!(query.limit, 0);
    }

    #[test]
    fn missing_latitude_is_rejected() {
        let err = request(json!({ "longitude": -74.0060 }))
            .into_query()
            .unwrap_err();
        assert_eq!(err, ValidationError::MissingCoordinates);
    }

    #[test]
    fn non_numeric_or_null_coordinates_are_rejected() {
        for body in [
            json!({ "latitude": "40.7", "longitude": -74.0 }),
            json!({ "latitude": 40.7, "longitude": null }),
            json!({ "latitude": true, "longitude": [1] }),
        ] {
            assert_eq!(
                request(body).into_query(),
                Err(ValidationError::MissingCoordinates)
            );
        }
    }

    #[test]
    fn zero_is_a_valid_coordinate() {
        let query = request(json!({ "latitude": 0, "longitude": 0.0 }))
            .into_query()
            .unwrap();
        assert_eq!(query.center, GeoPoint::new(0.0, 0.0));
    }

    #[test]
    fn response_echoes_only_supplied_filters() {
        let mut query = SearchQuery::new(GeoPoint::new(10.0, 20.0));
        query.radius_km = 2.0;
        query.filters.min_rating = Some(4.0);

        let body = serde_json::to_value(SearchResponse::new(&query, Vec::new())).unwrap();

        assert_eq!(
            body,
            json!({
                "restaurants": [],
                "totalCount": 0,
                "searchRadius": 2.0,
                "centerPoint": { "latitude": 10.0, "longitude": 20.0 },
                "appliedFilters": { "minRating": 4.0 }
            })
        );
    }
}
