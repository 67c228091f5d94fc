use crate::constants::EARTH_RADIUS_KM;
use crate::types::filters::DishCriteria;
use crate::types::geo_point::GeoPoint;
use crate::types::restaurant_info::{DishRecord, RestaurantRecord};
use crate::types::service_type::ServiceType;

/// Great-circle distance between two points, in kilometers, using the
/// Haversine formula on a sphere of radius [`EARTH_RADIUS_KM`].
///
/// No clamping is applied, invalid coordinates propagate through the math.
pub fn calculate_distance(point1: GeoPoint, point2: GeoPoint) -> f64 {
    let lat1 = point1.latitude.to_radians();
    let lat2 = point2.latitude.to_radians();
    let delta_lat = (point2.latitude - point1.latitude).to_radians();
    let delta_lng = (point2.longitude - point1.longitude).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Keeps the dishes that are available and satisfy `criteria`, in their
/// original order.
pub fn filter_dishes(dishes: Vec<DishRecord>, criteria: &DishCriteria<'_>) -> Vec<DishRecord> {
    dishes
        .into_iter()
        .filter(|dish| criteria.accepts(dish))
        .collect()
}

/// Checks the restaurant against the requested service types.
///
/// ## Arguments
/// * `restaurant` - The restaurant whose service flags are checked.
/// * `requested` - Service type names as sent by the caller.
///
/// ## Returns
/// `true` when nothing was requested or when the restaurant offers at least one
/// of the requested types. Unknown names never match.
pub fn matches_service_types(restaurant: &RestaurantRecord, requested: &[String]) -> bool {
    requested.is_empty()
        || requested
            .iter()
            .filter_map(|name| name.parse::<ServiceType>().ok())
            .any(|service| restaurant.offers(service))
}

/// `true` when no cuisines were requested or the restaurant serves one of them.
pub fn matches_cuisines(restaurant: &RestaurantRecord, cuisines: &[String]) -> bool {
    cuisines.is_empty()
        || restaurant
            .cuisine_types
            .iter()
            .any(|cuisine| cuisines.contains(cuisine))
}

pub fn meets_min_rating(restaurant: &RestaurantRecord, min_rating: Option<f64>) -> bool {
    min_rating.is_none_or(|min| restaurant.rating >= min)
}
