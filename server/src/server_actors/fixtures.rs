//! Restaurant builders shared by the actor and route tests.
use common::types::geo_point::GeoPoint;
use common::types::restaurant_info::{DishRecord, MenuRecord, RestaurantRecord};
use uuid::Uuid;

pub const NEW_YORK: GeoPoint = GeoPoint {
    latitude: 40.7128,
    longitude: -74.0060,
};
pub const LOS_ANGELES: GeoPoint = GeoPoint {
    latitude: 34.0522,
    longitude: -118.2437,
};

/// A restaurant offering every service, with one menu holding one plain dish.
pub fn restaurant_at(name: &str, location: GeoPoint) -> RestaurantRecord {
    RestaurantRecord {
        id: Uuid::new_v4(),
        name: name.to_string(),
        description: None,
        location,
        address: format!("{name} street"),
        phone: None,
        image_url: None,
        cuisine_types: Vec::new(),
        rating: 4.0,
        delivery_available: true,
        takeout_available: true,
        dine_in_available: true,
        menus: vec![menu("Main", vec![dish("House special", &[], &[])])],
    }
}

pub fn with_cuisines(mut restaurant: RestaurantRecord, cuisines: &[&str]) -> RestaurantRecord {
    restaurant.cuisine_types = cuisines.iter().map(|c| c.to_string()).collect();
    restaurant
}

pub fn with_menus(mut restaurant: RestaurantRecord, menus: Vec<MenuRecord>) -> RestaurantRecord {
    restaurant.menus = menus;
    restaurant
}

pub fn menu(name: &str, dishes: Vec<DishRecord>) -> MenuRecord {
    MenuRecord {
        id: Uuid::new_v4(),
        name: name.to_string(),
        description: None,
        is_active: true,
        dishes,
    }
}

pub fn dish(name: &str, dietary_tags: &[&str], allergens: &[&str]) -> DishRecord {
    DishRecord {
        id: Uuid::new_v4(),
        name: name.to_string(),
        description: None,
        price: 12.5,
        dietary_tags: dietary_tags.iter().map(|t| t.to_string()).collect(),
        allergens: allergens.iter().map(|a| a.to_string()).collect(),
        is_available: true,
        spice_level: None,
        image_url: None,
    }
}

/// A point `km` kilometers due north of `origin`.
pub fn north_of(origin: GeoPoint, km: f64) -> GeoPoint {
    GeoPoint::new(origin.latitude + km / 111.195, origin.longitude)
}
