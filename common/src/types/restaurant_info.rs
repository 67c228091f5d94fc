use crate::types::geo_point::GeoPoint;
use crate::types::service_type::ServiceType;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A restaurant as held by the restaurant store, with its menus and dishes
/// nested in retrieval order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantRecord {
    /// Unique id of the restaurant.
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Where the restaurant is, serialized as top-level `latitude`/`longitude`.
    #[serde(flatten)]
    pub location: GeoPoint,
    #[serde(default)]
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Cuisines served. Order carries no meaning.
    #[serde(default)]
    pub cuisine_types: Vec<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub delivery_available: bool,
    #[serde(default)]
    pub takeout_available: bool,
    #[serde(default)]
    pub dine_in_available: bool,
    #[serde(default)]
    pub menus: Vec<MenuRecord>,
}

impl RestaurantRecord {
    /// Whether the restaurant offers the given kind of service.
    pub fn offers(&self, service: ServiceType) -> bool {
        match service {
            ServiceType::Delivery => self.delivery_available,
            ServiceType::Takeout => self.takeout_available,
            ServiceType::DineIn => self.dine_in_available,
        }
    }

    /// Total number of dishes across every menu.
    pub fn dish_count(&self) -> usize {
        self.menus.iter().map(|menu| menu.dishes.len()).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuRecord {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub dishes: Vec<DishRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DishRecord {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Price in the restaurant's currency. Never negative.
    pub price: f64,
    /// Labels such as `vegetarian` or `gluten_free`.
    #[serde(default)]
    pub dietary_tags: Vec<String>,
    /// Allergenic ingredients present in the dish, such as `milk`.
    #[serde(default)]
    pub allergens: Vec<String>,
    #[serde(default = "default_true")]
    pub is_available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spice_level: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

fn default_true() -> bool {
    true
}
