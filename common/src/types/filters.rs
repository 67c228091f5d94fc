use crate::types::restaurant_info::DishRecord;
use serde::{Deserialize, Serialize};

/// Optional narrowing applied to a nearby search.
///
/// An empty list behaves exactly like an absent one. The struct is echoed back
/// to the caller as `appliedFilters`, so it serializes only what was supplied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisines: Option<Vec<String>>,
    /// Echoed back only; dishes are never narrowed by price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_rating: Option<f64>,
    /// Every listed tag must be present on a dish.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dietary_tags: Option<Vec<String>>,
    /// None of the listed allergens may be present on a dish.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_allergens: Option<Vec<String>>,
    /// At least one listed service type must be offered by the restaurant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_types: Option<Vec<String>>,
}

impl SearchFilters {
    pub fn cuisines(&self) -> &[String] {
        self.cuisines.as_deref().unwrap_or_default()
    }

    pub fn dietary_tags(&self) -> &[String] {
        self.dietary_tags.as_deref().unwrap_or_default()
    }

    pub fn exclude_allergens(&self) -> &[String] {
        self.exclude_allergens.as_deref().unwrap_or_default()
    }

    pub fn service_types(&self) -> &[String] {
        self.service_types.as_deref().unwrap_or_default()
    }

    /// The dish-level part of the filters.
    pub fn dish_criteria(&self) -> DishCriteria<'_> {
        DishCriteria {
            dietary_tags: self.dietary_tags(),
            excluded_allergens: self.exclude_allergens(),
        }
    }
}

/// Borrowed view of the criteria a single dish is checked against.
#[derive(Debug, Clone, Copy, Default)]
pub struct DishCriteria<'a> {
    pub dietary_tags: &'a [String],
    pub excluded_allergens: &'a [String],
}

impl DishCriteria<'_> {
    /// True when dietary tags or excluded allergens were given. Restaurants
    /// left without dishes are dropped only in that case.
    pub fn is_restrictive(&self) -> bool {
        !self.dietary_tags.is_empty() || !self.excluded_allergens.is_empty()
    }

    pub fn accepts(&self, dish: &DishRecord) -> bool {
        dish.is_available
            && self
                .dietary_tags
                .iter()
                .all(|tag| dish.dietary_tags.contains(tag))
            && !self
                .excluded_allergens
                .iter()
                .any(|allergen| dish.allergens.contains(allergen))
    }
}
