use diesel::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

use crate::schema::{dishes, restaurants};

/// Row of the `restaurants` table. Serialized field names follow the
/// column spelling (`isVeg`, `hasOutdoorSeating`, `isLuxury`).
#[derive(Queryable, Selectable, Identifiable, Insertable, Serialize, ToSchema, Debug, PartialEq, Clone)]
#[diesel(table_name = restaurants)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: i32,
    pub name: String,
    pub cuisine: String,
    pub is_veg: bool,
    pub has_outdoor_seating: bool,
    pub is_luxury: bool,
    pub rating: f64,
}

/// Row of the `dishes` table.
#[derive(Queryable, Selectable, Identifiable, Insertable, Serialize, ToSchema, Debug, PartialEq, Clone)]
#[diesel(table_name = dishes)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub is_veg: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ListRestaurantsResponse {
    /// Matching restaurant rows
    pub restaurants: Vec<Restaurant>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RestaurantDetailsResponse {
    /// The restaurant matching the requested id
    pub restaurants: Restaurant,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ListDishesResponse {
    /// Matching dish rows
    pub dishes: Vec<Dish>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DishDetailsResponse {
    /// The dish matching the requested id
    pub dishes: Dish,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    /// Human-readable outcome, e.g. "restaurants not found"
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorResponse {
    /// Error message
    pub error: String,
}
