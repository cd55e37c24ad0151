use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use tracing::instrument;

use crate::error::ApiError;
use crate::models::*;

use super::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/restaurants", get(list_restaurants))
        .route("/restaurants/details/{id}", get(get_restaurant))
        .route(
            "/restaurants/cuisine/{cuisine}",
            get(list_restaurants_by_cuisine),
        )
        .route("/restaurants/filter", get(filter_restaurants))
        .route("/restaurants/sort-by-rating", get(sort_restaurants_by_rating))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantFilterQuery {
    pub is_veg: Option<bool>,
    pub has_outdoor_seating: Option<bool>,
    pub is_luxury: Option<bool>,
}

#[utoipa::path(
    get,
    path = "/restaurants",
    responses(
        (status = 200, description = "All restaurants", body = ListRestaurantsResponse),
        (status = 404, description = "No restaurants stored", body = MessageResponse),
        (status = 500, description = "Database failure", body = ApiErrorResponse),
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn list_restaurants(
    State(state): State<AppState>,
) -> Result<Json<ListRestaurantsResponse>, ApiError> {
    let restaurants = state.store.list_restaurants().await?;

    if restaurants.is_empty() {
        return Err(ApiError::NotFound("restaurants".to_string()));
    }
    Ok(Json(ListRestaurantsResponse { restaurants }))
}

#[utoipa::path(
    get,
    path = "/restaurants/details/{id}",
    responses(
        (status = 200, description = "Restaurant details", body = RestaurantDetailsResponse),
        (status = 404, description = "No restaurant with this id", body = MessageResponse),
        (status = 500, description = "Database failure", body = ApiErrorResponse),
    ),
    params(
        ("id" = i32, Path, description = "Restaurant id"),
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn get_restaurant(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<RestaurantDetailsResponse>, ApiError> {
    let restaurant = state
        .store
        .restaurant_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("restaurant {id}")))?;

    Ok(Json(RestaurantDetailsResponse {
        restaurants: restaurant,
    }))
}

#[utoipa::path(
    get,
    path = "/restaurants/cuisine/{cuisine}",
    responses(
        (status = 200, description = "Restaurants serving the cuisine", body = ListRestaurantsResponse),
        (status = 404, description = "No restaurant serves this cuisine", body = MessageResponse),
        (status = 500, description = "Database failure", body = ApiErrorResponse),
    ),
    params(
        ("cuisine" = String, Path, description = "Cuisine name, matched exactly"),
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn list_restaurants_by_cuisine(
    State(state): State<AppState>,
    Path(cuisine): Path<String>,
) -> Result<Json<ListRestaurantsResponse>, ApiError> {
    let restaurants = state.store.restaurants_by_cuisine(&cuisine).await?;

    if restaurants.is_empty() {
        return Err(ApiError::NotFound("restaurants".to_string()));
    }
    Ok(Json(ListRestaurantsResponse { restaurants }))
}

#[utoipa::path(
    get,
    path = "/restaurants/filter",
    responses(
        (status = 200, description = "Restaurants matching all three flags", body = ListRestaurantsResponse),
        (status = 400, description = "A required flag is missing", body = MessageResponse),
        (status = 404, description = "No restaurant matches", body = MessageResponse),
        (status = 500, description = "Database failure", body = ApiErrorResponse),
    ),
    params(
        ("isVeg" = bool, Query, description = "Vegetarian flag, required"),
        ("hasOutdoorSeating" = bool, Query, description = "Outdoor seating flag, required"),
        ("isLuxury" = bool, Query, description = "Luxury flag, required"),
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn filter_restaurants(
    State(state): State<AppState>,
    Query(query): Query<RestaurantFilterQuery>,
) -> Result<Json<ListRestaurantsResponse>, ApiError> {
    let (is_veg, has_outdoor_seating, is_luxury) =
        match (query.is_veg, query.has_outdoor_seating, query.is_luxury) {
            (Some(veg), Some(outdoor), Some(luxury)) => (veg, outdoor, luxury),
            _ => {
                return Err(ApiError::BadRequest(
                    "isVeg, hasOutdoorSeating and isLuxury query parameters are required"
                        .to_string(),
                ))
            }
        };

    let restaurants = state
        .store
        .filter_restaurants(is_veg, has_outdoor_seating, is_luxury)
        .await?;

    if restaurants.is_empty() {
        return Err(ApiError::NotFound("restaurants".to_string()));
    }
    Ok(Json(ListRestaurantsResponse { restaurants }))
}

#[utoipa::path(
    get,
    path = "/restaurants/sort-by-rating",
    responses(
        (status = 200, description = "All restaurants, highest rating first", body = ListRestaurantsResponse),
        (status = 404, description = "No restaurants stored", body = MessageResponse),
        (status = 500, description = "Database failure", body = ApiErrorResponse),
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn sort_restaurants_by_rating(
    State(state): State<AppState>,
) -> Result<Json<ListRestaurantsResponse>, ApiError> {
    let restaurants = state.store.restaurants_by_rating().await?;

    if restaurants.is_empty() {
        return Err(ApiError::NotFound("restaurants".to_string()));
    }
    Ok(Json(ListRestaurantsResponse { restaurants }))
}
