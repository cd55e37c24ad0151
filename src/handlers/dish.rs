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
        .route("/dishes", get(list_dishes))
        .route("/dishes/details/{id}", get(get_dish))
        .route("/dishes/filter", get(filter_dishes))
        .route("/dishes/sort-by-price", get(sort_dishes_by_price))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishFilterQuery {
    pub is_veg: Option<bool>,
}

#[utoipa::path(
    get,
    path = "/dishes",
    responses(
        (status = 200, description = "All dishes", body = ListDishesResponse),
        (status = 404, description = "No dishes stored", body = MessageResponse),
        (status = 500, description = "Database failure", body = ApiErrorResponse),
    ),
    tag = "dishes"
)]
#[instrument(skip(state))]
pub async fn list_dishes(
    State(state): State<AppState>,
) -> Result<Json<ListDishesResponse>, ApiError> {
    let dishes = state.store.list_dishes().await?;

    if dishes.is_empty() {
        return Err(ApiError::NotFound("dishes".to_string()));
    }
    Ok(Json(ListDishesResponse { dishes }))
}

#[utoipa::path(
    get,
    path = "/dishes/details/{id}",
    responses(
        (status = 200, description = "Dish details", body = DishDetailsResponse),
        (status = 404, description = "No dish with this id", body = MessageResponse),
        (status = 500, description = "Database failure", body = ApiErrorResponse),
    ),
    params(
        ("id" = i32, Path, description = "Dish id"),
    ),
    tag = "dishes"
)]
#[instrument(skip(state))]
pub async fn get_dish(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<DishDetailsResponse>, ApiError> {
    let dish = state
        .store
        .dish_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("dish {id}")))?;

    Ok(Json(DishDetailsResponse { dishes: dish }))
}

#[utoipa::path(
    get,
    path = "/dishes/filter",
    responses(
        (status = 200, description = "Dishes matching the vegetarian flag", body = ListDishesResponse),
        (status = 400, description = "The flag is missing", body = MessageResponse),
        (status = 404, description = "No dish matches", body = MessageResponse),
        (status = 500, description = "Database failure", body = ApiErrorResponse),
    ),
    params(
        ("isVeg" = bool, Query, description = "Vegetarian flag, required"),
    ),
    tag = "dishes"
)]
#[instrument(skip(state))]
pub async fn filter_dishes(
    State(state): State<AppState>,
    Query(query): Query<DishFilterQuery>,
) -> Result<Json<ListDishesResponse>, ApiError> {
    let is_veg = query.is_veg.ok_or_else(|| {
        ApiError::BadRequest("isVeg query parameter is required".to_string())
    })?;

    let dishes = state.store.filter_dishes(is_veg).await?;

    if dishes.is_empty() {
        return Err(ApiError::NotFound("dishes".to_string()));
    }
    Ok(Json(ListDishesResponse { dishes }))
}

#[utoipa::path(
    get,
    path = "/dishes/sort-by-price",
    responses(
        (status = 200, description = "All dishes, cheapest first", body = ListDishesResponse),
        (status = 404, description = "No dishes stored", body = MessageResponse),
        (status = 500, description = "Database failure", body = ApiErrorResponse),
    ),
    tag = "dishes"
)]
#[instrument(skip(state))]
pub async fn sort_dishes_by_price(
    State(state): State<AppState>,
) -> Result<Json<ListDishesResponse>, ApiError> {
    let dishes = state.store.dishes_by_price().await?;

    if dishes.is_empty() {
        return Err(ApiError::NotFound("dishes".to_string()));
    }
    Ok(Json(ListDishesResponse { dishes }))
}
