pub mod dish;
pub mod restaurant;

// Re-export routers for easier importing
pub use dish::router as dish_router;
pub use restaurant::router as restaurant_router;

use utoipa::OpenApi;

use crate::store::Store;

#[derive(Clone)]
pub struct AppState {
    pub store: Store,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        restaurant::list_restaurants,
        restaurant::get_restaurant,
        restaurant::list_restaurants_by_cuisine,
        restaurant::filter_restaurants,
        restaurant::sort_restaurants_by_rating,
        dish::list_dishes,
        dish::get_dish,
        dish::filter_dishes,
        dish::sort_dishes_by_price,
    ),
    components(
        schemas(
            crate::models::Restaurant,
            crate::models::Dish,
            crate::models::ListRestaurantsResponse,
            crate::models::RestaurantDetailsResponse,
            crate::models::ListDishesResponse,
            crate::models::DishDetailsResponse,
            crate::models::MessageResponse,
            crate::models::ApiErrorResponse
        )
    ),
    tags(
        (name = "restaurants", description = "Restaurant read endpoints"),
        (name = "dishes", description = "Dish read endpoints")
    ),
    info(
        title = "FoodieFinds API",
        description = "Read-only queries over the restaurant and dish catalog",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;
