use std::sync::Arc;

use diesel::prelude::*;
use diesel::ConnectionResult;
use tokio::sync::Mutex;

use crate::models::{Dish, Restaurant};

/// Handle to the SQLite database, shared by every request handler.
///
/// One connection serves the whole process; the mutex keeps concurrent
/// handlers from interleaving statements on it, and SQLite serializes
/// the reads underneath.
#[derive(Clone)]
pub struct Store {
    conn: Arc<Mutex<SqliteConnection>>,
}

impl Store {
    pub fn new(conn: SqliteConnection) -> Self {
        Store {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    pub fn connect(database_url: &str) -> ConnectionResult<Self> {
        Ok(Store::new(SqliteConnection::establish(database_url)?))
    }

    pub async fn list_restaurants(&self) -> QueryResult<Vec<Restaurant>> {
        use crate::schema::restaurants::dsl::*;

        let conn = &mut *self.conn.lock().await;
        restaurants.select(Restaurant::as_select()).load(conn)
    }

    pub async fn restaurant_by_id(&self, restaurant_id: i32) -> QueryResult<Option<Restaurant>> {
        use crate::schema::restaurants::dsl::*;

        let conn = &mut *self.conn.lock().await;
        restaurants
            .find(restaurant_id)
            .select(Restaurant::as_select())
            .first(conn)
            .optional()
    }

    pub async fn restaurants_by_cuisine(&self, value: &str) -> QueryResult<Vec<Restaurant>> {
        use crate::schema::restaurants::dsl::*;

        let conn = &mut *self.conn.lock().await;
        restaurants
            .filter(cuisine.eq(value))
            .select(Restaurant::as_select())
            .load(conn)
    }

    /// All three flags must match exactly; no partial matching.
    pub async fn filter_restaurants(
        &self,
        veg: bool,
        outdoor_seating: bool,
        luxury: bool,
    ) -> QueryResult<Vec<Restaurant>> {
        use crate::schema::restaurants::dsl::*;

        let conn = &mut *self.conn.lock().await;
        restaurants
            .filter(is_veg.eq(veg))
            .filter(has_outdoor_seating.eq(outdoor_seating))
            .filter(is_luxury.eq(luxury))
            .select(Restaurant::as_select())
            .load(conn)
    }

    /// Highest rating first; ties stay in store order.
    pub async fn restaurants_by_rating(&self) -> QueryResult<Vec<Restaurant>> {
        use crate::schema::restaurants::dsl::*;

        let conn = &mut *self.conn.lock().await;
        restaurants
            .order(rating.desc())
            .select(Restaurant::as_select())
            .load(conn)
    }

    pub async fn list_dishes(&self) -> QueryResult<Vec<Dish>> {
        use crate::schema::dishes::dsl::*;

        let conn = &mut *self.conn.lock().await;
        dishes.select(Dish::as_select()).load(conn)
    }

    pub async fn dish_by_id(&self, dish_id: i32) -> QueryResult<Option<Dish>> {
        use crate::schema::dishes::dsl::*;

        let conn = &mut *self.conn.lock().await;
        dishes
            .find(dish_id)
            .select(Dish::as_select())
            .first(conn)
            .optional()
    }

    /// Cheapest first; ties stay in store order.
    pub async fn dishes_by_price(&self) -> QueryResult<Vec<Dish>> {
        use crate::schema::dishes::dsl::*;

        let conn = &mut *self.conn.lock().await;
        dishes
            .order(price.asc())
            .select(Dish::as_select())
            .load(conn)
    }

    pub async fn filter_dishes(&self, veg: bool) -> QueryResult<Vec<Dish>> {
        use crate::schema::dishes::dsl::*;

        let conn = &mut *self.conn.lock().await;
        dishes
            .filter(is_veg.eq(veg))
            .select(Dish::as_select())
            .load(conn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::connection::SimpleConnection;

    use crate::schema;

    const SCHEMA_SQL: &str = "
        CREATE TABLE restaurants (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            cuisine TEXT NOT NULL,
            isVeg BOOLEAN NOT NULL,
            hasOutdoorSeating BOOLEAN NOT NULL,
            isLuxury BOOLEAN NOT NULL,
            rating REAL NOT NULL
        );
        CREATE TABLE dishes (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            price REAL NOT NULL,
            isVeg BOOLEAN NOT NULL
        );
    ";

    fn restaurant(id: i32, cuisine: &str, flags: (bool, bool, bool), rating: f64) -> Restaurant {
        Restaurant {
            id,
            name: format!("Restaurant {id}"),
            cuisine: cuisine.to_string(),
            is_veg: flags.0,
            has_outdoor_seating: flags.1,
            is_luxury: flags.2,
            rating,
        }
    }

    fn dish(id: i32, price: f64, veg: bool) -> Dish {
        Dish {
            id,
            name: format!("Dish {id}"),
            price,
            is_veg: veg,
        }
    }

    fn seeded_store() -> Store {
        let mut conn = SqliteConnection::establish(":memory:").unwrap();
        conn.batch_execute(SCHEMA_SQL).unwrap();

        diesel::insert_into(schema::restaurants::table)
            .values(&vec![
                restaurant(1, "Indian", (true, true, false), 4.5),
                restaurant(2, "Italian", (false, false, true), 4.2),
                restaurant(3, "Indian", (true, false, true), 3.9),
                restaurant(4, "Mexican", (true, false, true), 4.8),
            ])
            .execute(&mut conn)
            .unwrap();
        diesel::insert_into(schema::dishes::table)
            .values(&vec![
                dish(1, 240.0, true),
                dish(2, 320.0, false),
                dish(3, 150.0, true),
            ])
            .execute(&mut conn)
            .unwrap();

        Store::new(conn)
    }

    #[tokio::test]
    async fn list_restaurants_returns_every_row() {
        let store = seeded_store();
        let rows = store.list_restaurants().await.unwrap();
        assert_eq!(rows.len(), 4);
    }

    #[tokio::test]
    async fn restaurant_by_id_finds_the_matching_row() {
        let store = seeded_store();
        let row = store.restaurant_by_id(2).await.unwrap().unwrap();
        assert_eq!(row.cuisine, "Italian");
        assert_eq!(row.rating, 4.2);
    }

    #[tokio::test]
    async fn restaurant_by_id_is_none_for_unknown_id() {
        let store = seeded_store();
        assert_eq!(store.restaurant_by_id(999).await.unwrap(), None);
    }

    #[tokio::test]
    async fn restaurants_by_cuisine_matches_exactly() {
        let store = seeded_store();
        let rows = store.restaurants_by_cuisine("Indian").await.unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.cuisine == "Indian"));

        let rows = store.restaurants_by_cuisine("Thai").await.unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn filter_restaurants_requires_all_three_flags() {
        let store = seeded_store();
        let rows = store.filter_restaurants(true, false, true).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows
            .iter()
            .all(|r| r.is_veg && !r.has_outdoor_seating && r.is_luxury));
    }

    #[tokio::test]
    async fn restaurants_by_rating_is_descending() {
        let store = seeded_store();
        let rows = store.restaurants_by_rating().await.unwrap();
        assert_eq!(rows.len(), 4);
        for pair in rows.windows(2) {
            assert!(pair[0].rating >= pair[1].rating);
        }
        assert_eq!(rows[0].id, 4);
    }

    #[tokio::test]
    async fn dish_by_id_hit_and_miss() {
        let store = seeded_store();
        assert_eq!(store.dish_by_id(3).await.unwrap().unwrap().price, 150.0);
        assert_eq!(store.dish_by_id(999).await.unwrap(), None);
    }

    #[tokio::test]
    async fn dishes_by_price_is_ascending() {
        let store = seeded_store();
        let rows = store.dishes_by_price().await.unwrap();
        assert_eq!(rows.len(), 3);
        for pair in rows.windows(2) {
            assert!(pair[0].price <= pair[1].price);
        }
    }

    #[tokio::test]
    async fn filter_dishes_by_veg_flag() {
        let store = seeded_store();
        let veg = store.filter_dishes(true).await.unwrap();
        assert_eq!(veg.len(), 2);
        assert!(veg.iter().all(|d| d.is_veg));

        let non_veg = store.filter_dishes(false).await.unwrap();
        assert_eq!(non_veg.len(), 1);
    }
}
