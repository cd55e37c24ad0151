diesel::table! {
    restaurants (id) {
        id -> Integer,
        name -> Text,
        cuisine -> Text,
        #[sql_name = "isVeg"]
        is_veg -> Bool,
        #[sql_name = "hasOutdoorSeating"]
        has_outdoor_seating -> Bool,
        #[sql_name = "isLuxury"]
        is_luxury -> Bool,
        rating -> Double,
    }
}

diesel::table! {
    dishes (id) {
        id -> Integer,
        name -> Text,
        price -> Double,
        #[sql_name = "isVeg"]
        is_veg -> Bool,
    }
}
