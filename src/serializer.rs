//! Output shapes for every operation.
//!
//! Each view names its fields explicitly. Listing views ("only" views) carry
//! scalar columns and never follow a relationship. Detail views follow exactly
//! one hop and embed only "only" views, so the restaurant that owns an
//! association is never serialized again inside it.

use crate::models::{Pizza, Restaurant, RestaurantPizza};
use serde::{Serialize, Serializer};
use utoipa::ToSchema;

/// Whole prices are written as integers (`5`, not `5.0`); others as decimals.
fn serialize_price<S: Serializer>(price: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if price.fract() == 0.0 && price.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*price as i64)
    } else {
        serializer.serialize_f64(*price)
    }
}

/// `id`, `name`, `address` only.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RestaurantSummary {
    pub id: i64,
    pub name: String,
    pub address: String,
}

/// `id`, `name`, `ingredients` only.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PizzaSummary {
    pub id: i64,
    pub name: String,
    pub ingredients: String,
}

/// An association as seen from its restaurant: own fields plus its pizza.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RestaurantPizzaEntry {
    pub id: i64,
    #[serde(serialize_with = "serialize_price")]
    pub price: f64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
    pub pizza: PizzaSummary,
}

/// A restaurant with its associations.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RestaurantDetail {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub restaurant_pizzas: Vec<RestaurantPizzaEntry>,
}

/// A freshly created association with both ends embedded.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RestaurantPizzaDetail {
    pub id: i64,
    #[serde(serialize_with = "serialize_price")]
    pub price: f64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
    pub pizza: PizzaSummary,
    pub restaurant: RestaurantSummary,
}

pub fn restaurant_only(restaurant: Restaurant) -> RestaurantSummary {
    RestaurantSummary {
        id: restaurant.id,
        name: restaurant.name,
        address: restaurant.address,
    }
}

pub fn pizza_only(pizza: Pizza) -> PizzaSummary {
    PizzaSummary {
        id: pizza.id,
        name: pizza.name,
        ingredients: pizza.ingredients,
    }
}

pub fn restaurant_detail(
    restaurant: Restaurant,
    associations: Vec<(RestaurantPizza, Pizza)>,
) -> RestaurantDetail {
    RestaurantDetail {
        id: restaurant.id,
        name: restaurant.name,
        address: restaurant.address,
        restaurant_pizzas: associations
            .into_iter()
            .map(|(rp, pizza)| RestaurantPizzaEntry {
                id: rp.id,
                price: rp.price,
                pizza_id: rp.pizza_id,
                restaurant_id: rp.restaurant_id,
                pizza: pizza_only(pizza),
            })
            .collect(),
    }
}

pub fn restaurant_pizza_detail(
    association: RestaurantPizza,
    pizza: Pizza,
    restaurant: Restaurant,
) -> RestaurantPizzaDetail {
    RestaurantPizzaDetail {
        id: association.id,
        price: association.price,
        pizza_id: association.pizza_id,
        restaurant_id: association.restaurant_id,
        pizza: pizza_only(pizza),
        restaurant: restaurant_only(restaurant),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn dominion() -> Restaurant {
        Restaurant {
            id: 1,
            name: "Dominion Pizza".into(),
            address: "Good Life St".into(),
        }
    }

    fn emma() -> Pizza {
        Pizza {
            id: 1,
            name: "Emma".into(),
            ingredients: "Dough, Tomato Sauce, Cheese".into(),
        }
    }

    fn association() -> RestaurantPizza {
        RestaurantPizza {
            id: 7,
            price: 5.0,
            restaurant_id: 1,
            pizza_id: 1,
        }
    }

    fn keys(v: &Value) -> Vec<&str> {
        let mut keys: Vec<&str> = v.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    #[test]
    fn only_views_have_exactly_their_columns() {
        let r = serde_json::to_value(restaurant_only(dominion())).unwrap();
        assert_eq!(keys(&r), ["address", "id", "name"]);
        let p = serde_json::to_value(pizza_only(emma())).unwrap();
        assert_eq!(keys(&p), ["id", "ingredients", "name"]);
    }

    #[test]
    fn restaurant_detail_stops_at_the_pizza() {
        let v = serde_json::to_value(restaurant_detail(dominion(), vec![(association(), emma())]))
            .unwrap();
        assert_eq!(keys(&v), ["address", "id", "name", "restaurant_pizzas"]);
        let entry = &v["restaurant_pizzas"][0];
        assert_eq!(keys(entry), ["id", "pizza", "pizza_id", "price", "restaurant_id"]);
        assert!(entry.get("restaurant").is_none());
        assert_eq!(keys(&entry["pizza"]), ["id", "ingredients", "name"]);
    }

    #[test]
    fn fractional_price_keeps_its_decimals() {
        let mut rp = association();
        rp.price = 12.5;
        let v = serde_json::to_value(restaurant_pizza_detail(rp, emma(), dominion())).unwrap();
        assert_eq!(v["price"], json!(12.5));
    }

    #[test]
    fn restaurant_without_associations_has_empty_list() {
        let v = serde_json::to_value(restaurant_detail(dominion(), Vec::new())).unwrap();
        assert_eq!(v["restaurant_pizzas"], json!([]));
    }

    #[test]
    fn created_association_embeds_both_ends_once() {
        let v = serde_json::to_value(restaurant_pizza_detail(association(), emma(), dominion()))
            .unwrap();
        assert_eq!(
            v,
            json!({
                "id": 7,
                "price": 5,
                "pizza_id": 1,
                "restaurant_id": 1,
                "pizza": {"id": 1, "name": "Emma", "ingredients": "Dough, Tomato Sauce, Cheese"},
                "restaurant": {"id": 1, "name": "Dominion Pizza", "address": "Good Life St"}
            })
        );
    }
}
