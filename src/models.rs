//! Row types for the three catalog tables.

use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Pizza {
    pub id: i64,
    pub name: String,
    pub ingredients: String,
}

/// Association of one restaurant and one pizza at a price.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct RestaurantPizza {
    pub id: i64,
    pub price: f64,
    pub restaurant_id: i64,
    pub pizza_id: i64,
}

/// An association row joined with its pizza, as loaded for a restaurant's detail view.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct RestaurantPizzaWithPizza {
    pub id: i64,
    pub price: f64,
    pub restaurant_id: i64,
    pub pizza_id: i64,
    pub pizza_name: String,
    pub pizza_ingredients: String,
}

impl RestaurantPizzaWithPizza {
    pub fn split(self) -> (RestaurantPizza, Pizza) {
        (
            RestaurantPizza {
                id: self.id,
                price: self.price,
                restaurant_id: self.restaurant_id,
                pizza_id: self.pizza_id,
            },
            Pizza {
                id: self.pizza_id,
                name: self.pizza_name,
                ingredients: self.pizza_ingredients,
            },
        )
    }
}

/// A validated create request, not yet persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewRestaurantPizza {
    pub price: f64,
    pub restaurant_id: i64,
    pub pizza_id: i64,
}
