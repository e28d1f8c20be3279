//! Create-request validation for restaurant pizzas.

use crate::error::AppError;
use crate::models::NewRestaurantPizza;
use serde_json::{Map, Value};

pub const MIN_PRICE: f64 = 1.0;
pub const MAX_PRICE: f64 = 30.0;

pub struct RestaurantPizzaValidator;

impl RestaurantPizzaValidator {
    /// Check the payload shape. `price` is any finite JSON number, the ids are JSON integers;
    /// extra fields are ignored.
    pub fn parse(body: &Value) -> Result<NewRestaurantPizza, AppError> {
        let obj = body
            .as_object()
            .ok_or_else(|| AppError::Validation("body must be a JSON object".into()))?;
        Ok(NewRestaurantPizza {
            price: number_field(obj, "price")?,
            pizza_id: integer_field(obj, "pizza_id")?,
            restaurant_id: integer_field(obj, "restaurant_id")?,
        })
    }

    /// Inclusive range check.
    pub fn check_price(price: f64) -> Result<(), AppError> {
        if (MIN_PRICE..=MAX_PRICE).contains(&price) {
            Ok(())
        } else {
            Err(AppError::Validation(format!(
                "price {} must be between {} and {}",
                price, MIN_PRICE, MAX_PRICE
            )))
        }
    }
}

fn number_field(obj: &Map<String, Value>, name: &str) -> Result<f64, AppError> {
    match obj.get(name) {
        None | Some(Value::Null) => Err(AppError::Validation(format!("{} is required", name))),
        Some(Value::Number(n)) => n
            .as_f64()
            .filter(|v| v.is_finite())
            .ok_or_else(|| AppError::Validation(format!("{} must be a finite number", name))),
        Some(_) => Err(AppError::Validation(format!("{} must be a number", name))),
    }
}

fn integer_field(obj: &Map<String, Value>, name: &str) -> Result<i64, AppError> {
    match obj.get(name) {
        None | Some(Value::Null) => Err(AppError::Validation(format!("{} is required", name))),
        Some(Value::Number(n)) => n
            .as_i64()
            .ok_or_else(|| AppError::Validation(format!("{} must be an integer", name))),
        Some(_) => Err(AppError::Validation(format!("{} must be an integer", name))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn cause(err: AppError) -> String {
        match err {
            AppError::Validation(cause) => cause,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn parses_a_complete_payload() {
        let parsed = RestaurantPizzaValidator::parse(
            &json!({"price": 5, "pizza_id": 2, "restaurant_id": 3, "note": "ignored"}),
        )
        .unwrap();
        assert_eq!(
            parsed,
            NewRestaurantPizza {
                price: 5.0,
                pizza_id: 2,
                restaurant_id: 3
            }
        );
    }

    #[test]
    fn rejects_missing_and_null_fields() {
        let err = RestaurantPizzaValidator::parse(&json!({"price": 5, "pizza_id": 1})).unwrap_err();
        assert_eq!(cause(err), "restaurant_id is required");
        let err = RestaurantPizzaValidator::parse(
            &json!({"price": null, "pizza_id": 1, "restaurant_id": 1}),
        )
        .unwrap_err();
        assert_eq!(cause(err), "price is required");
    }

    #[test]
    fn rejects_wrong_shapes() {
        for body in [
            json!([1, 2, 3]),
            json!("price=5"),
            json!({"price": "5", "pizza_id": 1, "restaurant_id": 1}),
            json!({"price": 5, "pizza_id": 1.5, "restaurant_id": 1}),
            json!({"price": true, "pizza_id": 1, "restaurant_id": 1}),
            json!({"price": 5, "pizza_id": [1], "restaurant_id": 1}),
        ] {
            assert!(
                matches!(RestaurantPizzaValidator::parse(&body), Err(AppError::Validation(_))),
                "accepted {body}"
            );
        }
    }

    #[test]
    fn fractional_prices_are_numbers() {
        for (raw, expected) in [(json!(5.0), 5.0), (json!(12.5), 12.5), (json!(7), 7.0)] {
            let parsed = RestaurantPizzaValidator::parse(
                &json!({"price": raw, "pizza_id": 1, "restaurant_id": 1}),
            )
            .unwrap();
            assert_eq!(parsed.price, expected);
        }
    }

    #[test]
    fn price_range_is_inclusive() {
        assert!(RestaurantPizzaValidator::check_price(MIN_PRICE).is_ok());
        assert!(RestaurantPizzaValidator::check_price(MAX_PRICE).is_ok());
        assert!(RestaurantPizzaValidator::check_price(12.5).is_ok());
        assert!(RestaurantPizzaValidator::check_price(0.0).is_err());
        assert!(RestaurantPizzaValidator::check_price(0.5).is_err());
        assert!(RestaurantPizzaValidator::check_price(30.5).is_err());
        assert!(RestaurantPizzaValidator::check_price(-5.0).is_err());
        assert!(RestaurantPizzaValidator::check_price(f64::NAN).is_err());
    }
}
