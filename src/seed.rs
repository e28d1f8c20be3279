//! Sample catalog used by the `seed` binary and by tests.

use crate::error::AppError;
use sqlx::SqlitePool;

const RESTAURANTS: &[(&str, &str)] = &[
    ("Karen's Pizza Shack", "address1"),
    ("Sanjay's Pizza", "address2"),
    ("Kiki's Pizza", "address3"),
];

const PIZZAS: &[(&str, &str)] = &[
    ("Emma", "Dough, Tomato Sauce, Cheese"),
    ("Geri", "Dough, Tomato Sauce, Cheese, Pepperoni"),
    ("Melanie", "Dough, Sauce, Ricotta, Red peppers, Mustard"),
];

/// `(price, restaurant index, pizza index)` into the tables above.
const RESTAURANT_PIZZAS: &[(f64, usize, usize)] = &[(1.0, 0, 0), (4.0, 1, 1), (5.0, 2, 2)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub restaurants: usize,
    pub pizzas: usize,
    pub restaurant_pizzas: usize,
}

/// Replace the whole catalog with the sample data, in one transaction.
pub async fn seed(pool: &SqlitePool) -> Result<SeedSummary, AppError> {
    let mut tx = pool.begin().await?;
    sqlx::query("DELETE FROM restaurant_pizzas").execute(&mut *tx).await?;
    sqlx::query("DELETE FROM restaurants").execute(&mut *tx).await?;
    sqlx::query("DELETE FROM pizzas").execute(&mut *tx).await?;

    let mut restaurant_ids = Vec::with_capacity(RESTAURANTS.len());
    for (name, address) in RESTAURANTS {
        let id: i64 =
            sqlx::query_scalar("INSERT INTO restaurants (name, address) VALUES (?, ?) RETURNING id")
                .bind(*name)
                .bind(*address)
                .fetch_one(&mut *tx)
                .await?;
        restaurant_ids.push(id);
    }

    let mut pizza_ids = Vec::with_capacity(PIZZAS.len());
    for (name, ingredients) in PIZZAS {
        let id: i64 =
            sqlx::query_scalar("INSERT INTO pizzas (name, ingredients) VALUES (?, ?) RETURNING id")
                .bind(*name)
                .bind(*ingredients)
                .fetch_one(&mut *tx)
                .await?;
        pizza_ids.push(id);
    }

    for (price, r, p) in RESTAURANT_PIZZAS {
        sqlx::query("INSERT INTO restaurant_pizzas (price, restaurant_id, pizza_id) VALUES (?, ?, ?)")
            .bind(*price)
            .bind(restaurant_ids[*r])
            .bind(pizza_ids[*p])
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;

    let summary = SeedSummary {
        restaurants: RESTAURANTS.len(),
        pizzas: PIZZAS.len(),
        restaurant_pizzas: RESTAURANT_PIZZAS.len(),
    };
    tracing::info!(?summary, "catalog seeded");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{migration::apply_migrations, store};

    #[tokio::test]
    async fn reseeding_replaces_rows() {
        let pool = store::connect("sqlite::memory:", 1).await.unwrap();
        apply_migrations(&pool).await.unwrap();
        seed(&pool).await.unwrap();
        let summary = seed(&pool).await.unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM restaurant_pizzas")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count as usize, summary.restaurant_pizzas);
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM restaurants")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count as usize, summary.restaurants);
    }
}
