//! Catalog operations against SQLite. Every operation runs in one transaction.

use crate::error::{AppError, RESTAURANT_NOT_FOUND};
use crate::models::{NewRestaurantPizza, Pizza, Restaurant, RestaurantPizza, RestaurantPizzaWithPizza};
use crate::serializer::{
    pizza_only, restaurant_detail, restaurant_only, restaurant_pizza_detail, PizzaSummary,
    RestaurantDetail, RestaurantPizzaDetail, RestaurantSummary,
};
use crate::service::RestaurantPizzaValidator;
use sqlx::{SqliteConnection, SqlitePool};

pub struct CatalogService;

impl CatalogService {
    /// All restaurants in storage order, `id`/`name`/`address` only.
    pub async fn list_restaurants(pool: &SqlitePool) -> Result<Vec<RestaurantSummary>, AppError> {
        let mut tx = pool.begin().await?;
        let rows: Vec<Restaurant> =
            sqlx::query_as("SELECT id, name, address FROM restaurants ORDER BY id")
                .fetch_all(&mut *tx)
                .await?;
        tx.commit().await?;
        Ok(rows.into_iter().map(restaurant_only).collect())
    }

    /// One restaurant with its associations, each carrying its pizza.
    pub async fn get_restaurant(pool: &SqlitePool, id: i64) -> Result<RestaurantDetail, AppError> {
        let mut tx = pool.begin().await?;
        let restaurant = fetch_restaurant(&mut tx, id)
            .await?
            .ok_or(AppError::NotFound(RESTAURANT_NOT_FOUND))?;
        let rows: Vec<RestaurantPizzaWithPizza> = sqlx::query_as(
            r#"
            SELECT rp.id, rp.price, rp.restaurant_id, rp.pizza_id,
                   p.name AS pizza_name, p.ingredients AS pizza_ingredients
            FROM restaurant_pizzas rp
            JOIN pizzas p ON p.id = rp.pizza_id
            WHERE rp.restaurant_id = ?
            ORDER BY rp.id
            "#,
        )
        .bind(id)
        .fetch_all(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(restaurant_detail(
            restaurant,
            rows.into_iter().map(RestaurantPizzaWithPizza::split).collect(),
        ))
    }

    /// Delete a restaurant and its associations, children first. Returns the number of associations removed.
    pub async fn delete_restaurant(pool: &SqlitePool, id: i64) -> Result<u64, AppError> {
        let mut tx = pool.begin().await?;
        if fetch_restaurant(&mut tx, id).await?.is_none() {
            tx.rollback().await?;
            return Err(AppError::NotFound(RESTAURANT_NOT_FOUND));
        }
        let removed = sqlx::query("DELETE FROM restaurant_pizzas WHERE restaurant_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        sqlx::query("DELETE FROM restaurants WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        tracing::info!(restaurant_id = id, associations = removed, "restaurant deleted");
        Ok(removed)
    }

    /// All pizzas in storage order, `id`/`name`/`ingredients` only.
    pub async fn list_pizzas(pool: &SqlitePool) -> Result<Vec<PizzaSummary>, AppError> {
        let mut tx = pool.begin().await?;
        let rows: Vec<Pizza> = sqlx::query_as("SELECT id, name, ingredients FROM pizzas ORDER BY id")
            .fetch_all(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(rows.into_iter().map(pizza_only).collect())
    }

    /// Persist a new association. Any failure, storage errors at begin or commit included,
    /// rolls the transaction back and surfaces as [`AppError::Validation`].
    pub async fn create_restaurant_pizza(
        pool: &SqlitePool,
        candidate: NewRestaurantPizza,
    ) -> Result<RestaurantPizzaDetail, AppError> {
        let mut tx = pool.begin().await.map_err(write_rejected)?;
        match persist_restaurant_pizza(&mut tx, candidate)
            .await
            .map_err(as_validation)
        {
            Ok(created) => {
                tx.commit().await.map_err(write_rejected)?;
                tracing::info!(
                    id = created.id,
                    restaurant_id = created.restaurant_id,
                    pizza_id = created.pizza_id,
                    "restaurant pizza created"
                );
                Ok(created)
            }
            Err(e) => {
                if let Err(rollback) = tx.rollback().await {
                    tracing::warn!(error = %rollback, "rollback failed");
                }
                Err(e)
            }
        }
    }
}

fn write_rejected(e: sqlx::Error) -> AppError {
    tracing::warn!(error = %e, "restaurant pizza write rejected");
    AppError::Validation(format!("write rejected: {}", e))
}

fn as_validation(e: AppError) -> AppError {
    match e {
        AppError::Db(e) => write_rejected(e),
        other => other,
    }
}

async fn persist_restaurant_pizza(
    conn: &mut SqliteConnection,
    candidate: NewRestaurantPizza,
) -> Result<RestaurantPizzaDetail, AppError> {
    RestaurantPizzaValidator::check_price(candidate.price)?;
    let restaurant = fetch_restaurant(conn, candidate.restaurant_id)
        .await?
        .ok_or_else(|| {
            AppError::Validation(format!("restaurant {} does not exist", candidate.restaurant_id))
        })?;
    let pizza = fetch_pizza(conn, candidate.pizza_id)
        .await?
        .ok_or_else(|| AppError::Validation(format!("pizza {} does not exist", candidate.pizza_id)))?;

    let row: RestaurantPizza = sqlx::query_as(
        r#"
        INSERT INTO restaurant_pizzas (price, restaurant_id, pizza_id)
        VALUES (?, ?, ?)
        RETURNING id, price, restaurant_id, pizza_id
        "#,
    )
    .bind(candidate.price)
    .bind(candidate.restaurant_id)
    .bind(candidate.pizza_id)
    .fetch_one(&mut *conn)
    .await
    .map_err(|e| AppError::Validation(format!("insert rejected: {}", e)))?;

    Ok(restaurant_pizza_detail(row, pizza, restaurant))
}

async fn fetch_restaurant(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<Option<Restaurant>, AppError> {
    tracing::debug!(id, "fetch restaurant");
    let row = sqlx::query_as("SELECT id, name, address FROM restaurants WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(row)
}

async fn fetch_pizza(conn: &mut SqliteConnection, id: i64) -> Result<Option<Pizza>, AppError> {
    tracing::debug!(id, "fetch pizza");
    let row = sqlx::query_as("SELECT id, name, ingredients FROM pizzas WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(row)
}
