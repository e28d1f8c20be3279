//! Embedded schema migrations. Each version is applied once, inside its own
//! transaction, and recorded in `_sys_migrations`.

use crate::error::AppError;
use sqlx::SqlitePool;

/// Ordered `(version, statements)` pairs. Append only.
const MIGRATIONS: &[(&str, &[&str])] = &[
    (
        "0001_create_catalog",
        &[
            r#"
            CREATE TABLE IF NOT EXISTS restaurants (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                address TEXT NOT NULL
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS pizzas (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                ingredients TEXT NOT NULL
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS restaurant_pizzas (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                price REAL NOT NULL CHECK (price BETWEEN 1 AND 30),
                restaurant_id INTEGER NOT NULL REFERENCES restaurants (id),
                pizza_id INTEGER NOT NULL REFERENCES pizzas (id)
            )
            "#,
        ],
    ),
    (
        "0002_index_restaurant_pizzas",
        &[
            "CREATE INDEX IF NOT EXISTS idx_restaurant_pizzas_restaurant_id ON restaurant_pizzas (restaurant_id)",
            "CREATE INDEX IF NOT EXISTS idx_restaurant_pizzas_pizza_id ON restaurant_pizzas (pizza_id)",
        ],
    ),
];

/// Apply every migration not yet recorded. Returns the versions applied by this call.
pub async fn apply_migrations(pool: &SqlitePool) -> Result<Vec<&'static str>, AppError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS _sys_migrations (
            version TEXT PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    let mut applied = Vec::new();
    for (version, statements) in MIGRATIONS {
        let mut tx = pool.begin().await?;
        let done: Option<String> =
            sqlx::query_scalar("SELECT version FROM _sys_migrations WHERE version = ?")
                .bind(*version)
                .fetch_optional(&mut *tx)
                .await?;
        if done.is_some() {
            tx.rollback().await?;
            continue;
        }
        for sql in *statements {
            sqlx::query(sql).execute(&mut *tx).await?;
        }
        sqlx::query("INSERT INTO _sys_migrations (version) VALUES (?)")
            .bind(*version)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        tracing::info!(version = *version, "migration applied");
        applied.push(*version);
    }
    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store;

    #[tokio::test]
    async fn applies_once() {
        let pool = store::connect("sqlite::memory:", 1).await.unwrap();
        let first = apply_migrations(&pool).await.unwrap();
        assert_eq!(first.len(), MIGRATIONS.len());
        let second = apply_migrations(&pool).await.unwrap();
        assert!(second.is_empty());
    }

    #[tokio::test]
    async fn price_check_is_enforced_by_the_schema() {
        let pool = store::connect("sqlite::memory:", 1).await.unwrap();
        apply_migrations(&pool).await.unwrap();
        sqlx::query("INSERT INTO restaurants (name, address) VALUES ('A', 'B')")
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query("INSERT INTO pizzas (name, ingredients) VALUES ('P', 'I')")
            .execute(&pool)
            .await
            .unwrap();
        let res = sqlx::query(
            "INSERT INTO restaurant_pizzas (price, restaurant_id, pizza_id) VALUES (31, 1, 1)",
        )
        .execute(&pool)
        .await;
        assert!(res.is_err());
    }
}
