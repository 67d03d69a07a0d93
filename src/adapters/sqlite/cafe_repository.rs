//! SQLite implementation of CafeRepository.

use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::domain::{Cafe, DomainError, ErrorCode, NewCafe};
use crate::ports::CafeRepository;

/// SQLite implementation of CafeRepository.
#[derive(Clone)]
pub struct SqliteCafeRepository {
    pool: SqlitePool,
}

impl SqliteCafeRepository {
    /// Creates a new SqliteCafeRepository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CafeRepository for SqliteCafeRepository {
    async fn list_all(&self) -> Result<Vec<Cafe>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, map_url, img_url, location,
                   has_sockets, has_toilet, has_wifi, can_take_calls,
                   seats, coffee_price
            FROM cafe
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list cafes: {}", e),
            )
        })?;

        rows.into_iter().map(row_to_cafe).collect()
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Cafe>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, map_url, img_url, location,
                   has_sockets, has_toilet, has_wifi, can_take_calls,
                   seats, coffee_price
            FROM cafe
            WHERE name = $1
            LIMIT 1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch cafe by name: {}", e),
            )
        })?;

        row.map(row_to_cafe).transpose()
    }

    async fn insert(&self, cafe: &NewCafe) -> Result<Cafe, DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO cafe (
                name, map_url, img_url, location,
                has_sockets, has_toilet, has_wifi, can_take_calls,
                seats, coffee_price
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(&cafe.name)
        .bind(&cafe.map_url)
        .bind(&cafe.img_url)
        .bind(&cafe.location)
        .bind(cafe.has_sockets)
        .bind(cafe.has_toilet)
        .bind(cafe.has_wifi)
        .bind(cafe.can_take_calls)
        .bind(&cafe.seats)
        .bind(&cafe.coffee_price)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if e.as_database_error()
                .is_some_and(|db| db.is_unique_violation())
            {
                DomainError::duplicate_name(&cafe.name)
            } else {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to insert cafe: {}", e),
                )
            }
        })?;

        Ok(Cafe::from_new(result.last_insert_rowid(), cafe.clone()))
    }
}

fn row_to_cafe(row: SqliteRow) -> Result<Cafe, DomainError> {
    let read = |e: sqlx::Error| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to decode cafe row: {}", e),
        )
    };

    Ok(Cafe::reconstitute(
        row.try_get("id").map_err(read)?,
        row.try_get("name").map_err(read)?,
        row.try_get("map_url").map_err(read)?,
        row.try_get("img_url").map_err(read)?,
        row.try_get("location").map_err(read)?,
        row.try_get("has_sockets").map_err(read)?,
        row.try_get("has_toilet").map_err(read)?,
        row.try_get("has_wifi").map_err(read)?,
        row.try_get("can_take_calls").map_err(read)?,
        row.try_get("seats").map_err(read)?,
        row.try_get("coffee_price").map_err(read)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sqlite::ensure_schema;
    use crate::domain::CafeDraft;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_repository() -> SqliteCafeRepository {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        ensure_schema(&pool).await.unwrap();
        SqliteCafeRepository::new(pool)
    }

    fn draft(name: &str) -> NewCafe {
        let slug = name.to_lowercase().replace(' ', "-");
        NewCafe::from_draft(CafeDraft {
            name: name.to_string(),
            map_url: format!("https://maps.example.com/{}", slug),
            img_url: format!("https://img.example.com/{}.jpg", slug),
            location: "Peckham".to_string(),
            has_sockets: true,
            has_toilet: false,
            has_wifi: true,
            can_take_calls: false,
            seats: "30".to_string(),
            coffee_price: "£2.80".to_string(),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn list_all_on_empty_table_returns_nothing() {
        let repo = test_repository().await;
        assert!(repo.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn insert_assigns_an_id_and_round_trips() {
        let repo = test_repository().await;
        let created = repo.insert(&draft("Brew Lab")).await.unwrap();
        assert!(created.id() > 0);

        let all = repo.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0], created);
        assert!(all[0].has_wifi());
        assert!(!all[0].has_toilet());
    }

    #[tokio::test]
    async fn find_by_name_matches_exactly() {
        let repo = test_repository().await;
        repo.insert(&draft("Brew Lab")).await.unwrap();

        let found = repo.find_by_name("Brew Lab").await.unwrap();
        assert_eq!(found.unwrap().name(), "Brew Lab");

        assert!(repo.find_by_name("brew lab").await.unwrap().is_none());
        assert!(repo.find_by_name("Nowhere").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_name_maps_to_duplicate_name_error() {
        let repo = test_repository().await;
        repo.insert(&draft("Brew Lab")).await.unwrap();

        let err = repo.insert(&draft("Brew Lab")).await.unwrap_err();
        assert!(err.is_duplicate_name());

        // The constraint kept the table at one row.
        assert_eq!(repo.list_all().await.unwrap().len(), 1);
    }
}
