//! Estate persistence operations.

use anyhow::Result;
use chrono::{DateTime, Utc};
use estate_core::Estate;
use sqlx::SqlitePool;

/// Insert a new estate.
pub async fn insert_estate(pool: &SqlitePool, estate: &Estate) -> Result<()> {
    sqlx::query("INSERT INTO estates (id, width, length, created_at) VALUES (?1, ?2, ?3, ?4)")
        .bind(&estate.id)
        .bind(i64::from(estate.width))
        .bind(i64::from(estate.length))
        .bind(estate.created_at.to_rfc3339())
        .execute(pool)
        .await?;

    Ok(())
}

/// Load all estates from the database.
pub async fn load_all_estates(pool: &SqlitePool) -> Result<Vec<Estate>> {
    let rows = sqlx::query_as::<_, EstateRow>("SELECT id, width, length, created_at FROM estates")
        .fetch_all(pool)
        .await?;

    rows.into_iter().map(Estate::try_from).collect()
}

// Internal row type for SQLx
#[derive(sqlx::FromRow)]
struct EstateRow {
    id: String,
    width: i64,
    length: i64,
    created_at: String,
}

impl TryFrom<EstateRow> for Estate {
    type Error = anyhow::Error;

    fn try_from(row: EstateRow) -> Result<Self> {
        let created_at = DateTime::parse_from_rfc3339(&row.created_at)
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now());

        Ok(Estate {
            width: u32::try_from(row.width)?,
            length: u32::try_from(row.length)?,
            id: row.id,
            created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::init_database;

    #[tokio::test]
    async fn insert_and_load_estates() {
        let db = init_database(":memory:", 1).await.unwrap();
        let estate = Estate {
            id: "estate-1".into(),
            width: 10,
            length: 20,
            created_at: Utc::now(),
        };

        insert_estate(db.pool(), &estate).await.unwrap();

        let loaded = load_all_estates(db.pool()).await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "estate-1");
        assert_eq!(loaded[0].width, 10);
        assert_eq!(loaded[0].length, 20);
        assert_eq!(loaded[0].created_at.timestamp(), estate.created_at.timestamp());
    }

    #[tokio::test]
    async fn duplicate_id_is_rejected() {
        let db = init_database(":memory:", 1).await.unwrap();
        let estate = Estate {
            id: "estate-1".into(),
            width: 10,
            length: 10,
            created_at: Utc::now(),
        };

        insert_estate(db.pool(), &estate).await.unwrap();
        assert!(insert_estate(db.pool(), &estate).await.is_err());
    }
}
