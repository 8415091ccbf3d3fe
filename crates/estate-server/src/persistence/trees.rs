//! Tree persistence operations.

use anyhow::Result;
use chrono::{DateTime, Utc};
use estate_core::Tree;
use sqlx::SqlitePool;

/// Insert a new tree.
pub async fn insert_tree(pool: &SqlitePool, tree: &Tree) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO trees (id, estate_id, x, y, height, created_at)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        "#,
    )
    .bind(&tree.id)
    .bind(&tree.estate_id)
    .bind(i64::from(tree.x))
    .bind(i64::from(tree.y))
    .bind(i64::from(tree.height))
    .bind(tree.created_at.to_rfc3339())
    .execute(pool)
    .await?;

    Ok(())
}

/// Load all trees from the database in insertion order.
pub async fn load_all_trees(pool: &SqlitePool) -> Result<Vec<Tree>> {
    let rows = sqlx::query_as::<_, TreeRow>(
        "SELECT id, estate_id, x, y, height, created_at FROM trees ORDER BY rowid",
    )
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(Tree::try_from).collect()
}

#[derive(sqlx::FromRow)]
struct TreeRow {
    id: String,
    estate_id: String,
    x: i64,
    y: i64,
    height: i64,
    created_at: String,
}

impl TryFrom<TreeRow> for Tree {
    type Error = anyhow::Error;

    fn try_from(row: TreeRow) -> Result<Self> {
        let created_at = DateTime::parse_from_rfc3339(&row.created_at)
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now());

        Ok(Tree {
            id: row.id,
            estate_id: row.estate_id,
            x: u32::try_from(row.x)?,
            y: u32::try_from(row.y)?,
            height: u32::try_from(row.height)?,
            created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::{estates, init_database};
    use estate_core::Estate;

    async fn seeded() -> crate::persistence::Database {
        let db = init_database(":memory:", 1).await.unwrap();
        let estate = Estate {
            id: "1".into(),
            width: 10,
            length: 10,
            created_at: Utc::now(),
        };
        estates::insert_estate(db.pool(), &estate).await.unwrap();
        db
    }

    fn tree(id: &str, x: u32, y: u32, height: u32) -> Tree {
        Tree {
            id: id.into(),
            estate_id: "1".into(),
            x,
            y,
            height,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn trees_load_in_insertion_order() {
        let db = seeded().await;
        insert_tree(db.pool(), &tree("b", 10, 10, 10)).await.unwrap();
        insert_tree(db.pool(), &tree("a", 11, 11, 12)).await.unwrap();

        let trees = load_all_trees(db.pool()).await.unwrap();
        assert_eq!(trees.len(), 2);
        assert_eq!(trees[0].id, "b");
        assert_eq!(trees[1].id, "a");
        assert_eq!((trees[1].x, trees[1].y, trees[1].height), (11, 11, 12));
        assert_eq!(trees[1].estate_id, "1");
    }

    #[tokio::test]
    async fn tree_for_unknown_estate_is_rejected() {
        let db = seeded().await;
        let mut orphan = tree("3", 1, 1, 5);
        orphan.estate_id = "missing".into();
        assert!(insert_tree(db.pool(), &orphan).await.is_err());
    }

    #[tokio::test]
    async fn height_outside_range_is_rejected_by_schema() {
        let db = seeded().await;
        assert!(insert_tree(db.pool(), &tree("4", 1, 1, 31)).await.is_err());
    }
}
