//! Estate and tree store: SQLite writes with a DashMap read cache.

use chrono::Utc;
use dashmap::DashMap;
use estate_core::rules::{Dimensions, TreePlacement};
use estate_core::{Estate, Tree};
use thiserror::Error;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::config::Config;
use crate::persistence::{self, Database};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Estate not found")]
    EstateNotFound(String),
    #[error("Cell ({x}, {y}) already has a tree")]
    CellOccupied { x: u32, y: u32 },
    #[error(transparent)]
    Database(#[from] anyhow::Error),
}

/// Application state - thread-safe store for estates and trees.
pub struct AppState {
    estates: DashMap<String, Estate>,
    trees: DashMap<String, Vec<Tree>>,
    database: Option<Database>,
    config: Config,
    /// Serializes tree inserts so the occupancy check and the write are atomic
    tree_writes: Mutex<()>,
}

impl AppState {
    /// Cache-only state with no database behind it.
    pub fn new(config: Config) -> Self {
        Self {
            estates: DashMap::new(),
            trees: DashMap::new(),
            database: None,
            config,
            tree_writes: Mutex::new(()),
        }
    }

    pub fn with_database(database: Database, config: Config) -> Self {
        Self {
            database: Some(database),
            ..Self::new(config)
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Hydrate the cache from SQLite.
    pub async fn load_from_database(&self) -> anyhow::Result<()> {
        let Some(db) = &self.database else {
            return Ok(());
        };

        let estates = persistence::estates::load_all_estates(db.pool()).await?;
        let trees = persistence::trees::load_all_trees(db.pool()).await?;
        tracing::info!("Loaded {} estates and {} trees from database", estates.len(), trees.len());

        for estate in estates {
            self.trees.entry(estate.id.clone()).or_default();
            self.estates.insert(estate.id.clone(), estate);
        }
        for tree in trees {
            self.trees.entry(tree.estate_id.clone()).or_default().push(tree);
        }
        Ok(())
    }

    pub async fn create_estate(&self, dims: Dimensions) -> Result<Estate, StoreError> {
        let estate = Estate {
            id: Uuid::new_v4().to_string(),
            width: dims.width,
            length: dims.length,
            created_at: Utc::now(),
        };

        if let Some(db) = &self.database {
            persistence::estates::insert_estate(db.pool(), &estate).await?;
        }

        self.trees.insert(estate.id.clone(), Vec::new());
        self.estates.insert(estate.id.clone(), estate.clone());
        Ok(estate)
    }

    pub fn get_estate(&self, id: &str) -> Result<Estate, StoreError> {
        self.estates
            .get(id)
            .map(|r| r.value().clone())
            .ok_or_else(|| StoreError::EstateNotFound(id.to_string()))
    }

    pub async fn create_tree(
        &self,
        estate_id: &str,
        placement: TreePlacement,
    ) -> Result<Tree, StoreError> {
        let _guard = self.tree_writes.lock().await;

        if !self.estates.contains_key(estate_id) {
            return Err(StoreError::EstateNotFound(estate_id.to_string()));
        }

        if self.config.enforce_tree_placement && self.cell_occupied(estate_id, placement.x, placement.y) {
            return Err(StoreError::CellOccupied {
                x: placement.x,
                y: placement.y,
            });
        }

        let tree = Tree {
            id: Uuid::new_v4().to_string(),
            estate_id: estate_id.to_string(),
            x: placement.x,
            y: placement.y,
            height: placement.height,
            created_at: Utc::now(),
        };

        if let Some(db) = &self.database {
            persistence::trees::insert_tree(db.pool(), &tree).await?;
        }

        self.trees
            .entry(estate_id.to_string())
            .or_default()
            .push(tree.clone());
        Ok(tree)
    }

    /// All trees of an estate, or `EstateNotFound`.
    pub fn trees_for_estate(&self, estate_id: &str) -> Result<Vec<Tree>, StoreError> {
        if !self.estates.contains_key(estate_id) {
            return Err(StoreError::EstateNotFound(estate_id.to_string()));
        }
        Ok(self
            .trees
            .get(estate_id)
            .map(|r| r.value().clone())
            .unwrap_or_default())
    }

    fn cell_occupied(&self, estate_id: &str, x: u32, y: u32) -> bool {
        self.trees
            .get(estate_id)
            .map(|trees| trees.iter().any(|t| t.x == x && t.y == y))
            .unwrap_or(false)
    }
}
