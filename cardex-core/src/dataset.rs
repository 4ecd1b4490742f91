use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::models::{CarModel, Category, Manufacturer};

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse dataset: {0}")]
    Json(#[from] serde_json::Error),
}

/// The snapshot compiled into the binary.
const BUNDLED: &str = include_str!("../data/cars.json");

/// The three collections, loaded once at startup and never mutated.
#[derive(Debug, Clone, Deserialize)]
pub struct Dataset {
    #[serde(rename = "carModels")]
    pub car_models: Vec<CarModel>,
    pub categories: Vec<Category>,
    pub manufacturers: Vec<Manufacturer>,
}

impl Dataset {
    /// Parse the bundled snapshot.
    pub fn bundled() -> Result<Self, DatasetError> {
        Ok(serde_json::from_str(BUNDLED)?)
    }

    /// Load a snapshot from disk (the `--data` override).
    pub fn from_path(path: &Path) -> Result<Self, DatasetError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Records addressable by numeric id.
pub trait Keyed {
    fn id(&self) -> u32;
}

impl Keyed for CarModel {
    fn id(&self) -> u32 {
        self.id
    }
}

impl Keyed for Category {
    fn id(&self) -> u32 {
        self.id
    }
}

impl Keyed for Manufacturer {
    fn id(&self) -> u32 {
        self.id
    }
}

/// Find the first record whose id equals the raw path parameter.
/// The parse is total: anything that is not a u32 never matches.
pub fn find_by_id<'a, T: Keyed>(items: &'a [T], raw: &str) -> Option<&'a T> {
    let id: u32 = raw.parse().ok()?;
    items.iter().find(|item| item.id() == id)
}
