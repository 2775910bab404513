//! Data artifact persistence
//!
//! The build result is a single JSON file consumed by the runtime. Loading
//! re-checks the builder invariant at the trust boundary, so a broken
//! artifact fails here instead of reaching the matcher.

use crate::error::{KochbuchError, Result};
use kochbuch_common::{parse_collection, RecipeData};
use std::path::Path;

pub fn save(path: &Path, recipes: &[RecipeData]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(recipes)?;
    std::fs::write(path, json)?;
    Ok(())
}

pub fn load(path: &Path) -> Result<Vec<RecipeData>> {
    if !path.exists() {
        return Err(KochbuchError::FileNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    Ok(parse_collection(&content)?)
}
