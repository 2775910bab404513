//! Core domain types shared across the workspace.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// One selectable choice inside an ingredient requirement slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientAlternative {
    /// Human-readable text, shown in the rendered recipe.
    pub text: String,
    /// Matching key as written in the source. Comparisons go through
    /// [`normalize_key`], never through the raw value.
    pub key: String,
}

/// One requirement slot: interchangeable alternatives, never nested.
pub type AlternativeGroup = Vec<IngredientAlternative>;

/// Output pair of the ingredient grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRecipe {
    /// Source text with every grammar occurrence replaced by its display
    /// texts.
    pub text: String,
    /// Extracted groups in document order.
    pub groups: Vec<AlternativeGroup>,
}

/// Persisted recipe record, one element of the data artifact.
///
/// Only the builder constructs these, and only with a non-empty title and at
/// least one ingredient group.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RecipeData {
    pub title: String,
    /// Outer = groups in document order, inner = matching keys per group.
    /// Display texts are not persisted; the rendered HTML carries them.
    pub ingredients: Vec<Vec<String>>,
    pub html: String,
}

/// Lowercases a key for comparisons. Unicode lowercasing coincides with
/// German case folding, the collection's configured locale.
pub fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase()
}

/// Parses the persisted artifact and checks the builder invariant, so a
/// hand-edited or truncated data file fails here instead of producing
/// degenerate scores in the matcher.
pub fn parse_collection(json: &str) -> Result<Vec<RecipeData>> {
    let recipes: Vec<RecipeData> = serde_json::from_str(json)?;
    for recipe in &recipes {
        if recipe.title.trim().is_empty() {
            return Err(Error::Data("Rezept ohne Titel".to_string()));
        }
        if recipe.ingredients.is_empty() {
            return Err(Error::Data(format!(
                "Rezept '{}' ohne Zutatengruppen",
                recipe.title
            )));
        }
    }
    Ok(recipes)
}
