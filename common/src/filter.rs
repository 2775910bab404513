//! Ingredient universe and prefix filtering

use crate::types::{normalize_key, RecipeData};
use std::collections::HashSet;

/// All distinct ingredient keys across the collection, in display order.
#[derive(Debug, Clone, Default)]
pub struct IngredientUniverse {
    entries: Vec<String>,
}

impl IngredientUniverse {
    /// Collects the distinct keys of all groups of all recipes. Duplicates
    /// are detected case-insensitively; the first spelling wins. Entries are
    /// sorted for display.
    pub fn from_recipes(recipes: &[RecipeData]) -> Self {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();
        for recipe in recipes {
            for group in &recipe.ingredients {
                for key in group {
                    if seen.insert(normalize_key(key)) {
                        entries.push(key.trim().to_string());
                    }
                }
            }
        }
        entries.sort_by_key(|entry| collation_key(entry));
        Self { entries }
    }

    /// Entries whose normalized key starts with the normalized query. An
    /// empty query matches everything.
    pub fn filter(&self, query: &str) -> Vec<&str> {
        let needle = normalize_key(query);
        self.entries
            .iter()
            .filter(|entry| normalize_key(entry).starts_with(&needle))
            .map(String::as_str)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Sort key approximating German dictionary order (DIN 5007): umlauts fold
/// to their base vowels, ß to ss. Ordering only; matching uses
/// [`normalize_key`].
fn collation_key(entry: &str) -> String {
    let mut key = String::with_capacity(entry.len());
    for c in entry.to_lowercase().chars() {
        match c {
            'ä' => key.push('a'),
            'ö' => key.push('o'),
            'ü' => key.push('u'),
            'ß' => key.push_str("ss"),
            _ => key.push(c),
        }
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection(groups: &[&[&str]]) -> Vec<RecipeData> {
        vec![RecipeData {
            title: "Test".to_string(),
            ingredients: groups
                .iter()
                .map(|g| g.iter().map(|s| s.to_string()).collect())
                .collect(),
            html: String::new(),
        }]
    }

    #[test]
    fn test_universe_collects_distinct_keys() {
        let recipes = collection(&[&["Möhre", "Apfel"], &["Zwiebel"], &["Apfel"]]);
        let universe = IngredientUniverse::from_recipes(&recipes);

        assert_eq!(universe.len(), 3);
        let entries: Vec<&str> = universe.iter().collect();
        assert_eq!(entries, vec!["Apfel", "Möhre", "Zwiebel"]);
    }

    #[test]
    fn test_universe_dedup_is_case_insensitive() {
        let recipes = collection(&[&["Salz"], &["salz"], &["SALZ"]]);
        let universe = IngredientUniverse::from_recipes(&recipes);

        assert_eq!(universe.len(), 1);
        // erste Schreibweise gewinnt
        assert_eq!(universe.iter().next(), Some("Salz"));
    }

    #[test]
    fn test_universe_german_ordering() {
        let recipes = collection(&[&["Zwiebel"], &["Äpfel"], &["Butter"]]);
        let universe = IngredientUniverse::from_recipes(&recipes);

        let entries: Vec<&str> = universe.iter().collect();
        assert_eq!(entries, vec!["Äpfel", "Butter", "Zwiebel"]);
    }

    #[test]
    fn test_filter_prefix() {
        let recipes = collection(&[&["Apfel"], &["Möhre"], &["Zwiebel"]]);
        let universe = IngredientUniverse::from_recipes(&recipes);

        assert_eq!(universe.filter("ap"), vec!["Apfel"]);
        assert_eq!(universe.filter("AP"), vec!["Apfel"]);
        assert!(universe.filter("x").is_empty());
    }

    #[test]
    fn test_filter_empty_query_matches_everything() {
        let recipes = collection(&[&["Apfel"], &["Möhre"], &["Zwiebel"]]);
        let universe = IngredientUniverse::from_recipes(&recipes);

        assert_eq!(universe.filter("").len(), 3);
    }

    #[test]
    fn test_filter_umlaut_prefix() {
        let recipes = collection(&[&["Möhre"], &["Molke"]]);
        let universe = IngredientUniverse::from_recipes(&recipes);

        assert_eq!(universe.filter("mö"), vec!["Möhre"]);
        assert_eq!(universe.filter("mo"), vec!["Molke"]);
    }

    #[test]
    fn test_empty_universe() {
        let universe = IngredientUniverse::from_recipes(&[]);
        assert!(universe.is_empty());
        assert!(universe.filter("").is_empty());
    }
}
