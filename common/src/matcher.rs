//! Ingredient matching
//!
//! Scores a recipe by how many of its ingredient groups are covered by the
//! user's current selection. Pure and deterministic: identical inputs always
//! produce identical results, independent of call history.

use crate::types::normalize_key;
use std::collections::HashSet;

/// The user's currently available ingredients, stored as normalized keys.
///
/// Created once per session, optionally pre-seeded with assumed-available
/// ingredients, and mutated only through the explicit operations below.
/// Never persisted.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    keys: HashSet<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// A selection pre-seeded with assumed-available ingredients.
    pub fn with_assumed<I, S>(assumed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keys = assumed
            .into_iter()
            .map(|key| normalize_key(key.as_ref()))
            .collect();
        Self { keys }
    }

    /// Returns true if the key was newly added.
    pub fn insert(&mut self, key: &str) -> bool {
        self.keys.insert(normalize_key(key))
    }

    /// Returns true if the key was present.
    pub fn remove(&mut self, key: &str) -> bool {
        self.keys.remove(&normalize_key(key))
    }

    /// Adds the key if absent, removes it otherwise. Returns whether the key
    /// is selected afterwards.
    pub fn toggle(&mut self, key: &str) -> bool {
        let normalized = normalize_key(key);
        if self.keys.remove(&normalized) {
            false
        } else {
            self.keys.insert(normalized);
            true
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(&normalize_key(key))
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Coverage of one recipe by one selection. Ephemeral: recomputed on every
/// selection change, never stored across recomputations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult {
    pub satisfied_groups: usize,
    pub total_groups: usize,
}

impl MatchResult {
    /// Covered share of the recipe's groups, in `[0, 1]`.
    pub fn fraction(&self) -> f64 {
        debug_assert!(self.total_groups > 0, "MatchResult with zero groups");
        self.satisfied_groups as f64 / self.total_groups as f64
    }
}

/// Scores a recipe's ingredient groups against a selection.
///
/// A group is satisfied as soon as one of its keys is selected. Persisted
/// recipes always have at least one group (builder invariant); a zero-group
/// recipe here is a contract violation, not a user error.
pub fn match_recipe(groups: &[Vec<String>], selection: &SelectionSet) -> MatchResult {
    debug_assert!(!groups.is_empty(), "recipe reached the matcher with zero groups");
    let satisfied_groups = groups
        .iter()
        .filter(|alternatives| alternatives.iter().any(|key| selection.contains(key)))
        .count();
    MatchResult {
        satisfied_groups,
        total_groups: groups.len(),
    }
}
