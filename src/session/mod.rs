//! Interactive cooking session
//!
//! Owns the runtime domain model: the loaded recipes, the selection set, the
//! current display order and the filter query. Presentation only projects
//! this state and is never the source of truth.

mod debounce;

pub use debounce::Debouncer;

use kochbuch_common::{
    initial_order, match_recipe, rerank, IngredientUniverse, MatchResult, RecipeData, SelectionSet,
};

pub struct CookingSession {
    recipes: Vec<RecipeData>,
    universe: IngredientUniverse,
    selection: SelectionSet,
    order: Vec<usize>,
    query: String,
}

impl CookingSession {
    pub fn new(recipes: Vec<RecipeData>, assumed: &[String]) -> Self {
        let universe = IngredientUniverse::from_recipes(&recipes);
        let order = initial_order(recipes.len());
        Self {
            recipes,
            universe,
            selection: SelectionSet::with_assumed(assumed),
            order,
            query: String::new(),
        }
    }

    /// Marks an ingredient as available. Returns true if it was newly added.
    pub fn select_ingredient(&mut self, key: &str) -> bool {
        self.selection.insert(key)
    }

    /// Marks an ingredient as no longer available. Returns true if it was
    /// selected before.
    pub fn deselect_ingredient(&mut self, key: &str) -> bool {
        self.selection.remove(key)
    }

    /// Flips an ingredient's availability. Returns whether it is selected
    /// afterwards.
    pub fn toggle_ingredient(&mut self, key: &str) -> bool {
        self.selection.toggle(key)
    }

    pub fn set_filter(&mut self, query: &str) {
        self.query = query.trim().to_string();
    }

    pub fn filter_query(&self) -> &str {
        &self.query
    }

    /// Recomputes all match results and re-sorts the display order. Ties
    /// keep their position from the previous call.
    pub fn rankings(&mut self) -> Vec<(usize, MatchResult)> {
        let results: Vec<MatchResult> = self
            .recipes
            .iter()
            .map(|recipe| match_recipe(&recipe.ingredients, &self.selection))
            .collect();
        rerank(&mut self.order, &results);
        self.order.iter().map(|&index| (index, results[index])).collect()
    }

    /// Selected ingredients known to the collection, in universe order.
    pub fn selected_ingredients(&self) -> Vec<&str> {
        self.universe
            .iter()
            .filter(|key| self.selection.contains(key))
            .collect()
    }

    /// Unselected ingredients matching the current filter, in universe
    /// order. The filter never hides selected ingredients because those are
    /// listed by [`selected_ingredients`](Self::selected_ingredients).
    pub fn possible_ingredients(&self) -> Vec<&str> {
        self.universe
            .filter(&self.query)
            .into_iter()
            .filter(|key| !self.selection.contains(key))
            .collect()
    }

    pub fn recipe(&self, index: usize) -> Option<&RecipeData> {
        self.recipes.get(index)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

/// One line of user input in the cook loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// `+ Zutat`
    Add(String),
    /// `- Zutat`
    Remove(String),
    /// `/ Text` (leer: Filter löschen)
    Filter(String),
    /// `zeigen N` (1-basierte Listenposition)
    Show(usize),
    /// `liste`
    List,
    /// `hilfe`
    Help,
    /// `ende`
    Quit,
    Unknown(String),
}

impl SessionCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();

        if let Some(rest) = line.strip_prefix('+') {
            let name = rest.trim();
            if !name.is_empty() {
                return SessionCommand::Add(name.to_string());
            }
            return SessionCommand::Unknown(line.to_string());
        }
        if let Some(rest) = line.strip_prefix('-') {
            let name = rest.trim();
            if !name.is_empty() {
                return SessionCommand::Remove(name.to_string());
            }
            return SessionCommand::Unknown(line.to_string());
        }
        if let Some(rest) = line.strip_prefix('/') {
            return SessionCommand::Filter(rest.trim().to_string());
        }
        if let Some(rest) = line.strip_prefix("zeigen") {
            if let Ok(position) = rest.trim().parse::<usize>() {
                if position > 0 {
                    return SessionCommand::Show(position);
                }
            }
            return SessionCommand::Unknown(line.to_string());
        }

        match line {
            "liste" => SessionCommand::List,
            "hilfe" | "?" => SessionCommand::Help,
            "ende" | "quit" => SessionCommand::Quit,
            _ => SessionCommand::Unknown(line.to_string()),
        }
    }
}
