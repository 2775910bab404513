//! Recipe collection builder
//!
//! The build-time half of the pipeline: every discovered source is read,
//! run through the ingredient grammar, rendered and validated. Acceptance is
//! all-or-nothing per source; rejected sources become diagnostics and never
//! abort the batch.

use crate::renderer;
use crate::scanner::RecipeSource;
use kochbuch_common::{parse_recipe, RecipeData};
use rayon::prelude::*;

/// Why a source did not become a recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// No non-empty level-1 heading in the rendered content.
    MissingTitle,
    /// No ingredient grammar occurrence in the source.
    NoIngredientGroups,
    /// The source file could not be read.
    Unreadable(String),
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectReason::MissingTitle => write!(f, "kein Titel (erste Überschrift fehlt)"),
            RejectReason::NoIngredientGroups => {
                write!(f, "keine Zutatengruppen (Muster nicht gefunden)")
            }
            RejectReason::Unreadable(err) => write!(f, "nicht lesbar: {}", err),
        }
    }
}

/// Per-source diagnostic.
#[derive(Debug, Clone)]
pub struct Rejection {
    pub file_name: String,
    pub reason: RejectReason,
}

/// Build output: accepted recipes in discovery order plus diagnostics.
#[derive(Debug, Clone, Default)]
pub struct BuildReport {
    pub recipes: Vec<RecipeData>,
    pub rejections: Vec<Rejection>,
}

enum SourceOutcome {
    Accepted(RecipeData),
    Rejected(Rejection),
}

/// Builds the recipe list from the discovered sources.
///
/// Per-source work is independent and fans out over rayon; the ordered
/// collect keeps recipes and diagnostics in discovery order, so the same
/// folder contents always produce the same artifact.
pub fn build_collection(sources: &[RecipeSource], connector: &str) -> BuildReport {
    let outcomes: Vec<SourceOutcome> = sources
        .par_iter()
        .map(|source| build_source(source, connector))
        .collect();

    let mut report = BuildReport::default();
    for outcome in outcomes {
        match outcome {
            SourceOutcome::Accepted(recipe) => report.recipes.push(recipe),
            SourceOutcome::Rejected(rejection) => report.rejections.push(rejection),
        }
    }
    report
}

fn build_source(source: &RecipeSource, connector: &str) -> SourceOutcome {
    let reject = |reason: RejectReason| {
        SourceOutcome::Rejected(Rejection {
            file_name: source.file_name.clone(),
            reason,
        })
    };

    let markdown = match std::fs::read_to_string(&source.path) {
        Ok(content) => content,
        Err(err) => return reject(RejectReason::Unreadable(err.to_string())),
    };

    let parsed = parse_recipe(&markdown, connector);
    let rendered = renderer::render(&parsed.text);

    let title = match rendered.title {
        Some(title) => title,
        None => return reject(RejectReason::MissingTitle),
    };

    if parsed.groups.is_empty() {
        return reject(RejectReason::NoIngredientGroups);
    }

    let ingredients = parsed
        .groups
        .iter()
        .map(|group| group.iter().map(|a| a.key.clone()).collect())
        .collect();

    SourceOutcome::Accepted(RecipeData {
        title,
        ingredients,
        html: rendered.html,
    })
}
