use std::cmp::Ordering;

use smaakbalans_catalog::{Catalog, Ingredient, Taste, Texture};

use crate::analysis::{ElementKind, IngredientSuggestion, MissingElement};
use crate::elements::{
    ACIDITY_INTENSITY_THRESHOLD, MIN_AROMA_CATEGORIES, MIN_DISTINCT_TEXTURES, PreparedSet,
    UMAMI_INTENSITY_THRESHOLD,
};

pub const MAX_SUGGESTIONS_PER_ELEMENT: usize = 3;

const COMPLEMENT_WEIGHT: f32 = 0.5;
const AFFINITY_WEIGHT: f32 = 0.3;
const OVERLOAD_WEIGHT: f32 = 0.2;

/// Aggregate intensity above which piling on more of the same taste
/// starts to count against a candidate.
const OVERLOAD_CEILING: f32 = 0.6;

/// Propose catalog ingredients for each missing element.
///
/// Candidates never include ingredients already in the composition.
/// Ranking is fully deterministic: the fit score is computed from sorted
/// folds and ties fall back to id order.
pub(crate) fn suggestions_for(
    catalog: &Catalog,
    set: &PreparedSet,
    missing: &[MissingElement],
) -> Vec<IngredientSuggestion> {
    let mut suggestions = Vec::new();

    for element in missing {
        // The cooking-method diagnostic is about the selection itself,
        // not about something to add.
        if element.kind == ElementKind::CookingMethod {
            continue;
        }

        let mut scored: Vec<(f32, &Ingredient)> = catalog
            .iter()
            .filter(|candidate| !set.contains_id(&candidate.id))
            .filter(|candidate| addresses(element.kind, candidate, set))
            .map(|candidate| (fit_score(candidate, set), candidate))
            .collect();

        // Best fit first, ties resolved by id
        scored.sort_by(|a, b| {
            b.0.partial_cmp(&a.0)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.1.id.cmp(&b.1.id))
        });

        for (_, candidate) in scored.into_iter().take(MAX_SUGGESTIONS_PER_ELEMENT) {
            suggestions.push(IngredientSuggestion {
                ingredient: candidate.clone(),
                reason: suggestion_reason(element.kind, candidate),
                addresses: element.kind,
                priority: element.priority,
                optimal_cooking_method: candidate.optimal_cooking_method,
            });
        }
    }

    suggestions
}

/// Whether adding this candidate (raw) would satisfy the missing element.
fn addresses(kind: ElementKind, candidate: &Ingredient, set: &PreparedSet) -> bool {
    match kind {
        ElementKind::Carrier => candidate.can_be_carrier,
        ElementKind::Umami => {
            candidate.provides_umami || candidate.flavor.umami >= UMAMI_INTENSITY_THRESHOLD
        }
        ElementKind::Acid => {
            candidate.provides_acidity || candidate.flavor.sourness >= ACIDITY_INTENSITY_THRESHOLD
        }
        ElementKind::Texture => {
            let new = candidate
                .textures
                .iter()
                .filter(|texture| !set.textures.contains(texture))
                .count();
            let needed = MIN_DISTINCT_TEXTURES
                .saturating_sub(set.textures.len())
                .max(1);
            new >= needed
        }
        ElementKind::Crunch => {
            candidate.provides_crunch
                || candidate
                    .textures
                    .iter()
                    .any(|texture| matches!(texture, Texture::Crunchy | Texture::Crisp))
        }
        ElementKind::Freshness => candidate.has_fresh_aroma(),
        ElementKind::Richness => candidate.is_rich(),
        ElementKind::Aroma => {
            let new = candidate
                .aroma_categories
                .iter()
                .filter(|category| !set.aroma_categories.contains(category))
                .count();
            let needed = MIN_AROMA_CATEGORIES
                .saturating_sub(set.aroma_categories.len())
                .max(1);
            new >= needed
        }
        ElementKind::Mouthfeel => !set.mouthfeels.contains(&candidate.mouthfeel),
        ElementKind::CookingMethod => false,
    }
}

/// Rank a candidate against the current aggregate.
///
/// Rewards filling in weak tastes and sharing aroma ground with the
/// composition, penalizes stacking more of an already loud taste.
fn fit_score(candidate: &Ingredient, set: &PreparedSet) -> f32 {
    let mut complement = 0.0;
    let mut overload = 0.0;
    for taste in Taste::ALL {
        let offered = candidate.flavor.intensity(taste);
        let current = set.aggregate.intensity(taste);
        complement += offered * (1.0 - current);
        overload += offered * (current - OVERLOAD_CEILING).max(0.0);
    }
    complement /= Taste::ALL.len() as f32;
    overload /= Taste::ALL.len() as f32;

    let affinity = if candidate.aroma_categories.is_empty() {
        0.0
    } else {
        let shared = candidate
            .aroma_categories
            .iter()
            .filter(|category| set.aroma_categories.contains(category))
            .count();
        shared as f32 / candidate.aroma_categories.len() as f32
    };

    (complement * COMPLEMENT_WEIGHT) + (affinity * AFFINITY_WEIGHT) - (overload * OVERLOAD_WEIGHT)
}

fn suggestion_reason(kind: ElementKind, candidate: &Ingredient) -> String {
    match kind {
        ElementKind::Carrier => format!("{} gives the dish a base to build on", candidate.name),
        ElementKind::Umami => format!("{} brings the savoury depth that is missing", candidate.name),
        ElementKind::Acid => format!("{} adds brightness to lift the dish", candidate.name),
        ElementKind::Texture => format!("{} breaks up the uniform texture", candidate.name),
        ElementKind::Crunch => format!("{} adds bite against the soft elements", candidate.name),
        ElementKind::Freshness => format!("{} keeps the plate tasting fresh", candidate.name),
        ElementKind::Richness => format!("{} rounds the dish out with richness", candidate.name),
        ElementKind::Aroma => format!("{} widens the aroma spectrum", candidate.name),
        ElementKind::Mouthfeel => format!("{} contrasts with the current mouthfeel", candidate.name),
        ElementKind::CookingMethod => format!("Choose a cooking method for {}", candidate.name),
    }
}
