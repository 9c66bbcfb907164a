use std::collections::{BTreeMap, BTreeSet, HashMap};

use smaakbalans_catalog::{
    Catalog, CookingMethod, FlavorProfile, Ingredient, PreparedIngredient, normalize_name,
};

use crate::analysis::{
    CompositionAnalysis, ElementKind, MissingElement, Priority, TextureVariety,
};
use crate::elements::{PreparedSet, element_rules, wants_cooking_method};
use crate::error::CompositionError;
use crate::suggest::suggestions_for;

/// Cooking method per ingredient name. Names are matched with the same
/// normalization as catalog lookup; entries for names outside the
/// selection are ignored.
pub type CookingAssignments = HashMap<String, CookingMethod>;

/// Flavor-balance contribution to the overall score, stepped by how many
/// tastes are present in the aggregate profile (0 through 5).
const BALANCE_POINTS: [u8; 6] = [0, 3, 6, 9, 11, 12];

/// Stateless composition analyzer over a loaded catalog.
///
/// `analyze` recomputes everything from scratch on every call. The same
/// selection, in any order and with any duplication, produces an
/// identical analysis.
pub struct CompositionAnalyzer<'a> {
    catalog: &'a Catalog,
}

impl<'a> CompositionAnalyzer<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Analyze a selection of ingredient names.
    ///
    /// Pipeline: resolve names, apply cooking methods, aggregate the
    /// effective profiles, evaluate the element rules, score, then
    /// generate suggestions for whatever is missing.
    pub fn analyze(
        &self,
        names: &[String],
        assignments: &CookingAssignments,
    ) -> Result<CompositionAnalysis, CompositionError> {
        let names: Vec<&String> = names
            .iter()
            .filter(|name| !normalize_name(name).is_empty())
            .collect();
        if names.is_empty() {
            return Err(CompositionError::EmptySelection);
        }

        // Resolve and dedupe. BTreeMap keyed by id keeps the working set
        // in id order regardless of input order.
        let mut resolved: BTreeMap<&str, &Ingredient> = BTreeMap::new();
        let mut unknown_seen = BTreeSet::new();
        let mut unrecognized = Vec::new();
        for name in &names {
            match self.catalog.resolve(name) {
                Some(ingredient) => {
                    resolved.insert(ingredient.id.as_str(), ingredient);
                }
                None => {
                    if unknown_seen.insert(normalize_name(name)) {
                        unrecognized.push(name.trim().to_string());
                    }
                }
            }
        }
        if resolved.is_empty() {
            return Err(CompositionError::NoKnownIngredients { unrecognized });
        }

        // Method assignments by resolved id. Keys are walked in sorted
        // order so two aliases of one ingredient pick a stable winner.
        let mut methods_by_id: BTreeMap<String, CookingMethod> = BTreeMap::new();
        let mut assignment_keys: Vec<&String> = assignments.keys().collect();
        assignment_keys.sort();
        for key in assignment_keys {
            if let Some(ingredient) = self.catalog.resolve(key) {
                methods_by_id
                    .entry(ingredient.id.clone())
                    .or_insert(assignments[key]);
            }
        }

        let mut assigned_ids: BTreeSet<String> = BTreeSet::new();
        let mut items = Vec::with_capacity(resolved.len());
        for (id, ingredient) in &resolved {
            let method = match methods_by_id.get(*id) {
                Some(&method) => {
                    assigned_ids.insert((*id).to_string());
                    method
                }
                None => CookingMethod::Raw,
            };
            items.push(PreparedIngredient::prepare(ingredient, method));
        }
        let set = PreparedSet::build(items);

        // Element rules: satisfied rules score, unsatisfied ones report.
        let mut missing_elements = Vec::new();
        let mut structure_points: u8 = 0;
        for rule in element_rules() {
            if rule.is_satisfied(&set) {
                structure_points += rule.points();
            } else {
                missing_elements.push(MissingElement {
                    kind: rule.kind(),
                    reason: rule.missing_reason(&set),
                    priority: rule.priority(),
                });
            }
        }

        let overall_score = structure_points + balance_points(&set.aggregate);

        let carrier = select_carrier(&set);

        // Advisory only: a starch or protein carrier left without an
        // explicit method. Carries no points.
        if let Some(ref carrier_ingredient) = carrier {
            if wants_cooking_method(carrier_ingredient.molecule_type)
                && !assigned_ids.contains(&carrier_ingredient.id)
            {
                missing_elements.push(MissingElement {
                    kind: ElementKind::CookingMethod,
                    reason: cooking_method_reason(carrier_ingredient),
                    priority: Priority::Low,
                });
            }
        }

        // Highest priority first, then fixed element order
        missing_elements.sort_by(|a, b| {
            a.priority
                .cmp(&b.priority)
                .then_with(|| a.kind.cmp(&b.kind))
        });

        let suggestions = suggestions_for(self.catalog, &set, &missing_elements);

        let texture_variety = TextureVariety {
            distinct_textures: set.textures.len(),
            distinct_mouthfeels: set.mouthfeels.len(),
            has_contrast: set.has_texture_contrast(),
        };

        Ok(CompositionAnalysis {
            flavor: set.aggregate,
            is_balanced: set.aggregate.is_balanced(),
            overall_score,
            carrier,
            missing_elements,
            suggestions,
            texture_variety,
            unrecognized,
        })
    }
}

fn balance_points(aggregate: &FlavorProfile) -> u8 {
    BALANCE_POINTS[aggregate.present_tastes().len()]
}

/// Elect the carrier: starches beat proteins beat the rest, ties go to
/// the lowest id.
fn select_carrier(set: &PreparedSet) -> Option<Ingredient> {
    set.items
        .iter()
        .filter(|item| item.ingredient.can_be_carrier)
        .min_by_key(|item| {
            (
                item.ingredient.molecule_type.carrier_rank(),
                item.ingredient.id.clone(),
            )
        })
        .map(|item| item.ingredient.clone())
}

fn cooking_method_reason(carrier: &Ingredient) -> String {
    match carrier.optimal_cooking_method {
        Some(method) => format!(
            "{} has no cooking method set; {} would suit it",
            carrier.name, method
        ),
        None => format!("{} has no cooking method set", carrier.name),
    }
}
