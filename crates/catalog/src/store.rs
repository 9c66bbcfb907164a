use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use rust_embed::RustEmbed;

use crate::error::CatalogError;
use crate::ingredient::Ingredient;

#[derive(RustEmbed)]
#[folder = "data/"]
struct CatalogData;

static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Canonical form used for all name and alias lookups: trimmed,
/// lowercased, inner whitespace collapsed to single spaces.
pub fn normalize_name(raw: &str) -> String {
    RE_WHITESPACE
        .replace_all(raw.trim(), " ")
        .to_lowercase()
}

/// The ingredient ontology, indexed for lookup by id and by normalized
/// name or alias.
///
/// A catalog is loaded once at startup and shared read-only; analysis
/// never mutates it. Entries are kept sorted by id so every iteration
/// over the catalog is deterministic.
pub struct Catalog {
    ingredients: Vec<Ingredient>,
    by_id: HashMap<String, usize>,
    by_alias: HashMap<String, usize>,
}

impl Catalog {
    /// Load the builtin ontology embedded in the binary.
    pub fn builtin() -> Result<Catalog, CatalogError> {
        let file = CatalogData::get("ingredients.json")
            .ok_or(CatalogError::MissingAsset("ingredients.json"))?;
        let ingredients: Vec<Ingredient> = serde_json::from_slice(&file.data)?;
        Catalog::from_ingredients(ingredients)
    }

    /// Load an operator-supplied ontology file instead of the builtin one.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Catalog, CatalogError> {
        let data = std::fs::read(path.as_ref())?;
        let ingredients: Vec<Ingredient> = serde_json::from_slice(&data)?;
        Catalog::from_ingredients(ingredients)
    }

    /// Validate and index a set of ingredients.
    ///
    /// Rejects empty sets, duplicate ids, out-of-range intensities and
    /// aliases that point at more than one ingredient.
    pub fn from_ingredients(mut ingredients: Vec<Ingredient>) -> Result<Catalog, CatalogError> {
        if ingredients.is_empty() {
            return Err(CatalogError::Empty);
        }

        ingredients.sort_by(|a, b| a.id.cmp(&b.id));

        let mut by_id = HashMap::new();
        let mut by_alias: HashMap<String, usize> = HashMap::new();

        for (index, ingredient) in ingredients.iter().enumerate() {
            if let Some(field) = ingredient.flavor.out_of_range_field() {
                return Err(CatalogError::OutOfRange {
                    id: ingredient.id.clone(),
                    field,
                });
            }
            if !(0.0..=1.0).contains(&ingredient.aroma_intensity) {
                return Err(CatalogError::OutOfRange {
                    id: ingredient.id.clone(),
                    field: "aroma_intensity",
                });
            }

            if by_id.insert(ingredient.id.clone(), index).is_some() {
                return Err(CatalogError::DuplicateId(ingredient.id.clone()));
            }

            let mut aliases = vec![ingredient.name.clone()];
            if let Some(ref name_nl) = ingredient.name_nl {
                aliases.push(name_nl.clone());
            }
            aliases.extend(ingredient.aliases.iter().cloned());

            for alias in aliases {
                let normalized = normalize_name(&alias);
                if normalized.is_empty() {
                    continue;
                }
                match by_alias.get(&normalized) {
                    Some(&existing) if existing != index => {
                        return Err(CatalogError::AliasCollision {
                            alias: normalized,
                            first: ingredients[existing].id.clone(),
                            second: ingredient.id.clone(),
                        });
                    }
                    _ => {
                        by_alias.insert(normalized, index);
                    }
                }
            }
        }

        Ok(Catalog {
            ingredients,
            by_id,
            by_alias,
        })
    }

    /// Look an ingredient up by user-supplied name.
    ///
    /// Falls back to a singular form when a plural is given and only the
    /// singular is known ("almonds" finds "almond").
    pub fn resolve(&self, name: &str) -> Option<&Ingredient> {
        let normalized = normalize_name(name);
        if normalized.is_empty() {
            return None;
        }

        if let Some(&index) = self.by_alias.get(&normalized) {
            return Some(&self.ingredients[index]);
        }

        if let Some(singular) = normalized.strip_suffix("es") {
            if let Some(&index) = self.by_alias.get(singular) {
                return Some(&self.ingredients[index]);
            }
        }
        if let Some(singular) = normalized.strip_suffix('s') {
            if let Some(&index) = self.by_alias.get(singular) {
                return Some(&self.ingredients[index]);
            }
        }

        None
    }

    pub fn get(&self, id: &str) -> Option<&Ingredient> {
        self.by_id.get(id).map(|&index| &self.ingredients[index])
    }

    /// All ingredients in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Ingredient> {
        self.ingredients.iter()
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }
}
