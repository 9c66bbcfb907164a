use serde::{Deserialize, Serialize};

use crate::flavor::FlavorProfile;
use crate::ingredient::Ingredient;
use crate::types::{CookingMethod, Texture};

/// How a cooking method reshapes texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextureChange {
    Unchanged,
    /// Crisp and firm textures collapse towards soft.
    Softened,
    /// A crisp surface develops on top of the existing textures.
    Crisped,
}

/// The transformation a cooking method applies to an ingredient before
/// the composition is aggregated and scored.
#[derive(Debug, Clone, Serialize)]
pub struct CookingEffect {
    pub method: CookingMethod,
    /// Per-taste intensity deltas, applied with clamping.
    pub flavor_shift: FlavorProfile,
    /// Multiplier on aroma intensity. Boiling mutes, roasting builds.
    pub aroma_factor: f32,
    pub texture_change: TextureChange,
    /// Whether fresh, green and citrus character survives the method.
    pub preserves_freshness: bool,
}

impl CookingEffect {
    /// Fixed per-method effect table.
    pub fn for_method(method: CookingMethod) -> CookingEffect {
        let (flavor_shift, aroma_factor, texture_change, preserves_freshness) = match method {
            CookingMethod::Raw => (FlavorProfile::default(), 1.0, TextureChange::Unchanged, true),
            CookingMethod::Boiling => (
                FlavorProfile::new(0.05, 0.0, -0.05, -0.10, 0.05),
                0.7,
                TextureChange::Softened,
                false,
            ),
            CookingMethod::Steaming => (
                FlavorProfile::new(0.05, 0.0, 0.0, -0.05, 0.0),
                0.85,
                TextureChange::Softened,
                true,
            ),
            CookingMethod::Roasting => (
                FlavorProfile::new(0.15, 0.0, 0.0, 0.05, 0.15),
                1.25,
                TextureChange::Crisped,
                false,
            ),
            CookingMethod::Grilling => (
                FlavorProfile::new(0.10, 0.0, 0.0, 0.10, 0.15),
                1.3,
                TextureChange::Crisped,
                false,
            ),
            CookingMethod::Frying => (
                FlavorProfile::new(0.10, 0.05, 0.0, 0.0, 0.10),
                1.2,
                TextureChange::Crisped,
                false,
            ),
            CookingMethod::Sauteing => (
                FlavorProfile::new(0.10, 0.0, 0.0, 0.0, 0.10),
                1.1,
                TextureChange::Unchanged,
                false,
            ),
            CookingMethod::Braising => (
                FlavorProfile::new(0.10, 0.0, 0.05, 0.0, 0.20),
                1.15,
                TextureChange::Softened,
                false,
            ),
            CookingMethod::Pickling => (
                FlavorProfile::new(-0.05, 0.10, 0.30, 0.0, 0.0),
                0.9,
                TextureChange::Unchanged,
                true,
            ),
            CookingMethod::Baking => (
                FlavorProfile::new(0.15, 0.0, 0.0, 0.05, 0.05),
                1.15,
                TextureChange::Crisped,
                false,
            ),
        };

        CookingEffect {
            method,
            flavor_shift,
            aroma_factor,
            texture_change,
            preserves_freshness,
        }
    }

    /// One-line effect description for the cooking-methods listing.
    pub fn summary(&self) -> String {
        let texture = match self.texture_change {
            TextureChange::Unchanged => "keeps texture",
            TextureChange::Softened => "softens texture",
            TextureChange::Crisped => "crisps the surface",
        };
        let aroma = if self.aroma_factor > 1.0 {
            "builds aroma"
        } else if self.aroma_factor < 1.0 {
            "mutes aroma"
        } else {
            "keeps aroma"
        };
        format!("{}, {}", texture, aroma)
    }
}

/// An ingredient with a cooking method applied: the effective profile the
/// analyzer aggregates and scores.
#[derive(Debug, Clone)]
pub struct PreparedIngredient {
    pub ingredient: Ingredient,
    pub method: CookingMethod,
    pub flavor: FlavorProfile,
    pub aroma_intensity: f32,
    pub textures: Vec<Texture>,
    /// Fresh aroma that survived the method.
    pub fresh_character: bool,
}

impl PreparedIngredient {
    pub fn prepare(ingredient: &Ingredient, method: CookingMethod) -> PreparedIngredient {
        let effect = CookingEffect::for_method(method);

        let flavor = ingredient.flavor.shifted(&effect.flavor_shift);
        let aroma_intensity = (ingredient.aroma_intensity * effect.aroma_factor).clamp(0.0, 1.0);

        let mut textures: Vec<Texture> = match effect.texture_change {
            TextureChange::Unchanged => ingredient.textures.clone(),
            TextureChange::Softened => ingredient
                .textures
                .iter()
                .map(|texture| {
                    if texture.is_crisp_side() {
                        Texture::Soft
                    } else {
                        *texture
                    }
                })
                .collect(),
            TextureChange::Crisped => {
                let mut textures = ingredient.textures.clone();
                textures.push(Texture::Crisp);
                textures
            }
        };
        textures.sort();
        textures.dedup();

        let fresh_character = ingredient.has_fresh_aroma() && effect.preserves_freshness;

        PreparedIngredient {
            ingredient: ingredient.clone(),
            method,
            flavor,
            aroma_intensity,
            textures,
            fresh_character,
        }
    }

    /// Crunch either declared in the catalog and not cooked away, or
    /// created by the method itself.
    pub fn has_crunch(&self) -> bool {
        self.textures
            .iter()
            .any(|texture| matches!(texture, Texture::Crunchy | Texture::Crisp))
            || (self.ingredient.provides_crunch
                && self
                    .textures
                    .iter()
                    .any(|texture| texture.is_crisp_side()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flavor::FlavorProfile;
    use crate::types::{AromaCategory, MoleculeType, Mouthfeel};
    use std::collections::BTreeSet;

    fn cucumber() -> Ingredient {
        Ingredient {
            id: "cucumber".to_string(),
            name: "cucumber".to_string(),
            name_nl: Some("komkommer".to_string()),
            image_url: None,
            molecule_type: MoleculeType::Water,
            can_be_carrier: false,
            provides_umami: false,
            provides_acidity: false,
            provides_crunch: true,
            flavor: FlavorProfile::new(0.2, 0.0, 0.05, 0.05, 0.0),
            aroma_categories: BTreeSet::from([AromaCategory::Fresh]),
            textures: vec![Texture::Crunchy, Texture::Juicy],
            mouthfeel: Mouthfeel::Juicy,
            aroma_intensity: 0.3,
            optimal_cooking_method: Some(CookingMethod::Raw),
            aliases: Vec::new(),
        }
    }

    #[test]
    fn test_raw_leaves_ingredient_untouched() {
        let ingredient = cucumber();
        let prepared = PreparedIngredient::prepare(&ingredient, CookingMethod::Raw);

        assert_eq!(prepared.flavor, ingredient.flavor);
        assert_eq!(prepared.aroma_intensity, ingredient.aroma_intensity);
        assert!(prepared.fresh_character);
        assert!(prepared.has_crunch());
    }

    #[test]
    fn test_boiling_softens_and_kills_freshness() {
        let prepared = PreparedIngredient::prepare(&cucumber(), CookingMethod::Boiling);

        assert!(!prepared.textures.contains(&Texture::Crunchy));
        assert!(prepared.textures.contains(&Texture::Soft));
        assert!(!prepared.fresh_character);
        assert!(!prepared.has_crunch());
        assert!(prepared.aroma_intensity < 0.3);
    }

    #[test]
    fn test_roasting_builds_flavor_and_crisps() {
        let ingredient = cucumber();
        let prepared = PreparedIngredient::prepare(&ingredient, CookingMethod::Roasting);

        assert!(prepared.flavor.sweetness > ingredient.flavor.sweetness);
        assert!(prepared.flavor.umami > ingredient.flavor.umami);
        assert!(prepared.textures.contains(&Texture::Crisp));
        assert!(prepared.aroma_intensity > ingredient.aroma_intensity);
    }

    #[test]
    fn test_pickling_adds_acidity_but_keeps_freshness() {
        let prepared = PreparedIngredient::prepare(&cucumber(), CookingMethod::Pickling);

        assert!(prepared.flavor.sourness >= 0.35);
        assert!(prepared.fresh_character);
    }

    #[test]
    fn test_effect_summary_reads_naturally() {
        let roasting = CookingEffect::for_method(CookingMethod::Roasting);
        assert_eq!(roasting.summary(), "crisps the surface, builds aroma");

        let boiling = CookingEffect::for_method(CookingMethod::Boiling);
        assert_eq!(boiling.summary(), "softens texture, mutes aroma");
    }
}
