use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::flavor::FlavorProfile;
use crate::types::{AromaCategory, CookingMethod, MoleculeType, Mouthfeel, Texture};

/// One entry in the ingredient ontology.
///
/// Ids are stable kebab-case slugs (`olive-oil`). Lookup by name goes
/// through the catalog's alias index, which also carries the Dutch names
/// the product ships with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub name_nl: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    pub molecule_type: MoleculeType,
    #[serde(default)]
    pub can_be_carrier: bool,
    #[serde(default)]
    pub provides_umami: bool,
    #[serde(default)]
    pub provides_acidity: bool,
    #[serde(default)]
    pub provides_crunch: bool,
    pub flavor: FlavorProfile,
    #[serde(default)]
    pub aroma_categories: BTreeSet<AromaCategory>,
    #[serde(default)]
    pub textures: Vec<Texture>,
    pub mouthfeel: Mouthfeel,
    pub aroma_intensity: f32,
    #[serde(default)]
    pub optimal_cooking_method: Option<CookingMethod>,
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl Ingredient {
    /// Fat-driven or cream-textured ingredients carry richness.
    pub fn is_rich(&self) -> bool {
        self.molecule_type == MoleculeType::Fat || self.mouthfeel == Mouthfeel::Creamy
    }

    /// Whether the raw ingredient smells fresh, green or citrusy. The
    /// character survives only under methods that preserve freshness.
    pub fn has_fresh_aroma(&self) -> bool {
        self.aroma_categories.iter().any(|category| category.is_fresh())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flavor::FlavorProfile;

    fn base_ingredient(id: &str, molecule_type: MoleculeType, mouthfeel: Mouthfeel) -> Ingredient {
        Ingredient {
            id: id.to_string(),
            name: id.replace('-', " "),
            name_nl: None,
            image_url: None,
            molecule_type,
            can_be_carrier: false,
            provides_umami: false,
            provides_acidity: false,
            provides_crunch: false,
            flavor: FlavorProfile::default(),
            aroma_categories: BTreeSet::new(),
            textures: Vec::new(),
            mouthfeel,
            aroma_intensity: 0.5,
            optimal_cooking_method: None,
            aliases: Vec::new(),
        }
    }

    #[test]
    fn test_fat_and_creamy_count_as_rich() {
        let oil = base_ingredient("olive-oil", MoleculeType::Fat, Mouthfeel::Smooth);
        let cream = base_ingredient("cream", MoleculeType::Water, Mouthfeel::Creamy);
        let rice = base_ingredient("rice", MoleculeType::Carbohydrate, Mouthfeel::Tender);

        assert!(oil.is_rich());
        assert!(cream.is_rich());
        assert!(!rice.is_rich());
    }

    #[test]
    fn test_fresh_aroma_detection() {
        let mut basil = base_ingredient("basil", MoleculeType::Water, Mouthfeel::Tender);
        basil.aroma_categories.insert(AromaCategory::Herbal);
        assert!(basil.has_fresh_aroma());

        let mut walnut = base_ingredient("walnut", MoleculeType::Fat, Mouthfeel::Crispy);
        walnut.aroma_categories.insert(AromaCategory::Nutty);
        assert!(!walnut.has_fresh_aroma());
    }
}
