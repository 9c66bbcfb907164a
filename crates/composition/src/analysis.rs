use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use smaakbalans_catalog::{CookingMethod, FlavorProfile, Ingredient};

/// Structural element of a composition that can be missing.
///
/// Declaration order doubles as the reporting order within one priority
/// level, so derived `Ord` is meaningful.
#[derive(
    EnumString,
    Display,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Carrier,
    Umami,
    Acid,
    Texture,
    Crunch,
    Freshness,
    Richness,
    Aroma,
    Mouthfeel,
    CookingMethod,
}

/// Urgency of a missing element. High sorts before Medium before Low.
#[derive(
    EnumString,
    Display,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// A structural gap in the composition with a human-readable explanation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissingElement {
    pub kind: ElementKind,
    pub reason: String,
    pub priority: Priority,
}

/// A catalog ingredient proposed to close a specific gap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientSuggestion {
    pub ingredient: Ingredient,
    pub reason: String,
    pub addresses: ElementKind,
    pub priority: Priority,
    pub optimal_cooking_method: Option<CookingMethod>,
}

/// Summary of textural variety across the prepared composition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextureVariety {
    pub distinct_textures: usize,
    pub distinct_mouthfeels: usize,
    /// True when both a crisp-side and a soft-side texture occur.
    pub has_contrast: bool,
}

/// Full result of analyzing one ingredient selection.
///
/// Produced by a complete recompute on every call; two calls with the
/// same selection always yield the same analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompositionAnalysis {
    /// Aggregate flavor profile of the prepared ingredients.
    pub flavor: FlavorProfile,
    pub is_balanced: bool,
    /// 0 to 100, higher is a more complete composition.
    pub overall_score: u8,
    pub carrier: Option<Ingredient>,
    pub missing_elements: Vec<MissingElement>,
    pub suggestions: Vec<IngredientSuggestion>,
    pub texture_variety: TextureVariety,
    /// Input names the catalog does not know, in input order.
    pub unrecognized: Vec<String>,
}

impl CompositionAnalysis {
    pub fn is_missing(&self, kind: ElementKind) -> bool {
        self.missing_elements.iter().any(|element| element.kind == kind)
    }
}
