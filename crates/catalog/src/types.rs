use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    EnumString,
    Display,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MoleculeType {
    Water,
    Fat,
    Carbohydrate,
    Protein,
    Mixed,
}

impl MoleculeType {
    /// Preference order used when electing a carrier from several candidates.
    /// Lower ranks win: starches first, then proteins.
    pub fn carrier_rank(&self) -> u8 {
        match self {
            MoleculeType::Carbohydrate => 0,
            MoleculeType::Protein => 1,
            MoleculeType::Mixed => 2,
            MoleculeType::Water => 3,
            MoleculeType::Fat => 4,
        }
    }
}

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
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Texture {
    Crunchy,
    Crisp,
    Soft,
    Creamy,
    Juicy,
    Chewy,
    Flaky,
    Silky,
    Firm,
    Grainy,
}

impl Texture {
    pub fn is_crisp_side(&self) -> bool {
        matches!(self, Texture::Crunchy | Texture::Crisp | Texture::Firm)
    }

    pub fn is_soft_side(&self) -> bool {
        matches!(
            self,
            Texture::Soft | Texture::Creamy | Texture::Silky | Texture::Juicy
        )
    }
}

/// Overall mouthfeel category of an ingredient, one per ingredient.
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
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Mouthfeel {
    Crispy,
    Creamy,
    Juicy,
    Tender,
    Chewy,
    Airy,
    Dense,
    Smooth,
}

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
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum AromaCategory {
    Fresh,
    Citrus,
    Herbal,
    Fruity,
    Floral,
    Earthy,
    Nutty,
    Roasted,
    Smoky,
    Spicy,
    Caramel,
    Dairy,
    Marine,
    Pungent,
}

impl AromaCategory {
    /// Categories that read as "fresh" on the plate. Cooking can destroy
    /// this character, see `CookingEffect::preserves_freshness`.
    pub fn is_fresh(&self) -> bool {
        matches!(
            self,
            AromaCategory::Fresh | AromaCategory::Citrus | AromaCategory::Herbal
        )
    }
}

#[derive(
    EnumString,
    Display,
    AsRefStr,
    VariantArray,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum CookingMethod {
    #[default]
    Raw,
    Boiling,
    Steaming,
    Roasting,
    Grilling,
    Frying,
    Sauteing,
    Braising,
    Pickling,
    Baking,
}
