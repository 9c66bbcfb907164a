use std::collections::BTreeSet;

use smaakbalans_catalog::{
    AromaCategory, FlavorProfile, MoleculeType, Mouthfeel, PreparedIngredient, Texture,
};

use crate::analysis::{ElementKind, Priority};

/// An ingredient whose effective umami reaches this level counts as an
/// umami source even without the catalog flag.
pub const UMAMI_INTENSITY_THRESHOLD: f32 = 0.45;

/// Same idea for acidity.
pub const ACIDITY_INTENSITY_THRESHOLD: f32 = 0.35;

pub const MIN_DISTINCT_TEXTURES: usize = 2;
pub const MIN_AROMA_CATEGORIES: usize = 2;
pub const MIN_DISTINCT_MOUTHFEELS: usize = 2;

/// The prepared composition: every selected ingredient with its cooking
/// method applied, plus the derived aggregates the element rules read.
///
/// Items are kept sorted by ingredient id so rule evaluation and every
/// downstream fold is order-independent.
pub struct PreparedSet {
    pub items: Vec<PreparedIngredient>,
    pub aggregate: FlavorProfile,
    pub textures: BTreeSet<Texture>,
    pub aroma_categories: BTreeSet<AromaCategory>,
    pub mouthfeels: BTreeSet<Mouthfeel>,
}

impl PreparedSet {
    pub fn build(mut items: Vec<PreparedIngredient>) -> PreparedSet {
        items.sort_by(|a, b| a.ingredient.id.cmp(&b.ingredient.id));

        let mut aggregate = FlavorProfile::default();
        let mut textures = BTreeSet::new();
        let mut aroma_categories = BTreeSet::new();
        let mut mouthfeels = BTreeSet::new();

        for item in &items {
            aggregate = aggregate.merge(&item.flavor);
            textures.extend(item.textures.iter().copied());
            aroma_categories.extend(item.ingredient.aroma_categories.iter().copied());
            mouthfeels.insert(item.ingredient.mouthfeel);
        }

        PreparedSet {
            items,
            aggregate,
            textures,
            aroma_categories,
            mouthfeels,
        }
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.ingredient.id == id)
    }

    pub fn has_texture_contrast(&self) -> bool {
        self.textures.iter().any(|texture| texture.is_crisp_side())
            && self.textures.iter().any(|texture| texture.is_soft_side())
    }
}

/// One structural element the scorer checks for.
///
/// Satisfaction is binary: a satisfied rule contributes its full points
/// to the overall score, an unsatisfied one contributes a MissingElement
/// instead. Rules only ever read the prepared set, so adding an
/// ingredient can flip a rule to satisfied but never back.
pub trait ElementRule {
    fn kind(&self) -> ElementKind;

    /// Contribution to the 0-100 score when satisfied.
    fn points(&self) -> u8;

    /// Urgency reported when the element is missing.
    fn priority(&self) -> Priority;

    fn is_satisfied(&self, set: &PreparedSet) -> bool;

    /// Explanation shown to the user when the element is missing.
    fn missing_reason(&self, set: &PreparedSet) -> String;
}

/// CarrierRule: some ingredient must be able to anchor the dish.
pub struct CarrierRule;

impl ElementRule for CarrierRule {
    fn kind(&self) -> ElementKind {
        ElementKind::Carrier
    }

    fn points(&self) -> u8 {
        18
    }

    fn priority(&self) -> Priority {
        Priority::High
    }

    fn is_satisfied(&self, set: &PreparedSet) -> bool {
        set.items.iter().any(|item| item.ingredient.can_be_carrier)
    }

    fn missing_reason(&self, _set: &PreparedSet) -> String {
        "No ingredient can anchor the dish as a carrier".to_string()
    }
}

/// UmamiRule: savoury depth, from a flagged source or a strong effective
/// umami intensity after cooking.
pub struct UmamiRule;

impl ElementRule for UmamiRule {
    fn kind(&self) -> ElementKind {
        ElementKind::Umami
    }

    fn points(&self) -> u8 {
        13
    }

    fn priority(&self) -> Priority {
        Priority::Medium
    }

    fn is_satisfied(&self, set: &PreparedSet) -> bool {
        set.items.iter().any(|item| {
            item.ingredient.provides_umami || item.flavor.umami >= UMAMI_INTENSITY_THRESHOLD
        })
    }

    fn missing_reason(&self, _set: &PreparedSet) -> String {
        "Nothing provides savoury depth".to_string()
    }
}

/// AcidRule: brightness, from a flagged source or enough effective
/// sourness.
pub struct AcidRule;

impl ElementRule for AcidRule {
    fn kind(&self) -> ElementKind {
        ElementKind::Acid
    }

    fn points(&self) -> u8 {
        13
    }

    fn priority(&self) -> Priority {
        Priority::Medium
    }

    fn is_satisfied(&self, set: &PreparedSet) -> bool {
        set.items.iter().any(|item| {
            item.ingredient.provides_acidity || item.flavor.sourness >= ACIDITY_INTENSITY_THRESHOLD
        })
    }

    fn missing_reason(&self, _set: &PreparedSet) -> String {
        "No acidity to lift the dish".to_string()
    }
}

/// TextureRule: at least two distinct textures across the set.
pub struct TextureRule;

impl ElementRule for TextureRule {
    fn kind(&self) -> ElementKind {
        ElementKind::Texture
    }

    fn points(&self) -> u8 {
        8
    }

    fn priority(&self) -> Priority {
        Priority::Low
    }

    fn is_satisfied(&self, set: &PreparedSet) -> bool {
        set.textures.len() >= MIN_DISTINCT_TEXTURES
    }

    fn missing_reason(&self, set: &PreparedSet) -> String {
        match set.textures.iter().next() {
            Some(texture) => format!("Every ingredient shares the same {} texture", texture),
            None => "The composition has no texture to speak of".to_string(),
        }
    }
}

/// CrunchRule: crunch that survives preparation.
pub struct CrunchRule;

impl ElementRule for CrunchRule {
    fn kind(&self) -> ElementKind {
        ElementKind::Crunch
    }

    fn points(&self) -> u8 {
        8
    }

    fn priority(&self) -> Priority {
        Priority::Low
    }

    fn is_satisfied(&self, set: &PreparedSet) -> bool {
        set.items.iter().any(|item| item.has_crunch())
    }

    fn missing_reason(&self, _set: &PreparedSet) -> String {
        "No crunch for contrast".to_string()
    }
}

/// FreshnessRule: fresh, green or citrus character that survives the
/// chosen cooking methods.
pub struct FreshnessRule;

impl ElementRule for FreshnessRule {
    fn kind(&self) -> ElementKind {
        ElementKind::Freshness
    }

    fn points(&self) -> u8 {
        8
    }

    fn priority(&self) -> Priority {
        Priority::Medium
    }

    fn is_satisfied(&self, set: &PreparedSet) -> bool {
        set.items.iter().any(|item| item.fresh_character)
    }

    fn missing_reason(&self, set: &PreparedSet) -> String {
        let had_fresh = set
            .items
            .iter()
            .any(|item| item.ingredient.has_fresh_aroma());
        if had_fresh {
            "Fresh character does not survive the chosen cooking methods".to_string()
        } else {
            "Nothing brings fresh or green notes".to_string()
        }
    }
}

/// RichnessRule: fat or creaminess to round the dish.
pub struct RichnessRule;

impl ElementRule for RichnessRule {
    fn kind(&self) -> ElementKind {
        ElementKind::Richness
    }

    fn points(&self) -> u8 {
        8
    }

    fn priority(&self) -> Priority {
        Priority::Low
    }

    fn is_satisfied(&self, set: &PreparedSet) -> bool {
        set.items.iter().any(|item| item.ingredient.is_rich())
    }

    fn missing_reason(&self, _set: &PreparedSet) -> String {
        "No fat or creaminess to round the dish".to_string()
    }
}

/// AromaRule: at least two aroma categories in play.
pub struct AromaRule;

impl ElementRule for AromaRule {
    fn kind(&self) -> ElementKind {
        ElementKind::Aroma
    }

    fn points(&self) -> u8 {
        6
    }

    fn priority(&self) -> Priority {
        Priority::Low
    }

    fn is_satisfied(&self, set: &PreparedSet) -> bool {
        set.aroma_categories.len() >= MIN_AROMA_CATEGORIES
    }

    fn missing_reason(&self, set: &PreparedSet) -> String {
        match set.aroma_categories.iter().next() {
            Some(category) => format!("Aromas stay within {}", category),
            None => "The composition is aromatically flat".to_string(),
        }
    }
}

/// MouthfeelRule: at least two distinct mouthfeel categories.
pub struct MouthfeelRule;

impl ElementRule for MouthfeelRule {
    fn kind(&self) -> ElementKind {
        ElementKind::Mouthfeel
    }

    fn points(&self) -> u8 {
        6
    }

    fn priority(&self) -> Priority {
        Priority::Low
    }

    fn is_satisfied(&self, set: &PreparedSet) -> bool {
        set.mouthfeels.len() >= MIN_DISTINCT_MOUTHFEELS
    }

    fn missing_reason(&self, set: &PreparedSet) -> String {
        match set.mouthfeels.iter().next() {
            Some(mouthfeel) => format!("Every ingredient feels {}", mouthfeel),
            None => "The composition has a single mouthfeel".to_string(),
        }
    }
}

/// All scored element rules, in reporting order.
pub fn element_rules() -> Vec<Box<dyn ElementRule>> {
    vec![
        Box::new(CarrierRule),
        Box::new(UmamiRule),
        Box::new(AcidRule),
        Box::new(TextureRule),
        Box::new(CrunchRule),
        Box::new(FreshnessRule),
        Box::new(RichnessRule),
        Box::new(AromaRule),
        Box::new(MouthfeelRule),
    ]
}

/// Whether an ingredient's molecule type wants an explicit cooking
/// method before the dish is complete.
pub fn wants_cooking_method(molecule_type: MoleculeType) -> bool {
    matches!(
        molecule_type,
        MoleculeType::Protein | MoleculeType::Carbohydrate
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use smaakbalans_catalog::{CookingMethod, Ingredient, Mouthfeel};
    use std::collections::BTreeSet;

    fn ingredient(id: &str) -> Ingredient {
        Ingredient {
            id: id.to_string(),
            name: id.replace('-', " "),
            name_nl: None,
            image_url: None,
            molecule_type: MoleculeType::Water,
            can_be_carrier: false,
            provides_umami: false,
            provides_acidity: false,
            provides_crunch: false,
            flavor: FlavorProfile::default(),
            aroma_categories: BTreeSet::new(),
            textures: vec![Texture::Soft],
            mouthfeel: Mouthfeel::Tender,
            aroma_intensity: 0.3,
            optimal_cooking_method: None,
            aliases: Vec::new(),
        }
    }

    fn prepared(ingredients: &[Ingredient]) -> PreparedSet {
        PreparedSet::build(
            ingredients
                .iter()
                .map(|i| PreparedIngredient::prepare(i, CookingMethod::Raw))
                .collect(),
        )
    }

    #[test]
    fn test_total_rule_points_leave_room_for_balance() {
        let total: u32 = element_rules().iter().map(|rule| rule.points() as u32).sum();
        assert_eq!(total, 88);
    }

    #[test]
    fn test_carrier_rule_checks_flag() {
        let mut pasta = ingredient("pasta");
        pasta.can_be_carrier = true;
        let herbs = ingredient("basil");

        assert!(CarrierRule.is_satisfied(&prepared(&[pasta])));
        assert!(!CarrierRule.is_satisfied(&prepared(&[herbs])));
    }

    #[test]
    fn test_umami_rule_accepts_strong_effective_intensity() {
        // No flag, but roasting pushes umami past the threshold.
        let mut eggplant = ingredient("eggplant");
        eggplant.flavor.umami = 0.35;

        let raw = prepared(&[eggplant.clone()]);
        assert!(!UmamiRule.is_satisfied(&raw));

        let roasted = PreparedSet::build(vec![PreparedIngredient::prepare(
            &eggplant,
            CookingMethod::Roasting,
        )]);
        assert!(UmamiRule.is_satisfied(&roasted));
    }

    #[test]
    fn test_texture_rule_counts_distinct_textures() {
        let mut one = ingredient("rice");
        one.textures = vec![Texture::Soft];
        let mut two = ingredient("almond");
        two.textures = vec![Texture::Crunchy];

        assert!(!TextureRule.is_satisfied(&prepared(&[one.clone()])));
        assert!(TextureRule.is_satisfied(&prepared(&[one, two])));
    }

    #[test]
    fn test_freshness_reason_distinguishes_cooked_away_from_absent() {
        let mut basil = ingredient("basil");
        basil.aroma_categories.insert(AromaCategory::Herbal);

        let boiled = PreparedSet::build(vec![PreparedIngredient::prepare(
            &basil,
            CookingMethod::Boiling,
        )]);
        assert!(!FreshnessRule.is_satisfied(&boiled));
        assert!(FreshnessRule.missing_reason(&boiled).contains("survive"));

        let plain = prepared(&[ingredient("rice")]);
        assert!(FreshnessRule.missing_reason(&plain).contains("Nothing"));
    }

    #[test]
    fn test_contrast_requires_both_sides() {
        let mut soft = ingredient("rice");
        soft.textures = vec![Texture::Soft, Texture::Creamy];
        let set = prepared(&[soft.clone()]);
        assert!(!set.has_texture_contrast());

        let mut crisp = ingredient("crouton");
        crisp.textures = vec![Texture::Crunchy];
        let set = prepared(&[soft, crisp]);
        assert!(set.has_texture_contrast());
    }
}
