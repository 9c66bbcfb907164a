use smaakbalans_catalog::{Catalog, CookingMethod, MoleculeType};
use smaakbalans_composition::{
    CompositionAnalysis, CompositionAnalyzer, CompositionError, CookingAssignments, ElementKind,
    Priority,
};

fn analyze(names: &[&str]) -> CompositionAnalysis {
    analyze_with(names, &[])
}

fn analyze_with(names: &[&str], methods: &[(&str, CookingMethod)]) -> CompositionAnalysis {
    let catalog = Catalog::builtin().expect("builtin catalog must load");
    let analyzer = CompositionAnalyzer::new(&catalog);
    let names: Vec<String> = names.iter().map(|n| n.to_string()).collect();
    let assignments: CookingAssignments = methods
        .iter()
        .map(|(name, method)| (name.to_string(), *method))
        .collect();
    analyzer
        .analyze(&names, &assignments)
        .expect("analysis should succeed")
}

#[test]
fn test_complete_plate_scores_full_marks() {
    let analysis = analyze_with(
        &["pasta", "tomato", "parmesan", "basil", "olive oil", "pine nuts"],
        &[("pasta", CookingMethod::Boiling)],
    );

    assert_eq!(
        analysis.overall_score, 100,
        "complete plate should max the score, got {} with missing {:?}",
        analysis.overall_score, analysis.missing_elements
    );
    assert!(analysis.missing_elements.is_empty());
    assert!(analysis.is_balanced);
    assert_eq!(analysis.carrier.as_ref().map(|c| c.id.as_str()), Some("pasta"));
    assert!(analysis.texture_variety.has_contrast);
    assert!(analysis.suggestions.is_empty());
}

#[test]
fn test_single_carrier_reports_every_other_gap() {
    let analysis = analyze(&["rice"]);

    assert_eq!(analysis.overall_score, 18, "only the carrier points apply");
    assert_eq!(analysis.carrier.as_ref().map(|c| c.id.as_str()), Some("rice"));

    let kinds: Vec<ElementKind> = analysis
        .missing_elements
        .iter()
        .map(|element| element.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            ElementKind::Umami,
            ElementKind::Acid,
            ElementKind::Freshness,
            ElementKind::Texture,
            ElementKind::Crunch,
            ElementKind::Richness,
            ElementKind::Aroma,
            ElementKind::Mouthfeel,
            ElementKind::CookingMethod,
        ],
        "medium priorities first, then the low ones in element order"
    );
}

#[test]
fn test_missing_elements_carry_reasons_and_priorities() {
    let analysis = analyze(&["rice"]);

    for element in &analysis.missing_elements {
        assert!(
            !element.reason.is_empty(),
            "missing {} has no reason text",
            element.kind
        );
    }
    let umami = analysis
        .missing_elements
        .iter()
        .find(|element| element.kind == ElementKind::Umami)
        .unwrap();
    assert_eq!(umami.priority, Priority::Medium);
}

#[test]
fn test_unknown_names_are_reported_not_fatal() {
    let analysis = analyze(&["rice", "unicorn dust", "Unicorn  Dust"]);

    assert_eq!(analysis.unrecognized, vec!["unicorn dust"]);
    assert_eq!(analysis.overall_score, 18, "unknown names must not score");
}

#[test]
fn test_blank_names_are_ignored() {
    let analysis = analyze(&["rice", "   "]);
    assert!(analysis.unrecognized.is_empty());
    assert_eq!(analysis.overall_score, 18);
}

#[test]
fn test_empty_selection_is_an_error() {
    let catalog = Catalog::builtin().unwrap();
    let analyzer = CompositionAnalyzer::new(&catalog);

    let result = analyzer.analyze(&[], &CookingAssignments::new());
    assert!(matches!(result, Err(CompositionError::EmptySelection)));

    let blank = vec!["   ".to_string()];
    let result = analyzer.analyze(&blank, &CookingAssignments::new());
    assert!(matches!(result, Err(CompositionError::EmptySelection)));
}

#[test]
fn test_all_unknown_names_is_an_error() {
    let catalog = Catalog::builtin().unwrap();
    let analyzer = CompositionAnalyzer::new(&catalog);

    let names = vec!["unicorn dust".to_string(), "moon cheese".to_string()];
    let result = analyzer.analyze(&names, &CookingAssignments::new());
    match result {
        Err(CompositionError::NoKnownIngredients { unrecognized }) => {
            assert_eq!(unrecognized, vec!["unicorn dust", "moon cheese"]);
        }
        other => panic!("expected NoKnownIngredients, got {:?}", other.map(|a| a.overall_score)),
    }
}

#[test]
fn test_dutch_aliases_resolve() {
    let analysis = analyze(&["tomaat", "komkommer", "knoflook"]);
    assert!(analysis.unrecognized.is_empty());
    assert!(analysis.overall_score > 0);
}

#[test]
fn test_carrier_prefers_starch_over_protein() {
    let analysis = analyze(&["salmon", "rice"]);
    assert_eq!(analysis.carrier.as_ref().map(|c| c.id.as_str()), Some("rice"));

    let analysis = analyze(&["salmon", "shrimp"]);
    assert_eq!(
        analysis.carrier.as_ref().map(|c| c.id.as_str()),
        Some("salmon"),
        "shrimp is not a carrier, salmon is"
    );
}

#[test]
fn test_carrier_ties_break_by_id() {
    let analysis = analyze(&["chicken breast", "beef steak"]);
    assert_eq!(
        analysis.carrier.as_ref().map(|c| c.id.as_str()),
        Some("beef-steak")
    );
}

#[test]
fn test_roasting_can_turn_an_ingredient_into_an_umami_source() {
    let raw = analyze(&["salmon", "rice"]);
    assert!(raw.is_missing(ElementKind::Umami), "raw salmon sits under the umami threshold");

    let roasted = analyze_with(&["salmon", "rice"], &[("salmon", CookingMethod::Roasting)]);
    assert!(!roasted.is_missing(ElementKind::Umami));
    assert!(
        roasted.overall_score > raw.overall_score,
        "roasting the salmon should lift the score ({} -> {})",
        raw.overall_score,
        roasted.overall_score
    );
}

#[test]
fn test_boiling_away_the_only_fresh_element_loses_freshness() {
    let raw = analyze(&["cod", "lemon", "basil"]);
    assert!(!raw.is_missing(ElementKind::Freshness));

    let boiled = analyze_with(
        &["cod", "lemon", "basil"],
        &[("basil", CookingMethod::Boiling), ("lemon", CookingMethod::Boiling)],
    );
    assert!(boiled.is_missing(ElementKind::Freshness));
    let freshness = boiled
        .missing_elements
        .iter()
        .find(|element| element.kind == ElementKind::Freshness)
        .unwrap();
    assert!(
        freshness.reason.contains("survive"),
        "reason should say the freshness was cooked away: {}",
        freshness.reason
    );
}

#[test]
fn test_cooking_method_advisory_for_unassigned_carrier() {
    let bare = analyze(&["pasta", "tomato", "parmesan", "basil", "olive oil", "pine nuts"]);
    assert!(bare.is_missing(ElementKind::CookingMethod));
    let advisory = bare
        .missing_elements
        .iter()
        .find(|element| element.kind == ElementKind::CookingMethod)
        .unwrap();
    assert_eq!(advisory.priority, Priority::Low);
    assert!(
        advisory.reason.contains("pasta"),
        "advisory should name the carrier: {}",
        advisory.reason
    );
    assert_eq!(
        bare.overall_score, 100,
        "the advisory carries no points"
    );

    let assigned = analyze_with(
        &["pasta", "tomato", "parmesan", "basil", "olive oil", "pine nuts"],
        &[("pasta", CookingMethod::Boiling)],
    );
    assert!(!assigned.is_missing(ElementKind::CookingMethod));
}

#[test]
fn test_method_assignments_accept_aliases() {
    // Assignment keyed by the Dutch alias must reach the same ingredient.
    let via_alias = analyze_with(&["salmon", "rice"], &[("zalm", CookingMethod::Roasting)]);
    assert!(!via_alias.is_missing(ElementKind::Umami));
}

#[test]
fn test_assignments_for_absent_ingredients_are_ignored() {
    let analysis = analyze_with(&["rice"], &[("salmon", CookingMethod::Roasting)]);
    assert_eq!(analysis.overall_score, 18);
}

#[test]
fn test_texture_variety_summary() {
    let uniform = analyze(&["rice"]);
    assert_eq!(uniform.texture_variety.distinct_textures, 1);
    assert_eq!(uniform.texture_variety.distinct_mouthfeels, 1);
    assert!(!uniform.texture_variety.has_contrast);

    let varied = analyze(&["rice", "almond", "yogurt"]);
    assert!(varied.texture_variety.distinct_textures >= 3);
    assert!(varied.texture_variety.has_contrast);
}

#[test]
fn test_carrier_is_none_without_candidates() {
    let analysis = analyze(&["basil", "lemon"]);
    assert!(analysis.carrier.is_none());
    assert!(analysis.is_missing(ElementKind::Carrier));
    let carrier = analysis
        .missing_elements
        .iter()
        .find(|element| element.kind == ElementKind::Carrier)
        .unwrap();
    assert_eq!(carrier.priority, Priority::High);
}

#[test]
fn test_mixed_molecule_carrier_skips_the_method_advisory() {
    // The advisory only tracks starch and protein carriers.
    let analysis = analyze(&["pork belly"]);
    assert_eq!(
        analysis.carrier.as_ref().map(|c| c.molecule_type),
        Some(MoleculeType::Mixed)
    );
    assert!(!analysis.is_missing(ElementKind::CookingMethod));
}
