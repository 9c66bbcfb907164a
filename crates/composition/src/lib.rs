pub mod analysis;
pub mod analyzer;
pub mod elements;
pub mod error;
pub mod suggest;

pub use analysis::{
    CompositionAnalysis, ElementKind, IngredientSuggestion, MissingElement, Priority,
    TextureVariety,
};
pub use analyzer::{CompositionAnalyzer, CookingAssignments};
pub use elements::{ElementRule, PreparedSet, element_rules};
pub use error::CompositionError;
pub use suggest::MAX_SUGGESTIONS_PER_ELEMENT;
