pub mod cooking;
pub mod error;
pub mod flavor;
pub mod ingredient;
pub mod store;
pub mod types;

pub use cooking::{CookingEffect, PreparedIngredient, TextureChange};
pub use error::CatalogError;
pub use flavor::{FlavorProfile, Taste};
pub use ingredient::Ingredient;
pub use store::{Catalog, normalize_name};
pub use types::{AromaCategory, CookingMethod, MoleculeType, Mouthfeel, Texture};
