use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompositionError {
    #[error("No ingredients given to analyze")]
    EmptySelection,

    #[error("None of the given ingredients are known: {unrecognized:?}")]
    NoKnownIngredients { unrecognized: Vec<String> },
}
