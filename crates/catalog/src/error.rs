use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Embedded catalog asset missing: {0}")]
    MissingAsset(&'static str),

    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Catalog contains no ingredients")]
    Empty,

    #[error("Duplicate ingredient id: {0}")]
    DuplicateId(String),

    #[error("Alias '{alias}' maps to both '{first}' and '{second}'")]
    AliasCollision {
        alias: String,
        first: String,
        second: String,
    },

    #[error("Field {field} out of range for ingredient '{id}'")]
    OutOfRange { id: String, field: &'static str },
}
