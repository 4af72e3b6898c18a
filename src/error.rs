use thiserror::Error;

/// Errors raised while building a catalog or constructing filter values.
///
/// The filter/sort engine itself never fails; an empty result is a value.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid price range [{min}, {max}]")]
    InvalidPriceRange { min: f64, max: f64 },

    #[error("unknown listing condition: {0:?}")]
    UnknownCondition(String),

    #[error("unknown sort option: {0:?}")]
    UnknownSortOption(String),

    #[error("duplicate record {collection}:{id}")]
    DuplicateRecord { collection: String, id: String },

    #[error("record serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("record store error: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
