use thiserror::Error;

/// Reasons a catalog is rejected at construction time.
///
/// Every variant is an invalid catalog entry: the source data has to be fixed
/// before an engine can be built from it. None of these ever surface per query.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CatalogError {
    #[error("duplicate catalog key {key:?}")]
    DuplicateKey { key: String },
    #[error("catalog key must not be empty")]
    EmptyKey,
    #[error("catalog key {key:?} is not normalized (expected {expected:?})")]
    NonCanonicalKey { key: String, expected: String },
    #[error("catalog entry {key:?} has invalid {field} = {value}; values must be finite and >= 0")]
    InvalidValue {
        key: String,
        field: &'static str,
        value: f64,
    },
}
