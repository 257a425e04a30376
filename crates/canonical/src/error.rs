use thiserror::Error;

/// Errors that can occur while configuring the normalizer.
///
/// Normalizing text never fails; only a malformed [`NormalizeConfig`](crate::NormalizeConfig)
/// is rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CanonicalError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
