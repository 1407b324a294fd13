use thiserror::Error;

/// Errors raised while accepting caller input.
///
/// The formatting pipeline itself never fails: a missing field or an
/// unrecognized type name degrades to the plain-address fallback instead.
#[derive(Debug, Error)]
pub enum AddressFormatError {
    #[error("invalid address components payload: {0}")]
    InvalidComponents(#[from] serde_json::Error),
}
