//! Error types for loading and registering abilities.
//!
//! Rendering never fails; only catalog operations return these.

use thiserror::Error;

/// Failure while building or (de)serializing an [`AbilityCatalog`](crate::abilities::AbilityCatalog).
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("malformed ability data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("ability `{0}` is already registered")]
    DuplicateAbility(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = CatalogError::DuplicateAbility("Quick Strike".to_string());
        assert_eq!(err.to_string(), "ability `Quick Strike` is already registered");

        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = CatalogError::from(json_err);
        assert!(err.to_string().starts_with("malformed ability data:"));
    }
}
