use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog JSON error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("pattern at position {index} has an empty id")]
    EmptyId { index: usize },

    #[error("duplicate pattern id: {id}")]
    DuplicateId { id: String },
}

#[cfg(test)]
mod tests {
    use super::CatalogError;

    #[test]
    fn duplicate_id_names_the_id() {
        let error = CatalogError::DuplicateId {
            id: "strategy".to_string(),
        };
        assert_eq!(error.to_string(), "duplicate pattern id: strategy");
    }

    #[test]
    fn parse_errors_convert() {
        let json_error = serde_json::from_str::<u32>("nope").unwrap_err();
        let error: CatalogError = json_error.into();
        assert!(error.to_string().starts_with("catalog JSON error"));
    }
}
