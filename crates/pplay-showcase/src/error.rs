use pplay_catalog::CatalogError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ShowcaseError>;

#[derive(Debug, Error)]
pub enum ShowcaseError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("unknown pattern id: {id}")]
    UnknownPattern { id: String },

    #[error("no button {label:?} on the {demo_type} demo")]
    UnknownButton { label: String, demo_type: String },

    #[error("script step {step}: {message}")]
    Script { step: usize, message: String },

    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("logging setup failed: {message}")]
    Logging { message: String },
}

impl ShowcaseError {
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::UnknownPattern { .. } | Self::InvalidArgument { .. } => 2,
            Self::UnknownButton { .. } => 3,
            Self::Script { .. } => 4,
            Self::Catalog(_) => 5,
            Self::Io(_) | Self::Json(_) | Self::Logging { .. } => 1,
        }
    }

    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn script(step: usize, message: impl Into<String>) -> Self {
        Self::Script {
            step,
            message: message.into(),
        }
    }
}
