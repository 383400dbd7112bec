//! Generator error types

use crate::core::error_handling::ContextualError;
use crate::core::version::MalformedVersionError;
use std::fmt;

/// Which configured version string a parse failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionRole {
    Specification,
    Implementation,
}

impl fmt::Display for VersionRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Specification => write!(f, "specification"),
            Self::Implementation => write!(f, "implementation"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum InfoGenError {
    #[error("the {role} version is not valid: {source}")]
    MalformedVersion {
        role: VersionRole,
        #[source]
        source: MalformedVersionError,
    },

    #[error("invalid {field}: {message}")]
    InvalidRequest {
        field: &'static str,
        message: String,
    },

    #[error("failed to write generated source {path}: {cause}")]
    WriteFailed { path: String, cause: String },
}

/// Result type for generator operations
pub type InfoGenResult<T> = Result<T, InfoGenError>;

impl ContextualError for InfoGenError {
    fn is_user_actionable(&self) -> bool {
        // Write failures are environment problems, not configuration mistakes
        matches!(
            self,
            Self::MalformedVersion { .. } | Self::InvalidRequest { .. }
        )
    }

    fn user_message(&self) -> Option<String> {
        self.is_user_actionable().then(|| self.to_string())
    }
}
