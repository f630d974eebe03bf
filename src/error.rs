use thiserror::Error;

/// Errors surfaced by the directory and conversation store seams.
///
/// Permission failures are kept distinguishable from everything else: the
/// application renders them as a "backend not configured" state, while other
/// backend errors are logged and swallowed, leaving prior state intact.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    #[error("conversation '{0}' not found")]
    ConversationNotFound(String),

    #[error("backend unavailable: {0}")]
    Unavailable(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Malformed(#[from] serde_json::Error),
}

impl BackendError {
    /// Classify an error as a permission failure, by code or message text.
    /// The message check mirrors the backend's own error wording.
    pub fn is_permission_denied(&self) -> bool {
        match self {
            BackendError::PermissionDenied(_) => true,
            BackendError::Io(err) => err.kind() == std::io::ErrorKind::PermissionDenied,
            other => other.to_string().contains("insufficient permissions"),
        }
    }
}
