use thiserror::Error;

/// Failures raised while recomputing a breadcrumb line. None of them leave
/// the document modified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    #[error("Invalid link {0}")]
    MalformedLink(String),

    #[error("Breadcrumb must have 3 segments separated by \" | \", found {segments}")]
    MalformedBreadcrumb { segments: usize },

    #[error("No daily note exists before {0}")]
    NoPreviousNote(String),

    #[error("{path} has no line {line}")]
    MissingLine { line: usize, path: String },
}

pub type NavResult<T> = Result<T, NavError>;
