use thiserror::Error;

/// Result type local to templet-html.
pub type Result<T> = std::result::Result<T, HtmlError>;

#[derive(Debug, Error)]
pub enum HtmlError {
    #[error("invalid input type at position {index}: expected {expected}, found {found}")]
    InvalidInput {
        index: usize,
        expected: &'static str,
        found: &'static str,
    },

    #[error("json encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{}", joined_message(.0))]
    Joined(Vec<HtmlError>),
}

fn joined_message(errors: &[HtmlError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

impl From<HtmlError> for templet_core::Error {
    fn from(e: HtmlError) -> Self {
        match e {
            HtmlError::Joined(errors) => {
                templet_core::Error::Joined(errors.into_iter().map(Into::into).collect())
            }
            other => templet_core::Error::Render(other.to_string()),
        }
    }
}
