use thiserror::Error;

/// Canonical result for templet.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The sink (or a pooled buffer) rejected a write. Passed through untouched.
    #[error("write to sink failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("render error: {0}")]
    Render(String),

    #[error("rendered output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("invalid configuration: {0}")]
    Config(String),

    /// Several failures collected together; every cause is kept in order.
    #[error("{}", joined_message(.0))]
    Joined(Vec<Error>),
}

impl Error {
    /// Combine zero or more errors into one.
    ///
    /// Returns `None` for an empty set and the error itself when there is
    /// exactly one, so a single failure reaches the caller unchanged.
    pub fn join(errors: impl IntoIterator<Item = Error>) -> Option<Error> {
        let mut errors: Vec<Error> = errors.into_iter().collect();
        match errors.len() {
            0 => None,
            1 => errors.pop(),
            _ => Some(Error::Joined(errors)),
        }
    }
}

fn joined_message(errors: &[Error]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Render(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_of_nothing_is_none() {
        assert!(Error::join(Vec::new()).is_none());
    }

    #[test]
    fn join_of_one_is_that_error() {
        let err = Error::join(vec![Error::Render("boom".into())]).unwrap();
        assert!(matches!(err, Error::Render(ref m) if m == "boom"));
    }

    #[test]
    fn join_keeps_every_cause() {
        let err = Error::join(vec![
            Error::Render("first".into()),
            Error::Config("second".into()),
        ])
        .unwrap();
        match &err {
            Error::Joined(causes) => assert_eq!(causes.len(), 2),
            other => panic!("expected joined error, got {other:?}"),
        }
        let msg = err.to_string();
        assert!(msg.contains("first"));
        assert!(msg.contains("second"));
    }
}
