//! Pair a built string with the errors collected while building it.

use crate::error::{HtmlError, Result};

/// Output of a fallible builder: whatever could be assembled, plus an error
/// describing the inputs that could not.
#[derive(Debug)]
pub struct Built {
    pub value: String,
    pub error: Option<HtmlError>,
}

impl Built {
    pub fn ok(value: String) -> Self {
        Self { value, error: None }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Discard the partial value on error.
    pub fn into_result(self) -> Result<String> {
        match self.error {
            None => Ok(self.value),
            Some(e) => Err(e),
        }
    }
}

/// Combine `value` with zero or more errors.
///
/// No errors gives `error: None`; one error is kept as-is; several become a
/// single `HtmlError::Joined` preserving every cause in order.
pub fn join_errors(value: String, mut errors: Vec<HtmlError>) -> Built {
    let error = match errors.len() {
        0 => None,
        1 => errors.pop(),
        _ => Some(HtmlError::Joined(errors)),
    };
    Built { value, error }
}
