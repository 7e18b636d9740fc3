//! Leaf templates for text content, plus JSON embedding.

use std::io::Write;

use serde::Serialize;
use templet_core::{Context, Template};

use crate::error::Result;
use crate::escape::escape_html;

/// Text content, escaped on render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text(pub String);

impl Text {
    pub fn new(s: impl Into<String>) -> Self {
        Text(s.into())
    }
}

impl Template for Text {
    fn render(&self, _ctx: &Context, sink: &mut dyn Write) -> templet_core::Result<()> {
        sink.write_all(escape_html(&self.0).as_bytes())?;
        Ok(())
    }
}

/// Trusted markup written verbatim. Never wrap user input in this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raw(pub String);

impl Raw {
    pub fn new(s: impl Into<String>) -> Self {
        Raw(s.into())
    }
}

impl Template for Raw {
    fn render(&self, _ctx: &Context, sink: &mut dyn Write) -> templet_core::Result<()> {
        sink.write_all(self.0.as_bytes())?;
        Ok(())
    }
}

/// Serialize `value` as compact JSON, e.g. for a `data-*` attribute.
///
/// The result is not escaped; pass it through the attribute builder or
/// `escape_html` before it reaches markup.
pub fn json_string<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render(t: &dyn Template) -> String {
        let mut out = Vec::new();
        t.render(&Context::background(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn text_escapes_raw_does_not() {
        assert_eq!(render(&Text::new("<b>")), "&lt;b&gt;");
        assert_eq!(render(&Raw::new("<b>")), "<b>");
    }

    #[test]
    fn json_string_is_compact() {
        let s = json_string(&json!({"a": [1, 2], "b": "q\""})).unwrap();
        assert_eq!(s, r#"{"a":[1,2],"b":"q\""}"#);
    }
}
