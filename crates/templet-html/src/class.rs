//! CSS class-list builder.

use std::collections::HashMap;

use serde_json::Value;

use crate::error::HtmlError;
use crate::join::{join_errors, Built};

/// One argument to `class_list`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassInput {
    Name(String),
    Names(Vec<String>),
    /// Names mapped to an include flag. Iteration order of the map, and so the
    /// output order of these names, is unspecified.
    Flags(HashMap<String, bool>),
}

impl From<&str> for ClassInput {
    fn from(name: &str) -> Self {
        ClassInput::Name(name.to_string())
    }
}

impl From<String> for ClassInput {
    fn from(name: String) -> Self {
        ClassInput::Name(name)
    }
}

impl From<Vec<String>> for ClassInput {
    fn from(names: Vec<String>) -> Self {
        ClassInput::Names(names)
    }
}

impl From<&[&str]> for ClassInput {
    fn from(names: &[&str]) -> Self {
        ClassInput::Names(names.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for ClassInput {
    fn from(names: [&str; N]) -> Self {
        ClassInput::Names(names.iter().map(|s| s.to_string()).collect())
    }
}

impl From<HashMap<String, bool>> for ClassInput {
    fn from(flags: HashMap<String, bool>) -> Self {
        ClassInput::Flags(flags)
    }
}

impl<const N: usize> From<[(&str, bool); N]> for ClassInput {
    fn from(flags: [(&str, bool); N]) -> Self {
        ClassInput::Flags(
            flags
                .into_iter()
                .map(|(name, on)| (name.to_string(), on))
                .collect(),
        )
    }
}

/// Join every included class name with single spaces, in input order.
///
/// Empty names are skipped. Names are not escaped here; the attribute builder
/// escapes the finished value.
pub fn class_list(inputs: &[ClassInput]) -> String {
    let mut out = ClassWriter::default();
    for input in inputs {
        match input {
            ClassInput::Name(name) => out.push(name),
            ClassInput::Names(names) => names.iter().for_each(|n| out.push(n)),
            ClassInput::Flags(flags) => flags
                .iter()
                .filter(|(_, on)| **on)
                .for_each(|(n, _)| out.push(n)),
        }
    }
    out.finish()
}

/// Loosely-typed variant of `class_list`.
///
/// Each value must be a string, an array of strings, or an object of
/// booleans. Anything else is reported as `InvalidInput`; valid inputs still
/// contribute to the returned value.
pub fn class_list_from_values(values: &[Value]) -> Built {
    let mut out = ClassWriter::default();
    let mut errors = Vec::new();
    for (index, value) in values.iter().enumerate() {
        match value {
            Value::String(name) => out.push(name),
            Value::Array(items) => {
                for item in items {
                    match item {
                        Value::String(name) => out.push(name),
                        other => errors.push(invalid(index, "array of strings", other)),
                    }
                }
            }
            Value::Object(flags) => {
                for (name, flag) in flags {
                    match flag {
                        Value::Bool(true) => out.push(name),
                        Value::Bool(false) => {}
                        other => errors.push(invalid(index, "object of booleans", other)),
                    }
                }
            }
            other => errors.push(invalid(
                index,
                "string, array of strings, or object of booleans",
                other,
            )),
        }
    }
    join_errors(out.finish(), errors)
}

pub(crate) fn invalid(index: usize, expected: &'static str, found: &Value) -> HtmlError {
    HtmlError::InvalidInput {
        index,
        expected,
        found: kind_of(found),
    }
}

pub(crate) fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[derive(Default)]
struct ClassWriter {
    out: String,
}

impl ClassWriter {
    fn push(&mut self, name: &str) {
        if name.is_empty() {
            return;
        }
        if !self.out.is_empty() {
            self.out.push(' ');
        }
        self.out.push_str(name);
    }

    fn finish(self) -> String {
        self.out
    }
}
