//! HTML attribute-list builder.

use std::collections::HashMap;

use serde_json::Value;

use crate::class::invalid;
use crate::escape::escape_into;
use crate::join::{join_errors, Built};

/// Value side of one attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// Presence flag: `true` emits the bare name, `false` emits nothing.
    Bool(bool),
    Str(String),
}

impl From<bool> for AttrValue {
    fn from(v: bool) -> Self {
        AttrValue::Bool(v)
    }
}

impl From<&str> for AttrValue {
    fn from(v: &str) -> Self {
        AttrValue::Str(v.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(v: String) -> Self {
        AttrValue::Str(v)
    }
}

/// One group of attributes. Output order within a group is unspecified.
pub type Attributes = HashMap<String, AttrValue>;

/// Render attribute groups as ` name` / ` name="value"` fragments.
///
/// Names and values are escaped. Groups are emitted in the order given.
pub fn attribute_list(groups: &[Attributes]) -> String {
    let mut out = String::new();
    for group in groups {
        for (name, value) in group {
            write_attr(&mut out, name, value);
        }
    }
    out
}

/// Loosely-typed variant of `attribute_list`.
///
/// Each value must be an object whose members are booleans or strings; other
/// shapes are reported as `InvalidInput` while valid members are still
/// emitted.
pub fn attribute_list_from_values(groups: &[Value]) -> Built {
    let mut out = String::new();
    let mut errors = Vec::new();
    for (index, group) in groups.iter().enumerate() {
        let Value::Object(members) = group else {
            errors.push(invalid(index, "object", group));
            continue;
        };
        for (name, value) in members {
            match value {
                Value::Bool(true) => write_flag(&mut out, name),
                Value::Bool(false) => {}
                Value::String(s) => write_pair(&mut out, name, s),
                other => errors.push(invalid(index, "boolean or string member", other)),
            }
        }
    }
    join_errors(out, errors)
}

fn write_attr(out: &mut String, name: &str, value: &AttrValue) {
    match value {
        AttrValue::Bool(false) => {}
        AttrValue::Bool(true) => write_flag(out, name),
        AttrValue::Str(v) => write_pair(out, name, v),
    }
}

fn write_flag(out: &mut String, name: &str) {
    out.push(' ');
    escape_into(out, name);
}

fn write_pair(out: &mut String, name: &str, value: &str) {
    write_flag(out, name);
    out.push_str("=\"");
    escape_into(out, value);
    out.push('"');
}
