#![forbid(unsafe_code)]
//! templet-html: string assembly helpers used by generated template code.
//!
//! - `escape`: HTML entity escaping.
//! - `class`: CSS class-list builder.
//! - `attrs`: attribute-list builder.
//! - `join`: pair a built string with the errors collected while building it.
//! - `text`: `Text`/`Raw` templates and JSON embedding.
//!
//! Builders that take typed inputs cannot fail. The `*_from_values` entry
//! points accept loosely-shaped JSON and report bad shapes as errors next to
//! the partial output.

pub mod attrs;
pub mod class;
pub mod error;
pub mod escape;
pub mod join;
pub mod text;

pub use attrs::{attribute_list, attribute_list_from_values, AttrValue, Attributes};
pub use class::{class_list, class_list_from_values, ClassInput};
pub use error::{HtmlError, Result};
pub use escape::{escape_html, escape_into};
pub use join::{join_errors, Built};
pub use text::{json_string, Raw, Text};
