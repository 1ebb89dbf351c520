//! Mapping from Rust field type spellings to Swagger primitive types.
//!
//! The set of representable field types is small and closed. Everything the three
//! lookups below know comes from the single [`SimpleType::from_spelling`] table, so
//! supporting another spelling is a one-line change there.

use std::borrow::Cow;

/// A field type with a direct Swagger primitive representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimpleType {
    Integer,
    Number,
    Boolean,
    String,
    DateTime,
}

impl SimpleType {
    /// Looks up a printed field type such as `i64` or `chrono::DateTime<Utc>`.
    pub fn from_spelling(spelling: &str) -> Option<Self> {
        match spelling {
            "i8" | "i16" | "i32" | "i64" | "i128" | "isize" | "u8" | "u16" | "u32" | "u64"
            | "u128" | "usize" => Some(SimpleType::Integer),
            "f32" | "f64" => Some(SimpleType::Number),
            "bool" => Some(SimpleType::Boolean),
            "String" | "str" | "&str" | "char" => Some(SimpleType::String),
            s if is_borrowed_str(s) => Some(SimpleType::String),
            "chrono::DateTime<Utc>"
            | "chrono::DateTime<chrono::Utc>"
            | "DateTime<Utc>"
            | "DateTime<chrono::Utc>"
            | "chrono::NaiveDateTime"
            | "NaiveDateTime" => Some(SimpleType::DateTime),
            _ => None,
        }
    }

    /// The Swagger `type` keyword.
    pub fn swagger_type(self) -> &'static str {
        match self {
            SimpleType::Integer => "integer",
            SimpleType::Number => "number",
            SimpleType::Boolean => "boolean",
            SimpleType::String | SimpleType::DateTime => "string",
        }
    }

    /// The Swagger `format` keyword, if the type carries one.
    pub fn swagger_format(self) -> Option<&'static str> {
        match self {
            SimpleType::DateTime => Some("date-time"),
            _ => None,
        }
    }
}

/// `&'static str`, `&'a str` and other lifetime-annotated string slices.
fn is_borrowed_str(spelling: &str) -> bool {
    spelling
        .strip_prefix("&'")
        .and_then(|rest| rest.split_once(' '))
        .is_some_and(|(lifetime, ty)| !lifetime.is_empty() && ty == "str")
}

pub fn is_simple_type(spelling: &str) -> bool {
    SimpleType::from_spelling(spelling).is_some()
}

/// Swagger type for a spelling; unknown spellings are returned unchanged.
pub fn swagger_type(spelling: &str) -> Cow<'_, str> {
    match SimpleType::from_spelling(spelling) {
        Some(simple) => Cow::Borrowed(simple.swagger_type()),
        None => Cow::Borrowed(spelling),
    }
}

/// Swagger format for a spelling. Known spellings without a format give `None`;
/// unknown spellings are returned unchanged.
pub fn swagger_format(spelling: &str) -> Option<Cow<'_, str>> {
    match SimpleType::from_spelling(spelling) {
        Some(simple) => simple.swagger_format().map(Cow::Borrowed),
        None => Some(Cow::Borrowed(spelling)),
    }
}
