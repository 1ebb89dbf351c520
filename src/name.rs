//! Identifier normalization used to build resource paths, tags and schema names.
//!
//! Every variant is computed from the original identifier on demand; a [`Name`] never
//! caches or rewrites its derived forms.

use heck::{ToSnakeCase, ToUpperCamelCase};
use std::fmt;

/// Words whose plural and singular forms are identical.
const UNCOUNTABLE: &[&str] = &[
    "data",
    "equipment",
    "fish",
    "information",
    "media",
    "metadata",
    "money",
    "news",
    "series",
    "sheep",
    "species",
];

/// Irregular (singular, plural) pairs.
const IRREGULAR: &[(&str, &str)] = &[
    ("person", "people"),
    ("man", "men"),
    ("woman", "women"),
    ("child", "children"),
    ("mouse", "mice"),
    ("goose", "geese"),
    ("tooth", "teeth"),
    ("foot", "feet"),
    ("ox", "oxen"),
    ("status", "statuses"),
    ("bus", "buses"),
    ("alias", "aliases"),
    ("lens", "lenses"),
    ("movie", "movies"),
];

/// Stems whose `-sis` singular pluralizes to `-ses` (`analysis` / `analyses`).
const SIS_STEMS: &[&str] = &["analy", "cri", "diagno", "parenthe", "progno", "synop", "the"];

/// A normalized identifier taken from the scanned source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Snake-cased variable name. A trailing `ID` is treated as the word `Id`, so
    /// `UserID` becomes `user_id` rather than `user_i_d`.
    pub fn var_name_underscore(&self) -> String {
        self.0.replace("ID", "Id").to_snake_case()
    }

    pub fn lower(&self) -> String {
        self.0.to_lowercase()
    }

    pub fn camel(&self) -> String {
        self.0.to_upper_camel_case()
    }

    pub fn camel_singular(&self) -> String {
        singularize(&self.0).to_upper_camel_case()
    }

    pub fn plural_camel(&self) -> String {
        pluralize(&self.0).to_upper_camel_case()
    }

    /// Plural snake-cased form, used for URL path segments and list tags.
    pub fn plural_under(&self) -> String {
        pluralize(&self.0).to_snake_case()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Name {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Name {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Pluralizes the last word of a compound identifier (`UserRole` -> `UserRoles`).
pub fn pluralize(word: &str) -> String {
    let (head, last) = split_last_word(word);
    format!("{}{}", head, pluralize_word(last))
}

/// Singularizes the last word of a compound identifier (`user_roles` -> `user_role`).
pub fn singularize(word: &str) -> String {
    let (head, last) = split_last_word(word);
    format!("{}{}", head, singularize_word(last))
}

fn pluralize_word(word: &str) -> String {
    let lower = word.to_lowercase();
    if lower.is_empty() || UNCOUNTABLE.contains(&lower.as_str()) {
        return word.to_string();
    }
    if let Some((_, plural)) = IRREGULAR.iter().find(|(singular, _)| *singular == lower) {
        return match_case(word, plural);
    }
    if IRREGULAR.iter().any(|(_, plural)| *plural == lower) {
        return word.to_string();
    }

    if lower.ends_with("is") {
        format!("{}es", &word[..word.len() - 2])
    } else if lower.ends_with('s')
        || lower.ends_with('x')
        || lower.ends_with('z')
        || lower.ends_with("ch")
        || lower.ends_with("sh")
    {
        if is_regular_plural(&lower) {
            word.to_string()
        } else {
            format!("{}es", word)
        }
    } else if ends_with_consonant_y(&lower) {
        format!("{}ies", &word[..word.len() - 1])
    } else {
        format!("{}s", word)
    }
}

fn singularize_word(word: &str) -> String {
    let lower = word.to_lowercase();
    if lower.is_empty() || UNCOUNTABLE.contains(&lower.as_str()) {
        return word.to_string();
    }
    if let Some((singular, _)) = IRREGULAR.iter().find(|(_, plural)| *plural == lower) {
        return match_case(word, singular);
    }
    if IRREGULAR.iter().any(|(singular, _)| *singular == lower) {
        return word.to_string();
    }

    if SIS_STEMS
        .iter()
        .any(|stem| lower.ends_with(&format!("{}ses", stem)))
    {
        format!("{}is", &word[..word.len() - 2])
    } else if lower.ends_with("ies") && lower.len() > 3 {
        format!("{}y", &word[..word.len() - 3])
    } else if ["sses", "xes", "zes", "ches", "shes"]
        .iter()
        .any(|suffix| lower.ends_with(suffix))
    {
        word[..word.len() - 2].to_string()
    } else if is_regular_plural(&lower) {
        word[..word.len() - 1].to_string()
    } else {
        word.to_string()
    }
}

/// `pets`, `roles`: a trailing `s` that is not part of `ss`, `us` or `is`.
fn is_regular_plural(lower: &str) -> bool {
    lower.len() > 1
        && lower.ends_with('s')
        && !lower.ends_with("ss")
        && !lower.ends_with("us")
        && !lower.ends_with("is")
}

fn ends_with_consonant_y(lower: &str) -> bool {
    let mut chars = lower.chars().rev();
    match (chars.next(), chars.next()) {
        (Some('y'), Some(prev)) => !"aeiou".contains(prev),
        _ => false,
    }
}

/// Copies the capitalization of the first letter of `original` onto `replacement`.
fn match_case(original: &str, replacement: &str) -> String {
    let upper = original.chars().next().is_some_and(char::is_uppercase);
    let all_upper = original.len() > 1 && original.chars().all(|c| !c.is_lowercase());
    if all_upper {
        replacement.to_uppercase()
    } else if upper {
        let mut chars = replacement.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    } else {
        replacement.to_string()
    }
}

/// Splits an identifier before its last word, honouring both camel humps and
/// underscores: `HTTPRequest` -> (`HTTP`, `Request`), `user_role` -> (`user_`, `role`).
fn split_last_word(word: &str) -> (&str, &str) {
    let chars: Vec<(usize, char)> = word.char_indices().collect();
    let mut start = 0;

    for (pos, &(idx, ch)) in chars.iter().enumerate() {
        if ch == '_' {
            start = idx + ch.len_utf8();
            continue;
        }
        if pos == 0 || !ch.is_uppercase() {
            continue;
        }
        let prev = chars[pos - 1].1;
        let next_is_lower = chars
            .get(pos + 1)
            .is_some_and(|&(_, next)| next.is_lowercase());
        if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower) {
            start = idx;
        }
    }

    word.split_at(start)
}
