// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Casing policies used by the `*-case` rules.
//!
//! A string is "in" a case when converting it to that case leaves it
//! unchanged. Quoted and backticked segments are ignored, and inputs
//! whose converted form is empty or starts with a digit always match.

use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

lazy_static! {
    /// Quoted or backticked segments, excluded from case checks.
    static ref QUOTED_REGEX: Regex = Regex::new(r#"`[^`]*`|"[^"]*"|'[^']*'"#).unwrap();
}

/// A casing policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Case {
    Lower,
    Upper,
    Camel,
    Kebab,
    Pascal,
    Sentence,
    Snake,
    Start,
}

impl Case {
    /// Get the string representation of the case.
    pub fn as_str(&self) -> &'static str {
        match self {
            Case::Lower => "lower-case",
            Case::Upper => "upper-case",
            Case::Camel => "camel-case",
            Case::Kebab => "kebab-case",
            Case::Pascal => "pascal-case",
            Case::Sentence => "sentence-case",
            Case::Snake => "snake-case",
            Case::Start => "start-case",
        }
    }

    /// Convert `input` to this case.
    pub fn apply(&self, input: &str) -> String {
        match self {
            Case::Lower => input.to_lowercase(),
            Case::Upper => input.to_uppercase(),
            Case::Camel => camel(input),
            Case::Kebab => join_lower(input, "-"),
            Case::Pascal => upper_first(&camel(input)),
            Case::Sentence => upper_first(input),
            Case::Snake => join_lower(input, "_"),
            Case::Start => words(input)
                .iter()
                .map(|w| upper_first(w))
                .collect::<Vec<_>>()
                .join(" "),
        }
    }

    /// Whether `raw` is already in this case.
    pub fn matches(&self, raw: &str) -> bool {
        let stripped = QUOTED_REGEX.replace_all(raw, "");
        let input = stripped.trim();
        let transformed = self.apply(input);

        if transformed.is_empty() || transformed.starts_with(|c: char| c.is_ascii_digit()) {
            return true;
        }

        transformed == input
    }
}

impl std::str::FromStr for Case {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lower-case" | "lowercase" => Ok(Case::Lower),
            "upper-case" | "uppercase" => Ok(Case::Upper),
            "camel-case" => Ok(Case::Camel),
            "kebab-case" => Ok(Case::Kebab),
            "pascal-case" => Ok(Case::Pascal),
            "sentence-case" | "sentencecase" => Ok(Case::Sentence),
            "snake-case" => Ok(Case::Snake),
            "start-case" => Ok(Case::Start),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Split into words on non-alphanumerics and lower-to-upper boundaries.
fn words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for c in input.chars() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }

        if c.is_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }

        prev_lower = c.is_lowercase() || c.is_ascii_digit();
        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

fn upper_first(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn camel(input: &str) -> String {
    words(input)
        .iter()
        .enumerate()
        .map(|(i, w)| {
            let lower = w.to_lowercase();
            if i == 0 {
                lower
            } else {
                upper_first(&lower)
            }
        })
        .collect()
}

fn join_lower(input: &str, sep: &str) -> String {
    words(input)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(sep)
}
