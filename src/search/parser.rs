//! Filter query parser for the search command.
//!
//! Parses user-provided filter strings into [`SearchFilters`].
//!
//! # Syntax
//!
//! ```text
//! query    := item*
//! item     := field:value | field:"quoted value" | bare-word
//! field    := term | category | location (case-insensitive)
//! ```
//!
//! # Semantics
//!
//! - Bare words and `term:` values accumulate into the free-text term,
//!   joined with single spaces.
//! - `category:` may repeat; values merge into the category set. Duplicate
//!   values are kept once.
//! - `location:` takes the last value supplied.
//! - All criteria combine with AND at evaluation time (see
//!   [`filter_candidates`](super::filter_candidates)).
//!
//! # Validation
//!
//! - Unknown field names are rejected.
//! - Empty values (`location:`) are rejected.
//! - `category` values must name one of the fixed categories
//!   (case-insensitive).

use anyhow::{Result, anyhow, bail};

use super::criteria::SearchFilters;
use crate::models::SkillCategory;

/// Parse a filter query string into search criteria.
pub fn parse_filter_query(input: &str) -> Result<SearchFilters> {
    let mut filters = SearchFilters::new();
    let mut term_words: Vec<String> = Vec::new();

    for token in tokenize(input)? {
        match token.split_once(':') {
            Some((field, value)) => {
                let value = unquote(value);
                if value.is_empty() {
                    bail!("empty value for field '{}'", field);
                }
                match field.to_lowercase().as_str() {
                    "term" => term_words.push(value.to_string()),
                    "category" => {
                        let category = SkillCategory::parse(value).ok_or_else(|| {
                            anyhow!(
                                "unknown category '{}', expected one of: {}",
                                value,
                                category_names().join(", ")
                            )
                        })?;
                        if !filters.categories.contains(&category) {
                            filters.categories.push(category);
                        }
                    }
                    "location" => filters.location = value.to_string(),
                    other => bail!("unknown filter field '{}'", other),
                }
            }
            None => term_words.push(unquote(&token).to_string()),
        }
    }

    filters.term = term_words.join(" ");
    Ok(filters)
}

/// Split on whitespace, keeping double-quoted spans together.
fn tokenize(input: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in input.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                current.push(ch);
            }
            c if c.is_whitespace() && !in_quotes => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }
    if in_quotes {
        bail!("unclosed quote in filter query");
    }
    if !current.is_empty() {
        tokens.push(current);
    }

    Ok(tokens)
}

/// Strip one pair of surrounding double quotes, if present.
fn unquote(value: &str) -> &str {
    value.strip_prefix('"').and_then(|v| v.strip_suffix('"')).unwrap_or(value)
}

fn category_names() -> Vec<&'static str> {
    SkillCategory::ALL.iter().map(|c| c.as_str()).collect()
}
