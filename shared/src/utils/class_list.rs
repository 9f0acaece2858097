//! Style class lists with override semantics
//!
//! Components describe their styling as whitespace-separated tokens such as
//! `border pr-10 w-full`. When a caller passes extra tokens they are merged
//! over the component's base list: a later token replaces any earlier token
//! from the same conflict group (`pr-4` replaces `pr-10`), and exact
//! duplicates collapse.

use std::fmt;

/// Suffixes that mark a token as "group-value" rather than a standalone flag
const SCALE_KEYWORDS: &[&str] = &[
    "none", "auto", "full", "px", "xs", "sm", "md", "lg", "xl", "2xl", "3xl",
];

/// An ordered, conflict-free list of style tokens
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a whitespace-separated token string
    pub fn parse(classes: &str) -> Self {
        let mut list = Self::new();
        for token in classes.split_whitespace() {
            list.push(token);
        }
        list
    }

    /// Add a token, evicting any earlier token from the same group
    pub fn push(&mut self, token: &str) {
        let token = token.trim();
        if token.is_empty() {
            return;
        }

        let group = conflict_group(token);
        self.tokens.retain(|existing| conflict_group(existing) != group);
        self.tokens.push(token.to_string());
    }

    /// Merge `overrides` on top of this list
    pub fn merge(mut self, overrides: &ClassList) -> Self {
        for token in &overrides.tokens {
            self.push(token);
        }
        self
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// Find the value of a `group-value` token, e.g. `value_of("pr")` for `pr-10`
    pub fn value_of(&self, group: &str) -> Option<&str> {
        self.tokens.iter().find_map(|token| match token.rsplit_once('-') {
            Some((g, value)) if g == group && is_scale_value(value) => Some(value),
            _ => None,
        })
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens.join(" "))
    }
}

/// Merge a base class string with caller overrides; the caller wins
pub fn merge_classes(base: &str, overrides: &str) -> ClassList {
    ClassList::parse(base).merge(&ClassList::parse(overrides))
}

/// Plain non-negative decimals (`4`, `0.5`) or a scale keyword
fn is_scale_value(value: &str) -> bool {
    if SCALE_KEYWORDS.contains(&value) {
        return true;
    }

    value.chars().all(|c| c.is_ascii_digit() || c == '.')
        && value.parse::<f32>().is_ok_and(f32::is_finite)
}

fn conflict_group(token: &str) -> &str {
    match token.rsplit_once('-') {
        Some((group, value)) if is_scale_value(value) => group,
        _ => token,
    }
}
