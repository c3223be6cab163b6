//! Raw style declaration parsing.
//!
//! A style entry is one of:
//! - `name: value`
//! - `pseudo:name: value` (prefixes may be chained: `md:hover:color: red`)
//! - a bare token (`flex`, `card-title`), optionally prefixed

use crate::error::StyleError;
use atelier_model::split_declaration;
use atelier_model::value::unquote;
use std::fmt;

/// Pseudo-class and breakpoint prefixes recognized in front of a declaration
pub const PSEUDO_PREFIXES: &[&str] = &[
    "hover",
    "focus",
    "focus-within",
    "focus-visible",
    "active",
    "visited",
    "disabled",
    "first",
    "last",
    "odd",
    "even",
    "group-hover",
    "dark",
    "sm",
    "md",
    "lg",
    "xl",
    "2xl",
];

pub fn is_pseudo_prefix(name: &str) -> bool {
    PSEUDO_PREFIXES.contains(&name)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Prefixes in source order
    pub pseudos: Vec<String>,
    pub name: String,
    /// Empty for bare tokens
    pub value: String,
}

impl Declaration {
    pub fn parse(raw: &str) -> Self {
        let mut rest = raw.trim();
        let mut pseudos = Vec::new();

        while let Some((head, tail)) = rest.split_once(':') {
            let head = head.trim();
            if !is_pseudo_prefix(head) {
                break;
            }
            pseudos.push(head.to_string());
            rest = tail.trim_start();
        }

        let (name, value) = split_declaration(rest);
        Self {
            pseudos,
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    pub fn is_token(&self) -> bool {
        self.value.is_empty()
    }

    /// Key used for named-style lookups: the bare name for tokens, otherwise
    /// `name: value`
    pub fn key(&self) -> String {
        if self.is_token() {
            self.name.clone()
        } else {
            format!("{}: {}", self.name, self.value)
        }
    }

    pub fn with_value(&self, value: &str) -> Self {
        Self {
            pseudos: self.pseudos.clone(),
            name: self.name.clone(),
            value: value.to_string(),
        }
    }

    /// `hover:md:` style prefix, empty when there are no pseudos
    pub fn variant_prefix(&self) -> String {
        self.pseudos.iter().map(|p| format!("{}:", p)).collect()
    }

    pub fn apply_variants(&self, class: &str) -> String {
        format!("{}{}", self.variant_prefix(), class)
    }

    pub fn unsupported(&self) -> StyleError {
        StyleError::unsupported(&self.name, &self.value)
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.variant_prefix(), self.name)?;
        if !self.is_token() {
            write!(f, ": {}", self.value)?;
        }
        Ok(())
    }
}

/// `condition ? left [: right]` value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conditional {
    /// Expression with any surrounding braces removed
    pub condition: String,
    pub left: String,
    /// Empty when the value has no else branch
    pub right: String,
}

impl Conditional {
    pub fn parse(value: &str) -> Option<Self> {
        let question = find_top_level(value, '?')?;
        let condition = value[..question].trim();
        let branches = &value[question + 1..];

        let (left, right) = match find_top_level(branches, ':') {
            Some(colon) => (branches[..colon].trim(), branches[colon + 1..].trim()),
            None => (branches.trim(), ""),
        };

        let condition = condition
            .strip_prefix('{')
            .and_then(|c| c.strip_suffix('}'))
            .unwrap_or(condition)
            .trim();

        if condition.is_empty() || left.is_empty() {
            return None;
        }

        Some(Self {
            condition: condition.to_string(),
            left: unquote(left).unwrap_or(left).to_string(),
            right: unquote(right).unwrap_or(right).to_string(),
        })
    }
}

/// Byte offset of `needle` outside brackets and quotes
fn find_top_level(source: &str, needle: char) -> Option<usize> {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;

    for (index, ch) in source.char_indices() {
        match quote {
            Some(q) if ch == q => quote = None,
            Some(_) => {}
            None => match ch {
                '\'' | '"' | '`' => quote = Some(ch),
                '{' | '(' | '[' => depth += 1,
                '}' | ')' | ']' => depth = depth.saturating_sub(1),
                c if c == needle && depth == 0 => return Some(index),
                _ => {}
            },
        }
    }

    None
}
