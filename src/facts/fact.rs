//! Fact triples and term decoding

use serde::{Deserialize, Serialize};

/// The object position of a fact: an opaque identifier or an encoded literal.
///
/// Literals keep the encoded surface form they were parsed with, e.g.
/// `"Broelkaai"@nl`, `"177"^^<http://www.w3.org/2001/XMLSchema#integer>`,
/// or a bare quoted string. Decoding strips the quotes and any language or
/// datatype annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Term {
    /// An identifier (IRI or blank node label)
    Named(String),
    /// An encoded literal value
    Literal(String),
}

impl Term {
    pub fn named(value: impl Into<String>) -> Self {
        Self::Named(value.into())
    }

    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal(value.into())
    }

    /// The raw encoded form, regardless of term kind
    pub fn as_str(&self) -> &str {
        match self {
            Self::Named(s) | Self::Literal(s) => s,
        }
    }

    /// Decode a literal term to its string value.
    ///
    /// Returns `None` when the term is not a literal encoding; identifier
    /// terms never decode.
    pub fn decode_string(&self) -> Option<String> {
        let Self::Literal(encoded) = self else {
            return None;
        };
        Some(strip_annotations(encoded).to_string())
    }

    /// Decode a literal term to a non-negative integer.
    ///
    /// Returns `None` when the term is not a literal encoding or its value
    /// does not parse as an integer.
    pub fn decode_u32(&self) -> Option<u32> {
        self.decode_string()?.trim().parse().ok()
    }
}

/// Strip quotes and any trailing `^^<datatype>` or `@lang` annotation from an
/// encoded literal. Unquoted input is returned as-is.
fn strip_annotations(encoded: &str) -> &str {
    let Some(rest) = encoded.strip_prefix('"') else {
        return encoded;
    };
    // Find the closing quote; the annotation follows it.
    match rest.rfind('"') {
        Some(end) => &rest[..end],
        None => rest,
    }
}

/// An immutable subject-predicate-object statement from a metadata or data
/// graph. Produced by the fetch layer, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    pub subject: String,
    pub predicate: String,
    pub object: Term,
}

impl Fact {
    pub fn new(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: Term,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object,
        }
    }
}
