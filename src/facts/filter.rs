//! Pattern-based fact filtering
//!
//! A pattern constrains zero or more of subject, predicate, and object;
//! filtering returns the facts matching every specified constraint,
//! preserving input order. Pure, no failure mode beyond an empty result.

use super::{Fact, Term};

/// A partial match pattern over fact positions.
///
/// Unset positions match anything.
#[derive(Debug, Clone, Default)]
pub struct FactPattern {
    subject: Option<String>,
    predicate: Option<String>,
    object: Option<Term>,
}

impl FactPattern {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn with_predicate(mut self, predicate: impl Into<String>) -> Self {
        self.predicate = Some(predicate.into());
        self
    }

    pub fn with_object(mut self, object: Term) -> Self {
        self.object = Some(object);
        self
    }

    /// Whether a fact satisfies every specified constraint
    pub fn matches(&self, fact: &Fact) -> bool {
        self.subject
            .as_ref()
            .map_or(true, |s| *s == fact.subject)
            && self
                .predicate
                .as_ref()
                .map_or(true, |p| *p == fact.predicate)
            && self.object.as_ref().map_or(true, |o| *o == fact.object)
    }
}

/// Filter a fact set down to the facts matching a pattern, in input order.
pub fn filter_facts<'a>(pattern: &FactPattern, facts: &'a [Fact]) -> Vec<&'a Fact> {
    facts.iter().filter(|f| pattern.matches(f)).collect()
}
