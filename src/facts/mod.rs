//! Core fact data structures
//!
//! Defines the subject-predicate-object Fact triple, the Term object
//! position (identifier or encoded literal), and pattern-based filtering.

mod fact;
mod filter;

pub use fact::{Fact, Term};
pub use filter::{filter_facts, FactPattern};
