//! Rule text parsing
//!
//! This module provides:
//! - Parsing of single rule expressions into directives
//! - Accumulation of directives into an immutable rule set

mod rules;

pub use rules::{parse_rules, parse_rules_str, Directive, DirectiveKind, RuleSetBuilder};
