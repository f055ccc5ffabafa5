//! Core domain models for modcop
//!
//! This module contains the fundamental types used throughout the application:
//! - Versions and their total order
//! - Version ranges with optional, independently inclusive bounds
//! - Per-module rules and the immutable rule set
//! - Manifest module entries

mod module;
mod range;
mod rule;
mod version;

pub use module::Module;
pub use range::{Range, RangeLimit};
pub use rule::{Rule, RuleSet, RuleSide};
pub use version::Version;
