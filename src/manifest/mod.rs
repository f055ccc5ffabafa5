//! Manifest parsing
//!
//! This module extracts the module requirements that the rule set is
//! checked against.

mod go_mod;

pub use go_mod::{parse_go_mod, parse_go_mod_str};

/// Default manifest location
pub const DEFAULT_MANIFEST_PATH: &str = "./go.mod";
