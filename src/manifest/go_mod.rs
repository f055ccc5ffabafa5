//! go.mod extractor
//!
//! Only single-line `require <module> <version>` statements are recognized.
//! Everything else, including `require (` blocks and versions with pre-release
//! or `+incompatible` suffixes, is skipped. So are lines that are not valid
//! UTF-8, such as comments written in a legacy encoding.

use crate::domain::{Module, Version};
use crate::error::PolicyError;
use std::io::BufRead;
use tracing::debug;

/// Extracts required modules from go.mod text, preserving line order
pub fn parse_go_mod<R: BufRead>(reader: R) -> Result<Vec<Module>, PolicyError> {
    let mut modules = Vec::new();

    for (idx, chunk) in reader.split(b'\n').enumerate() {
        let bytes = chunk?;
        let Ok(line) = std::str::from_utf8(&bytes) else {
            debug!(line = idx + 1, "skipping non-UTF-8 line");
            continue;
        };
        let tokens: Vec<&str> = line.split_whitespace().collect();

        if tokens.len() < 3 || tokens[0] != "require" {
            continue;
        }

        match Version::parse(tokens[2]) {
            Ok(version) => modules.push(Module::new(tokens[1], version)),
            Err(e) => debug!(line = idx + 1, error = %e, "skipping require line"),
        }
    }

    debug!(modules = modules.len(), "extracted go.mod requirements");
    Ok(modules)
}

/// Extracts required modules from go.mod text held in memory
pub fn parse_go_mod_str(content: &str) -> Result<Vec<Module>, PolicyError> {
    parse_go_mod(content.as_bytes())
}
