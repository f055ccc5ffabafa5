//! modcop - Go module version policy library
//!
//! This library provides the core functionality for checking the modules
//! required by a go.mod file against a version policy:
//! - Rule file parsing (allow/deny lists and version ranges)
//! - go.mod `require` extraction
//! - Deprecation resolution

pub mod cli;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod orchestrator;
pub mod output;
pub mod parser;
pub mod resolver;
pub mod source;
