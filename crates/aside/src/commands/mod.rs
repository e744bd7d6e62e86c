//! Command implementations for the aside CLI
//!
//! Each command module handles the CLI interface and delegates to
//! aside-core for actual implementation.

pub mod ast;
pub mod files;
pub mod render;
