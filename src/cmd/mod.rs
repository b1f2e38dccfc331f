//! CLI command implementations for repoclean.
//!
//! This module contains all subcommand implementations for the repoclean CLI
//! tool. Each module corresponds to a specific command available to users.

pub mod health;
pub mod rules;
pub mod run;
pub mod versions;
