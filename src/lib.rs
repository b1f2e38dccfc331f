//! Retention-rule cleanup tool for CCDB object repositories.
//!
//! A CCDB (Conditions/Calibration Database) stores timestamped object
//! versions under slash-separated paths. repoclean applies named retention
//! rules to those paths and reports how many versions each run deleted,
//! preserved, and updated.

pub mod ccdb;
pub mod cmd;
pub mod config;
pub mod error;
pub mod rules;

pub use error::{Error, Result};
