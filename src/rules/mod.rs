//! Retention rule capability and dispatch.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{
   ccdb::Ccdb,
   error::{Error, Result},
};

pub mod preserve;

pub use preserve::Preserve;

/// Outcome of one rule invocation against one object path.
///
/// `deleted + preserved` equals the number of versions the rule considered.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuleResult {
   pub deleted:   u64,
   pub preserved: u64,
   pub updated:   u64,
}

impl RuleResult {
   /// Accumulates another result for aggregate reporting across paths.
   pub fn merge(&mut self, other: Self) {
      self.deleted += other.deleted;
      self.preserved += other.preserved;
      self.updated += other.updated;
   }
}

/// Structured configuration argument shared by every rule variant.
///
/// Each variant only reads the subset relevant to its policy and ignores the
/// rest; the shape stays uniform so the command layer can dispatch any rule
/// by name with the same inputs.
#[derive(Debug, Clone, Default)]
pub struct RuleRequest {
   /// Path to the object, or pattern, to which the rule applies.
   pub object_path: String,
   /// Grace period in minutes during which a new version is never deleted.
   pub delay: i64,
   /// Only versions created after this timestamp (epoch ms) are considered.
   pub from_timestamp: i64,
   /// Only versions created before this timestamp (epoch ms) are considered.
   pub to_timestamp: i64,
   /// Extra rule-specific parameters.
   pub extra_params: HashMap<String, String>,
}

/// A pluggable retention policy deciding which versions of an object to
/// delete, preserve, or mark updated.
#[async_trait::async_trait]
pub trait Rule: Send + Sync + std::fmt::Debug {
   fn name(&self) -> &'static str;

   fn description(&self) -> &'static str;

   /// Processes the rule against one object path and reports counters.
   async fn process(&self, ccdb: &dyn Ccdb, request: &RuleRequest) -> Result<RuleResult>;
}

const BUILTIN_RULES: &[&dyn Rule] = &[&Preserve];

/// All registered rules, in registration order.
pub fn all() -> &'static [&'static dyn Rule] {
   BUILTIN_RULES
}

/// Resolves a rule by name.
pub fn lookup(name: &str) -> Result<&'static dyn Rule> {
   BUILTIN_RULES
      .iter()
      .copied()
      .find(|rule| rule.name() == name)
      .ok_or_else(|| Error::UnknownRule {
         name:  name.to_string(),
         known: BUILTIN_RULES
            .iter()
            .map(|rule| rule.name())
            .collect::<Vec<_>>()
            .join(", "),
      })
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn lookup_finds_preserve() {
      let rule = lookup("preserve").expect("preserve registered");
      assert_eq!(rule.name(), "preserve");
   }

   #[test]
   fn lookup_rejects_unknown_names() {
      let err = lookup("delete_everything").expect_err("must not resolve");
      match err {
         Error::UnknownRule { name, known } => {
            assert_eq!(name, "delete_everything");
            assert!(known.contains("preserve"));
         },
         other => panic!("unexpected error: {other}"),
      }
   }

   #[test]
   fn merge_sums_fieldwise() {
      let mut total = RuleResult::default();
      total.merge(RuleResult { deleted: 1, preserved: 2, updated: 3 });
      total.merge(RuleResult { deleted: 10, preserved: 20, updated: 30 });
      assert_eq!(total, RuleResult { deleted: 11, preserved: 22, updated: 33 });
   }
}
