//! Stability checks for the public payload shapes the CLI serializes.

use std::collections::HashMap;

use repoclean::{
   ccdb::ObjectVersion,
   rules::{self, Rule, RuleResult},
};

#[test]
fn rule_result_serializes_the_three_counters() {
   let result = RuleResult { deleted: 1, preserved: 2, updated: 3 };
   let value = serde_json::to_value(result).expect("serialize");
   assert_eq!(value, serde_json::json!({"deleted": 1, "preserved": 2, "updated": 3}));
}

#[test]
fn object_version_serializes_with_stable_keys() {
   let version = ObjectVersion {
      path:       "/a/b".to_string(),
      id:         Some("v1".to_string()),
      created_at: 1_600_000_000_000,
      valid_from: 1_600_000_000_000,
      valid_to:   1_600_000_060_000,
      metadata:   HashMap::from([("RunNumber".to_string(), "505673".to_string())]),
   };
   let value = serde_json::to_value(&version).expect("serialize");
   for key in ["path", "id", "created_at", "valid_from", "valid_to", "metadata"] {
      assert!(value.get(key).is_some(), "missing key {key}");
   }
}

#[test]
fn registry_exposes_named_described_rules() {
   let all = rules::all();
   assert!(!all.is_empty());
   for rule in all {
      assert!(!rule.name().is_empty());
      assert!(!rule.description().is_empty());
   }
   assert!(all.iter().any(|rule| rule.name() == "preserve"));
}
