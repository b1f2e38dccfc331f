//! Rule dispatch command.
//!
//! Applies one named retention rule to each given object path and reports
//! per-path and aggregate version counters.

use std::collections::HashMap;

use console::style;
use serde::Serialize;

use crate::{
   Result, config,
   ccdb::{Ccdb, HttpCcdb},
   error::Error,
   rules::{self, Rule, RuleRequest, RuleResult},
};

#[derive(Serialize)]
struct PathCounters {
   path:      String,
   deleted:   u64,
   preserved: u64,
   updated:   u64,
}

#[derive(Serialize)]
struct RunJson {
   schema_version: u32,
   rule:           String,
   paths:          Vec<PathCounters>,
   total:          RuleResult,
}

pub async fn execute(
   rule_name: String,
   paths: Vec<String>,
   delay: i64,
   from_timestamp: i64,
   to_timestamp: i64,
   extra: Vec<String>,
   json: bool,
) -> Result<()> {
   let rule = rules::lookup(&rule_name)?;
   let extra_params = parse_extra_params(&extra)?;

   let cfg = config::get();
   config::validate(cfg)?;
   let ccdb = HttpCcdb::new(cfg)?;

   run_rule(&ccdb, rule, paths, delay, from_timestamp, to_timestamp, extra_params, json).await
}

async fn run_rule(
   ccdb: &dyn Ccdb,
   rule: &dyn Rule,
   paths: Vec<String>,
   delay: i64,
   from_timestamp: i64,
   to_timestamp: i64,
   extra_params: HashMap<String, String>,
   json: bool,
) -> Result<()> {
   let mut counters = Vec::new();
   let mut total = RuleResult::default();

   for path in paths {
      let request = RuleRequest {
         object_path: path.clone(),
         delay,
         from_timestamp,
         to_timestamp,
         extra_params: extra_params.clone(),
      };
      let result = rule.process(ccdb, &request).await?;
      total.merge(result);
      counters.push(PathCounters {
         path,
         deleted: result.deleted,
         preserved: result.preserved,
         updated: result.updated,
      });
   }

   if json {
      let payload = RunJson {
         schema_version: 1,
         rule: rule.name().to_string(),
         paths: counters,
         total,
      };
      println!("{}", serde_json::to_string_pretty(&payload)?);
      return Ok(());
   }

   println!("{}", style(format!("Rule '{}'", rule.name())).bold());
   for entry in &counters {
      println!(
         "  {} deleted {} preserved {} updated {}",
         style(&entry.path).bold(),
         entry.deleted,
         style(entry.preserved).green(),
         entry.updated
      );
   }
   println!(
      "{}",
      style(format!(
         "Total: deleted {} preserved {} updated {}",
         total.deleted, total.preserved, total.updated
      ))
      .green()
   );

   Ok(())
}

fn parse_extra_params(entries: &[String]) -> Result<HashMap<String, String>> {
   let mut params = HashMap::new();
   for raw in entries {
      let Some((key, value)) = raw.split_once('=') else {
         return Err(Error::Server {
            op:     "run",
            reason: format!("invalid extra parameter '{raw}', expected key=value"),
         });
      };
      params.insert(key.trim().to_string(), value.trim().to_string());
   }
   Ok(params)
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn extra_params_parse_key_value_pairs() {
      let params =
         parse_extra_params(&["a=1".to_string(), "interval = 90".to_string()]).expect("parse");
      assert_eq!(params.get("a").map(String::as_str), Some("1"));
      assert_eq!(params.get("interval").map(String::as_str), Some("90"));
   }

   #[test]
   fn malformed_extra_params_are_rejected() {
      assert!(parse_extra_params(&["no-separator".to_string()]).is_err());
   }
}
