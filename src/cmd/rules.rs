//! Rule listing command.

use console::style;
use serde::Serialize;

use crate::{
   Result,
   rules::{self, Rule},
};

#[derive(Serialize)]
struct RuleInfo {
   name:        String,
   description: String,
}

#[derive(Serialize)]
struct RulesJson {
   schema_version: u32,
   rules:          Vec<RuleInfo>,
}

pub fn execute(json: bool) -> Result<()> {
   let infos: Vec<RuleInfo> = rules::all()
      .iter()
      .map(|rule| RuleInfo {
         name:        rule.name().to_string(),
         description: rule.description().to_string(),
      })
      .collect();

   if json {
      let payload = RulesJson { schema_version: 1, rules: infos };
      println!("{}", serde_json::to_string_pretty(&payload)?);
      return Ok(());
   }

   println!("{}", style("Registered rules").bold());
   for info in &infos {
      println!("  {} {}", style(&info.name).bold(), style(&info.description).dim());
   }

   Ok(())
}
