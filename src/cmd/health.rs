//! Health check command.
//!
//! Reports on configuration and CCDB server health using structured checks.

use console::style;
use serde::Serialize;

use crate::{
   Result, config,
   ccdb::{Ccdb, HttpCcdb},
   error::Error,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Severity {
   Ok,
   Warn,
   Fail,
}

impl Severity {
   fn as_str(self) -> &'static str {
      match self {
         Severity::Ok => "ok",
         Severity::Warn => "warn",
         Severity::Fail => "fail",
      }
   }
}

#[derive(Serialize)]
struct HealthCheck {
   code:     String,
   severity: String,
   message:  String,
}

#[derive(Serialize)]
struct HealthJson {
   schema_version: u32,
   ccdb_url:       String,
   ok:             bool,
   checks:         Vec<HealthCheck>,
}

pub async fn execute(json: bool) -> Result<()> {
   let payload = collect_health_payload().await;
   let ok = payload.ok;

   if json {
      println!("{}", serde_json::to_string_pretty(&payload)?);
   } else {
      println!("{}", style("repoclean Health").bold());
      for check in &payload.checks {
         let symbol = match check.severity.as_str() {
            "ok" => style("✓").green(),
            "warn" => style("○").yellow(),
            _ => style("✗").red(),
         };
         println!("{} {} - {}", symbol, check.code, check.message);
      }

      if ok {
         println!("\n{}", style("✓ All health checks passed.").green().bold());
      } else {
         println!("\n{}", style("✗ Some health checks failed.").red().bold());
      }
   }

   if ok {
      Ok(())
   } else {
      // Output above is the report; only the exit code is left to signal.
      Err(Error::Reported { message: "health checks failed".to_string(), exit_code: 2 })
   }
}

async fn collect_health_payload() -> HealthJson {
   let cfg = config::get();
   let mut checks = Vec::new();

   let config_path = config::config_file_path();
   if config_path.exists() {
      checks.push(check(
         "config.file",
         Severity::Ok,
         format!("{}", config_path.display()),
      ));
   } else {
      checks.push(check(
         "config.file",
         Severity::Warn,
         format!("{} missing, using defaults", config_path.display()),
      ));
   }

   match config::validate(cfg) {
      Ok(()) => checks.push(check("config.values", Severity::Ok, "valid".to_string())),
      Err(err) => checks.push(check("config.values", Severity::Fail, err.to_string())),
   }

   match HttpCcdb::new(cfg) {
      Ok(ccdb) => match ccdb.ping().await {
         Ok(()) => checks.push(check(
            "ccdb.reachable",
            Severity::Ok,
            ccdb.base_url().to_string(),
         )),
         Err(err) => checks.push(check("ccdb.reachable", Severity::Fail, err.to_string())),
      },
      Err(err) => checks.push(check("ccdb.client", Severity::Fail, err.to_string())),
   }

   let ok = checks.iter().all(|c| c.severity != Severity::Fail.as_str());
   HealthJson {
      schema_version: 1,
      ccdb_url: cfg.ccdb_url().to_string(),
      ok,
      checks,
   }
}

fn check(code: &str, severity: Severity, message: String) -> HealthCheck {
   HealthCheck {
      code: code.to_string(),
      severity: severity.as_str().to_string(),
      message,
   }
}
