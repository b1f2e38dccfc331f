//! Version listing command.

use chrono::SecondsFormat;
use console::style;
use serde::Serialize;

use crate::{
   Result, config,
   ccdb::{Ccdb, HttpCcdb, ObjectVersion},
};

#[derive(Serialize)]
struct VersionsJson {
   schema_version: u32,
   path:           String,
   count:          usize,
   versions:       Vec<ObjectVersion>,
}

pub async fn execute(path: String, json: bool) -> Result<()> {
   let cfg = config::get();
   config::validate(cfg)?;
   let ccdb = HttpCcdb::new(cfg)?;

   let versions = ccdb.list_versions(&path).await?;

   if json {
      let payload = VersionsJson {
         schema_version: 1,
         path,
         count: versions.len(),
         versions,
      };
      println!("{}", serde_json::to_string_pretty(&payload)?);
      return Ok(());
   }

   if versions.is_empty() {
      println!("{}", style(format!("No versions found at {path}.")).yellow());
      return Ok(());
   }

   println!("{}", style(format!("{} version(s) at {path}", versions.len())).bold());
   for version in &versions {
      println!(
         "  {} valid [{} .. {}] {}",
         style(render_created(version)).bold(),
         version.valid_from,
         version.valid_to,
         style(format!("{} metadata key(s)", version.metadata.len())).dim()
      );
   }

   Ok(())
}

fn render_created(version: &ObjectVersion) -> String {
   version
      .created_at_utc()
      .map_or_else(|| version.created_at.to_string(), |dt| {
         dt.to_rfc3339_opts(SecondsFormat::Secs, true)
      })
}
