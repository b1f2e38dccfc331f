//! The preserve ("skip") retention policy.

use tracing::debug;

use crate::{
   ccdb::Ccdb,
   error::Result,
   rules::{Rule, RuleRequest, RuleResult},
};

/// Never deletes or modifies any version at the given path.
///
/// The grace period, consideration window, and extra parameters of the
/// request are accepted for interface uniformity and have no effect; the
/// result reports every existing version as preserved.
#[derive(Debug, Clone, Copy)]
pub struct Preserve;

#[async_trait::async_trait]
impl Rule for Preserve {
   fn name(&self) -> &'static str {
      "preserve"
   }

   fn description(&self) -> &'static str {
      "Keep every version at the path; delete and update nothing"
   }

   async fn process(&self, ccdb: &dyn Ccdb, request: &RuleRequest) -> Result<RuleResult> {
      debug!("rule 'preserve' processing {}", request.object_path);

      let versions = ccdb.list_versions(&request.object_path).await?;

      Ok(RuleResult {
         deleted:   0,
         preserved: versions.len() as u64,
         updated:   0,
      })
   }
}
