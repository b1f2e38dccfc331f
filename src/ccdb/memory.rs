//! Lightweight in-process store for tests and offline tooling.

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::{
   ccdb::{Ccdb, ObjectVersion},
   error::Result,
};

#[derive(Debug, Default)]
pub struct MemoryCcdb {
   objects: Mutex<HashMap<String, Vec<ObjectVersion>>>,
}

impl MemoryCcdb {
   pub fn new() -> Self {
      Self::default()
   }

   pub fn push(&self, version: ObjectVersion) {
      let mut objects = self.objects.lock();
      objects.entry(version.path.clone()).or_default().push(version);
   }

   /// Seeds `count` versions at `path`, one per minute starting at `start_ms`.
   pub fn seed(&self, path: &str, start_ms: i64, count: usize) {
      for i in 0..count {
         let created = start_ms + (i as i64) * 60_000;
         self.push(ObjectVersion {
            path: path.to_string(),
            id: Some(format!("{path}#{i}")),
            created_at: created,
            valid_from: created,
            valid_to: created + 60_000,
            metadata: HashMap::new(),
         });
      }
   }
}

#[async_trait::async_trait]
impl Ccdb for MemoryCcdb {
   async fn list_versions(&self, path: &str) -> Result<Vec<ObjectVersion>> {
      let objects = self.objects.lock();
      Ok(objects.get(path).cloned().unwrap_or_default())
   }

   async fn ping(&self) -> Result<()> {
      Ok(())
   }
}
