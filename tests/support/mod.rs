#![allow(dead_code)]

use repoclean::{
   Result,
   ccdb::{Ccdb, ObjectVersion},
   error::HttpError,
};

/// Store double whose listing capability always faults.
pub struct FailingCcdb {
   pub status: u16,
}

impl FailingCcdb {
   pub fn unreachable() -> Self {
      Self { status: 503 }
   }
}

#[async_trait::async_trait]
impl Ccdb for FailingCcdb {
   async fn list_versions(&self, _path: &str) -> Result<Vec<ObjectVersion>> {
      Err(HttpError::StatusCode(self.status).into())
   }

   async fn ping(&self) -> Result<()> {
      Err(HttpError::StatusCode(self.status).into())
   }
}
