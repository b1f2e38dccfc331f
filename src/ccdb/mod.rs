//! CCDB client capability and version data model.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

pub mod http;
pub mod memory;

pub use http::HttpCcdb;
pub use memory::MemoryCcdb;

/// One timestamped revision of an object stored at a given path.
///
/// Timestamps are epoch milliseconds, as served by the CCDB REST API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ObjectVersion {
   pub path:       String,
   pub id:         Option<String>,
   pub created_at: i64,
   pub valid_from: i64,
   pub valid_to:   i64,
   pub metadata:   HashMap<String, String>,
}

impl ObjectVersion {
   pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
      DateTime::from_timestamp_millis(self.created_at)
   }
}

/// Versioned object store capability.
///
/// Listing is total for well-formed paths: a path the store does not know
/// yields an empty list, not an error. Faults (connectivity, malformed
/// responses) surface as errors for the caller to handle.
#[async_trait::async_trait]
pub trait Ccdb: Send + Sync {
   /// Lists all versions stored under `path`, in server order.
   async fn list_versions(&self, path: &str) -> Result<Vec<ObjectVersion>>;

   /// Checks that the store is reachable.
   async fn ping(&self) -> Result<()>;
}
