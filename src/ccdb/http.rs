//! HTTP client for the CCDB REST browse API.

use std::{collections::HashMap, time::Duration};

use reqwest::{StatusCode, header::ACCEPT};
use serde::{Deserialize, Deserializer};

use crate::{
   ccdb::{Ccdb, ObjectVersion},
   config::Config,
   error::{HttpError, Result},
};

#[derive(Debug, Clone)]
pub struct HttpCcdb {
   client:   reqwest::Client,
   base_url: String,
}

impl HttpCcdb {
   pub fn new(cfg: &Config) -> Result<Self> {
      let client = reqwest::Client::builder()
         .timeout(Duration::from_millis(cfg.http_timeout_ms))
         .connect_timeout(Duration::from_millis(cfg.http_connect_timeout_ms))
         .build()
         .map_err(HttpError::Request)?;
      Ok(Self { client, base_url: cfg.ccdb_url().to_string() })
   }

   pub fn base_url(&self) -> &str {
      &self.base_url
   }

   fn browse_url(&self, path: &str) -> String {
      format!("{}/browse/{}", self.base_url, path.trim_matches('/'))
   }
}

#[async_trait::async_trait]
impl Ccdb for HttpCcdb {
   async fn list_versions(&self, path: &str) -> Result<Vec<ObjectVersion>> {
      let response = self
         .client
         .get(self.browse_url(path))
         .header(ACCEPT, "application/json")
         .send()
         .await
         .map_err(HttpError::Request)?;

      // Unknown paths are an empty listing, not a fault.
      if response.status() == StatusCode::NOT_FOUND {
         return Ok(Vec::new());
      }
      if !response.status().is_success() {
         return Err(HttpError::StatusCode(response.status().as_u16()).into());
      }

      let body: BrowseResponse = response.json().await.map_err(HttpError::Request)?;
      Ok(body
         .objects
         .into_iter()
         .map(|wire| wire.into_version(path))
         .collect())
   }

   async fn ping(&self) -> Result<()> {
      let response = self
         .client
         .get(self.browse_url(""))
         .header(ACCEPT, "application/json")
         .send()
         .await
         .map_err(HttpError::Request)?;

      if response.status().is_server_error() {
         return Err(HttpError::StatusCode(response.status().as_u16()).into());
      }
      Ok(())
   }
}

#[derive(Debug, Deserialize)]
struct BrowseResponse {
   #[serde(default)]
   objects: Vec<WireVersion>,
}

/// One object entry of a browse response.
///
/// The server reports timestamps either as numbers or as decimal strings
/// depending on version; every key that is not a known field is kept as
/// version metadata.
#[derive(Debug, Deserialize)]
struct WireVersion {
   #[serde(default)]
   path: Option<String>,

   #[serde(default)]
   id: Option<String>,

   #[serde(rename = "Created", alias = "createTime", deserialize_with = "millis", default)]
   created_at: i64,

   #[serde(rename = "validFrom", deserialize_with = "millis", default)]
   valid_from: i64,

   #[serde(rename = "validUntil", alias = "validTo", deserialize_with = "millis", default)]
   valid_to: i64,

   #[serde(flatten)]
   extra: HashMap<String, serde_json::Value>,
}

impl WireVersion {
   fn into_version(self, requested_path: &str) -> ObjectVersion {
      let metadata = self
         .extra
         .into_iter()
         .map(|(key, value)| (key, scalar_to_string(&value)))
         .collect();
      ObjectVersion {
         path: self.path.unwrap_or_else(|| requested_path.to_string()),
         id: self.id,
         created_at: self.created_at,
         valid_from: self.valid_from,
         valid_to: self.valid_to,
         metadata,
      }
   }
}

fn scalar_to_string(value: &serde_json::Value) -> String {
   match value {
      serde_json::Value::String(s) => s.clone(),
      other => other.to_string(),
   }
}

fn millis<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
   D: Deserializer<'de>,
{
   #[derive(Deserialize)]
   #[serde(untagged)]
   enum NumOrStr {
      Num(i64),
      Str(String),
   }

   match NumOrStr::deserialize(deserializer)? {
      NumOrStr::Num(n) => Ok(n),
      NumOrStr::Str(s) => s.trim().parse().map_err(serde::de::Error::custom),
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn browse_response_parses_numeric_and_string_timestamps() {
      let raw = r#"{
         "objects": [
            {
               "path": "qc/TPC/MO/Tracks",
               "id": "c0a8-01",
               "Created": 1614253200000,
               "validFrom": "1614253200000",
               "validUntil": 1614339600000,
               "RunNumber": "505673",
               "size": 2048
            }
         ],
         "subfolders": ["qc/TPC/MO/Tracks/mw"]
      }"#;

      let body: BrowseResponse = serde_json::from_str(raw).expect("parse");
      assert_eq!(body.objects.len(), 1);

      let version = body.objects.into_iter().next().unwrap().into_version("qc/TPC/MO/Tracks");
      assert_eq!(version.path, "qc/TPC/MO/Tracks");
      assert_eq!(version.id.as_deref(), Some("c0a8-01"));
      assert_eq!(version.created_at, 1614253200000);
      assert_eq!(version.valid_from, 1614253200000);
      assert_eq!(version.valid_to, 1614339600000);
      assert_eq!(version.metadata.get("RunNumber").map(String::as_str), Some("505673"));
      assert_eq!(version.metadata.get("size").map(String::as_str), Some("2048"));
   }

   #[test]
   fn missing_fields_fall_back_to_requested_path_and_zero() {
      let raw = r#"{"objects": [{"RunNumber": "1"}]}"#;
      let body: BrowseResponse = serde_json::from_str(raw).expect("parse");
      let version = body.objects.into_iter().next().unwrap().into_version("qc/ITS/Clusters");
      assert_eq!(version.path, "qc/ITS/Clusters");
      assert_eq!(version.created_at, 0);
      assert!(version.id.is_none());
   }

   #[test]
   fn empty_objects_array_parses_to_empty_list() {
      let raw = r#"{"objects": [], "subfolders": []}"#;
      let body: BrowseResponse = serde_json::from_str(raw).expect("parse");
      assert!(body.objects.is_empty());
   }

   #[test]
   fn browse_url_normalizes_path_separators() {
      let ccdb = HttpCcdb {
         client:   reqwest::Client::new(),
         base_url: "http://ccdb:8080".to_string(),
      };
      assert_eq!(ccdb.browse_url("/qc/TPC/Tracks/"), "http://ccdb:8080/browse/qc/TPC/Tracks");
      assert_eq!(ccdb.browse_url(""), "http://ccdb:8080/browse/");
   }
}
