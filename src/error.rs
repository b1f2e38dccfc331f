use thiserror::Error;

/// Main error type for the repoclean application.
///
/// This enum represents all possible errors that can occur throughout the
/// application, including CCDB requests, configuration, and rule dispatch.
#[derive(Debug, Error)]
pub enum Error {
   /// HTTP request or response error occurred.
   #[error("http error: {0}")]
   Http(#[from] HttpError),

   /// JSON serialization or deserialization error occurred.
   #[error("json error: {0}")]
   Json(#[from] serde_json::Error),

   /// Configuration-related error occurred.
   #[error("config error: {0}")]
   Config(#[from] ConfigError),

   /// No rule is registered under the requested name.
   #[error("unknown rule '{name}' (known rules: {known})")]
   UnknownRule { name: String, known: String },

   /// Internal error occurred during a specific operation.
   #[error("error during {op}: {reason}")]
   Server { op: &'static str, reason: String },

   /// Error already reported to the user (e.g., JSON output emitted).
   #[error("{message}")]
   Reported { message: String, exit_code: i32 },
}

impl Error {
   pub fn exit_code(&self) -> i32 {
      if let Error::Reported { exit_code, .. } = self {
         return *exit_code;
      }

      match self {
         Error::Http(_) => 10,
         Error::UnknownRule { .. } => 11,
         Error::Config(_) => 12,
         _ => 1,
      }
   }
}

/// Errors that can occur during HTTP operations against the CCDB.
#[derive(Debug, Error)]
pub enum HttpError {
   /// HTTP request failed (network error, timeout, etc.).
   #[error("request failed: {0}")]
   Request(#[from] reqwest::Error),

   /// Received an invalid or unexpected HTTP status code.
   #[error("invalid status code: {0}")]
   StatusCode(u16),
}

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
   /// Config is invalid or exceeds safety caps.
   #[error("invalid config: {0}")]
   InvalidConfig(String),
}

/// Standard result type using [`enum@Error`] as the default error type
pub type Result<T, E = Error> = std::result::Result<T, E>;
