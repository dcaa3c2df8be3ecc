//! Client configuration.

/// Configuration for a [`Client`](crate::Client).
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// Base URL of the table API, e.g. `http://localhost:3000`.
    pub base_url: String,
    /// Database schema selected via the `Accept-Profile` / `Content-Profile`
    /// headers.
    pub schema: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_owned(),
            schema: "public".to_owned(),
        }
    }
}

impl ClientConfig {
    /// Create a configuration for the given base URL with the default
    /// `public` schema.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Reads `PGREST_BASE_URL` and `PGREST_SCHEMA`, falling back to the
    /// defaults for anything unset.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("PGREST_BASE_URL") {
            config.base_url = v;
        }
        if let Ok(v) = std::env::var("PGREST_SCHEMA") {
            config.schema = v;
        }

        config
    }
}
