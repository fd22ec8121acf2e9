use serde::Deserialize;

/// Connection details for one entity backend, as supplied by the credential store.
///
/// `base_url` is expected to end with a slash; request URLs are formed by plain
/// string concatenation so any fixed path prefix (such as an `api/` segment)
/// belongs in the configured URL itself.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Credentials {
    #[serde(alias = "baseUrl")]
    pub base_url: String,
    #[serde(alias = "apiKey")]
    pub api_key: String,
}

impl Credentials {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Concatenates the base URL with a literal path suffix.
    ///
    /// No URL encoding is applied; the backend accepts raw identifiers in path
    /// segments.
    pub fn url_for(&self, suffix: &str) -> String {
        format!("{}{}", self.base_url, suffix)
    }

    /// The value of the `Authorization` header for this backend.
    pub fn authorization(&self) -> String {
        format!("Bearer {}", self.api_key)
    }
}
