use crate::action::ActionRequest;
use crate::error::TransportError;
use async_trait::async_trait;
use serde_json::Value;

/// Executes compiled requests against the backend.
///
/// The only async seam of the crate: compilation stays synchronous and pure,
/// callers own the runtime. Implementations return the parsed JSON response
/// value or a [`TransportError`] carrying the HTTP status when one was
/// received.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: &ActionRequest) -> Result<Value, TransportError>;
}

#[cfg(feature = "http")]
pub use http::HttpTransport;

#[cfg(feature = "http")]
mod http {
    use super::Transport;
    use crate::action::{ActionRequest, HttpMethod};
    use crate::error::TransportError;
    use async_trait::async_trait;
    use serde_json::Value;
    use tracing::debug;

    /// Default [`Transport`] backed by a shared reqwest client.
    pub struct HttpTransport {
        client: reqwest::Client,
    }

    impl HttpTransport {
        pub fn new() -> Self {
            Self {
                client: reqwest::Client::new(),
            }
        }

        /// Wraps an externally configured client (pooling, proxies, timeouts).
        pub fn with_client(client: reqwest::Client) -> Self {
            Self { client }
        }
    }

    impl Default for HttpTransport {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl Transport for HttpTransport {
        async fn execute(&self, request: &ActionRequest) -> Result<Value, TransportError> {
            let mut builder = match request.method {
                HttpMethod::Get => self.client.get(&request.url),
                HttpMethod::Post => self.client.post(&request.url),
                HttpMethod::Put => self.client.put(&request.url),
                HttpMethod::Delete => self.client.delete(&request.url),
            };
            for (name, value) in &request.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
            if let Some(body) = &request.body {
                builder = builder.json(body);
            }

            debug!("{} {}", request.method, request.url);
            let response = builder
                .send()
                .await
                .map_err(|err| TransportError::Request(err.to_string()))?;
            let status = response.status();
            let text = response
                .text()
                .await
                .map_err(|err| TransportError::Decode(err.to_string()))?;

            if !status.is_success() {
                return Err(TransportError::Status {
                    status: status.as_u16(),
                    body: text,
                });
            }
            if text.is_empty() {
                return Ok(Value::Null);
            }
            // Non-JSON success bodies are kept verbatim as a string value.
            Ok(serde_json::from_str(&text).unwrap_or(Value::String(text)))
        }
    }
}
