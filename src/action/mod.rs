//! Compiling action verbs into transport-ready request descriptions.

use crate::credentials::Credentials;
use ahash::AHashMap;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

mod dispatch;

pub use dispatch::{ActionHandler, Dispatcher, DispatcherBuilder};

/// The HTTP verb of a compiled request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The transport-ready description of one backend call.
///
/// Built once by the dispatcher and never mutated afterwards; the transport
/// receives it by reference and owns nothing of it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: AHashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

impl ActionRequest {
    /// A body-less request carrying the standing authorization header.
    pub fn bare(method: HttpMethod, url: String, credentials: &Credentials) -> Self {
        let mut headers = AHashMap::new();
        headers.insert("Authorization".to_string(), credentials.authorization());
        Self {
            method,
            url,
            headers,
            body: None,
        }
    }

    /// A request carrying a JSON body and the matching content type.
    pub fn with_json_body(
        method: HttpMethod,
        url: String,
        credentials: &Credentials,
        body: Value,
    ) -> Self {
        let mut request = Self::bare(method, url, credentials);
        request
            .headers
            .insert("Content-Type".to_string(), "application/json".to_string());
        request.body = Some(body);
        request
    }
}
