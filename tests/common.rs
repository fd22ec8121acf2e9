//! Common test utilities: canned credentials, item builders, and a scripted
//! transport that records every request it receives.
use daicho::prelude::*;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Credentials pointing at a predictable fake backend.
#[allow(dead_code)]
pub fn test_credentials() -> Credentials {
    Credentials::new("https://backend.test/api/", "test-key")
}

/// Parameters for a search over the given table, defaults everywhere else.
#[allow(dead_code)]
pub fn search_params(table: &str) -> ActionParams {
    ActionParams {
        action: "getByFilter".to_string(),
        table: table.to_string(),
        ..Default::default()
    }
}

/// Parameters for fetching one record by id.
#[allow(dead_code)]
pub fn get_by_id_params(table: &str, record_id: &str) -> ActionParams {
    ActionParams {
        action: "getById".to_string(),
        table: table.to_string(),
        record_id: Some(record_id.to_string()),
        ..Default::default()
    }
}

/// A transport that replays scripted outcomes in order and records every
/// request. Once the script runs dry it answers null.
#[allow(dead_code)]
pub struct MockTransport {
    responses: Mutex<VecDeque<std::result::Result<Value, TransportError>>>,
    requests: Mutex<Vec<ActionRequest>>,
}

#[allow(dead_code)]
impl MockTransport {
    pub fn new() -> Self {
        Self::replying(Vec::new())
    }

    pub fn replying(responses: Vec<std::result::Result<Value, TransportError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Every request seen so far, in arrival order.
    pub fn seen(&self) -> Vec<ActionRequest> {
        self.requests.lock().expect("requests lock poisoned").clone()
    }
}

#[async_trait::async_trait]
impl Transport for MockTransport {
    async fn execute(
        &self,
        request: &ActionRequest,
    ) -> std::result::Result<Value, TransportError> {
        self.requests
            .lock()
            .expect("requests lock poisoned")
            .push(request.clone());
        self.responses
            .lock()
            .expect("responses lock poisoned")
            .pop_front()
            .unwrap_or(Ok(Value::Null))
    }
}
