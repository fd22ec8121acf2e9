use crate::action::Dispatcher;
use crate::credentials::Credentials;
use crate::error::{ActionError, BatchError};
use crate::params::ActionParams;
use crate::transport::Transport;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, warn};

/// What the runner does when one item fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Stop at the first failure and surface it.
    #[default]
    Abort,
    /// Record the failure against the item and keep going.
    Continue,
}

/// What one output entry carries: a backend payload or a recorded failure.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemOutcome {
    Payload(Value),
    Failed {
        message: String,
        status: Option<u16>,
    },
}

/// One entry of the batch output, tagged with the input item it came from.
///
/// An item whose payload was an array produces one entry per element, all
/// tagged with the same index; entries are never mutated after emission.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchItemResult {
    pub item: usize,
    pub outcome: ItemOutcome,
}

impl BatchItemResult {
    pub fn payload(item: usize, payload: Value) -> Self {
        Self {
            item,
            outcome: ItemOutcome::Payload(payload),
        }
    }

    pub fn failed(item: usize, error: &ActionError) -> Self {
        Self {
            item,
            outcome: ItemOutcome::Failed {
                message: error.to_string(),
                status: error.status(),
            },
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.outcome, ItemOutcome::Failed { .. })
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.outcome {
            ItemOutcome::Failed { message, .. } => Some(message),
            ItemOutcome::Payload(_) => None,
        }
    }

    /// The JSON rendition of this entry: the payload itself, or an `error`
    /// descriptor for recorded failures.
    pub fn to_json(&self) -> Value {
        match &self.outcome {
            ItemOutcome::Payload(payload) => payload.clone(),
            ItemOutcome::Failed { message, .. } => json!({ "error": message }),
        }
    }
}

/// Runs batches of action items sequentially over one transport.
pub struct BatchRunner {
    dispatcher: Dispatcher,
    transport: Arc<dyn Transport>,
    policy: FailurePolicy,
}

impl BatchRunner {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            dispatcher: Dispatcher::new(),
            transport,
            policy: FailurePolicy::default(),
        }
    }

    /// Swaps in a dispatcher carrying custom verb handlers.
    pub fn with_dispatcher(mut self, dispatcher: Dispatcher) -> Self {
        self.dispatcher = dispatcher;
        self
    }

    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Runs every item in input order, one outstanding request at a time.
    ///
    /// Each item's transport call completes before the next item starts; the
    /// result list is append-only and ordered by originating item. Under
    /// [`FailurePolicy::Abort`] the first failure returns a [`BatchError`]
    /// naming the triggering item, and no later item is processed. Under
    /// [`FailurePolicy::Continue`] the failure becomes an error entry for that
    /// item and the run moves on.
    pub async fn run(
        &self,
        items: &[ActionParams],
        credentials: &Credentials,
    ) -> Result<Vec<BatchItemResult>, BatchError> {
        debug!("running batch of {} items", items.len());
        let mut results = Vec::new();
        for (index, params) in items.iter().enumerate() {
            match self.run_item(params, credentials).await {
                Ok(payload) => append_payload(&mut results, index, payload),
                Err(source) => match self.policy {
                    FailurePolicy::Continue => {
                        warn!("batch item {index} failed, continuing: {source}");
                        results.push(BatchItemResult::failed(index, &source));
                    }
                    FailurePolicy::Abort => return Err(BatchError { index, source }),
                },
            }
        }
        Ok(results)
    }

    async fn run_item(
        &self,
        params: &ActionParams,
        credentials: &Credentials,
    ) -> Result<Value, ActionError> {
        let request = self.dispatcher.dispatch(params, credentials)?;
        let payload = self.transport.execute(&request).await?;
        Ok(payload)
    }
}

/// Array payloads flatten into one entry per element; anything else is one
/// entry. An empty array contributes nothing.
fn append_payload(results: &mut Vec<BatchItemResult>, index: usize, payload: Value) {
    match payload {
        Value::Array(rows) => {
            for row in rows {
                results.push(BatchItemResult::payload(index, row));
            }
        }
        other => results.push(BatchItemResult::payload(index, other)),
    }
}
