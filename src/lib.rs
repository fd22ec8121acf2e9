//! # Daicho - Entity Action Dispatch and Filter Compilation
//!
//! **Daicho** compiles declarative CRUD and query actions against a
//! schema-less "entity" backend (tables and records reachable over HTTP) into
//! transport-ready request descriptions, so no HTTP call has to be written by
//! hand per operation. Its core is the filter compiler: a user-authored,
//! dual-source boolean filter (a structured "basic" tree plus a free-form
//! "advanced" tree) is normalized and merged into the single canonical filter
//! the backend expects, including legacy comparator aliases and relation-value
//! unwrapping.
//!
//! ## Core Workflow
//!
//! The crate keeps compilation pure and synchronous; the network enters only
//! at the transport seam. The primary workflow is:
//!
//! 1.  **Describe Items**: Build one [`params::ActionParams`] per input item,
//!     either programmatically or by deserializing the host runtime's item
//!     JSON (camelCase keys are accepted, defaults fill the gaps).
//! 2.  **Dispatch**: A [`action::Dispatcher`] routes each item's verb
//!     (`create`, `getById`, `getByFilter`, `updateById`, `deleteById`) to its
//!     handler, which compiles filters and field payloads into one
//!     [`action::ActionRequest`].
//! 3.  **Execute**: Hand requests to a [`transport::Transport`], either the
//!     bundled `HttpTransport` (feature `http`) or your own implementation.
//! 4.  **Run Batches**: A [`batch::BatchRunner`] does steps 2 and 3 for a
//!     whole item list sequentially, flattening array payloads and isolating
//!     per-item failures when asked to.
//!
//! ## Quick Start
//!
//! The following example compiles a filtered search and runs a one-item batch
//! against a stub transport.
//!
//! ```rust
//! use daicho::prelude::*;
//! use std::sync::Arc;
//!
//! // A transport for demonstration; real callers enable the `http` feature
//! // and use `HttpTransport`, or bring their own client.
//! struct NullTransport;
//!
//! #[async_trait::async_trait]
//! impl Transport for NullTransport {
//!     async fn execute(
//!         &self,
//!         _request: &ActionRequest,
//!     ) -> std::result::Result<Value, TransportError> {
//!         Ok(json!([{ "id": 1, "name": "first" }]))
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let credentials = Credentials::new("https://backend.example/api/", "secret");
//!
//!     // One search item: basic filter built with the typed API, advanced
//!     // filter authored as raw JSON. Both end up in one canonical filter.
//!     let basic = FilterNode::from(FilterConjunction::and(vec![
//!         FilterCondition::new("status", "eq", "open").into(),
//!     ]));
//!     let item = ActionParams {
//!         action: "getByFilter".to_string(),
//!         table: "orders".to_string(),
//!         filters: basic.into_value(),
//!         filters_advanced: Value::String(r#"{"operator":"or"}"#.to_string()),
//!         fields: vec!["id".to_string(), "name".to_string()],
//!         ..Default::default()
//!     };
//!
//!     // Compile only: inspect the request without touching the network.
//!     let request = Dispatcher::new().dispatch(&item, &credentials)?;
//!     assert_eq!(request.url, "https://backend.example/api/instances/search/orders");
//!
//!     // Or run the whole batch through a transport.
//!     let runner = BatchRunner::new(Arc::new(NullTransport))
//!         .with_policy(FailurePolicy::Continue);
//!     let results = runner.run(&[item], &credentials).await?;
//!     assert_eq!(results.len(), 1);
//!     Ok(())
//! }
//! ```

pub mod action;
pub mod batch;
pub mod catalog;
pub mod credentials;
pub mod error;
pub mod filter;
pub mod params;
pub mod payload;
pub mod prelude;
pub mod transport;
