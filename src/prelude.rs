//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from the
//! daicho crate. Import this module to get access to the core functionality
//! without having to import each item individually.
//!
//! # Example
//!
//! ```rust
//! use daicho::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let credentials = Credentials::new("https://backend.example/api/", "secret");
//!     let params = ActionParams {
//!         action: "getById".to_string(),
//!         table: "orders".to_string(),
//!         record_id: Some("42".to_string()),
//!         ..Default::default()
//!     };
//!
//!     let request = Dispatcher::new().dispatch(&params, &credentials)?;
//!     assert_eq!(request.url, "https://backend.example/api/instance/orders/42");
//!     Ok(())
//! }
//! ```

// Action compilation and batch execution
pub use crate::action::{ActionHandler, ActionRequest, Dispatcher, DispatcherBuilder, HttpMethod};
pub use crate::batch::{BatchItemResult, BatchRunner, FailurePolicy, ItemOutcome};

// Declarative inputs
pub use crate::credentials::Credentials;
pub use crate::params::{ActionParams, FieldEntry, field_entries};

// Filter compilation
pub use crate::filter::{
    FilterCondition, FilterConjunction, FilterNode, Operator, backend_comparator, coerce_value,
    merge_filters, normalize_comparator, normalize_filter,
};
pub use crate::payload::{format_fields, format_value, parse_static_object};

// Backend discovery
pub use crate::catalog::{Catalog, CatalogOption, FieldDescriptor};

// Transport seam
pub use crate::transport::Transport;

#[cfg(feature = "http")]
pub use crate::transport::HttpTransport;

// Error types
pub use crate::error::{ActionError, BatchError, DispatchError, TransportError};

// serde_json re-exports commonly used with this crate
pub use serde_json::{Map, Value, json};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
