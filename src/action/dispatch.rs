use crate::action::{ActionRequest, HttpMethod};
use crate::credentials::Credentials;
use crate::error::DispatchError;
use crate::filter::{merge_filters, normalize_filter};
use crate::params::ActionParams;
use crate::payload::{format_fields, parse_static_object};
use ahash::AHashMap;
use itertools::Itertools;
use serde_json::{Map, Value, json};
use tracing::{debug, warn};

/// Defines the contract for compiling one action verb into an [`ActionRequest`].
pub trait ActionHandler: Send + Sync {
    fn verb(&self) -> &str;
    fn build(
        &self,
        params: &ActionParams,
        credentials: &Credentials,
    ) -> Result<ActionRequest, DispatchError>;
}

/// Routes action verbs to their handlers.
///
/// Each dispatch is a single stateless decision keyed by the verb string; the
/// dispatcher holds no state beyond its handler registry.
pub struct Dispatcher {
    registry: AHashMap<String, Box<dyn ActionHandler>>,
}

/// Assembles a [`Dispatcher`], optionally swapping in custom verb handlers.
pub struct DispatcherBuilder {
    registry: AHashMap<String, Box<dyn ActionHandler>>,
}

impl DispatcherBuilder {
    pub fn new() -> Self {
        let mut registry: AHashMap<String, Box<dyn ActionHandler>> = AHashMap::new();
        register_default_handlers(&mut registry);
        Self { registry }
    }

    /// Registers a handler under its own verb, replacing any builtin with the
    /// same verb.
    pub fn with_custom_handler(mut self, handler: Box<dyn ActionHandler>) -> Self {
        self.registry.insert(handler.verb().to_string(), handler);
        self
    }

    pub fn build(self) -> Dispatcher {
        Dispatcher {
            registry: self.registry,
        }
    }
}

impl Default for DispatcherBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    /// A dispatcher with the five builtin verbs registered.
    pub fn new() -> Self {
        DispatcherBuilder::new().build()
    }

    pub fn builder() -> DispatcherBuilder {
        DispatcherBuilder::new()
    }

    /// Compiles one item's parameters into the request describing its action.
    pub fn dispatch(
        &self,
        params: &ActionParams,
        credentials: &Credentials,
    ) -> Result<ActionRequest, DispatchError> {
        let handler = self
            .registry
            .get(params.action.as_str())
            .ok_or_else(|| DispatchError::UnknownAction(params.action.clone()))?;
        let request = handler.build(params, credentials)?;
        debug!(
            "compiled {} {} for action '{}'",
            request.method, request.url, params.action
        );
        Ok(request)
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

fn register_default_handlers(registry: &mut AHashMap<String, Box<dyn ActionHandler>>) {
    registry.insert("create".to_string(), Box::new(CreateHandler));
    registry.insert("getById".to_string(), Box::new(GetByIdHandler));
    registry.insert("getByFilter".to_string(), Box::new(GetByFilterHandler));
    registry.insert("updateById".to_string(), Box::new(UpdateByIdHandler));
    registry.insert("deleteById".to_string(), Box::new(DeleteByIdHandler));
}

struct CreateHandler;
impl ActionHandler for CreateHandler {
    fn verb(&self) -> &str {
        "create"
    }

    fn build(
        &self,
        params: &ActionParams,
        credentials: &Credentials,
    ) -> Result<ActionRequest, DispatchError> {
        let table = params.require_table()?;
        let mut record = format_fields(&params.data);
        record.extend(parse_static_object(&params.static_data));
        Ok(ActionRequest::with_json_body(
            HttpMethod::Post,
            credentials.url_for(&format!("instance/{table}/")),
            credentials,
            Value::Object(record),
        ))
    }
}

struct GetByIdHandler;
impl ActionHandler for GetByIdHandler {
    fn verb(&self) -> &str {
        "getById"
    }

    fn build(
        &self,
        params: &ActionParams,
        credentials: &Credentials,
    ) -> Result<ActionRequest, DispatchError> {
        let table = params.require_table()?;
        let record_id = params.require_record_id()?;
        Ok(ActionRequest::bare(
            HttpMethod::Get,
            credentials.url_for(&format!("instance/{table}/{record_id}")),
            credentials,
        ))
    }
}

struct GetByFilterHandler;
impl ActionHandler for GetByFilterHandler {
    fn verb(&self) -> &str {
        "getByFilter"
    }

    fn build(
        &self,
        params: &ActionParams,
        credentials: &Credentials,
    ) -> Result<ActionRequest, DispatchError> {
        let table = params.require_table()?;

        let mut basic = params.filters.clone();
        normalize_filter(&mut basic);
        let mut advanced = advanced_filter_tree(&params.filters_advanced);
        normalize_filter(&mut advanced);
        let filter = merge_filters(basic, advanced);

        let mut body = Map::new();
        body.insert("limit".to_string(), json!(params.limit));
        body.insert("offset".to_string(), json!(params.offset));
        if !filter.is_empty() {
            let filter = Value::Object(filter);
            debug!("search filter for table '{table}': {filter}");
            body.insert("filter".to_string(), filter);
        }
        if !params.fields.is_empty() {
            let markers: Map<String, Value> = params
                .fields
                .iter()
                .unique()
                .map(|name| (name.clone(), json!({})))
                .collect();
            body.insert("fields".to_string(), Value::Object(markers));
        }
        if !sort_is_empty(&params.sort) {
            body.insert("sort".to_string(), params.sort.clone());
        }

        Ok(ActionRequest::with_json_body(
            HttpMethod::Post,
            credentials.url_for(&format!("instances/search/{table}")),
            credentials,
            Value::Object(body),
        ))
    }
}

struct UpdateByIdHandler;
impl ActionHandler for UpdateByIdHandler {
    fn verb(&self) -> &str {
        "updateById"
    }

    fn build(
        &self,
        params: &ActionParams,
        credentials: &Credentials,
    ) -> Result<ActionRequest, DispatchError> {
        let table = params.require_table()?;
        let record_id = params.require_record_id()?;
        let record = format_fields(&params.data);
        Ok(ActionRequest::with_json_body(
            HttpMethod::Put,
            credentials.url_for(&format!("instance/{table}/{record_id}")),
            credentials,
            Value::Object(record),
        ))
    }
}

struct DeleteByIdHandler;
impl ActionHandler for DeleteByIdHandler {
    fn verb(&self) -> &str {
        "deleteById"
    }

    fn build(
        &self,
        params: &ActionParams,
        credentials: &Credentials,
    ) -> Result<ActionRequest, DispatchError> {
        let table = params.require_table()?;
        let record_id = params.require_record_id()?;
        if !params.confirm {
            return Err(DispatchError::ConfirmationRequired);
        }
        Ok(ActionRequest::bare(
            HttpMethod::Delete,
            credentials.url_for(&format!("instance/{table}/{record_id}")),
            credentials,
        ))
    }
}

/// Builds the advanced filter tree from its raw parameter form. A JSON string
/// is parsed leniently, falling back to an empty object; an already-parsed
/// tree is used as-is.
fn advanced_filter_tree(raw: &Value) -> Value {
    match raw {
        Value::String(text) => match serde_json::from_str(text) {
            Ok(parsed) => parsed,
            Err(err) => {
                warn!("advanced filter is not valid JSON, ignoring it: {err}");
                Value::Object(Map::new())
            }
        },
        other => other.clone(),
    }
}

/// An empty object, empty array, or anything without keys counts as no sort.
fn sort_is_empty(sort: &Value) -> bool {
    match sort {
        Value::Object(entries) => entries.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => true,
    }
}
