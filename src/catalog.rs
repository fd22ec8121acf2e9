//! Read-only discovery of the backend's schema surface: tables, per-table
//! fields, enum values, and relation-target search. Used to populate pickers.

use crate::action::{ActionRequest, HttpMethod};
use crate::credentials::Credentials;
use crate::error::TransportError;
use crate::filter::{FilterCondition, FilterConjunction, FilterNode};
use crate::transport::Transport;
use serde_json::{Value, json};

/// Page size for relation-target searches.
const SEARCH_PAGE_SIZE: u64 = 20;

/// One name/value row for a picker.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogOption {
    pub name: String,
    pub value: Value,
}

/// Descriptor of one field of a table, as reported by the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub id: Value,
    /// Display title, falling back to the raw field name.
    pub title: String,
    /// The backend's type tag (`relation`, `custom_enum`, ...).
    pub kind: Option<String>,
    pub multiple: bool,
    /// Target table of a `relation` field.
    pub entity_id: Option<Value>,
    /// Enum behind a `custom_enum` field.
    pub enum_id: Option<Value>,
    /// Inline choice rows the backend ships with the field.
    pub options: Vec<CatalogOption>,
}

/// Read-only discovery queries over one backend.
///
/// Rows missing the expected keys are skipped rather than failing the query;
/// transport failures propagate so callers can tell an empty backend from an
/// unreachable one.
pub struct Catalog<'a> {
    transport: &'a dyn Transport,
    credentials: &'a Credentials,
}

impl<'a> Catalog<'a> {
    pub fn new(transport: &'a dyn Transport, credentials: &'a Credentials) -> Self {
        Self {
            transport,
            credentials,
        }
    }

    /// Lists the backend's tables as picker options.
    pub async fn tables(&self) -> Result<Vec<CatalogOption>, TransportError> {
        let request = ActionRequest::bare(
            HttpMethod::Get,
            self.credentials.url_for("all_entities"),
            self.credentials,
        );
        let response = self.transport.execute(&request).await?;
        Ok(options_from_rows(&response))
    }

    /// Describes the fields of one table, skipping the backend's own
    /// `entity_options` bookkeeping property.
    pub async fn table_fields(&self, table: &str) -> Result<Vec<FieldDescriptor>, TransportError> {
        let request = ActionRequest::bare(
            HttpMethod::Get,
            self.credentials.url_for(&format!("entity_props/{table}")),
            self.credentials,
        );
        let response = self.transport.execute(&request).await?;
        let Value::Array(rows) = response else {
            return Ok(Vec::new());
        };
        Ok(rows.iter().filter_map(field_from_row).collect())
    }

    /// Lists the values of one backend enum as picker options.
    pub async fn enum_values(&self, enum_id: &str) -> Result<Vec<CatalogOption>, TransportError> {
        let request = ActionRequest::bare(
            HttpMethod::Get,
            self.credentials.url_for(&format!("custom_enums/values/{enum_id}")),
            self.credentials,
        );
        let response = self.transport.execute(&request).await?;
        Ok(options_from_rows(&response))
    }

    /// Searches a table for picker options by matching `term` against the
    /// display field with a `like` condition.
    pub async fn search_options(
        &self,
        table: &str,
        display_field: &str,
        term: &str,
    ) -> Result<Vec<CatalogOption>, TransportError> {
        let filter = FilterNode::from(FilterConjunction::and(vec![
            FilterCondition::new(display_field, "like", term).into(),
        ]));
        let body = json!({
            "limit": SEARCH_PAGE_SIZE,
            "offset": 0,
            "filter": filter.into_value(),
        });
        let request = ActionRequest::with_json_body(
            HttpMethod::Post,
            self.credentials
                .url_for(&format!("instances/search/{table}")),
            self.credentials,
            body,
        );
        let response = self.transport.execute(&request).await?;
        Ok(options_from_rows(&response))
    }
}

fn options_from_rows(response: &Value) -> Vec<CatalogOption> {
    let Value::Array(rows) = response else {
        return Vec::new();
    };
    rows.iter().filter_map(option_from_row).collect()
}

fn option_from_row(row: &Value) -> Option<CatalogOption> {
    let entries = row.as_object()?;
    let id = entries.get("id")?.clone();
    let name = entries
        .get("name")
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| display_id(&id));
    Some(CatalogOption { name, value: id })
}

fn field_from_row(row: &Value) -> Option<FieldDescriptor> {
    let entries = row.as_object()?;
    let id = entries.get("id")?.clone();
    if id.as_str() == Some("entity_options") {
        return None;
    }

    let kind = entries
        .get("type")
        .and_then(Value::as_str)
        .map(str::to_string);
    let title = entries
        .get("title")
        .and_then(Value::as_str)
        .filter(|title| !title.is_empty())
        .or_else(|| {
            entries
                .get("name")
                .and_then(Value::as_str)
                .filter(|name| !name.is_empty())
        })
        .map(str::to_string)
        .unwrap_or_else(|| display_id(&id));
    let entity_id = match kind.as_deref() {
        Some("relation") => entries
            .get("relation")
            .and_then(|relation| relation.get("relation_target_entity_id"))
            .cloned(),
        _ => None,
    };
    let enum_id = match kind.as_deref() {
        Some("custom_enum") => entries
            .get("custom_enum")
            .and_then(|custom_enum| custom_enum.get("enum_id"))
            .cloned(),
        _ => None,
    };
    let options = entries
        .get("items")
        .filter(|items| !items.is_null())
        .or_else(|| entries.get("relation").and_then(|relation| relation.get("items")))
        .map(options_from_rows)
        .unwrap_or_default();
    let multiple = entries
        .get("multiple")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    Some(FieldDescriptor {
        id,
        title,
        kind,
        multiple,
        entity_id,
        enum_id,
        options,
    })
}

fn display_id(id: &Value) -> String {
    match id {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
