use crate::error::DispatchError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One `{field, value}` entry from the declarative field list used to author
/// create/update payloads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldEntry {
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub value: Value,
}

impl FieldEntry {
    pub fn new(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// Builds the field-entry list value from `(field, value)` pairs.
pub fn field_entries<I, F, V>(pairs: I) -> Value
where
    I: IntoIterator<Item = (F, V)>,
    F: Into<String>,
    V: Into<Value>,
{
    Value::Array(
        pairs
            .into_iter()
            .map(|(field, value)| {
                serde_json::to_value(FieldEntry::new(field, value)).unwrap_or(Value::Null)
            })
            .collect(),
    )
}

/// The per-item declarative parameters of one action invocation.
///
/// Mirrors what the host runtime extracts for each input item. Every field is
/// optional on the wire and falls back to the documented default: `limit` 50,
/// `offset` 0, `fields` empty, `filters` an empty object, `filters_advanced`
/// the JSON string `"{}"`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ActionParams {
    pub action: String,
    pub table: String,
    #[serde(alias = "recordId")]
    pub record_id: Option<String>,
    /// Raw field-entry list; entries without a usable `field` are skipped by
    /// the formatter rather than rejected here.
    pub data: Value,
    #[serde(alias = "staticData")]
    pub static_data: String,
    pub filters: Value,
    /// Either a raw JSON string or an already-parsed filter tree.
    #[serde(alias = "filtersAdvanced")]
    pub filters_advanced: Value,
    pub fields: Vec<String>,
    pub limit: u64,
    pub offset: u64,
    /// Passed through to the search body untouched when non-empty.
    pub sort: Value,
    pub confirm: bool,
}

impl Default for ActionParams {
    fn default() -> Self {
        Self {
            action: String::new(),
            table: String::new(),
            record_id: None,
            data: Value::Null,
            static_data: "{}".to_string(),
            filters: Value::Object(Map::new()),
            filters_advanced: Value::String("{}".to_string()),
            fields: Vec::new(),
            limit: 50,
            offset: 0,
            sort: Value::Object(Map::new()),
            confirm: false,
        }
    }
}

impl ActionParams {
    /// The record identifier, required by the by-id actions.
    pub fn require_record_id(&self) -> Result<&str, DispatchError> {
        self.record_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .ok_or(DispatchError::MissingParameter { name: "recordId" })
    }

    /// The target table, required by every action.
    pub fn require_table(&self) -> Result<&str, DispatchError> {
        if self.table.is_empty() {
            Err(DispatchError::MissingParameter { name: "table" })
        } else {
            Ok(self.table.as_str())
        }
    }

    /// Parses a batch input document: either a single item object or an array
    /// of item objects.
    pub fn parse_batch(raw: &str) -> Result<Vec<ActionParams>, serde_json::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum BatchInput {
            Many(Vec<ActionParams>),
            One(ActionParams),
        }

        Ok(match serde_json::from_str(raw)? {
            BatchInput::Many(items) => items,
            BatchInput::One(item) => vec![item],
        })
    }
}
