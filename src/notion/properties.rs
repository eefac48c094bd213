//! Notion property encoding and decoding.
//!
//! Outgoing entries are wrapped in the API's per-type property objects;
//! incoming pages are unwrapped into plain [`RemoteValue`]s so they can be
//! compared field by field.

use serde_json::{json, Map, Value};

use crate::model::{FieldType, FieldValue, FormattedEntry, RemoteRecord, RemoteValue};

/// Build the `properties` object for a create or update request.
#[must_use]
pub fn encode_properties(entry: &FormattedEntry) -> Map<String, Value> {
    entry
        .iter()
        .map(|(field, typed)| {
            let value = match typed.kind {
                FieldType::Select => json!({ "select": { "name": scalar(&typed.value) } }),
                FieldType::MultiSelect => {
                    let options: Vec<Value> =
                        items(&typed.value).map(|name| json!({ "name": name })).collect();
                    json!({ "multi_select": options })
                }
                FieldType::Title => {
                    json!({ "title": [{ "text": { "content": scalar(&typed.value) } }] })
                }
                FieldType::Date => json!({ "date": { "start": scalar(&typed.value) } }),
                FieldType::Url => json!({ "url": scalar(&typed.value) }),
            };
            (field.name().to_string(), value)
        })
        .collect()
}

fn scalar(value: &FieldValue) -> String {
    match value {
        FieldValue::Text(s) => s.clone(),
        FieldValue::List(items) => items.join(","),
    }
}

fn items(value: &FieldValue) -> impl Iterator<Item = &str> {
    let slice: &[String] = match value {
        FieldValue::Text(s) => std::slice::from_ref(s),
        FieldValue::List(items) => items,
    };
    slice.iter().map(String::as_str)
}

/// Unwrap a page object returned by the API.
///
/// Returns `None` if the object has no id.
#[must_use]
pub fn decode_page(page: &Value) -> Option<RemoteRecord> {
    let id = page.get("id")?.as_str()?;
    let empty = Map::new();
    let properties = page
        .get("properties")
        .and_then(Value::as_object)
        .unwrap_or(&empty);
    Some(decode_properties(id, properties))
}

/// Unwrap every property of a page.
#[must_use]
pub fn decode_properties(id: &str, properties: &Map<String, Value>) -> RemoteRecord {
    let mut record = RemoteRecord::new(id);
    for (name, property) in properties {
        record.insert(name.clone(), decode_property(property));
    }
    record
}

/// Unwrap a single property object into its plain value.
///
/// The kind comes from the `type` key, or from the only payload key when a
/// request-shaped object (`{"select": {...}}`) is decoded. Unsupported
/// property types decode as [`RemoteValue::Empty`] and are therefore never
/// compared.
#[must_use]
pub fn decode_property(property: &Value) -> RemoteValue {
    let Some(kind) = property_kind(property) else {
        return RemoteValue::Empty;
    };
    let inner = property.get(kind).unwrap_or(&Value::Null);

    match kind {
        "title" | "rich_text" => match inner.as_array() {
            Some(parts) if !parts.is_empty() => RemoteValue::Text(plain_text(parts)),
            _ => RemoteValue::Empty,
        },
        "select" | "status" => inner
            .get("name")
            .and_then(Value::as_str)
            .map_or(RemoteValue::Empty, |s| RemoteValue::Text(s.to_string())),
        "multi_select" => RemoteValue::List(
            inner
                .as_array()
                .map(|options| {
                    options
                        .iter()
                        .filter_map(|o| o.get("name").and_then(Value::as_str))
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
        ),
        "date" => inner
            .get("start")
            .and_then(Value::as_str)
            .map_or(RemoteValue::Empty, |s| RemoteValue::Text(s.to_string())),
        "url" | "email" | "phone_number" | "created_time" | "last_edited_time" => inner
            .as_str()
            .map_or(RemoteValue::Empty, |s| RemoteValue::Text(s.to_string())),
        "number" | "checkbox" => match inner {
            Value::Null => RemoteValue::Empty,
            other => RemoteValue::Text(other.to_string()),
        },
        _ => RemoteValue::Empty,
    }
}

fn property_kind(property: &Value) -> Option<&str> {
    if let Some(kind) = property.get("type").and_then(Value::as_str) {
        return Some(kind);
    }
    let mut keys = property
        .as_object()?
        .keys()
        .filter(|k| k.as_str() != "id" && k.as_str() != "type");
    match (keys.next(), keys.next()) {
        (Some(only), None) => Some(only.as_str()),
        _ => None,
    }
}

fn plain_text(parts: &[Value]) -> String {
    parts
        .iter()
        .filter_map(|part| {
            part.get("plain_text")
                .or_else(|| part.get("text").and_then(|t| t.get("content")))
                .and_then(Value::as_str)
        })
        .collect()
}

/// The page the API would return after storing `entry`.
///
/// Useful for previews and for exercising reconciliation offline.
#[must_use]
pub fn page_from_entry(id: &str, entry: &FormattedEntry) -> RemoteRecord {
    decode_properties(id, &encode_properties(entry))
}
