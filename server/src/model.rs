use std::{fmt, str::FromStr};

use mongodb::bson::oid::{self, ObjectId};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Store-assigned identifier of a todo.
///
/// Wraps a MongoDB `ObjectId` and travels over HTTP as its 24-character hex
/// form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TodoId(ObjectId);

impl TodoId {
    pub fn new() -> Self {
        Self(ObjectId::new())
    }

    pub fn object_id(&self) -> ObjectId {
        self.0
    }
}

impl Default for TodoId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ObjectId> for TodoId {
    fn from(oid: ObjectId) -> Self {
        Self(oid)
    }
}

impl FromStr for TodoId {
    type Err = oid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectId::parse_str(s).map(Self)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_hex())
    }
}

impl Serialize for TodoId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_hex())
    }
}

impl<'de> Deserialize<'de> for TodoId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        hex.parse().map_err(serde::de::Error::custom)
    }
}

/// A todo as returned by the HTTP API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TodoId>,
    pub completed: bool,
    pub body: String,
}

/// Payload accepted by `POST /api/todos`.
///
/// Only `body` is read. A missing or `null` body counts as empty, and any
/// `completed` or `_id` the caller sends is ignored. A top-level `null`
/// payload is an empty todo; any other non-object payload is rejected.
#[derive(Debug, Default, Deserialize)]
pub struct CreateTodo {
    #[serde(default)]
    pub body: Option<String>,
}

impl CreateTodo {
    pub fn from_slice(payload: &[u8]) -> Result<Self, serde_json::Error> {
        match serde_json::from_slice::<Value>(payload)? {
            Value::Null => Ok(Self::default()),
            value @ Value::Object(_) => serde_json::from_value(value),
            other => Err(serde::de::Error::custom(format!(
                "expected a JSON object, found {}",
                json_kind(&other)
            ))),
        }
    }

    pub fn into_body(self) -> String {
        self.body.unwrap_or_default()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_id_as_hex_under_underscore_id() {
        let oid = ObjectId::parse_str("65a1f0c2e4b0a1b2c3d4e5f6").unwrap();
        let todo = Todo {
            id: Some(oid.into()),
            completed: false,
            body: "buy milk".to_string(),
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["_id"], "65a1f0c2e4b0a1b2c3d4e5f6");
        assert_eq!(json["completed"], false);
        assert_eq!(json["body"], "buy milk");
    }

    #[test]
    fn todo_without_id_omits_the_field() {
        let todo = Todo {
            id: None,
            completed: false,
            body: "no id yet".to_string(),
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert!(json.get("_id").is_none());
    }

    #[test]
    fn todo_id_rejects_non_hex() {
        assert!("not-an-object-id".parse::<TodoId>().is_err());
        assert!("65a1f0c2e4b0a1b2c3d4e5".parse::<TodoId>().is_err());
    }

    #[test]
    fn todo_id_display_matches_parse_input() {
        let id: TodoId = "65a1f0c2e4b0a1b2c3d4e5f6".parse().unwrap();
        assert_eq!(id.to_string(), "65a1f0c2e4b0a1b2c3d4e5f6");
    }

    #[test]
    fn create_todo_ignores_completed_and_id() {
        let input = CreateTodo::from_slice(
            br#"{"body":"walk dog","completed":true,"_id":"65a1f0c2e4b0a1b2c3d4e5f6"}"#,
        )
        .unwrap();
        assert_eq!(input.into_body(), "walk dog");
    }

    #[test]
    fn create_todo_missing_or_null_body_is_empty() {
        let missing: CreateTodo = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(missing.into_body(), "");

        let null: CreateTodo = serde_json::from_str(r#"{"body":null}"#).unwrap();
        assert_eq!(null.into_body(), "");
    }

    #[test]
    fn create_todo_rejects_non_string_body() {
        assert!(CreateTodo::from_slice(br#"{"body":42}"#).is_err());
    }

    #[test]
    fn create_todo_null_payload_is_empty() {
        let input = CreateTodo::from_slice(b"null").unwrap();
        assert_eq!(input.into_body(), "");
    }

    #[test]
    fn create_todo_rejects_non_object_payloads() {
        let payloads: [&[u8]; 5] = [b"[]", b"[\"buy milk\"]", b"\"buy milk\"", b"42", b"true"];
        for payload in payloads {
            let err = CreateTodo::from_slice(payload).unwrap_err();
            assert!(err.to_string().starts_with("expected a JSON object"), "{err}");
        }
    }
}
