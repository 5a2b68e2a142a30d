use crate::duration::ServiceDuration;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Snapshot of a service as it was when the `Booking` was made.
///
/// The fields are kept exactly as the client sent them, later edits to the
/// service itself never change a past booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceLineItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ServiceLineItem {
    /// Reads a line item from a JSON object. Anything else is handed back.
    pub fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Object(map) => {
                let mut map = map;
                Ok(Self {
                    id: map.remove("id"),
                    name: map.remove("name"),
                    price: map.remove("price"),
                    duration: map.remove("duration"),
                    extra: map,
                })
            }
            other => Err(other),
        }
    }

    /// Whether the item references a service. Null, `false`, `0` and the
    /// empty string do not count as an identity.
    pub fn has_identity(&self) -> bool {
        match &self.id {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().map(|n| n != 0.0).unwrap_or(true),
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(_)) | Some(Value::Object(_)) => true,
        }
    }

    pub fn duration(&self) -> ServiceDuration {
        ServiceDuration::from(self.duration.as_ref())
    }

    pub fn to_value(&self) -> Value {
        let mut map = self.extra.clone();
        let fields = [
            ("id", &self.id),
            ("name", &self.name),
            ("price", &self.price),
            ("duration", &self.duration),
        ];
        for (key, value) in fields {
            if let Some(value) = value {
                map.insert(key.to_string(), value.clone());
            }
        }
        Value::Object(map)
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("Service line at position {0} is not an object")]
pub struct MalformedServiceLines(pub usize);

/// The services of a stored `Booking`.
///
/// Admission only ever stores a list of line items but rows written by other
/// tools are kept as they are in `Unrecognized`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ServiceLines {
    Items(Vec<ServiceLineItem>),
    Unrecognized(Value),
}

impl ServiceLines {
    /// Strict read of stored services: a list where some element is not an
    /// object is reported instead of silently reinterpreted.
    pub fn parse(value: Value) -> Result<Self, MalformedServiceLines> {
        match value {
            Value::Array(values) => values
                .into_iter()
                .enumerate()
                .map(|(i, value)| ServiceLineItem::from_value(value).map_err(|_| MalformedServiceLines(i)))
                .collect::<Result<Vec<_>, _>>()
                .map(Self::Items),
            other => Ok(Self::Unrecognized(other)),
        }
    }

    /// Lenient read that never fails, lists that can not be read as line
    /// items are kept verbatim.
    pub fn from_stored(value: Value) -> Self {
        match Self::parse(value.clone()) {
            Ok(lines) => lines,
            Err(_) => Self::Unrecognized(value),
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            Self::Items(items) => Value::Array(items.iter().map(|i| i.to_value()).collect()),
            Self::Unrecognized(value) => value.clone(),
        }
    }
}

impl<'de> Deserialize<'de> for ServiceLines {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Self::from_stored)
    }
}
