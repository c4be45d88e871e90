use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// What the source did to the record, derived strictly from its
/// event-type tag. Tags we don't recognise become `Unknown` instead of
/// failing the batch decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Inserted,
    Modified,
    Removed,
    Unknown,
}

impl Operation {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "INSERT" => Self::Inserted,
            "MODIFY" => Self::Modified,
            "REMOVE" => Self::Removed,
            _ => Self::Unknown,
        }
    }

    pub fn as_tag(&self) -> &'static str {
        match self {
            Self::Inserted => "INSERT",
            Self::Modified => "MODIFY",
            Self::Removed => "REMOVE",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl Serialize for Operation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_tag())
    }
}

impl<'de> Deserialize<'de> for Operation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from_tag(&tag))
    }
}

/// One typed field value of a record image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
    Text(String),
    Number(f64),
    Boolean(bool),
}

impl ScalarValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for ScalarValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for ScalarValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for ScalarValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for ScalarValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

/// State of the record after the change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateImage(BTreeMap<String, ScalarValue>);

impl StateImage {
    pub fn get(&self, field: &str) -> Option<&ScalarValue> {
        self.0.get(field)
    }

    pub fn text(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(ScalarValue::as_text)
    }
}

impl<K, V> FromIterator<(K, V)> for StateImage
where
    K: Into<String>,
    V: Into<ScalarValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// One entry in a consumed batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeEvent {
    /// Opaque id assigned by the source, for logging/correlation only.
    pub identity: String,
    pub operation: Operation,
    /// Absent for deletions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_state: Option<StateImage>,
}
