use crate::filters::error::CollectionError;
use ordermap::OrderMap;
use serde_json::Value;
use std::fmt::{Display, Formatter};
use strum_macros::IntoStaticStr;

/// One mapping of a sequence handed to `dictsort`.
pub type Record = OrderMap<String, String>;

/// The collection shapes list filters accept.
#[derive(Debug, Clone, PartialEq, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Sequence {
    Ints(Vec<i64>),
    Strings(Vec<String>),
    Records(Vec<Record>),
}

impl Sequence {
    pub fn kind(&self) -> &'static str {
        self.into()
    }

    pub fn len(&self) -> usize {
        match self {
            Sequence::Ints(ints) => ints.len(),
            Sequence::Strings(strings) => strings.len(),
            Sequence::Records(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<i64>> for Sequence {
    fn from(ints: Vec<i64>) -> Self {
        Sequence::Ints(ints)
    }
}

impl From<Vec<String>> for Sequence {
    fn from(strings: Vec<String>) -> Self {
        Sequence::Strings(strings)
    }
}

impl From<Vec<&str>> for Sequence {
    fn from(strings: Vec<&str>) -> Self {
        Sequence::Strings(strings.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<Record>> for Sequence {
    fn from(records: Vec<Record>) -> Self {
        Sequence::Records(records)
    }
}

/// Reads a JSON array into the matching sequence shape.
///
/// Arrays must be homogeneous: all integers, all strings, or all objects whose
/// values are strings. An empty array becomes an empty `Strings` sequence.
impl TryFrom<&Value> for Sequence {
    type Error = CollectionError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let Value::Array(elements) = value else {
            return Err(CollectionError::unsupported(json_kind(value)));
        };

        if elements.is_empty() {
            return Ok(Sequence::Strings(vec![]));
        }

        if let Some(ints) = elements.iter().map(Value::as_i64).collect::<Option<Vec<i64>>>() {
            return Ok(Sequence::Ints(ints));
        }

        if let Some(strings) = elements
            .iter()
            .map(|element| element.as_str().map(str::to_string))
            .collect::<Option<Vec<String>>>()
        {
            return Ok(Sequence::Strings(strings));
        }

        elements
            .iter()
            .map(json_record)
            .collect::<Option<Vec<Record>>>()
            .map(Sequence::Records)
            .ok_or_else(|| CollectionError::unsupported("unsupported array"))
    }
}

fn json_record(value: &Value) -> Option<Record> {
    value
        .as_object()?
        .iter()
        .map(|(key, value)| value.as_str().map(|value| (key.clone(), value.to_string())))
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A single element picked out of a sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Int(i64),
    Str(String),
}

impl Display for Item {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Item::Int(int) => write!(f, "{int}"),
            Item::Str(string) => write!(f, "{string}"),
        }
    }
}
