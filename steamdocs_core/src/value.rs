use indexmap::IndexMap;
use serde::ser::{Serialize, Serializer};

/// Nested value produced by the tree extractor. Mirrors the schema's shape:
/// scalars at the leaves, ordered lists for array groups, keyed objects for
/// composites. Empty containers never appear; extraction prunes them.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Scalar(String),
    List(Vec<Value>),
    Object(IndexMap<String, Value>),
}

impl Value {
    pub fn scalar(v: impl Into<String>) -> Self {
        Value::Scalar(v.into())
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Scalar(v) => serializer.serialize_str(v),
            Value::List(items) => serializer.collect_seq(items),
            Value::Object(entries) => serializer.collect_map(entries),
        }
    }
}
