// Record trait for anything kept in a task collection

use serde::{Serialize, de::DeserializeOwned};
use std::collections::HashMap;

/// Core trait that any storable record must implement
pub trait Record: Serialize + DeserializeOwned + Clone {
    /// Unique identifier for this record
    fn id(&self) -> &str;

    /// Fields that filters can compare against
    /// Return empty HashMap if no fields should be filterable
    fn indexed_fields(&self) -> HashMap<String, IndexValue> {
        HashMap::new()
    }
}

/// Value types that can be indexed for filtering
#[derive(Debug, Clone, PartialEq)]
pub enum IndexValue {
    String(String),
    Bool(bool),
}

impl std::fmt::Display for IndexValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndexValue::String(s) => write!(f, "{}", s),
            IndexValue::Bool(b) => write!(f, "{}", b),
        }
    }
}
