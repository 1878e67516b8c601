// Predicate filters over task records

use crate::models::Priority;
use crate::record::{IndexValue, Record};
use std::str::FromStr;

/// Comparison of one indexed field against a value
#[derive(Debug, Clone)]
pub struct Filter {
    /// Field name to filter on
    pub field: String,
    /// Comparison operator
    pub op: FilterOp,
    /// Value to compare against
    pub value: IndexValue,
}

/// Comparison operators for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Eq, // ==
    Ne, // !=
}

impl Filter {
    pub fn eq(field: &str, value: IndexValue) -> Self {
        Self {
            field: field.to_string(),
            op: FilterOp::Eq,
            value,
        }
    }

    /// A record lacking the field never matches
    pub fn matches<R: Record>(&self, record: &R) -> bool {
        match record.indexed_fields().get(&self.field) {
            Some(actual) => match self.op {
                FilterOp::Eq => *actual == self.value,
                FilterOp::Ne => *actual != self.value,
            },
            None => false,
        }
    }
}

impl std::fmt::Display for FilterOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterOp::Eq => write!(f, "="),
            FilterOp::Ne => write!(f, "!="),
        }
    }
}

/// The fixed views over a task collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TaskFilter {
    #[default]
    All,
    Pending,
    Completed,
    High,
}

impl TaskFilter {
    pub const ALL: [TaskFilter; 4] = [
        TaskFilter::All,
        TaskFilter::Pending,
        TaskFilter::Completed,
        TaskFilter::High,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TaskFilter::All => "all",
            TaskFilter::Pending => "pending",
            TaskFilter::Completed => "completed",
            TaskFilter::High => "high",
        }
    }

    /// Unrecognized names select every record
    pub fn parse_lenient(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }

    /// Field comparisons a record must satisfy to be in this view
    pub fn filters(self) -> Vec<Filter> {
        match self {
            TaskFilter::All => Vec::new(),
            TaskFilter::Pending => vec![Filter::eq("completed", IndexValue::Bool(false))],
            TaskFilter::Completed => vec![Filter::eq("completed", IndexValue::Bool(true))],
            TaskFilter::High => vec![Filter::eq(
                "priority",
                IndexValue::String(Priority::High.as_str().to_string()),
            )],
        }
    }

    pub fn matches<R: Record>(self, record: &R) -> bool {
        self.filters().iter().all(|f| f.matches(record))
    }
}

impl FromStr for TaskFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaskFilter::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown filter: {}", s))
    }
}

impl std::fmt::Display for TaskFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
