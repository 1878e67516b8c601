// Data models for the task list

use crate::error::{Result, TaskError};
use crate::record::{IndexValue, Record};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::convert::Infallible;
use std::str::FromStr;

pub const DEFAULT_CATEGORY: &str = "pessoal";

/// Known category keys and their display labels
const CATEGORY_LABELS: &[(&str, &str)] = &[
    ("trabalho", "Trabalho"),
    ("pessoal", "Pessoal"),
    ("estudos", "Estudos"),
    ("saude", "Saúde"),
    ("outro", "Outro"),
];

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default, with = "optional_date")]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Record for Task {
    fn id(&self) -> &str {
        &self.id
    }

    fn indexed_fields(&self) -> HashMap<String, IndexValue> {
        let mut fields = HashMap::new();
        fields.insert("completed".to_string(), IndexValue::Bool(self.completed));
        fields.insert(
            "priority".to_string(),
            IndexValue::String(self.priority.as_str().to_string()),
        );
        fields.insert(
            "category".to_string(),
            IndexValue::String(self.category.as_str().to_string()),
        );
        fields
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Baixa",
            Priority::Medium => "Média",
            Priority::High => "Alta",
        }
    }
}

impl FromStr for Priority {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(TaskError::InvalidPriority { value: s.to_string() }),
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Category key. Unknown keys are kept as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    /// Blank input falls back to the default category
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        let trimmed = key.trim();
        if trimmed.is_empty() {
            Self::default()
        } else {
            Self(trimmed.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display label for known keys, the key itself otherwise
    pub fn label(&self) -> &str {
        CATEGORY_LABELS
            .iter()
            .find(|(key, _)| *key == self.0)
            .map(|(_, label)| *label)
            .unwrap_or(self.0.as_str())
    }

    pub fn is_known(&self) -> bool {
        CATEGORY_LABELS.iter().any(|(key, _)| *key == self.0)
    }
}

impl Default for Category {
    fn default() -> Self {
        Self(DEFAULT_CATEGORY.to_string())
    }
}

impl FromStr for Category {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Category::new(s))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Caller-supplied fields for add and update
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskInput {
    pub title: String,
    pub description: Option<String>,
    pub category: Option<Category>,
    pub priority: Option<Priority>,
    pub due_date: Option<NaiveDate>,
}

impl TaskInput {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(Category::new(category));
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.due_date = due_date;
        self
    }

    /// Validate the title and fill in defaults
    pub(crate) fn into_fields(self) -> Result<TaskFields> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(TaskError::EmptyTitle);
        }

        Ok(TaskFields {
            title: title.to_string(),
            description: self.description.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            priority: self.priority.unwrap_or_default(),
            due_date: self.due_date,
        })
    }
}

/// Mutable fields of a task after validation
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TaskFields {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
}

impl TaskFields {
    /// A new, pending task
    pub(crate) fn into_task(self, id: String, created_at: DateTime<Utc>) -> Task {
        Task {
            id,
            title: self.title,
            description: self.description,
            category: self.category,
            priority: self.priority,
            due_date: self.due_date,
            completed: false,
            created_at,
        }
    }

    pub(crate) fn apply_to(self, task: &mut Task) {
        task.title = self.title;
        task.description = self.description;
        task.category = self.category;
        task.priority = self.priority;
        task.due_date = self.due_date;
    }
}

/// Collection counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
}

/// Parse a due date; an empty string means no due date
pub fn parse_due_date(raw: &str) -> Result<Option<NaiveDate>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| TaskError::InvalidDueDate { value: raw.to_string() })
}

// Due dates are stored as YYYY-MM-DD; older data may hold "" for none
mod optional_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S: Serializer>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(date) => serializer.serialize_str(&date.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDate>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => NaiveDate::parse_from_str(s, FORMAT).map(Some).map_err(de::Error::custom),
        }
    }
}
