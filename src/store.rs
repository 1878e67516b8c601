// Task store: the in-memory collection mirrored to a durable slot

use crate::error::{Result, TaskError};
use crate::filter::TaskFilter;
use crate::models::{Priority, Stats, Task, TaskInput};
use crate::storage::SlotStorage;
use chrono::{Days, NaiveDate, Utc};
use std::collections::HashSet;
use tracing::{debug, info, warn};
use uuid::Uuid;

pub const DEFAULT_SLOT_KEY: &str = "tasks";

/// Ordered task collection, newest first, written through to storage
///
/// Every mutating operation persists the whole collection before returning.
/// When that write fails the in-memory change is undone and the error
/// returned, so a failed call leaves the collection as it was.
/// Operations on an unknown id are no-ops rather than errors, so retrying
/// them is always safe.
pub struct TaskStore<S: SlotStorage> {
    storage: S,
    key: String,
    tasks: Vec<Task>,
}

impl<S: SlotStorage> TaskStore<S> {
    /// Open a store on the default slot and load its contents
    pub fn open(storage: S) -> Self {
        Self::open_with_key(storage, DEFAULT_SLOT_KEY)
    }

    /// Open a store on the given slot and load its contents
    pub fn open_with_key(storage: S, key: impl Into<String>) -> Self {
        let mut store = Self {
            storage,
            key: key.into(),
            tasks: Vec::new(),
        };
        store.load();
        store
    }

    /// Replace the in-memory collection with the slot contents
    ///
    /// A missing, unreadable or malformed slot yields an empty collection.
    pub fn load(&mut self) {
        self.tasks = match self.storage.read(&self.key) {
            Ok(Some(raw)) => decode_collection(&self.key, &raw),
            Ok(None) => {
                debug!(key = %self.key, "Slot is empty, starting with no tasks");
                Vec::new()
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to read slot, starting with no tasks");
                Vec::new()
            }
        };

        info!(key = %self.key, count = self.tasks.len(), "Loaded tasks");
    }

    /// Write the whole collection to the slot
    pub fn persist(&mut self) -> Result<()> {
        let json = serde_json::to_string(&self.tasks)?;
        self.storage.write(&self.key, &json)?;
        debug!(key = %self.key, count = self.tasks.len(), "Persisted tasks");
        Ok(())
    }

    /// Slot key this store reads and writes
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// All tasks, newest first
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Resolve an exact id or a unique id prefix
    pub fn resolve_id(&self, fragment: &str) -> Result<Option<String>> {
        if let Some(task) = self.get(fragment) {
            return Ok(Some(task.id.clone()));
        }
        if fragment.is_empty() {
            return Ok(None);
        }

        let matches: Vec<&Task> = self.tasks.iter().filter(|t| t.id.starts_with(fragment)).collect();
        match matches.as_slice() {
            [] => Ok(None),
            [task] => Ok(Some(task.id.clone())),
            _ => Err(TaskError::AmbiguousId {
                prefix: fragment.to_string(),
                count: matches.len(),
            }),
        }
    }

    /// Create a task at the front of the collection
    pub fn add(&mut self, input: TaskInput) -> Result<Task> {
        let task = input.into_fields()?.into_task(Uuid::now_v7().to_string(), Utc::now());

        self.tasks.insert(0, task.clone());
        if let Err(e) = self.persist() {
            self.tasks.remove(0);
            return Err(e);
        }

        info!(id = %task.id, title = %task.title, "Added task");
        Ok(task)
    }

    /// Replace the mutable fields of a task
    ///
    /// Returns `None` without persisting when the id is unknown. The id,
    /// creation time and completion flag are left as they were.
    pub fn update(&mut self, id: &str, input: TaskInput) -> Result<Option<Task>> {
        let fields = input.into_fields()?;

        let Some(index) = self.position(id) else {
            debug!(id, "Update of unknown task ignored");
            return Ok(None);
        };
        let previous = self.tasks[index].clone();
        fields.apply_to(&mut self.tasks[index]);

        if let Err(e) = self.persist() {
            self.tasks[index] = previous;
            return Err(e);
        }

        info!(id, "Updated task");
        Ok(Some(self.tasks[index].clone()))
    }

    /// Flip the completed flag; returns the new value
    pub fn toggle_completion(&mut self, id: &str) -> Result<Option<bool>> {
        let Some(index) = self.position(id) else {
            debug!(id, "Toggle of unknown task ignored");
            return Ok(None);
        };
        let completed = !self.tasks[index].completed;
        self.tasks[index].completed = completed;

        if let Err(e) = self.persist() {
            self.tasks[index].completed = !completed;
            return Err(e);
        }

        info!(id, completed, "Toggled task");
        Ok(Some(completed))
    }

    /// Remove a task; returns whether it was present
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let Some(index) = self.position(id) else {
            debug!(id, "Delete of unknown task ignored");
            return Ok(false);
        };
        let removed = self.tasks.remove(index);

        if let Err(e) = self.persist() {
            self.tasks.insert(index, removed);
            return Err(e);
        }

        info!(id, "Deleted task");
        Ok(true)
    }

    /// Remove every task; returns how many were removed
    pub fn clear_all(&mut self) -> Result<usize> {
        let previous = std::mem::take(&mut self.tasks);

        if let Err(e) = self.persist() {
            self.tasks = previous;
            return Err(e);
        }

        info!(removed = previous.len(), "Cleared all tasks");
        Ok(previous.len())
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    /// Tasks matching the filter, in collection order
    pub fn filter(&self, filter: TaskFilter) -> Vec<&Task> {
        self.tasks.iter().filter(|t| filter.matches(*t)).collect()
    }

    /// Like `filter`, by name; unrecognized names select every task
    pub fn filter_by_name(&self, name: &str) -> Vec<&Task> {
        self.filter(TaskFilter::parse_lenient(name))
    }

    pub fn stats(&self) -> Stats {
        let total = self.tasks.len();
        let pending = self.tasks.iter().filter(|t| !t.completed).count();
        Stats {
            total,
            pending,
            completed: total - pending,
        }
    }

    /// Append tasks whose id is not already present
    ///
    /// Records with a blank title are skipped. Returns how many were added.
    pub fn import(&mut self, tasks: Vec<Task>) -> Result<usize> {
        let mut seen: HashSet<String> = self.tasks.iter().map(|t| t.id.clone()).collect();
        let original_len = self.tasks.len();
        let mut added = 0;

        for task in tasks {
            if task.title.trim().is_empty() {
                warn!(id = %task.id, "Skipping imported task with empty title");
                continue;
            }
            if !seen.insert(task.id.clone()) {
                debug!(id = %task.id, "Skipping imported task with existing id");
                continue;
            }
            self.tasks.push(task);
            added += 1;
        }

        if added > 0 {
            if let Err(e) = self.persist() {
                self.tasks.truncate(original_len);
                return Err(e);
            }
        }

        info!(added, "Imported tasks");
        Ok(added)
    }

    /// Add the starter tasks, due one to three days after `today`
    pub fn seed_examples(&mut self, today: NaiveDate) -> Result<Vec<Task>> {
        let examples = [
            (
                "Study Rust",
                "Review CRUD concepts and persistent storage",
                "estudos",
                Priority::High,
            ),
            (
                "Go shopping",
                "Buy the essentials for the week",
                "pessoal",
                Priority::Medium,
            ),
            (
                "Team meeting",
                "Present progress on the current project",
                "trabalho",
                Priority::High,
            ),
        ];

        let mut added = Vec::with_capacity(examples.len());
        for (offset, (title, description, category, priority)) in (1u64..).zip(examples) {
            let input = TaskInput::new(title)
                .description(description)
                .category(category)
                .priority(priority)
                .due_date(today.checked_add_days(Days::new(offset)));
            added.push(self.add(input)?);
        }

        Ok(added)
    }
}

/// Decode a stored collection, dropping records that break store invariants
///
/// Only a value that is not a JSON array is discarded as a whole; each
/// element is decoded on its own so one bad record cannot hide the rest.
fn decode_collection(key: &str, raw: &str) -> Vec<Task> {
    let values: Vec<serde_json::Value> = match serde_json::from_str(raw) {
        Ok(values) => values,
        Err(e) => {
            warn!(key, error = %e, "Slot holds malformed data, starting with no tasks");
            return Vec::new();
        }
    };

    let mut seen = HashSet::new();
    let mut tasks = Vec::with_capacity(values.len());

    for (index, value) in values.into_iter().enumerate() {
        let task: Task = match serde_json::from_value(value) {
            Ok(task) => task,
            Err(e) => {
                warn!(key, index, error = %e, "Dropping stored task that failed to decode");
                continue;
            }
        };
        if task.title.trim().is_empty() {
            warn!(key, id = %task.id, "Dropping stored task with empty title");
            continue;
        }
        if !seen.insert(task.id.clone()) {
            warn!(key, id = %task.id, "Dropping stored task with duplicate id");
            continue;
        }
        tasks.push(task);
    }

    tasks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStorage, SqliteStorage};
    use tempfile::TempDir;

    fn new_store() -> TaskStore<MemoryStorage> {
        TaskStore::open(MemoryStorage::new())
    }

    fn titles(tasks: &[&Task]) -> Vec<String> {
        tasks.iter().map(|t| t.title.clone()).collect()
    }

    /// Simulate a restart by reopening on the same storage
    fn reopen(store: TaskStore<MemoryStorage>) -> TaskStore<MemoryStorage> {
        let key = store.key().to_string();
        TaskStore::open_with_key(store.storage, key)
    }

    #[test]
    fn test_open_empty() {
        let store = new_store();
        assert!(store.is_empty());
        assert_eq!(store.stats(), Stats::default());
    }

    #[test]
    fn test_add_prepends_with_fresh_id() {
        let mut store = new_store();

        let a = store.add(TaskInput::new("A")).unwrap();
        let before: Vec<String> = store.tasks().iter().map(|t| t.id.clone()).collect();
        let b = store.add(TaskInput::new("B")).unwrap();

        assert!(!before.contains(&b.id));
        assert_ne!(a.id, b.id);
        assert_eq!(store.len(), 2);
        assert_eq!(store.tasks()[0].id, b.id);
        assert_eq!(store.tasks()[1].id, a.id);
    }

    #[test]
    fn test_add_applies_defaults() {
        let mut store = new_store();

        let task = store.add(TaskInput::new("Write report")).unwrap();
        assert_eq!(task.description, "");
        assert_eq!(task.category.as_str(), "pessoal");
        assert_eq!(task.priority, Priority::Medium);
        assert!(task.due_date.is_none());
        assert!(!task.completed);
    }

    #[test]
    fn test_add_rejects_empty_title() {
        let mut store = new_store();

        assert!(matches!(store.add(TaskInput::new("  ")), Err(TaskError::EmptyTitle)));
        assert!(store.is_empty());
        assert_eq!(store.storage().read(DEFAULT_SLOT_KEY).unwrap(), None);
    }

    #[test]
    fn test_add_persists() {
        let mut store = new_store();
        store.add(TaskInput::new("A")).unwrap();

        let raw = store.storage().read(DEFAULT_SLOT_KEY).unwrap().unwrap();
        assert!(raw.contains("\"title\":\"A\""));
    }

    #[test]
    fn test_update_preserves_identity() {
        let mut store = new_store();
        let original = store.add(TaskInput::new("A")).unwrap();
        store.toggle_completion(&original.id).unwrap();

        let due = NaiveDate::from_ymd_opt(2026, 12, 1);
        let updated = store
            .update(
                &original.id,
                TaskInput::new("A2")
                    .description("details")
                    .category("trabalho")
                    .priority(Priority::High)
                    .due_date(due),
            )
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.created_at, original.created_at);
        assert!(updated.completed);
        assert_eq!(updated.title, "A2");
        assert_eq!(updated.description, "details");
        assert_eq!(updated.category.as_str(), "trabalho");
        assert_eq!(updated.priority, Priority::High);
        assert_eq!(updated.due_date, due);
        assert_eq!(store.get(&original.id), Some(&updated));
    }

    #[test]
    fn test_update_unknown_is_noop() {
        let mut store = new_store();
        store.add(TaskInput::new("A")).unwrap();
        let before = store.tasks().to_vec();

        let result = store.update("missing", TaskInput::new("X")).unwrap();
        assert!(result.is_none());
        assert_eq!(store.tasks(), before.as_slice());
    }

    #[test]
    fn test_update_rejects_empty_title() {
        let mut store = new_store();
        let task = store.add(TaskInput::new("A")).unwrap();

        assert!(matches!(
            store.update(&task.id, TaskInput::new("")),
            Err(TaskError::EmptyTitle)
        ));
        assert_eq!(store.get(&task.id).unwrap().title, "A");
    }

    #[test]
    fn test_toggle_is_involution() {
        let mut store = new_store();
        let task = store.add(TaskInput::new("A")).unwrap();

        assert_eq!(store.toggle_completion(&task.id).unwrap(), Some(true));
        assert_eq!(store.toggle_completion(&task.id).unwrap(), Some(false));
        assert!(!store.get(&task.id).unwrap().completed);
    }

    #[test]
    fn test_toggle_unknown() {
        let mut store = new_store();
        assert_eq!(store.toggle_completion("missing").unwrap(), None);
    }

    #[test]
    fn test_delete_idempotent() {
        let mut store = new_store();
        let a = store.add(TaskInput::new("A")).unwrap();
        store.add(TaskInput::new("B")).unwrap();

        assert!(store.delete(&a.id).unwrap());
        let after_once = store.tasks().to_vec();
        assert!(!store.delete(&a.id).unwrap());
        assert_eq!(store.tasks(), after_once.as_slice());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_clear_all() {
        let mut store = new_store();
        store.add(TaskInput::new("A")).unwrap();
        store.add(TaskInput::new("B")).unwrap();

        assert_eq!(store.clear_all().unwrap(), 2);
        assert!(store.is_empty());
        assert_eq!(store.clear_all().unwrap(), 0);

        let store = reopen(store);
        assert!(store.is_empty());
    }

    #[test]
    fn test_filter_partitions() {
        let mut store = new_store();
        for (title, priority) in [
            ("A", Priority::Low),
            ("B", Priority::High),
            ("C", Priority::Medium),
            ("D", Priority::High),
        ] {
            store.add(TaskInput::new(title).priority(priority)).unwrap();
        }
        let ids: Vec<String> = store.tasks().iter().map(|t| t.id.clone()).collect();
        store.toggle_completion(&ids[0]).unwrap();
        store.toggle_completion(&ids[2]).unwrap();

        let all: HashSet<&str> = store.filter(TaskFilter::All).iter().map(|t| t.id.as_str()).collect();
        let pending: HashSet<&str> = store
            .filter(TaskFilter::Pending)
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        let completed: HashSet<&str> = store
            .filter(TaskFilter::Completed)
            .iter()
            .map(|t| t.id.as_str())
            .collect();

        assert!(pending.is_disjoint(&completed));
        let union: HashSet<&str> = pending.union(&completed).copied().collect();
        assert_eq!(union, all);

        assert_eq!(titles(&store.filter(TaskFilter::High)), vec!["D", "B"]);
    }

    #[test]
    fn test_filter_by_unknown_name_is_all() {
        let mut store = new_store();
        store.add(TaskInput::new("A")).unwrap();
        store.add(TaskInput::new("B")).unwrap();

        assert_eq!(titles(&store.filter_by_name("overdue")), vec!["B", "A"]);
    }

    #[test]
    fn test_stats_sum() {
        let mut store = new_store();
        let a = store.add(TaskInput::new("A")).unwrap();
        store.add(TaskInput::new("B")).unwrap();
        store.add(TaskInput::new("C")).unwrap();
        store.toggle_completion(&a.id).unwrap();

        let stats = store.stats();
        assert_eq!(stats.total, stats.pending + stats.completed);
        assert_eq!(
            stats,
            Stats {
                total: 3,
                pending: 2,
                completed: 1
            }
        );
    }

    #[test]
    fn test_persist_load_round_trip() {
        let mut store = new_store();
        let a = store.add(TaskInput::new("A").category("hobby")).unwrap();
        store
            .add(
                TaskInput::new("B")
                    .priority(Priority::High)
                    .due_date(NaiveDate::from_ymd_opt(2027, 3, 4)),
            )
            .unwrap();
        store.toggle_completion(&a.id).unwrap();
        let before = store.tasks().to_vec();

        let store = reopen(store);
        assert_eq!(store.tasks(), before.as_slice());
        assert_eq!(store.get(&a.id).unwrap().category.as_str(), "hobby");
    }

    #[test]
    fn test_sqlite_round_trip() {
        let temp = TempDir::new().unwrap();
        let before = {
            let mut store = TaskStore::open(SqliteStorage::open(temp.path()).unwrap());
            store.add(TaskInput::new("A")).unwrap();
            store.add(TaskInput::new("B")).unwrap();
            store.tasks().to_vec()
        };

        let store = TaskStore::open(SqliteStorage::open(temp.path()).unwrap());
        assert_eq!(store.tasks(), before.as_slice());
    }

    #[test]
    fn test_separate_keys_are_independent() {
        let mut store = TaskStore::open_with_key(MemoryStorage::new(), "work");
        store.add(TaskInput::new("A")).unwrap();

        let other = TaskStore::open_with_key(store.storage.clone(), "home");
        assert!(other.is_empty());
    }

    #[test]
    fn test_malformed_slot_loads_empty() {
        let mut storage = MemoryStorage::new();
        storage.write(DEFAULT_SLOT_KEY, "{not json").unwrap();

        let mut store = TaskStore::open(storage);
        assert!(store.is_empty());

        store.add(TaskInput::new("A")).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_invalid_key_loads_empty() {
        let mut store = TaskStore::open_with_key(MemoryStorage::new(), "bad key");
        assert!(store.is_empty());
        assert!(matches!(
            store.add(TaskInput::new("A")),
            Err(TaskError::InvalidSlotKey { .. })
        ));
        assert_eq!(store.len(), 0);
    }

    /// Storage whose writes can be switched off
    #[derive(Default)]
    struct FlakyStorage {
        inner: MemoryStorage,
        fail_writes: bool,
    }

    impl SlotStorage for FlakyStorage {
        fn read(&self, key: &str) -> Result<Option<String>> {
            self.inner.read(key)
        }

        fn write(&mut self, key: &str, value: &str) -> Result<()> {
            if self.fail_writes {
                return Err(TaskError::Io(std::io::Error::other("disk full")));
            }
            self.inner.write(key, value)
        }

        fn remove(&mut self, key: &str) -> Result<bool> {
            self.inner.remove(key)
        }
    }

    #[test]
    fn test_failed_write_leaves_collection_unchanged() {
        let mut store = TaskStore::open(FlakyStorage::default());
        let a = store.add(TaskInput::new("A")).unwrap();
        let b = store.add(TaskInput::new("B")).unwrap();
        let before = store.tasks().to_vec();

        store.storage.fail_writes = true;

        assert!(store.add(TaskInput::new("C")).is_err());
        assert!(store.update(&a.id, TaskInput::new("A2")).is_err());
        assert!(store.toggle_completion(&b.id).is_err());
        assert!(store.delete(&a.id).is_err());
        assert!(store.clear_all().is_err());

        let mut imported = a.clone();
        imported.id = "imported".to_string();
        assert!(store.import(vec![imported]).is_err());

        assert_eq!(store.tasks(), before.as_slice());

        // A retry after the storage recovers adds exactly one task
        store.storage.fail_writes = false;
        store.add(TaskInput::new("C")).unwrap();
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_load_keeps_records_next_to_undecodable_ones() {
        let mut storage = MemoryStorage::new();
        storage
            .write(
                DEFAULT_SLOT_KEY,
                r#"[
                    {"id":"1","title":"Keep me","createdAt":"2024-01-01T00:00:00Z"},
                    {"id":"2","title":"Bad priority","priority":"urgent","createdAt":"2024-01-01T00:00:00Z"},
                    {"id":"3","title":"No timestamp"},
                    {"id":"4","title":"Bad date","dueDate":"tomorrow","createdAt":"2024-01-01T00:00:00Z"},
                    {"id":"5","title":"Null description","description":null,"createdAt":"2024-01-01T00:00:00Z"}
                ]"#,
            )
            .unwrap();

        let mut store = TaskStore::open(storage);
        assert_eq!(store.len(), 1);
        assert_eq!(store.tasks()[0].title, "Keep me");

        store.add(TaskInput::new("New")).unwrap();
        let raw = store.storage().read(DEFAULT_SLOT_KEY).unwrap().unwrap();
        assert!(raw.contains("Keep me"));
        assert!(raw.contains("New"));
    }

    #[test]
    fn test_non_array_slot_loads_empty() {
        let mut storage = MemoryStorage::new();
        storage
            .write(DEFAULT_SLOT_KEY, r#"{"id":"1","title":"Not a list"}"#)
            .unwrap();

        assert!(TaskStore::open(storage).is_empty());
    }

    #[test]
    fn test_load_drops_invalid_records() {
        let mut storage = MemoryStorage::new();
        storage
            .write(
                DEFAULT_SLOT_KEY,
                r#"[
                    {"id":"1","title":"Keep","createdAt":"2024-01-01T00:00:00Z"},
                    {"id":"2","title":"  ","createdAt":"2024-01-01T00:00:00Z"},
                    {"id":"1","title":"Duplicate","createdAt":"2024-01-01T00:00:00Z"}
                ]"#,
            )
            .unwrap();

        let store = TaskStore::open(storage);
        assert_eq!(store.len(), 1);
        assert_eq!(store.tasks()[0].title, "Keep");
    }

    #[test]
    fn test_resolve_id() {
        let mut storage = MemoryStorage::new();
        storage
            .write(
                DEFAULT_SLOT_KEY,
                r#"[
                    {"id":"abc-1","title":"One","createdAt":"2024-01-01T00:00:00Z"},
                    {"id":"abc-2","title":"Two","createdAt":"2024-01-01T00:00:00Z"},
                    {"id":"xyz","title":"Three","createdAt":"2024-01-01T00:00:00Z"}
                ]"#,
            )
            .unwrap();
        let store = TaskStore::open(storage);

        assert_eq!(store.resolve_id("xyz").unwrap().as_deref(), Some("xyz"));
        assert_eq!(store.resolve_id("x").unwrap().as_deref(), Some("xyz"));
        assert_eq!(store.resolve_id("abc-2").unwrap().as_deref(), Some("abc-2"));
        assert_eq!(store.resolve_id("nope").unwrap(), None);
        assert_eq!(store.resolve_id("").unwrap(), None);
        assert!(matches!(
            store.resolve_id("abc"),
            Err(TaskError::AmbiguousId { count: 2, .. })
        ));
    }

    #[test]
    fn test_import_skips_existing_and_blank() {
        let mut store = new_store();
        let existing = store.add(TaskInput::new("A")).unwrap();

        let mut blank = existing.clone();
        blank.id = "blank".to_string();
        blank.title = String::new();
        let mut fresh = existing.clone();
        fresh.id = "fresh".to_string();
        fresh.title = "Imported".to_string();

        let added = store.import(vec![existing.clone(), blank, fresh]).unwrap();
        assert_eq!(added, 1);
        assert_eq!(titles(&store.filter(TaskFilter::All)), vec!["A", "Imported"]);

        let store = reopen(store);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_seed_examples() {
        let mut store = new_store();
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();

        let seeded = store.seed_examples(today).unwrap();
        assert_eq!(seeded.len(), 3);
        assert_eq!(seeded[0].due_date, NaiveDate::from_ymd_opt(2026, 10, 19));
        assert_eq!(seeded[2].due_date, NaiveDate::from_ymd_opt(2026, 10, 21));

        // Each example is prepended, so the last one added comes first
        assert_eq!(store.tasks()[0].title, "Team meeting");
        assert_eq!(store.filter(TaskFilter::High).len(), 2);
    }

    #[test]
    fn test_scenario_walkthrough() {
        let mut store = new_store();

        let a = store.add(TaskInput::new("A")).unwrap();
        let b = store.add(TaskInput::new("B")).unwrap();
        assert_eq!(titles(&store.filter_by_name("all")), vec!["B", "A"]);
        assert_eq!(
            store.stats(),
            Stats {
                total: 2,
                pending: 2,
                completed: 0
            }
        );

        store.toggle_completion(&a.id).unwrap();
        assert_eq!(
            store.stats(),
            Stats {
                total: 2,
                pending: 1,
                completed: 1
            }
        );
        assert_eq!(titles(&store.filter_by_name("completed")), vec!["A"]);

        let b2 = store
            .update(
                &b.id,
                TaskInput::new("B2")
                    .description("")
                    .category("pessoal")
                    .priority(Priority::Low)
                    .due_date(None),
            )
            .unwrap()
            .unwrap();
        assert_eq!(b2.title, "B2");
        assert_eq!(b2.id, b.id);
        assert_eq!(b2.created_at, b.created_at);

        assert!(store.delete(&a.id).unwrap());
        assert!(!store.delete(&a.id).unwrap());
        assert_eq!(titles(&store.filter(TaskFilter::All)), vec!["B2"]);
    }
}
