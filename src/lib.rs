// tasklist - Persistent task list with filtering, backed by a key-value slot

pub mod config;
pub mod error;
pub mod filter;
pub mod jsonl;
pub mod models;
pub mod record;
pub mod render;
pub mod storage;
pub mod store;

// Re-export main types for convenience
pub use config::Config;
pub use error::{Result, TaskError};
pub use filter::{Filter, FilterOp, TaskFilter};
pub use models::{Category, Priority, Stats, Task, TaskInput, parse_due_date};
pub use record::{IndexValue, Record};
pub use storage::{MemoryStorage, SlotStorage, SqliteStorage};
pub use store::{DEFAULT_SLOT_KEY, TaskStore};
