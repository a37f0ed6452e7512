use crate::clock::{Clock, SystemClock};
use crate::db::DbPool;
use crate::error::CoreError;
use crate::models::{CreateResult, NewTaskData, Task, TaskFilter, TaskPage};
use async_trait::async_trait;

pub mod tasks;

/// Data access contract for the task store. Implemented against SQLite;
/// callers depend on the trait so tests and future backends can swap in.
#[async_trait]
pub trait TaskRepository {
    /// Creates an open task unless an identical open `(title, due_date)`
    /// task already exists, in which case the existing row is returned.
    /// Safe to call repeatedly with the same input.
    async fn create_if_absent(&self, data: NewTaskData) -> Result<CreateResult, CoreError>;

    async fn find_task_by_id(&self, id: i64) -> Result<Option<Task>, CoreError>;

    /// Lists tasks matching `filter`, open before done, then ascending
    /// `display_order`, ascending `due_date`, descending `created_at`.
    async fn list_tasks(&self, filter: &TaskFilter) -> Result<TaskPage, CoreError>;

    /// Flips completion state, stamping or clearing `done_at`.
    async fn toggle_done(&self, id: i64) -> Result<Task, CoreError>;

    /// Retitles a task. The open-duplicate rule is deliberately not
    /// re-checked here; a rename may create a title collision.
    async fn rename_task(&self, id: i64, new_title: &str) -> Result<Task, CoreError>;

    async fn delete_task(&self, id: i64) -> Result<(), CoreError>;

    /// Liveness probe: one round-trip against the storage connection.
    async fn health_check(&self) -> Result<(), CoreError>;
}

/// SQLite implementation of the repository pattern.
pub struct SqliteRepository {
    pool: DbPool,
    clock: Box<dyn Clock>,
}

impl SqliteRepository {
    pub fn new(pool: DbPool) -> Self {
        Self::with_clock(pool, Box::new(SystemClock))
    }

    /// Injects a clock for `created_at`/`done_at` stamps, so tests can
    /// pin time instead of depending on the wall clock.
    pub fn with_clock(pool: DbPool, clock: Box<dyn Clock>) -> Self {
        Self { pool, clock }
    }

    pub(crate) fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub(crate) fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }
}
