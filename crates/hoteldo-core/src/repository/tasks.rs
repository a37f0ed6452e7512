use crate::error::CoreError;
use crate::models::{validate_title, CreateResult, NewTaskData, Task, TaskFilter, TaskPage};
use crate::repository::SqliteRepository;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{QueryBuilder, Sqlite};

#[async_trait]
impl super::TaskRepository for SqliteRepository {
    async fn create_if_absent(&self, data: NewTaskData) -> Result<CreateResult, CoreError> {
        let title = validate_title(&data.title)?;

        loop {
            // Best-effort pre-check: keeps the common duplicate path to a
            // single read and gives the seeder its idempotent fast path.
            if let Some(existing) = self.find_open_duplicate(&title, data.due_date).await? {
                return Ok(CreateResult::AlreadyExists(existing));
            }

            // The guarded insert is one atomic statement, so two callers
            // racing past the pre-check cannot both insert. The guard only
            // covers open tasks: a completed duplicate never blocks.
            let inserted: Option<Task> = sqlx::query_as(
                r#"INSERT INTO tasks (title, due_date, is_done, created_at, is_recurring, display_order)
                SELECT $1, $2, 0, $3, $4, $5
                WHERE NOT EXISTS (
                    SELECT 1 FROM tasks WHERE title = $1 AND due_date = $2 AND is_done = 0
                )
                RETURNING *"#,
            )
            .bind(&title)
            .bind(data.due_date)
            .bind(self.clock().now_utc())
            .bind(data.is_recurring)
            .bind(data.display_order)
            .fetch_optional(self.pool())
            .await?;

            if let Some(task) = inserted {
                return Ok(CreateResult::Created(task));
            }
            // Lost the race: an identical open task appeared between the
            // pre-check and the insert. Loop to return the winner's row
            // (or to insert, should the winner have been completed since).
        }
    }

    async fn find_task_by_id(&self, id: i64) -> Result<Option<Task>, CoreError> {
        let task = sqlx::query_as("SELECT * FROM tasks WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool())
            .await?;
        Ok(task)
    }

    async fn list_tasks(&self, filter: &TaskFilter) -> Result<TaskPage, CoreError> {
        filter.validate()?;

        let mut count_query: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT COUNT(*) FROM tasks");
        push_filter_clauses(&mut count_query, filter);
        let total: i64 = count_query
            .build_query_scalar()
            .fetch_one(self.pool())
            .await?;

        let mut query: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT * FROM tasks");
        push_filter_clauses(&mut query, filter);
        query.push(" ORDER BY is_done ASC, display_order ASC, due_date ASC, created_at DESC");
        query.push(" LIMIT ");
        query.push_bind(filter.limit);
        query.push(" OFFSET ");
        query.push_bind(filter.offset);

        let tasks = query.build_query_as().fetch_all(self.pool()).await?;

        Ok(TaskPage {
            tasks,
            total,
            limit: filter.limit,
            offset: filter.offset,
        })
    }

    async fn toggle_done(&self, id: i64) -> Result<Task, CoreError> {
        let mut tx = self.pool().begin().await?;

        let task: Task = sqlx::query_as("SELECT * FROM tasks WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(CoreError::NotFound(id))?;

        let done_at = if task.is_done {
            None
        } else {
            Some(self.clock().now_utc())
        };

        let updated: Task = sqlx::query_as(
            "UPDATE tasks SET is_done = $1, done_at = $2 WHERE id = $3 RETURNING *",
        )
        .bind(!task.is_done)
        .bind(done_at)
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(updated)
    }

    async fn rename_task(&self, id: i64, new_title: &str) -> Result<Task, CoreError> {
        let title = validate_title(new_title)?;

        // No open-duplicate check against the new title: renames are rare
        // and manual, and the collision is accepted behavior.
        let updated = sqlx::query_as("UPDATE tasks SET title = $1 WHERE id = $2 RETURNING *")
            .bind(&title)
            .bind(id)
            .fetch_optional(self.pool())
            .await?
            .ok_or(CoreError::NotFound(id))?;
        Ok(updated)
    }

    async fn delete_task(&self, id: i64) -> Result<(), CoreError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound(id));
        }
        Ok(())
    }

    async fn health_check(&self) -> Result<(), CoreError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(self.pool())
            .await?;
        Ok(())
    }
}

impl SqliteRepository {
    async fn find_open_duplicate(
        &self,
        title: &str,
        due_date: NaiveDate,
    ) -> Result<Option<Task>, CoreError> {
        let task = sqlx::query_as(
            "SELECT * FROM tasks WHERE title = $1 AND due_date = $2 AND is_done = 0",
        )
        .bind(title)
        .bind(due_date)
        .fetch_optional(self.pool())
        .await?;
        Ok(task)
    }
}

fn push_filter_clauses(query: &mut QueryBuilder<Sqlite>, filter: &TaskFilter) {
    let mut separator = " WHERE ";
    if let Some(due_from) = filter.due_from {
        query.push(separator).push("due_date >= ").push_bind(due_from);
        separator = " AND ";
    }
    if let Some(due_to) = filter.due_to {
        query.push(separator).push("due_date <= ").push_bind(due_to);
        separator = " AND ";
    }
    if let Some(is_done) = filter.is_done {
        query.push(separator).push("is_done = ").push_bind(is_done);
    }
}
