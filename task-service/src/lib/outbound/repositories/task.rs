use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::task::models::Task;
use crate::domain::task::models::TaskId;
use crate::domain::task::ports::TaskRepository;
use crate::domain::user::models::UserId;
use crate::task::errors::TaskError;

/// PostgreSQL-backed task store. Every query is scoped to the owner.
pub struct PostgresTaskRepository {
    pool: PgPool,
}

impl PostgresTaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct TaskRow {
    id: i64,
    owner_id: i64,
    title: String,
    completed: bool,
}

impl From<TaskRow> for Task {
    fn from(row: TaskRow) -> Self {
        Task {
            id: TaskId(row.id),
            owner_id: UserId(row.owner_id),
            title: row.title,
            completed: row.completed,
        }
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn create(&self, owner_id: &UserId, title: &str) -> Result<Task, TaskError> {
        let row = sqlx::query_as::<_, TaskRow>(
            r#"
            INSERT INTO tasks (owner_id, title)
            VALUES ($1, $2)
            RETURNING id, owner_id, title, completed
            "#,
        )
        .bind(owner_id.0)
        .bind(title)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| TaskError::DatabaseError(e.to_string()))?;

        Ok(row.into())
    }

    async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<Task>, TaskError> {
        let rows = sqlx::query_as::<_, TaskRow>(
            r#"
            SELECT id, owner_id, title, completed
            FROM tasks
            WHERE owner_id = $1
            ORDER BY id
            "#,
        )
        .bind(owner_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| TaskError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Task::from).collect())
    }

    async fn find_for_owner(
        &self,
        id: &TaskId,
        owner_id: &UserId,
    ) -> Result<Option<Task>, TaskError> {
        let row = sqlx::query_as::<_, TaskRow>(
            r#"
            SELECT id, owner_id, title, completed
            FROM tasks
            WHERE id = $1 AND owner_id = $2
            "#,
        )
        .bind(id.0)
        .bind(owner_id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| TaskError::DatabaseError(e.to_string()))?;

        Ok(row.map(Task::from))
    }

    async fn update(&self, task: Task) -> Result<Task, TaskError> {
        let result = sqlx::query(
            r#"
            UPDATE tasks
            SET title = $3, completed = $4
            WHERE id = $1 AND owner_id = $2
            "#,
        )
        .bind(task.id.0)
        .bind(task.owner_id.0)
        .bind(&task.title)
        .bind(task.completed)
        .execute(&self.pool)
        .await
        .map_err(|e| TaskError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(TaskError::NotFound(task.id.to_string()));
        }

        Ok(task)
    }

    async fn delete_for_owner(&self, id: &TaskId, owner_id: &UserId) -> Result<(), TaskError> {
        let result = sqlx::query(
            r#"
            DELETE FROM tasks
            WHERE id = $1 AND owner_id = $2
            "#,
        )
        .bind(id.0)
        .bind(owner_id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| TaskError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(TaskError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
