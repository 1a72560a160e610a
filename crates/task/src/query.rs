use magnus_db::table;
use magnus_shared::{Repository, Result};
use sqlx::SqlitePool;

use crate::{Task, TaskDependency};

#[derive(Clone)]
pub struct Query(pub SqlitePool);

impl Query {
    pub async fn tasks_by_budget(&self, budget_id: i64) -> Result<Vec<Task>> {
        Repository::<Task>::new(self.0.clone())
            .find_by(table::Task::RelatedBudgetId, budget_id)
            .await
    }

    /// Dependencies that block `task_id`.
    pub async fn dependencies_by_dependent(&self, task_id: i64) -> Result<Vec<TaskDependency>> {
        Repository::<TaskDependency>::new(self.0.clone())
            .find_by(table::TaskDependency::DependentTaskId, task_id)
            .await
    }

    /// Dependencies that `task_id` blocks.
    pub async fn dependencies_by_prerequisite(
        &self,
        task_id: i64,
    ) -> Result<Vec<TaskDependency>> {
        Repository::<TaskDependency>::new(self.0.clone())
            .find_by(table::TaskDependency::PrerequisiteTaskId, task_id)
            .await
    }
}
