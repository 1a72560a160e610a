use chrono::{DateTime, Utc};
use sea_query::Value;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, types::Text};
use validator::Validate;

use magnus_db::table;
use magnus_shared::{EntityRef, Resource, sql, types::DependencyType};

#[derive(Debug, FromRow)]
pub struct TaskDependencyRow {
    pub id: i64,
    pub dependency_type: Text<DependencyType>,
    pub notes: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub prerequisite_task_id: i64,
    pub dependent_task_id: i64,
}

/// `dependent_task` cannot start before `prerequisite_task`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TaskDependency {
    pub id: Option<i64>,
    #[validate(required)]
    pub dependency_type: Option<DependencyType>,
    #[validate(length(max = 500))]
    pub notes: Option<String>,
    #[validate(required)]
    pub is_active: Option<bool>,
    #[validate(required)]
    pub created_at: Option<DateTime<Utc>>,
    #[validate(required)]
    pub prerequisite_task: Option<EntityRef>,
    #[validate(required)]
    pub dependent_task: Option<EntityRef>,
}

impl From<TaskDependencyRow> for TaskDependency {
    fn from(row: TaskDependencyRow) -> Self {
        Self {
            id: Some(row.id),
            dependency_type: Some(row.dependency_type.0),
            notes: row.notes,
            is_active: Some(row.is_active),
            created_at: Some(row.created_at),
            prerequisite_task: Some(row.prerequisite_task_id.into()),
            dependent_task: Some(row.dependent_task_id.into()),
        }
    }
}

impl Resource for TaskDependency {
    type Row = TaskDependencyRow;
    type Column = table::TaskDependency;

    const ENTITY_NAME: &'static str = "taskDependency";
    const TABLE: table::TaskDependency = table::TaskDependency::Table;
    const ID: table::TaskDependency = table::TaskDependency::Id;
    const COLUMNS: &'static [table::TaskDependency] = &[
        table::TaskDependency::DependencyType,
        table::TaskDependency::Notes,
        table::TaskDependency::IsActive,
        table::TaskDependency::CreatedAt,
        table::TaskDependency::PrerequisiteTaskId,
        table::TaskDependency::DependentTaskId,
    ];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }

    fn values(&self) -> Vec<Value> {
        vec![
            sql::name(self.dependency_type),
            self.notes.clone().into(),
            self.is_active.into(),
            self.created_at.into(),
            sql::reference(self.prerequisite_task),
            sql::reference(self.dependent_task),
        ]
    }
}
