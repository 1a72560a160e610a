use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sea_query::Value;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, types::Text};
use validator::Validate;

use magnus_db::table;
use magnus_shared::{
    EntityRef,
    Resource,
    entity_ref,
    sql,
    types::{ConflictStatus, TaskPriority, TaskStatus, TaskType, UserRole},
};

#[derive(Debug, FromRow)]
pub struct TaskRow {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    #[sqlx(rename = "type")]
    pub kind: Text<TaskType>,
    pub priority: Text<TaskPriority>,
    pub status: Text<TaskStatus>,
    pub assigned_to_role: Text<UserRole>,
    pub due_date: NaiveDate,
    pub due_time: Option<NaiveTime>,
    pub estimated_duration: Option<i32>,
    pub actual_duration: Option<i32>,
    pub location: Option<String>,
    pub requirements: Option<String>,
    pub notes: Option<String>,
    pub invoice_url: Option<String>,
    pub auto_scheduled: bool,
    pub is_recurring: bool,
    pub parent_task_id: Option<String>,
    pub completed_at: Option<DateTime<Utc>>,
    pub started_at: Option<DateTime<Utc>>,
    pub version: i32,
    pub conflict_status: Text<ConflictStatus>,
    pub last_modified_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by_id: i64,
    pub assigned_to_id: Option<i64>,
    pub weekly_plan_id: Option<i64>,
    pub related_budget_id: i64,
}

/// A unit of work assigned to a role, usually generated for a reserved budget.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Option<i64>,
    #[validate(required, length(max = 200))]
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    #[validate(required)]
    pub kind: Option<TaskType>,
    #[validate(required)]
    pub priority: Option<TaskPriority>,
    #[validate(required)]
    pub status: Option<TaskStatus>,
    #[validate(required)]
    pub assigned_to_role: Option<UserRole>,
    #[validate(required)]
    pub due_date: Option<NaiveDate>,
    pub due_time: Option<NaiveTime>,
    #[validate(range(min = 0))]
    pub estimated_duration: Option<i32>,
    #[validate(range(min = 0))]
    pub actual_duration: Option<i32>,
    #[validate(length(max = 200))]
    pub location: Option<String>,
    pub requirements: Option<String>,
    pub notes: Option<String>,
    #[validate(length(max = 500))]
    pub invoice_url: Option<String>,
    #[validate(required)]
    pub auto_scheduled: Option<bool>,
    #[validate(required)]
    pub is_recurring: Option<bool>,
    #[validate(length(max = 100))]
    pub parent_task_id: Option<String>,
    pub completed_at: Option<DateTime<Utc>>,
    pub started_at: Option<DateTime<Utc>>,
    #[validate(required, range(min = 1))]
    pub version: Option<i32>,
    #[validate(required)]
    pub conflict_status: Option<ConflictStatus>,
    #[validate(length(max = 50))]
    pub last_modified_by: Option<String>,
    #[validate(required)]
    pub created_at: Option<DateTime<Utc>>,
    #[validate(required)]
    pub updated_at: Option<DateTime<Utc>>,
    #[validate(required)]
    pub created_by: Option<EntityRef>,
    pub assigned_to: Option<EntityRef>,
    pub weekly_plan: Option<EntityRef>,
    #[validate(required)]
    pub related_budget: Option<EntityRef>,
}

impl From<TaskRow> for Task {
    fn from(row: TaskRow) -> Self {
        Self {
            id: Some(row.id),
            title: Some(row.title),
            description: row.description,
            kind: Some(row.kind.0),
            priority: Some(row.priority.0),
            status: Some(row.status.0),
            assigned_to_role: Some(row.assigned_to_role.0),
            due_date: Some(row.due_date),
            due_time: row.due_time,
            estimated_duration: row.estimated_duration,
            actual_duration: row.actual_duration,
            location: row.location,
            requirements: row.requirements,
            notes: row.notes,
            invoice_url: row.invoice_url,
            auto_scheduled: Some(row.auto_scheduled),
            is_recurring: Some(row.is_recurring),
            parent_task_id: row.parent_task_id,
            completed_at: row.completed_at,
            started_at: row.started_at,
            version: Some(row.version),
            conflict_status: Some(row.conflict_status.0),
            last_modified_by: row.last_modified_by,
            created_at: Some(row.created_at),
            updated_at: Some(row.updated_at),
            created_by: Some(row.created_by_id.into()),
            assigned_to: entity_ref(row.assigned_to_id),
            weekly_plan: entity_ref(row.weekly_plan_id),
            related_budget: Some(row.related_budget_id.into()),
        }
    }
}

impl Resource for Task {
    type Row = TaskRow;
    type Column = table::Task;

    const ENTITY_NAME: &'static str = "task";
    const TABLE: table::Task = table::Task::Table;
    const ID: table::Task = table::Task::Id;
    const COLUMNS: &'static [table::Task] = &[
        table::Task::Title,
        table::Task::Description,
        table::Task::Type,
        table::Task::Priority,
        table::Task::Status,
        table::Task::AssignedToRole,
        table::Task::DueDate,
        table::Task::DueTime,
        table::Task::EstimatedDuration,
        table::Task::ActualDuration,
        table::Task::Location,
        table::Task::Requirements,
        table::Task::Notes,
        table::Task::InvoiceUrl,
        table::Task::AutoScheduled,
        table::Task::IsRecurring,
        table::Task::ParentTaskId,
        table::Task::CompletedAt,
        table::Task::StartedAt,
        table::Task::Version,
        table::Task::ConflictStatus,
        table::Task::LastModifiedBy,
        table::Task::CreatedAt,
        table::Task::UpdatedAt,
        table::Task::CreatedById,
        table::Task::AssignedToId,
        table::Task::WeeklyPlanId,
        table::Task::RelatedBudgetId,
    ];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.title.clone().into(),
            self.description.clone().into(),
            sql::name(self.kind),
            sql::name(self.priority),
            sql::name(self.status),
            sql::name(self.assigned_to_role),
            self.due_date.into(),
            self.due_time.into(),
            self.estimated_duration.into(),
            self.actual_duration.into(),
            self.location.clone().into(),
            self.requirements.clone().into(),
            self.notes.clone().into(),
            self.invoice_url.clone().into(),
            self.auto_scheduled.into(),
            self.is_recurring.into(),
            self.parent_task_id.clone().into(),
            self.completed_at.into(),
            self.started_at.into(),
            self.version.into(),
            sql::name(self.conflict_status),
            self.last_modified_by.clone().into(),
            self.created_at.into(),
            self.updated_at.into(),
            sql::reference(self.created_by),
            sql::reference(self.assigned_to),
            sql::reference(self.weekly_plan),
            sql::reference(self.related_budget),
        ]
    }
}
