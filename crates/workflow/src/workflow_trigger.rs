use chrono::{DateTime, Utc};
use sea_query::Value;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use magnus_db::table;
use magnus_shared::{EntityRef, Resource, sql};

#[derive(Debug, FromRow)]
pub struct WorkflowTriggerRow {
    pub id: i64,
    pub trigger_name: String,
    pub entity_type: String,
    pub trigger_condition: String,
    pub action_type: String,
    pub action_configuration: Option<String>,
    pub is_active: bool,
    pub execution_order: i32,
    pub last_executed: Option<DateTime<Utc>>,
    pub execution_count: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by_id: i64,
}

/// A stored automation rule. Conditions are kept as text and not evaluated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowTrigger {
    pub id: Option<i64>,
    #[validate(required, length(max = 100))]
    pub trigger_name: Option<String>,
    #[validate(required, length(max = 50))]
    pub entity_type: Option<String>,
    #[validate(required)]
    pub trigger_condition: Option<String>,
    #[validate(required, length(max = 50))]
    pub action_type: Option<String>,
    pub action_configuration: Option<String>,
    #[validate(required)]
    pub is_active: Option<bool>,
    #[validate(required, range(min = 1))]
    pub execution_order: Option<i32>,
    pub last_executed: Option<DateTime<Utc>>,
    #[validate(range(min = 0))]
    pub execution_count: Option<i32>,
    #[validate(required)]
    pub created_at: Option<DateTime<Utc>>,
    #[validate(required)]
    pub updated_at: Option<DateTime<Utc>>,
    #[validate(required)]
    pub created_by: Option<EntityRef>,
}

impl From<WorkflowTriggerRow> for WorkflowTrigger {
    fn from(row: WorkflowTriggerRow) -> Self {
        Self {
            id: Some(row.id),
            trigger_name: Some(row.trigger_name),
            entity_type: Some(row.entity_type),
            trigger_condition: Some(row.trigger_condition),
            action_type: Some(row.action_type),
            action_configuration: row.action_configuration,
            is_active: Some(row.is_active),
            execution_order: Some(row.execution_order),
            last_executed: row.last_executed,
            execution_count: row.execution_count,
            created_at: Some(row.created_at),
            updated_at: Some(row.updated_at),
            created_by: Some(row.created_by_id.into()),
        }
    }
}

impl Resource for WorkflowTrigger {
    type Row = WorkflowTriggerRow;
    type Column = table::WorkflowTrigger;

    const ENTITY_NAME: &'static str = "workflowTrigger";
    const TABLE: table::WorkflowTrigger = table::WorkflowTrigger::Table;
    const ID: table::WorkflowTrigger = table::WorkflowTrigger::Id;
    const COLUMNS: &'static [table::WorkflowTrigger] = &[
        table::WorkflowTrigger::TriggerName,
        table::WorkflowTrigger::EntityType,
        table::WorkflowTrigger::TriggerCondition,
        table::WorkflowTrigger::ActionType,
        table::WorkflowTrigger::ActionConfiguration,
        table::WorkflowTrigger::IsActive,
        table::WorkflowTrigger::ExecutionOrder,
        table::WorkflowTrigger::LastExecuted,
        table::WorkflowTrigger::ExecutionCount,
        table::WorkflowTrigger::CreatedAt,
        table::WorkflowTrigger::UpdatedAt,
        table::WorkflowTrigger::CreatedById,
    ];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.trigger_name.clone().into(),
            self.entity_type.clone().into(),
            self.trigger_condition.clone().into(),
            self.action_type.clone().into(),
            self.action_configuration.clone().into(),
            self.is_active.into(),
            self.execution_order.into(),
            self.last_executed.into(),
            self.execution_count.into(),
            self.created_at.into(),
            self.updated_at.into(),
            sql::reference(self.created_by),
        ]
    }
}
