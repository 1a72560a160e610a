use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
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
    types::{TaskPriority, TaskStatus},
    validate::non_negative,
};

#[derive(Debug, FromRow)]
pub struct NeedRow {
    pub id: i64,
    pub description: String,
    pub quantity: i32,
    pub unit: Option<String>,
    pub urgency: Text<TaskPriority>,
    pub status: Text<TaskStatus>,
    pub requested_date: NaiveDate,
    pub required_date: Option<NaiveDate>,
    pub fulfilled_date: Option<NaiveDate>,
    pub estimated_cost: Option<Text<Decimal>>,
    pub actual_cost: Option<Text<Decimal>>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub requested_by_id: i64,
    pub fulfilled_by_id: Option<i64>,
    pub parent_task_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Need {
    pub id: Option<i64>,
    #[validate(required, length(max = 500))]
    pub description: Option<String>,
    #[validate(required, range(min = 1))]
    pub quantity: Option<i32>,
    #[validate(length(max = 20))]
    pub unit: Option<String>,
    #[validate(required)]
    pub urgency: Option<TaskPriority>,
    #[validate(required)]
    pub status: Option<TaskStatus>,
    #[validate(required)]
    pub requested_date: Option<NaiveDate>,
    pub required_date: Option<NaiveDate>,
    pub fulfilled_date: Option<NaiveDate>,
    #[validate(custom(function = "non_negative"))]
    pub estimated_cost: Option<Decimal>,
    #[validate(custom(function = "non_negative"))]
    pub actual_cost: Option<Decimal>,
    pub notes: Option<String>,
    #[validate(required)]
    pub created_at: Option<DateTime<Utc>>,
    #[validate(required)]
    pub updated_at: Option<DateTime<Utc>>,
    #[validate(required)]
    pub requested_by: Option<EntityRef>,
    pub fulfilled_by: Option<EntityRef>,
    #[validate(required)]
    pub parent_task: Option<EntityRef>,
}

impl From<NeedRow> for Need {
    fn from(row: NeedRow) -> Self {
        Self {
            id: Some(row.id),
            description: Some(row.description),
            quantity: Some(row.quantity),
            unit: row.unit,
            urgency: Some(row.urgency.0),
            status: Some(row.status.0),
            requested_date: Some(row.requested_date),
            required_date: row.required_date,
            fulfilled_date: row.fulfilled_date,
            estimated_cost: sql::text(row.estimated_cost),
            actual_cost: sql::text(row.actual_cost),
            notes: row.notes,
            created_at: Some(row.created_at),
            updated_at: Some(row.updated_at),
            requested_by: Some(row.requested_by_id.into()),
            fulfilled_by: entity_ref(row.fulfilled_by_id),
            parent_task: Some(row.parent_task_id.into()),
        }
    }
}

impl Resource for Need {
    type Row = NeedRow;
    type Column = table::Need;

    const ENTITY_NAME: &'static str = "need";
    const TABLE: table::Need = table::Need::Table;
    const ID: table::Need = table::Need::Id;
    const COLUMNS: &'static [table::Need] = &[
        table::Need::Description,
        table::Need::Quantity,
        table::Need::Unit,
        table::Need::Urgency,
        table::Need::Status,
        table::Need::RequestedDate,
        table::Need::RequiredDate,
        table::Need::FulfilledDate,
        table::Need::EstimatedCost,
        table::Need::ActualCost,
        table::Need::Notes,
        table::Need::CreatedAt,
        table::Need::UpdatedAt,
        table::Need::RequestedById,
        table::Need::FulfilledById,
        table::Need::ParentTaskId,
    ];
    const MONEY: &'static [table::Need] = &[
        table::Need::EstimatedCost,
        table::Need::ActualCost,
    ];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.description.clone().into(),
            self.quantity.into(),
            self.unit.clone().into(),
            sql::name(self.urgency),
            sql::name(self.status),
            self.requested_date.into(),
            self.required_date.into(),
            self.fulfilled_date.into(),
            sql::money(self.estimated_cost),
            sql::money(self.actual_cost),
            self.notes.clone().into(),
            self.created_at.into(),
            self.updated_at.into(),
            sql::reference(self.requested_by),
            sql::reference(self.fulfilled_by),
            sql::reference(self.parent_task),
        ]
    }
}
