use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_query::Value;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, types::Text};
use validator::Validate;

use magnus_db::table;
use magnus_shared::{EntityRef, Resource, sql, types::WeeklyPlanStatus, validate::non_negative};

#[derive(Debug, FromRow)]
pub struct WeeklyPlanRow {
    pub id: i64,
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub plan_name: String,
    pub status: Text<WeeklyPlanStatus>,
    pub total_budgets: Option<i32>,
    pub total_guests: Option<i32>,
    pub estimated_cost: Option<Text<Decimal>>,
    pub actual_cost: Option<Text<Decimal>>,
    pub notes: Option<String>,
    pub is_consolidated: bool,
    pub consolidated_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyPlan {
    pub id: Option<i64>,
    #[validate(required)]
    pub week_start: Option<NaiveDate>,
    #[validate(required)]
    pub week_end: Option<NaiveDate>,
    #[validate(required, length(max = 100))]
    pub plan_name: Option<String>,
    #[validate(required)]
    pub status: Option<WeeklyPlanStatus>,
    #[validate(range(min = 0))]
    pub total_budgets: Option<i32>,
    #[validate(range(min = 0))]
    pub total_guests: Option<i32>,
    #[validate(custom(function = "non_negative"))]
    pub estimated_cost: Option<Decimal>,
    #[validate(custom(function = "non_negative"))]
    pub actual_cost: Option<Decimal>,
    pub notes: Option<String>,
    #[validate(required)]
    pub is_consolidated: Option<bool>,
    pub consolidated_at: Option<DateTime<Utc>>,
    #[validate(required)]
    pub created_at: Option<DateTime<Utc>>,
    #[validate(required)]
    pub updated_at: Option<DateTime<Utc>>,
    #[validate(required)]
    pub created_by: Option<EntityRef>,
}

impl From<WeeklyPlanRow> for WeeklyPlan {
    fn from(row: WeeklyPlanRow) -> Self {
        Self {
            id: Some(row.id),
            week_start: Some(row.week_start),
            week_end: Some(row.week_end),
            plan_name: Some(row.plan_name),
            status: Some(row.status.0),
            total_budgets: row.total_budgets,
            total_guests: row.total_guests,
            estimated_cost: sql::text(row.estimated_cost),
            actual_cost: sql::text(row.actual_cost),
            notes: row.notes,
            is_consolidated: Some(row.is_consolidated),
            consolidated_at: row.consolidated_at,
            created_at: Some(row.created_at),
            updated_at: Some(row.updated_at),
            created_by: Some(row.created_by_id.into()),
        }
    }
}

impl Resource for WeeklyPlan {
    type Row = WeeklyPlanRow;
    type Column = table::WeeklyPlan;

    const ENTITY_NAME: &'static str = "weeklyPlan";
    const TABLE: table::WeeklyPlan = table::WeeklyPlan::Table;
    const ID: table::WeeklyPlan = table::WeeklyPlan::Id;
    const COLUMNS: &'static [table::WeeklyPlan] = &[
        table::WeeklyPlan::WeekStart,
        table::WeeklyPlan::WeekEnd,
        table::WeeklyPlan::PlanName,
        table::WeeklyPlan::Status,
        table::WeeklyPlan::TotalBudgets,
        table::WeeklyPlan::TotalGuests,
        table::WeeklyPlan::EstimatedCost,
        table::WeeklyPlan::ActualCost,
        table::WeeklyPlan::Notes,
        table::WeeklyPlan::IsConsolidated,
        table::WeeklyPlan::ConsolidatedAt,
        table::WeeklyPlan::CreatedAt,
        table::WeeklyPlan::UpdatedAt,
        table::WeeklyPlan::CreatedById,
    ];
    const MONEY: &'static [table::WeeklyPlan] = &[
        table::WeeklyPlan::EstimatedCost,
        table::WeeklyPlan::ActualCost,
    ];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.week_start.into(),
            self.week_end.into(),
            self.plan_name.clone().into(),
            sql::name(self.status),
            self.total_budgets.into(),
            self.total_guests.into(),
            sql::money(self.estimated_cost),
            sql::money(self.actual_cost),
            self.notes.clone().into(),
            self.is_consolidated.into(),
            self.consolidated_at.into(),
            self.created_at.into(),
            self.updated_at.into(),
            sql::reference(self.created_by),
        ]
    }
}
