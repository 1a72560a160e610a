use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sea_query::Value;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, types::Text};
use validator::Validate;

use magnus_db::table;
use magnus_shared::{EntityRef, Resource, entity_ref, sql, types::{ConflictStatus, MealType}};

#[derive(Debug, FromRow)]
pub struct CookingScheduleRow {
    pub id: i64,
    pub event_date: NaiveDate,
    pub cooking_time: NaiveTime,
    pub meal_type: Text<MealType>,
    pub menu_name: String,
    pub guest_count: i32,
    pub special_instructions: Option<String>,
    pub is_completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
    pub ingredients_ready: bool,
    pub estimated_duration: Option<i32>,
    pub actual_duration: Option<i32>,
    pub started_at: Option<DateTime<Utc>>,
    pub version: i32,
    pub conflict_status: Text<ConflictStatus>,
    pub last_modified_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub related_task_id: Option<i64>,
    pub budget_id: i64,
}

/// When and what the kitchen cooks for a budget.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CookingSchedule {
    pub id: Option<i64>,
    #[validate(required)]
    pub event_date: Option<NaiveDate>,
    #[validate(required)]
    pub cooking_time: Option<NaiveTime>,
    #[validate(required)]
    pub meal_type: Option<MealType>,
    #[validate(required, length(max = 100))]
    pub menu_name: Option<String>,
    #[validate(required, range(min = 1))]
    pub guest_count: Option<i32>,
    pub special_instructions: Option<String>,
    #[validate(required)]
    pub is_completed: Option<bool>,
    pub completed_at: Option<DateTime<Utc>>,
    #[validate(required)]
    pub ingredients_ready: Option<bool>,
    #[validate(range(min = 0))]
    pub estimated_duration: Option<i32>,
    #[validate(range(min = 0))]
    pub actual_duration: Option<i32>,
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
    pub related_task: Option<EntityRef>,
    #[validate(required)]
    pub budget: Option<EntityRef>,
}

impl From<CookingScheduleRow> for CookingSchedule {
    fn from(row: CookingScheduleRow) -> Self {
        Self {
            id: Some(row.id),
            event_date: Some(row.event_date),
            cooking_time: Some(row.cooking_time),
            meal_type: Some(row.meal_type.0),
            menu_name: Some(row.menu_name),
            guest_count: Some(row.guest_count),
            special_instructions: row.special_instructions,
            is_completed: Some(row.is_completed),
            completed_at: row.completed_at,
            ingredients_ready: Some(row.ingredients_ready),
            estimated_duration: row.estimated_duration,
            actual_duration: row.actual_duration,
            started_at: row.started_at,
            version: Some(row.version),
            conflict_status: Some(row.conflict_status.0),
            last_modified_by: row.last_modified_by,
            created_at: Some(row.created_at),
            updated_at: Some(row.updated_at),
            related_task: entity_ref(row.related_task_id),
            budget: Some(row.budget_id.into()),
        }
    }
}

impl Resource for CookingSchedule {
    type Row = CookingScheduleRow;
    type Column = table::CookingSchedule;

    const ENTITY_NAME: &'static str = "cookingSchedule";
    const TABLE: table::CookingSchedule = table::CookingSchedule::Table;
    const ID: table::CookingSchedule = table::CookingSchedule::Id;
    const COLUMNS: &'static [table::CookingSchedule] = &[
        table::CookingSchedule::EventDate,
        table::CookingSchedule::CookingTime,
        table::CookingSchedule::MealType,
        table::CookingSchedule::MenuName,
        table::CookingSchedule::GuestCount,
        table::CookingSchedule::SpecialInstructions,
        table::CookingSchedule::IsCompleted,
        table::CookingSchedule::CompletedAt,
        table::CookingSchedule::IngredientsReady,
        table::CookingSchedule::EstimatedDuration,
        table::CookingSchedule::ActualDuration,
        table::CookingSchedule::StartedAt,
        table::CookingSchedule::Version,
        table::CookingSchedule::ConflictStatus,
        table::CookingSchedule::LastModifiedBy,
        table::CookingSchedule::CreatedAt,
        table::CookingSchedule::UpdatedAt,
        table::CookingSchedule::RelatedTaskId,
        table::CookingSchedule::BudgetId,
    ];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.event_date.into(),
            self.cooking_time.into(),
            sql::name(self.meal_type),
            self.menu_name.clone().into(),
            self.guest_count.into(),
            self.special_instructions.clone().into(),
            self.is_completed.into(),
            self.completed_at.into(),
            self.ingredients_ready.into(),
            self.estimated_duration.into(),
            self.actual_duration.into(),
            self.started_at.into(),
            self.version.into(),
            sql::name(self.conflict_status),
            self.last_modified_by.clone().into(),
            self.created_at.into(),
            self.updated_at.into(),
            sql::reference(self.related_task),
            sql::reference(self.budget),
        ]
    }
}
