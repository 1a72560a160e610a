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
    types::{BudgetStatus, ConflictStatus, EventGender, PaymentStatus},
    validate::non_negative,
};

#[derive(Debug, FromRow)]
pub struct BudgetRow {
    pub id: i64,
    pub name: String,
    pub client_name: String,
    pub event_date: NaiveDate,
    pub event_location: Option<String>,
    pub guest_count: i32,
    pub event_gender: Text<EventGender>,
    pub description: Option<String>,
    pub total_amount: Text<Decimal>,
    pub total_cost: Option<Text<Decimal>>,
    pub profit_margin: Option<Text<Decimal>>,
    pub meals_amount: Option<Text<Decimal>>,
    pub activities_amount: Option<Text<Decimal>>,
    pub transport_amount: Option<Text<Decimal>>,
    pub accommodation_amount: Option<Text<Decimal>>,
    pub status: Text<BudgetStatus>,
    pub payment_status: Text<PaymentStatus>,
    pub is_closed: bool,
    pub internal_notes: Option<String>,
    pub client_notes: Option<String>,
    pub template_id: Option<String>,
    pub workflow_triggered: bool,
    pub last_workflow_execution: Option<DateTime<Utc>>,
    pub version: i32,
    pub conflict_status: Text<ConflictStatus>,
    pub last_modified_by: Option<String>,
    pub approved_at: Option<DateTime<Utc>>,
    pub reserved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by_id: i64,
    pub assigned_to_id: Option<i64>,
    pub client_id: i64,
    pub budget_template_id: Option<i64>,
    pub weekly_plan_id: Option<i64>,
}

/// An event quote prepared for a client.
///
/// Moving a budget to `RESERVA` starts the workflow automation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: Option<i64>,
    #[validate(required, length(max = 200))]
    pub name: Option<String>,
    #[validate(required, length(max = 100))]
    pub client_name: Option<String>,
    #[validate(required)]
    pub event_date: Option<NaiveDate>,
    #[validate(length(max = 200))]
    pub event_location: Option<String>,
    #[validate(required, range(min = 1, max = 1000))]
    pub guest_count: Option<i32>,
    #[validate(required)]
    pub event_gender: Option<EventGender>,
    pub description: Option<String>,
    #[validate(required, custom(function = "non_negative"))]
    pub total_amount: Option<Decimal>,
    #[validate(custom(function = "non_negative"))]
    pub total_cost: Option<Decimal>,
    #[validate(custom(function = "non_negative"))]
    pub profit_margin: Option<Decimal>,
    #[validate(custom(function = "non_negative"))]
    pub meals_amount: Option<Decimal>,
    #[validate(custom(function = "non_negative"))]
    pub activities_amount: Option<Decimal>,
    #[validate(custom(function = "non_negative"))]
    pub transport_amount: Option<Decimal>,
    #[validate(custom(function = "non_negative"))]
    pub accommodation_amount: Option<Decimal>,
    #[validate(required)]
    pub status: Option<BudgetStatus>,
    #[validate(required)]
    pub payment_status: Option<PaymentStatus>,
    #[validate(required)]
    pub is_closed: Option<bool>,
    pub internal_notes: Option<String>,
    pub client_notes: Option<String>,
    #[validate(length(max = 100))]
    pub template_id: Option<String>,
    #[validate(required)]
    pub workflow_triggered: Option<bool>,
    pub last_workflow_execution: Option<DateTime<Utc>>,
    #[validate(required, range(min = 1))]
    pub version: Option<i32>,
    #[validate(required)]
    pub conflict_status: Option<ConflictStatus>,
    #[validate(length(max = 50))]
    pub last_modified_by: Option<String>,
    pub approved_at: Option<DateTime<Utc>>,
    pub reserved_at: Option<DateTime<Utc>>,
    #[validate(required)]
    pub created_at: Option<DateTime<Utc>>,
    #[validate(required)]
    pub updated_at: Option<DateTime<Utc>>,
    #[validate(required)]
    pub created_by: Option<EntityRef>,
    pub assigned_to: Option<EntityRef>,
    #[validate(required)]
    pub client: Option<EntityRef>,
    pub template: Option<EntityRef>,
    pub weekly_plan: Option<EntityRef>,
}

impl From<BudgetRow> for Budget {
    fn from(row: BudgetRow) -> Self {
        Self {
            id: Some(row.id),
            name: Some(row.name),
            client_name: Some(row.client_name),
            event_date: Some(row.event_date),
            event_location: row.event_location,
            guest_count: Some(row.guest_count),
            event_gender: Some(row.event_gender.0),
            description: row.description,
            total_amount: Some(row.total_amount.0),
            total_cost: sql::text(row.total_cost),
            profit_margin: sql::text(row.profit_margin),
            meals_amount: sql::text(row.meals_amount),
            activities_amount: sql::text(row.activities_amount),
            transport_amount: sql::text(row.transport_amount),
            accommodation_amount: sql::text(row.accommodation_amount),
            status: Some(row.status.0),
            payment_status: Some(row.payment_status.0),
            is_closed: Some(row.is_closed),
            internal_notes: row.internal_notes,
            client_notes: row.client_notes,
            template_id: row.template_id,
            workflow_triggered: Some(row.workflow_triggered),
            last_workflow_execution: row.last_workflow_execution,
            version: Some(row.version),
            conflict_status: Some(row.conflict_status.0),
            last_modified_by: row.last_modified_by,
            approved_at: row.approved_at,
            reserved_at: row.reserved_at,
            created_at: Some(row.created_at),
            updated_at: Some(row.updated_at),
            created_by: Some(row.created_by_id.into()),
            assigned_to: entity_ref(row.assigned_to_id),
            client: Some(row.client_id.into()),
            template: entity_ref(row.budget_template_id),
            weekly_plan: entity_ref(row.weekly_plan_id),
        }
    }
}

impl Resource for Budget {
    type Row = BudgetRow;
    type Column = table::Budget;

    const ENTITY_NAME: &'static str = "budget";
    const TABLE: table::Budget = table::Budget::Table;
    const ID: table::Budget = table::Budget::Id;
    const COLUMNS: &'static [table::Budget] = &[
        table::Budget::Name,
        table::Budget::ClientName,
        table::Budget::EventDate,
        table::Budget::EventLocation,
        table::Budget::GuestCount,
        table::Budget::EventGender,
        table::Budget::Description,
        table::Budget::TotalAmount,
        table::Budget::TotalCost,
        table::Budget::ProfitMargin,
        table::Budget::MealsAmount,
        table::Budget::ActivitiesAmount,
        table::Budget::TransportAmount,
        table::Budget::AccommodationAmount,
        table::Budget::Status,
        table::Budget::PaymentStatus,
        table::Budget::IsClosed,
        table::Budget::InternalNotes,
        table::Budget::ClientNotes,
        table::Budget::TemplateId,
        table::Budget::WorkflowTriggered,
        table::Budget::LastWorkflowExecution,
        table::Budget::Version,
        table::Budget::ConflictStatus,
        table::Budget::LastModifiedBy,
        table::Budget::ApprovedAt,
        table::Budget::ReservedAt,
        table::Budget::CreatedAt,
        table::Budget::UpdatedAt,
        table::Budget::CreatedById,
        table::Budget::AssignedToId,
        table::Budget::ClientId,
        table::Budget::BudgetTemplateId,
        table::Budget::WeeklyPlanId,
    ];
    const REFERENCES: &'static [(&'static str, table::Budget)] =
        &[("template", table::Budget::BudgetTemplateId)];
    const MONEY: &'static [table::Budget] = &[
        table::Budget::TotalAmount,
        table::Budget::TotalCost,
        table::Budget::ProfitMargin,
        table::Budget::MealsAmount,
        table::Budget::ActivitiesAmount,
        table::Budget::TransportAmount,
        table::Budget::AccommodationAmount,
    ];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.name.clone().into(),
            self.client_name.clone().into(),
            self.event_date.into(),
            self.event_location.clone().into(),
            self.guest_count.into(),
            sql::name(self.event_gender),
            self.description.clone().into(),
            sql::money(self.total_amount),
            sql::money(self.total_cost),
            sql::money(self.profit_margin),
            sql::money(self.meals_amount),
            sql::money(self.activities_amount),
            sql::money(self.transport_amount),
            sql::money(self.accommodation_amount),
            sql::name(self.status),
            sql::name(self.payment_status),
            self.is_closed.into(),
            self.internal_notes.clone().into(),
            self.client_notes.clone().into(),
            self.template_id.clone().into(),
            self.workflow_triggered.into(),
            self.last_workflow_execution.into(),
            self.version.into(),
            sql::name(self.conflict_status),
            self.last_modified_by.clone().into(),
            self.approved_at.into(),
            self.reserved_at.into(),
            self.created_at.into(),
            self.updated_at.into(),
            sql::reference(self.created_by),
            sql::reference(self.assigned_to),
            sql::reference(self.client),
            sql::reference(self.template),
            sql::reference(self.weekly_plan),
        ]
    }
}
