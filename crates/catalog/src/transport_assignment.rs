use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_query::Value;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, types::Text};
use validator::Validate;

use magnus_db::table;
use magnus_shared::{EntityRef, Resource, entity_ref, sql, validate::non_negative};

#[derive(Debug, FromRow)]
pub struct TransportAssignmentRow {
    pub id: i64,
    pub guest_count: i32,
    pub duration: f64,
    pub distance: Option<f64>,
    pub pickup_location: Option<String>,
    pub dropoff_location: Option<String>,
    pub pickup_time: Option<DateTime<Utc>>,
    pub return_time: Option<DateTime<Utc>>,
    pub calculated_price: Text<Decimal>,
    pub calculated_cost: Option<Text<Decimal>>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub transport_id: i64,
    pub budget_id: Option<i64>,
    pub activity_id: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TransportAssignment {
    pub id: Option<i64>,
    #[validate(required, range(min = 1))]
    pub guest_count: Option<i32>,
    #[validate(required, range(min = 0.0))]
    pub duration: Option<f64>,
    #[validate(range(min = 0.0))]
    pub distance: Option<f64>,
    #[validate(length(max = 200))]
    pub pickup_location: Option<String>,
    #[validate(length(max = 200))]
    pub dropoff_location: Option<String>,
    pub pickup_time: Option<DateTime<Utc>>,
    pub return_time: Option<DateTime<Utc>>,
    #[validate(required, custom(function = "non_negative"))]
    pub calculated_price: Option<Decimal>,
    #[validate(custom(function = "non_negative"))]
    pub calculated_cost: Option<Decimal>,
    pub notes: Option<String>,
    #[validate(required)]
    pub created_at: Option<DateTime<Utc>>,
    #[validate(required)]
    pub updated_at: Option<DateTime<Utc>>,
    #[validate(required)]
    pub transport: Option<EntityRef>,
    pub budget: Option<EntityRef>,
    pub activity: Option<EntityRef>,
}

impl From<TransportAssignmentRow> for TransportAssignment {
    fn from(row: TransportAssignmentRow) -> Self {
        Self {
            id: Some(row.id),
            guest_count: Some(row.guest_count),
            duration: Some(row.duration),
            distance: row.distance,
            pickup_location: row.pickup_location,
            dropoff_location: row.dropoff_location,
            pickup_time: row.pickup_time,
            return_time: row.return_time,
            calculated_price: Some(row.calculated_price.0),
            calculated_cost: sql::text(row.calculated_cost),
            notes: row.notes,
            created_at: Some(row.created_at),
            updated_at: Some(row.updated_at),
            transport: Some(row.transport_id.into()),
            budget: entity_ref(row.budget_id),
            activity: entity_ref(row.activity_id),
        }
    }
}

impl Resource for TransportAssignment {
    type Row = TransportAssignmentRow;
    type Column = table::TransportAssignment;

    const ENTITY_NAME: &'static str = "transportAssignment";
    const TABLE: table::TransportAssignment = table::TransportAssignment::Table;
    const ID: table::TransportAssignment = table::TransportAssignment::Id;
    const COLUMNS: &'static [table::TransportAssignment] = &[
        table::TransportAssignment::GuestCount,
        table::TransportAssignment::Duration,
        table::TransportAssignment::Distance,
        table::TransportAssignment::PickupLocation,
        table::TransportAssignment::DropoffLocation,
        table::TransportAssignment::PickupTime,
        table::TransportAssignment::ReturnTime,
        table::TransportAssignment::CalculatedPrice,
        table::TransportAssignment::CalculatedCost,
        table::TransportAssignment::Notes,
        table::TransportAssignment::CreatedAt,
        table::TransportAssignment::UpdatedAt,
        table::TransportAssignment::TransportId,
        table::TransportAssignment::BudgetId,
        table::TransportAssignment::ActivityId,
    ];
    const MONEY: &'static [table::TransportAssignment] = &[
        table::TransportAssignment::CalculatedPrice,
        table::TransportAssignment::CalculatedCost,
    ];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.guest_count.into(),
            self.duration.into(),
            self.distance.into(),
            self.pickup_location.clone().into(),
            self.dropoff_location.clone().into(),
            self.pickup_time.into(),
            self.return_time.into(),
            sql::money(self.calculated_price),
            sql::money(self.calculated_cost),
            self.notes.clone().into(),
            self.created_at.into(),
            self.updated_at.into(),
            sql::reference(self.transport),
            sql::reference(self.budget),
            sql::reference(self.activity),
        ]
    }
}
