use chrono::{DateTime, Utc};
use sea_query::Value;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use magnus_db::table;
use magnus_shared::{EntityRef, Resource, entity_ref, sql};

#[derive(Debug, FromRow)]
pub struct ConflictResolutionRow {
    pub id: i64,
    pub entity_type: String,
    pub entity_id: String,
    pub field_name: Option<String>,
    pub local_value: Option<String>,
    pub remote_value: Option<String>,
    pub resolved_value: Option<String>,
    pub resolution_strategy: String,
    pub is_resolved: bool,
    pub resolved_at: Option<DateTime<Utc>>,
    pub conflict_detected_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub conflict_user_id: Option<i64>,
    pub resolved_by_id: Option<i64>,
}

/// Record of a concurrent edit and how it was settled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ConflictResolution {
    pub id: Option<i64>,
    #[validate(required, length(max = 50))]
    pub entity_type: Option<String>,
    #[validate(required, length(max = 100))]
    pub entity_id: Option<String>,
    #[validate(length(max = 100))]
    pub field_name: Option<String>,
    pub local_value: Option<String>,
    pub remote_value: Option<String>,
    pub resolved_value: Option<String>,
    #[validate(required, length(max = 50))]
    pub resolution_strategy: Option<String>,
    #[validate(required)]
    pub is_resolved: Option<bool>,
    pub resolved_at: Option<DateTime<Utc>>,
    #[validate(required)]
    pub conflict_detected_at: Option<DateTime<Utc>>,
    #[validate(required)]
    pub created_at: Option<DateTime<Utc>>,
    pub conflict_user: Option<EntityRef>,
    pub resolved_by: Option<EntityRef>,
}

impl From<ConflictResolutionRow> for ConflictResolution {
    fn from(row: ConflictResolutionRow) -> Self {
        Self {
            id: Some(row.id),
            entity_type: Some(row.entity_type),
            entity_id: Some(row.entity_id),
            field_name: row.field_name,
            local_value: row.local_value,
            remote_value: row.remote_value,
            resolved_value: row.resolved_value,
            resolution_strategy: Some(row.resolution_strategy),
            is_resolved: Some(row.is_resolved),
            resolved_at: row.resolved_at,
            conflict_detected_at: Some(row.conflict_detected_at),
            created_at: Some(row.created_at),
            conflict_user: entity_ref(row.conflict_user_id),
            resolved_by: entity_ref(row.resolved_by_id),
        }
    }
}

impl Resource for ConflictResolution {
    type Row = ConflictResolutionRow;
    type Column = table::ConflictResolution;

    const ENTITY_NAME: &'static str = "conflictResolution";
    const TABLE: table::ConflictResolution = table::ConflictResolution::Table;
    const ID: table::ConflictResolution = table::ConflictResolution::Id;
    const COLUMNS: &'static [table::ConflictResolution] = &[
        table::ConflictResolution::EntityType,
        table::ConflictResolution::EntityId,
        table::ConflictResolution::FieldName,
        table::ConflictResolution::LocalValue,
        table::ConflictResolution::RemoteValue,
        table::ConflictResolution::ResolvedValue,
        table::ConflictResolution::ResolutionStrategy,
        table::ConflictResolution::IsResolved,
        table::ConflictResolution::ResolvedAt,
        table::ConflictResolution::ConflictDetectedAt,
        table::ConflictResolution::CreatedAt,
        table::ConflictResolution::ConflictUserId,
        table::ConflictResolution::ResolvedById,
    ];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.entity_type.clone().into(),
            self.entity_id.clone().into(),
            self.field_name.clone().into(),
            self.local_value.clone().into(),
            self.remote_value.clone().into(),
            self.resolved_value.clone().into(),
            self.resolution_strategy.clone().into(),
            self.is_resolved.into(),
            self.resolved_at.into(),
            self.conflict_detected_at.into(),
            self.created_at.into(),
            sql::reference(self.conflict_user),
            sql::reference(self.resolved_by),
        ]
    }
}
