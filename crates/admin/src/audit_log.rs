use chrono::{DateTime, Utc};
use sea_query::Value;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, types::Text};
use validator::Validate;

use magnus_db::table;
use magnus_shared::{EntityRef, Resource, entity_ref, sql, types::{AuditAction, UserRole}};

#[derive(Debug, FromRow)]
pub struct AuditLogRow {
    pub id: i64,
    pub entity_type: String,
    pub entity_id: String,
    pub action: Text<AuditAction>,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
    pub field_name: Option<String>,
    pub user_id: Option<String>,
    pub user_role: Option<Text<UserRole>>,
    pub timestamp: DateTime<Utc>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub session_id: Option<String>,
    pub app_user_id: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AuditLog {
    pub id: Option<i64>,
    #[validate(required, length(max = 50))]
    pub entity_type: Option<String>,
    #[validate(required, length(max = 100))]
    pub entity_id: Option<String>,
    #[validate(required)]
    pub action: Option<AuditAction>,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
    #[validate(length(max = 100))]
    pub field_name: Option<String>,
    #[validate(length(max = 50))]
    pub user_id: Option<String>,
    pub user_role: Option<UserRole>,
    #[validate(required)]
    pub timestamp: Option<DateTime<Utc>>,
    #[validate(length(max = 45))]
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    #[validate(length(max = 100))]
    pub session_id: Option<String>,
    pub user: Option<EntityRef>,
}

impl From<AuditLogRow> for AuditLog {
    fn from(row: AuditLogRow) -> Self {
        Self {
            id: Some(row.id),
            entity_type: Some(row.entity_type),
            entity_id: Some(row.entity_id),
            action: Some(row.action.0),
            old_value: row.old_value,
            new_value: row.new_value,
            field_name: row.field_name,
            user_id: row.user_id,
            user_role: sql::text(row.user_role),
            timestamp: Some(row.timestamp),
            ip_address: row.ip_address,
            user_agent: row.user_agent,
            session_id: row.session_id,
            user: entity_ref(row.app_user_id),
        }
    }
}

impl Resource for AuditLog {
    type Row = AuditLogRow;
    type Column = table::AuditLog;

    const ENTITY_NAME: &'static str = "auditLog";
    const TABLE: table::AuditLog = table::AuditLog::Table;
    const ID: table::AuditLog = table::AuditLog::Id;
    const COLUMNS: &'static [table::AuditLog] = &[
        table::AuditLog::EntityType,
        table::AuditLog::EntityId,
        table::AuditLog::Action,
        table::AuditLog::OldValue,
        table::AuditLog::NewValue,
        table::AuditLog::FieldName,
        table::AuditLog::UserId,
        table::AuditLog::UserRole,
        table::AuditLog::Timestamp,
        table::AuditLog::IpAddress,
        table::AuditLog::UserAgent,
        table::AuditLog::SessionId,
        table::AuditLog::AppUserId,
    ];
    const REFERENCES: &'static [(&'static str, table::AuditLog)] =
        &[("user", table::AuditLog::AppUserId)];

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
            sql::name(self.action),
            self.old_value.clone().into(),
            self.new_value.clone().into(),
            self.field_name.clone().into(),
            self.user_id.clone().into(),
            sql::name(self.user_role),
            self.timestamp.into(),
            self.ip_address.clone().into(),
            self.user_agent.clone().into(),
            self.session_id.clone().into(),
            sql::reference(self.user),
        ]
    }
}
