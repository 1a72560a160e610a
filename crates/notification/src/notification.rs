use chrono::{DateTime, Utc};
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
    types::{NotificationType, TaskPriority, UserRole},
};

#[derive(Debug, FromRow)]
pub struct NotificationRow {
    pub id: i64,
    pub title: String,
    pub message: String,
    #[sqlx(rename = "type")]
    pub kind: Text<NotificationType>,
    pub target_role: Option<Text<UserRole>>,
    pub related_entity_type: Option<String>,
    pub related_entity_id: Option<String>,
    pub is_read: bool,
    pub is_global: bool,
    pub action_required: bool,
    pub action_url: Option<String>,
    pub priority: Text<TaskPriority>,
    pub expires_at: Option<DateTime<Utc>>,
    pub read_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub created_by_id: i64,
    pub target_user_id: Option<i64>,
}

/// A message for one user, one role, or everyone when `is_global` is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: Option<i64>,
    #[validate(required, length(max = 200))]
    pub title: Option<String>,
    #[validate(required)]
    pub message: Option<String>,
    #[serde(rename = "type")]
    #[validate(required)]
    pub kind: Option<NotificationType>,
    pub target_role: Option<UserRole>,
    #[validate(length(max = 50))]
    pub related_entity_type: Option<String>,
    #[validate(length(max = 100))]
    pub related_entity_id: Option<String>,
    #[validate(required)]
    pub is_read: Option<bool>,
    #[validate(required)]
    pub is_global: Option<bool>,
    #[validate(required)]
    pub action_required: Option<bool>,
    #[validate(length(max = 500))]
    pub action_url: Option<String>,
    #[validate(required)]
    pub priority: Option<TaskPriority>,
    pub expires_at: Option<DateTime<Utc>>,
    pub read_at: Option<DateTime<Utc>>,
    #[validate(required)]
    pub created_at: Option<DateTime<Utc>>,
    #[validate(required)]
    pub created_by: Option<EntityRef>,
    pub target_user: Option<EntityRef>,
}

impl From<NotificationRow> for Notification {
    fn from(row: NotificationRow) -> Self {
        Self {
            id: Some(row.id),
            title: Some(row.title),
            message: Some(row.message),
            kind: Some(row.kind.0),
            target_role: sql::text(row.target_role),
            related_entity_type: row.related_entity_type,
            related_entity_id: row.related_entity_id,
            is_read: Some(row.is_read),
            is_global: Some(row.is_global),
            action_required: Some(row.action_required),
            action_url: row.action_url,
            priority: Some(row.priority.0),
            expires_at: row.expires_at,
            read_at: row.read_at,
            created_at: Some(row.created_at),
            created_by: Some(row.created_by_id.into()),
            target_user: entity_ref(row.target_user_id),
        }
    }
}

impl Resource for Notification {
    type Row = NotificationRow;
    type Column = table::Notification;

    const ENTITY_NAME: &'static str = "notification";
    const TABLE: table::Notification = table::Notification::Table;
    const ID: table::Notification = table::Notification::Id;
    const COLUMNS: &'static [table::Notification] = &[
        table::Notification::Title,
        table::Notification::Message,
        table::Notification::Type,
        table::Notification::TargetRole,
        table::Notification::RelatedEntityType,
        table::Notification::RelatedEntityId,
        table::Notification::IsRead,
        table::Notification::IsGlobal,
        table::Notification::ActionRequired,
        table::Notification::ActionUrl,
        table::Notification::Priority,
        table::Notification::ExpiresAt,
        table::Notification::ReadAt,
        table::Notification::CreatedAt,
        table::Notification::CreatedById,
        table::Notification::TargetUserId,
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
            self.message.clone().into(),
            sql::name(self.kind),
            sql::name(self.target_role),
            self.related_entity_type.clone().into(),
            self.related_entity_id.clone().into(),
            self.is_read.into(),
            self.is_global.into(),
            self.action_required.into(),
            self.action_url.clone().into(),
            sql::name(self.priority),
            self.expires_at.into(),
            self.read_at.into(),
            self.created_at.into(),
            sql::reference(self.created_by),
            sql::reference(self.target_user),
        ]
    }
}
