use chrono::{DateTime, Utc};
use sea_query::Value;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use magnus_db::table;
use magnus_shared::{EntityRef, Resource, sql};

#[derive(Debug, FromRow)]
pub struct SystemConfigRow {
    pub id: i64,
    pub config_key: String,
    pub config_value: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub category: Option<String>,
    pub is_system: bool,
    pub data_type: Option<String>,
    pub validation_rules: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SystemConfig {
    pub id: Option<i64>,
    #[validate(required, length(max = 100))]
    pub config_key: Option<String>,
    #[validate(required)]
    pub config_value: Option<String>,
    #[validate(length(max = 500))]
    pub description: Option<String>,
    #[validate(required)]
    pub is_active: Option<bool>,
    #[validate(length(max = 50))]
    pub category: Option<String>,
    #[validate(required)]
    pub is_system: Option<bool>,
    #[validate(length(max = 20))]
    pub data_type: Option<String>,
    pub validation_rules: Option<String>,
    #[validate(required)]
    pub created_at: Option<DateTime<Utc>>,
    #[validate(required)]
    pub updated_at: Option<DateTime<Utc>>,
    #[validate(required)]
    pub created_by: Option<EntityRef>,
}

impl From<SystemConfigRow> for SystemConfig {
    fn from(row: SystemConfigRow) -> Self {
        Self {
            id: Some(row.id),
            config_key: Some(row.config_key),
            config_value: Some(row.config_value),
            description: row.description,
            is_active: Some(row.is_active),
            category: row.category,
            is_system: Some(row.is_system),
            data_type: row.data_type,
            validation_rules: row.validation_rules,
            created_at: Some(row.created_at),
            updated_at: Some(row.updated_at),
            created_by: Some(row.created_by_id.into()),
        }
    }
}

impl Resource for SystemConfig {
    type Row = SystemConfigRow;
    type Column = table::SystemConfig;

    const ENTITY_NAME: &'static str = "systemConfig";
    const TABLE: table::SystemConfig = table::SystemConfig::Table;
    const ID: table::SystemConfig = table::SystemConfig::Id;
    const COLUMNS: &'static [table::SystemConfig] = &[
        table::SystemConfig::ConfigKey,
        table::SystemConfig::ConfigValue,
        table::SystemConfig::Description,
        table::SystemConfig::IsActive,
        table::SystemConfig::Category,
        table::SystemConfig::IsSystem,
        table::SystemConfig::DataType,
        table::SystemConfig::ValidationRules,
        table::SystemConfig::CreatedAt,
        table::SystemConfig::UpdatedAt,
        table::SystemConfig::CreatedById,
    ];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.config_key.clone().into(),
            self.config_value.clone().into(),
            self.description.clone().into(),
            self.is_active.into(),
            self.category.clone().into(),
            self.is_system.into(),
            self.data_type.clone().into(),
            self.validation_rules.clone().into(),
            self.created_at.into(),
            self.updated_at.into(),
            sql::reference(self.created_by),
        ]
    }
}
