use chrono::{DateTime, Utc};
use sea_query::Value;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, types::Text};
use validator::Validate;

use magnus_db::table;
use magnus_shared::{EntityRef, Resource, sql, types::TemplateType};

#[derive(Debug, FromRow)]
pub struct BudgetTemplateRow {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    #[sqlx(rename = "type")]
    pub kind: Text<TemplateType>,
    pub category: Option<String>,
    pub is_active: bool,
    pub is_system: bool,
    pub configuration: Option<String>,
    pub template_data: Option<String>,
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BudgetTemplate {
    pub id: Option<i64>,
    #[validate(required, length(max = 100))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    #[validate(required)]
    pub kind: Option<TemplateType>,
    #[validate(length(max = 50))]
    pub category: Option<String>,
    #[validate(required)]
    pub is_active: Option<bool>,
    #[validate(required)]
    pub is_system: Option<bool>,
    pub configuration: Option<String>,
    pub template_data: Option<String>,
    #[validate(required, range(min = 1))]
    pub version: Option<i32>,
    #[validate(required)]
    pub created_at: Option<DateTime<Utc>>,
    #[validate(required)]
    pub updated_at: Option<DateTime<Utc>>,
    #[validate(required)]
    pub created_by: Option<EntityRef>,
}

impl From<BudgetTemplateRow> for BudgetTemplate {
    fn from(row: BudgetTemplateRow) -> Self {
        Self {
            id: Some(row.id),
            name: Some(row.name),
            description: row.description,
            kind: Some(row.kind.0),
            category: row.category,
            is_active: Some(row.is_active),
            is_system: Some(row.is_system),
            configuration: row.configuration,
            template_data: row.template_data,
            version: Some(row.version),
            created_at: Some(row.created_at),
            updated_at: Some(row.updated_at),
            created_by: Some(row.created_by_id.into()),
        }
    }
}

impl Resource for BudgetTemplate {
    type Row = BudgetTemplateRow;
    type Column = table::BudgetTemplate;

    const ENTITY_NAME: &'static str = "budgetTemplate";
    const TABLE: table::BudgetTemplate = table::BudgetTemplate::Table;
    const ID: table::BudgetTemplate = table::BudgetTemplate::Id;
    const COLUMNS: &'static [table::BudgetTemplate] = &[
        table::BudgetTemplate::Name,
        table::BudgetTemplate::Description,
        table::BudgetTemplate::Type,
        table::BudgetTemplate::Category,
        table::BudgetTemplate::IsActive,
        table::BudgetTemplate::IsSystem,
        table::BudgetTemplate::Configuration,
        table::BudgetTemplate::TemplateData,
        table::BudgetTemplate::Version,
        table::BudgetTemplate::CreatedAt,
        table::BudgetTemplate::UpdatedAt,
        table::BudgetTemplate::CreatedById,
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
            self.description.clone().into(),
            sql::name(self.kind),
            self.category.clone().into(),
            self.is_active.into(),
            self.is_system.into(),
            self.configuration.clone().into(),
            self.template_data.clone().into(),
            self.version.into(),
            self.created_at.into(),
            self.updated_at.into(),
            sql::reference(self.created_by),
        ]
    }
}
