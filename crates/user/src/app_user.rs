use chrono::{DateTime, Utc};
use sea_query::Value;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, types::Text};
use validator::Validate;

use magnus_db::table;
use magnus_shared::{Resource, sql, types::UserRole, validate::LOGIN};

#[derive(Debug, FromRow)]
pub struct AppUserRow {
    pub id: i64,
    pub login: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub role: Text<UserRole>,
    pub is_active: bool,
    pub profile_picture: Option<String>,
    pub preferences: Option<String>,
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A person operating the system, identified by login and acting under one role.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AppUser {
    pub id: Option<i64>,
    #[validate(required, length(min = 1, max = 50), regex(path = *LOGIN))]
    pub login: Option<String>,
    #[validate(length(max = 50))]
    pub first_name: Option<String>,
    #[validate(length(max = 50))]
    pub last_name: Option<String>,
    #[validate(required, email, length(min = 5, max = 254))]
    pub email: Option<String>,
    #[validate(length(max = 20))]
    pub phone: Option<String>,
    #[validate(required)]
    pub role: Option<UserRole>,
    #[validate(required)]
    pub is_active: Option<bool>,
    #[validate(length(max = 500))]
    pub profile_picture: Option<String>,
    pub preferences: Option<String>,
    pub last_login_at: Option<DateTime<Utc>>,
    #[validate(required)]
    pub created_at: Option<DateTime<Utc>>,
    #[validate(required)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<AppUserRow> for AppUser {
    fn from(row: AppUserRow) -> Self {
        Self {
            id: Some(row.id),
            login: Some(row.login),
            first_name: row.first_name,
            last_name: row.last_name,
            email: Some(row.email),
            phone: row.phone,
            role: Some(row.role.0),
            is_active: Some(row.is_active),
            profile_picture: row.profile_picture,
            preferences: row.preferences,
            last_login_at: row.last_login_at,
            created_at: Some(row.created_at),
            updated_at: Some(row.updated_at),
        }
    }
}

impl Resource for AppUser {
    type Row = AppUserRow;
    type Column = table::AppUser;

    const ENTITY_NAME: &'static str = "appUser";
    const TABLE: table::AppUser = table::AppUser::Table;
    const ID: table::AppUser = table::AppUser::Id;
    const COLUMNS: &'static [table::AppUser] = &[
        table::AppUser::Login,
        table::AppUser::FirstName,
        table::AppUser::LastName,
        table::AppUser::Email,
        table::AppUser::Phone,
        table::AppUser::Role,
        table::AppUser::IsActive,
        table::AppUser::ProfilePicture,
        table::AppUser::Preferences,
        table::AppUser::LastLoginAt,
        table::AppUser::CreatedAt,
        table::AppUser::UpdatedAt,
    ];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.login.clone().into(),
            self.first_name.clone().into(),
            self.last_name.clone().into(),
            self.email.clone().into(),
            self.phone.clone().into(),
            sql::name(self.role),
            self.is_active.into(),
            self.profile_picture.clone().into(),
            self.preferences.clone().into(),
            self.last_login_at.into(),
            self.created_at.into(),
            self.updated_at.into(),
        ]
    }
}
