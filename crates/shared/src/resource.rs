use sea_query::{Iden, Value};
use serde::{Serialize, de::DeserializeOwned};
use sqlx::{FromRow, sqlite::SqliteRow};
use validator::Validate;

use crate::{Page, Pageable, Result};

/// A DTO persisted as one row of one table.
///
/// `COLUMNS` lists every column but the id, in the same order as `values()`.
pub trait Resource:
    Serialize + DeserializeOwned + Validate + From<Self::Row> + Clone + Send + Sync + Unpin + 'static
{
    type Row: for<'r> FromRow<'r, SqliteRow> + Send + Unpin;
    type Column: Iden + Copy + Send + Sync + 'static;

    /// camelCase name used in alert headers and error bodies.
    const ENTITY_NAME: &'static str;
    const TABLE: Self::Column;
    const ID: Self::Column;
    const COLUMNS: &'static [Self::Column];
    /// Decimal columns stored as TEXT, sorted by numeric value.
    const MONEY: &'static [Self::Column] = &[];
    /// Reference properties whose foreign key is not `{property}_id`.
    const REFERENCES: &'static [(&'static str, Self::Column)] = &[];

    fn id(&self) -> Option<i64>;
    fn set_id(&mut self, id: Option<i64>);
    fn values(&self) -> Vec<Value>;
}

/// Storage operations behind the REST handlers of one resource.
#[async_trait::async_trait]
pub trait Crud: Send + Sync + 'static {
    type Dto: Resource;

    async fn save(&self, dto: Self::Dto) -> Result<Self::Dto>;
    async fn update(&self, dto: Self::Dto) -> Result<Self::Dto>;
    async fn find_all(&self, pageable: &Pageable) -> Result<Page<Self::Dto>>;
    async fn find_one(&self, id: i64) -> Result<Option<Self::Dto>>;
    async fn exists(&self, id: i64) -> Result<bool>;
    async fn delete(&self, id: i64) -> Result<()>;
}

/// Overlays every non-null property of `patch` onto `current`.
pub fn merge_patch<R: Resource>(current: &R, patch: serde_json::Value) -> Result<R> {
    let mut target = serde_json::to_value(current)?;

    if let (serde_json::Value::Object(target), serde_json::Value::Object(patch)) =
        (&mut target, patch)
    {
        for (key, value) in patch {
            if !value.is_null() {
                target.insert(key, value);
            }
        }
    }

    Ok(serde_json::from_value(target)?)
}

pub fn camel_to_snake(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 4);
    for c in value.chars() {
        if c.is_ascii_uppercase() {
            out.push('_');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }

    out
}

pub fn snake_to_camel(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut upper = false;
    for c in value.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.push(c.to_ascii_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_conversion() {
        assert_eq!(camel_to_snake("eventDate"), "event_date");
        assert_eq!(camel_to_snake("id"), "id");
        assert_eq!(camel_to_snake("createdBy"), "created_by");
        assert_eq!(snake_to_camel("price_per_night"), "pricePerNight");
        assert_eq!(snake_to_camel("name"), "name");
    }
}
