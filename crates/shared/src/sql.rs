//! Conversions between DTO fields and sea-query values.
//!
//! Money is stored as TEXT so the exact decimal survives SQLite's numeric
//! affinity, and enumerations are stored by name.

use rust_decimal::Decimal;
use sea_query::Value;
use sqlx::types::Text;

use crate::EntityRef;

pub fn money(value: Option<Decimal>) -> Value {
    value.map(|v| v.to_string()).into()
}

pub fn name<T: AsRef<str>>(value: Option<T>) -> Value {
    value.map(|v| v.as_ref().to_owned()).into()
}

pub fn reference(value: Option<EntityRef>) -> Value {
    value.map(|v| v.id).into()
}

pub fn text<T>(value: Option<Text<T>>) -> Option<T> {
    value.map(|v| v.0)
}
