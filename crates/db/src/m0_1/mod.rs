mod app_user;
mod budget;
mod budget_item;
mod budget_template;
mod client;
mod payment;
mod weekly_plan;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "magnus",
    "m0_1",
    vec_box![],
    vec_box![
        app_user::CreateTable,
        app_user::CreateLoginIdx,
        app_user::CreateEmailIdx,
        client::CreateTable,
        budget_template::CreateTable,
        weekly_plan::CreateTable,
        budget::CreateTable,
        budget::CreateStatusIdx,
        budget::CreateEventDateIdx,
        budget_item::CreateTable,
        payment::CreateTable,
    ]
);
