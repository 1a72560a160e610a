mod audit_log;
mod conflict_resolution;
mod notification;
mod system_config;
mod workflow_trigger;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "magnus",
    "m0_4",
    vec_box![crate::m0_3::Migration],
    vec_box![
        notification::CreateTable,
        notification::CreateTargetRoleIdx,
        workflow_trigger::CreateTable,
        system_config::CreateTable,
        system_config::CreateConfigKeyIdx,
        audit_log::CreateTable,
        conflict_resolution::CreateTable,
    ]
);
