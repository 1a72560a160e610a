mod cooking_ingredient;
mod cooking_schedule;
mod need;
mod product_requirement;
mod shopping_item;
mod task;
mod task_dependency;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "magnus",
    "m0_3",
    vec_box![crate::m0_2::Migration],
    vec_box![
        task::CreateTable,
        task::CreateRelatedBudgetIdx,
        task_dependency::CreateTable,
        task_dependency::CreatePrerequisiteTaskIdx,
        task_dependency::CreateDependentTaskIdx,
        need::CreateTable,
        cooking_schedule::CreateTable,
        cooking_schedule::CreateRelatedTaskIdx,
        product_requirement::CreateTable,
        cooking_ingredient::CreateTable,
        shopping_item::CreateTable,
    ]
);
