mod accommodation;
mod activity;
mod food_item;
mod menu;
mod menu_item;
mod product;
mod rel_menu_included_food_items;
mod transport;
mod transport_assignment;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "magnus",
    "m0_2",
    vec_box![crate::m0_1::Migration],
    vec_box![
        accommodation::CreateTable,
        activity::CreateTable,
        food_item::CreateTable,
        menu::CreateTable,
        rel_menu_included_food_items::CreateTable,
        menu_item::CreateTable,
        transport::CreateTable,
        transport_assignment::CreateTable,
        product::CreateTable,
    ]
);
