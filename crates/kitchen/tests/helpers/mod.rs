use std::{path::PathBuf, str::FromStr};

use chrono::{NaiveDate, Utc};
use magnus_budget::{Budget, BudgetService, Client, ClientRepository};
use magnus_catalog::{Product, ProductRepository};
use magnus_shared::{
    Crud, EntityRef,
    types::{
        BudgetStatus, ConflictStatus, EventGender, PaymentStatus, ProductCategory, ProductUnit,
        TaskPriority, TaskStatus, TaskType, UserRole,
    },
};
use magnus_task::{Task, TaskRepository};
use magnus_user::{AppUser, AppUserRepository};
use rust_decimal::Decimal;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};

pub async fn setup_test_pool(path: PathBuf) -> anyhow::Result<SqlitePool> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    magnus_db::migrator::<sqlx::Sqlite>()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(pool)
}

pub struct Fixture {
    pub budget: EntityRef,
    pub task: EntityRef,
    pub product: EntityRef,
}

pub async fn create_fixture(pool: &SqlitePool) -> anyhow::Result<Fixture> {
    let now = Utc::now();
    let user = AppUserRepository::new(pool.clone())
        .insert(&AppUser {
            login: Some("cook".to_owned()),
            email: Some("cook@magnus.localhost".to_owned()),
            role: Some(UserRole::Cook),
            is_active: Some(true),
            created_at: Some(now),
            updated_at: Some(now),
            ..Default::default()
        })
        .await?;
    let user = EntityRef::from(user.id.unwrap());

    let client = ClientRepository::new(pool.clone())
        .insert(&Client {
            name: Some("Pablo".to_owned()),
            email: Some("pablo@client.localhost".to_owned()),
            phone: Some("600333444".to_owned()),
            is_active: Some(true),
            created_at: Some(now),
            updated_at: Some(now),
            ..Default::default()
        })
        .await?;

    let budget = BudgetService::new(pool.clone())
        .save(Budget {
            name: Some("Comunion".to_owned()),
            client_name: Some("Pablo".to_owned()),
            event_date: NaiveDate::from_ymd_opt(2026, 5, 9),
            guest_count: Some(60),
            event_gender: Some(EventGender::Mixed),
            total_amount: Some(Decimal::new(300_000, 2)),
            status: Some(BudgetStatus::Reserva),
            payment_status: Some(PaymentStatus::PartiallyPaid),
            is_closed: Some(false),
            workflow_triggered: Some(true),
            version: Some(1),
            conflict_status: Some(ConflictStatus::None),
            created_at: Some(now),
            updated_at: Some(now),
            created_by: Some(user),
            client: Some(EntityRef::from(client.id.unwrap())),
            ..Default::default()
        })
        .await?;
    let budget = EntityRef::from(budget.id.unwrap());

    let task = TaskRepository::new(pool.clone())
        .insert(&Task {
            title: Some("Cooking - Comunion".to_owned()),
            kind: Some(TaskType::Cooking),
            priority: Some(TaskPriority::Urgent),
            status: Some(TaskStatus::Blocked),
            assigned_to_role: Some(UserRole::Cook),
            due_date: NaiveDate::from_ymd_opt(2026, 5, 9),
            auto_scheduled: Some(true),
            is_recurring: Some(false),
            version: Some(1),
            conflict_status: Some(ConflictStatus::None),
            created_at: Some(now),
            updated_at: Some(now),
            created_by: Some(user),
            related_budget: Some(budget),
            ..Default::default()
        })
        .await?;

    let product = ProductRepository::new(pool.clone())
        .insert(&Product {
            name: Some("Aceite de oliva".to_owned()),
            category: Some(ProductCategory::Condiments),
            unit: Some(ProductUnit::Liters),
            price_per_unit: Some(Decimal::new(899, 2)),
            is_active: Some(true),
            created_at: Some(now),
            updated_at: Some(now),
            created_by: Some(user),
            ..Default::default()
        })
        .await?;

    Ok(Fixture {
        budget,
        task: EntityRef::from(task.id.unwrap()),
        product: EntityRef::from(product.id.unwrap()),
    })
}
