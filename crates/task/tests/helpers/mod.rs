use std::{path::PathBuf, str::FromStr};

use chrono::{NaiveDate, NaiveTime, Utc};
use magnus_budget::{Budget, BudgetService, Client, ClientRepository};
use magnus_shared::{
    Crud, EntityRef,
    types::{
        BudgetStatus, ConflictStatus, EventGender, PaymentStatus, TaskPriority, TaskStatus,
        TaskType, UserRole,
    },
};
use magnus_task::Task;
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
    pub user: EntityRef,
    pub budget: EntityRef,
}

pub async fn create_fixture(pool: &SqlitePool, budget_name: &str) -> anyhow::Result<Fixture> {
    let now = Utc::now();
    let user = AppUserRepository::new(pool.clone())
        .insert(&AppUser {
            login: Some(format!("{}-owner", budget_name.to_lowercase())),
            email: Some(format!("{}@magnus.localhost", budget_name.to_lowercase())),
            role: Some(UserRole::Sales),
            is_active: Some(true),
            created_at: Some(now),
            updated_at: Some(now),
            ..Default::default()
        })
        .await?;
    let user = EntityRef::from(user.id.unwrap());

    let client = ClientRepository::new(pool.clone())
        .insert(&Client {
            name: Some("Marta".to_owned()),
            email: Some("marta@client.localhost".to_owned()),
            phone: Some("600111222".to_owned()),
            is_active: Some(true),
            created_at: Some(now),
            updated_at: Some(now),
            ..Default::default()
        })
        .await?;

    let budget = BudgetService::new(pool.clone())
        .save(Budget {
            name: Some(budget_name.to_owned()),
            client_name: Some("Marta".to_owned()),
            event_date: NaiveDate::from_ymd_opt(2026, 9, 12),
            guest_count: Some(25),
            event_gender: Some(EventGender::Women),
            total_amount: Some(Decimal::new(180_000, 2)),
            status: Some(BudgetStatus::Draft),
            payment_status: Some(PaymentStatus::Unpaid),
            is_closed: Some(false),
            workflow_triggered: Some(false),
            version: Some(1),
            conflict_status: Some(ConflictStatus::None),
            created_at: Some(now),
            updated_at: Some(now),
            created_by: Some(user),
            client: Some(EntityRef::from(client.id.unwrap())),
            ..Default::default()
        })
        .await?;

    Ok(Fixture {
        user,
        budget: EntityRef::from(budget.id.unwrap()),
    })
}

pub fn new_task(title: &str, fixture: &Fixture) -> Task {
    let now = Utc::now();

    Task {
        title: Some(title.to_owned()),
        kind: Some(TaskType::Preparation),
        priority: Some(TaskPriority::Medium),
        status: Some(TaskStatus::Todo),
        assigned_to_role: Some(UserRole::Logistics),
        due_date: NaiveDate::from_ymd_opt(2026, 9, 11),
        due_time: NaiveTime::from_hms_opt(9, 30, 0),
        auto_scheduled: Some(false),
        is_recurring: Some(false),
        version: Some(1),
        conflict_status: Some(ConflictStatus::None),
        created_at: Some(now),
        updated_at: Some(now),
        created_by: Some(fixture.user),
        related_budget: Some(fixture.budget),
        ..Default::default()
    }
}
