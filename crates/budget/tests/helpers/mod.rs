use std::{path::PathBuf, str::FromStr, sync::Arc};

use chrono::{NaiveDate, Utc};
use magnus_budget::{Budget, BudgetStatusChanged, Client, ClientRepository, StatusChangeSubscriber};
use magnus_shared::{
    EntityRef,
    types::{BudgetStatus, ConflictStatus, EventGender, PaymentStatus, UserRole},
};
use magnus_user::{AppUser, AppUserRepository};
use rust_decimal::Decimal;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};
use tokio::sync::Mutex;

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

/// Creates a sales user and a client, returning their references.
pub async fn create_owner(pool: &SqlitePool) -> anyhow::Result<(EntityRef, EntityRef)> {
    let now = Utc::now();
    let user = AppUserRepository::new(pool.clone())
        .insert(&AppUser {
            login: Some("sales".to_owned()),
            email: Some("sales@magnus.localhost".to_owned()),
            role: Some(UserRole::Sales),
            is_active: Some(true),
            created_at: Some(now),
            updated_at: Some(now),
            ..Default::default()
        })
        .await?;

    let client = ClientRepository::new(pool.clone())
        .insert(&Client {
            name: Some("Lucia".to_owned()),
            email: Some("lucia@client.localhost".to_owned()),
            phone: Some("+34 600 000 000".to_owned()),
            is_active: Some(true),
            created_at: Some(now),
            updated_at: Some(now),
            ..Default::default()
        })
        .await?;

    Ok((
        EntityRef::from(user.id.unwrap()),
        EntityRef::from(client.id.unwrap()),
    ))
}

pub fn new_budget(name: &str, owner: (EntityRef, EntityRef)) -> Budget {
    let now = Utc::now();

    Budget {
        name: Some(name.to_owned()),
        client_name: Some("Lucia".to_owned()),
        event_date: NaiveDate::from_ymd_opt(2026, 6, 20),
        event_location: Some("Finca El Olivar".to_owned()),
        guest_count: Some(40),
        event_gender: Some(EventGender::Mixed),
        total_amount: Some(Decimal::new(450_000, 2)),
        meals_amount: Some(Decimal::new(250_000, 2)),
        status: Some(BudgetStatus::Draft),
        payment_status: Some(PaymentStatus::Unpaid),
        is_closed: Some(false),
        workflow_triggered: Some(false),
        version: Some(1),
        conflict_status: Some(ConflictStatus::None),
        created_at: Some(now),
        updated_at: Some(now),
        created_by: Some(owner.0),
        client: Some(owner.1),
        ..Default::default()
    }
}

#[derive(Default)]
pub struct Recorder(pub Mutex<Vec<BudgetStatusChanged>>);

#[async_trait::async_trait]
impl StatusChangeSubscriber for Recorder {
    async fn on_status_changed(&self, event: BudgetStatusChanged) {
        self.0.lock().await.push(event);
    }
}

#[allow(dead_code)]
pub fn recorder() -> Arc<Recorder> {
    Arc::new(Recorder::default())
}
