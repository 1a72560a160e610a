use std::str::FromStr;

use chrono::{DateTime, Utc};
use magnus_db::table;
use magnus_shared::{Crud, Error, Pageable, Repository, Resource, merge_patch};
use sea_query::Value;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};
use temp_dir::TempDir;
use validator::Validate;

#[derive(Debug, FromRow)]
struct ContactRow {
    id: i64,
    name: String,
    email: String,
    phone: String,
    company: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
struct Contact {
    id: Option<i64>,
    #[validate(required)]
    name: Option<String>,
    #[validate(required, email)]
    email: Option<String>,
    #[validate(required)]
    phone: Option<String>,
    company: Option<String>,
    #[validate(required)]
    is_active: Option<bool>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

impl From<ContactRow> for Contact {
    fn from(row: ContactRow) -> Self {
        Self {
            id: Some(row.id),
            name: Some(row.name),
            email: Some(row.email),
            phone: Some(row.phone),
            company: row.company,
            is_active: Some(row.is_active),
            created_at: Some(row.created_at),
            updated_at: Some(row.updated_at),
        }
    }
}

impl Resource for Contact {
    type Row = ContactRow;
    type Column = table::Client;

    const ENTITY_NAME: &'static str = "contact";
    const TABLE: table::Client = table::Client::Table;
    const ID: table::Client = table::Client::Id;
    const COLUMNS: &'static [table::Client] = &[
        table::Client::Name,
        table::Client::Email,
        table::Client::Phone,
        table::Client::Company,
        table::Client::IsActive,
        table::Client::CreatedAt,
        table::Client::UpdatedAt,
    ];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.name.clone().into(),
            self.email.clone().into(),
            self.phone.clone().into(),
            self.company.clone().into(),
            self.is_active.into(),
            self.created_at.into(),
            self.updated_at.into(),
        ]
    }
}

async fn setup_test_pool(dir: &TempDir) -> anyhow::Result<SqlitePool> {
    let path = dir.child("db.sqlite3");
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    magnus_db::migrator::<sqlx::Sqlite>()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(pool)
}

fn contact(name: &str, company: Option<&str>) -> Contact {
    let now = Utc::now();

    Contact {
        name: Some(name.to_owned()),
        email: Some(format!("{}@client.localhost", name.to_lowercase())),
        phone: Some("+34 600 000 000".to_owned()),
        company: company.map(ToOwned::to_owned),
        is_active: Some(true),
        created_at: Some(now),
        updated_at: Some(now),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_insert_find_update_delete() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let repository = Repository::<Contact>::new(setup_test_pool(&dir).await?);

    let stored = repository.insert(&contact("Marta", None)).await?;
    let id = stored.id.unwrap();
    assert!(repository.exists(id).await?);
    assert_eq!(repository.find_one(id).await?.unwrap().name, Some("Marta".to_owned()));

    let mut changed = stored.clone();
    changed.company = Some("Miramar SL".to_owned());
    repository.update(&changed).await?;
    assert_eq!(
        repository.find_one(id).await?.unwrap().company,
        Some("Miramar SL".to_owned())
    );

    let mut ghost = changed.clone();
    ghost.id = Some(id + 100);
    assert!(matches!(
        repository.update(&ghost).await,
        Err(Error::NotFound { entity: "contact" })
    ));

    Crud::delete(&repository, id).await?;
    assert!(!repository.exists(id).await?);
    Crud::delete(&repository, id).await?;

    Ok(())
}

#[tokio::test]
async fn test_find_all_sorts_and_pages() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let repository = Repository::<Contact>::new(setup_test_pool(&dir).await?);

    for (name, company) in [
        ("Carla", Some("Beta")),
        ("Alba", Some("Alpha")),
        ("Bruno", Some("Alpha")),
    ] {
        repository.insert(&contact(name, company)).await?;
    }

    let pageable = Pageable::new(Some(0), Some(2), &["company,asc".to_owned(), "name,desc".to_owned()])?;
    let page = repository.find_all(&pageable).await?;
    assert_eq!(page.total, 3);
    assert_eq!(page.total_pages(), 2);
    let names: Vec<_> = page.content.iter().filter_map(|c| c.name.clone()).collect();
    assert_eq!(names, vec!["Bruno", "Alba"]);

    let page = repository.find_all(&Pageable::new(Some(1), Some(2), &[])?).await?;
    assert_eq!(page.content.len(), 1);
    assert_eq!(page.content[0].name, Some("Bruno".to_owned()));

    let unknown = Pageable::new(None, None, &["shoeSize".to_owned()])?;
    assert!(matches!(
        repository.find_all(&unknown).await,
        Err(Error::BadRequest { key: "sort", .. })
    ));

    Ok(())
}

#[tokio::test]
async fn test_unique_violation_is_a_constraint_error() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = setup_test_pool(&dir).await?;

    sqlx::query("CREATE UNIQUE INDEX ux_client_email ON client (email)")
        .execute(&pool)
        .await?;

    let repository = Repository::<Contact>::new(pool);
    repository.insert(&contact("Marta", None)).await?;

    assert!(matches!(
        repository.insert(&contact("Marta", None)).await,
        Err(Error::Constraint(_))
    ));

    Ok(())
}

#[test]
fn test_merge_patch_keeps_absent_and_null_fields() -> anyhow::Result<()> {
    let current = Contact {
        id: Some(4),
        ..contact("Marta", Some("Miramar SL"))
    };

    let merged = merge_patch(
        &current,
        serde_json::json!({ "id": 4, "phone": "+34 611 111 111", "company": null }),
    )?;

    assert_eq!(merged.phone, Some("+34 611 111 111".to_owned()));
    assert_eq!(merged.company, Some("Miramar SL".to_owned()));
    assert_eq!(merged.email, current.email);

    Ok(())
}
