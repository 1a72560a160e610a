use chrono::{NaiveDate, Utc};
use magnus_shared::{
    EntityRef, Error,
    types::{ConflictStatus, ProductCategory, ProductUnit, WeeklyPlanStatus},
};
use magnus_shopping::{ShoppingItem, ShoppingItemRepository, WeeklyPlan, WeeklyPlanRepository};
use rust_decimal::Decimal;
use temp_dir::TempDir;

mod helpers;

fn new_plan(user: EntityRef) -> WeeklyPlan {
    let now = Utc::now();

    WeeklyPlan {
        week_start: NaiveDate::from_ymd_opt(2026, 6, 15),
        week_end: NaiveDate::from_ymd_opt(2026, 6, 21),
        plan_name: Some("Semana 25".to_owned()),
        status: Some(WeeklyPlanStatus::InProgress),
        total_budgets: Some(3),
        total_guests: Some(140),
        estimated_cost: Some(Decimal::new(98_050, 2)),
        is_consolidated: Some(false),
        created_at: Some(now),
        updated_at: Some(now),
        created_by: Some(user),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_shopping_items_of_a_week() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let user = helpers::create_logistics_user(&pool).await?;
    let plans = WeeklyPlanRepository::new(pool.clone());
    let items = ShoppingItemRepository::new(pool);

    let plan = plans.insert(&new_plan(user)).await?;
    let now = Utc::now();

    let item = items
        .insert(&ShoppingItem {
            product_name: Some("Arroz bomba".to_owned()),
            total_quantity: Some(12.5),
            unit: Some(ProductUnit::Kg),
            category: Some(ProductCategory::Other),
            budget_ids: Some("[3,7]".to_owned()),
            is_purchased: Some(false),
            week_start: plan.week_start,
            week_end: plan.week_end,
            is_consolidated: Some(true),
            conflict_status: Some(ConflictStatus::None),
            version: Some(1),
            created_at: Some(now),
            updated_at: Some(now),
            weekly_plan: plan.id.map(EntityRef::from),
            ..Default::default()
        })
        .await?;

    let found = items.find_one(item.id.unwrap()).await?.unwrap();
    assert_eq!(found.total_quantity, Some(12.5));
    assert_eq!(found.unit, Some(ProductUnit::Kg));
    assert_eq!(found.week_start, NaiveDate::from_ymd_opt(2026, 6, 15));
    assert_eq!(found.purchased_by, None);

    let err = plans.delete(plan.id.unwrap()).await.unwrap_err();
    assert!(matches!(err, Error::Constraint(_)), "{err}");

    items.delete(item.id.unwrap()).await?;
    plans.delete(plan.id.unwrap()).await?;
    assert_eq!(plans.count().await?, 0);

    Ok(())
}

#[tokio::test]
async fn test_update_missing_plan() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let user = helpers::create_logistics_user(&pool).await?;
    let plans = WeeklyPlanRepository::new(pool);

    let mut plan = new_plan(user);
    plan.id = Some(404);
    let err = plans.update(&plan).await.unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));

    plan.id = None;
    let err = plans.update(&plan).await.unwrap_err();
    assert!(matches!(err, Error::BadRequest { key: "idnull", .. }));

    Ok(())
}
