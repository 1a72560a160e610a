use magnus_budget::{BudgetItem, BudgetItemRepository, BudgetService, SYSTEM_USER};
use magnus_shared::{Crud, EntityRef, Error, merge_patch, types::BudgetStatus};
use rust_decimal::Decimal;
use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn test_status_change_is_published() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let owner = helpers::create_owner(&pool).await?;
    let recorder = helpers::recorder();
    let service = BudgetService::new(pool).subscribe(recorder.clone());

    let mut budget = service.save(helpers::new_budget("Boda", owner)).await?;

    budget.name = Some("Boda Lucia".to_owned());
    let budget = service.update(budget).await?;
    assert!(recorder.0.lock().await.is_empty());

    let mut pending = budget.clone();
    pending.status = Some(BudgetStatus::Pending);
    let stored = service.update(pending).await?;
    assert_eq!(stored.status, Some(BudgetStatus::Pending));
    assert_eq!(stored.workflow_triggered, Some(false));

    let events = recorder.0.lock().await;
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].old_status, BudgetStatus::Draft);
    assert_eq!(events[0].new_status, BudgetStatus::Pending);
    assert_eq!(events[0].changed_by, SYSTEM_USER);
    assert!(!events[0].is_workflow_trigger());

    Ok(())
}

#[tokio::test]
async fn test_reserva_marks_workflow() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let owner = helpers::create_owner(&pool).await?;
    let recorder = helpers::recorder();
    let service = BudgetService::new(pool).subscribe(recorder.clone());

    let budget = service.save(helpers::new_budget("Cena", owner)).await?;
    let id = budget.id.unwrap();

    let patched = merge_patch(&budget, serde_json::json!({ "status": "RESERVA" }))?;
    let stored = service.update(patched).await?;

    assert_eq!(stored.status, Some(BudgetStatus::Reserva));
    assert_eq!(stored.workflow_triggered, Some(true));
    assert!(stored.last_workflow_execution.is_some());
    assert!(stored.reserved_at.is_some());

    let found = service.find_one(id).await?.unwrap();
    assert_eq!(found.workflow_triggered, Some(true));
    assert_eq!(found.reserved_at, stored.reserved_at);

    {
        let events = recorder.0.lock().await;
        assert_eq!(events.len(), 1);
        assert!(events[0].is_workflow_trigger());
        assert_eq!(events[0].budget.id, Some(id));
    }

    // Saving again in RESERVA keeps the original reservation time.
    let again = service.update(found.clone()).await?;
    assert_eq!(again.reserved_at, stored.reserved_at);
    assert_eq!(recorder.0.lock().await.len(), 1);

    Ok(())
}

#[tokio::test]
async fn test_update_budget_status() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let owner = helpers::create_owner(&pool).await?;
    let service = BudgetService::new(pool);

    let budget = service.save(helpers::new_budget("Fiesta", owner)).await?;
    let stored = service
        .update_budget_status(budget.id.unwrap(), BudgetStatus::Approved)
        .await?;
    assert_eq!(stored.status, Some(BudgetStatus::Approved));
    assert_eq!(stored.name.as_deref(), Some("Fiesta"));

    let err = service
        .update_budget_status(9999, BudgetStatus::Approved)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));

    Ok(())
}

#[tokio::test]
async fn test_references_are_enforced() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let owner = helpers::create_owner(&pool).await?;
    let service = BudgetService::new(pool.clone());
    let items = BudgetItemRepository::new(pool);

    let mut orphan = helpers::new_budget("Orphan", owner);
    orphan.client = Some(EntityRef::from(4242));
    let err = service.save(orphan).await.unwrap_err();
    assert!(matches!(err, Error::Constraint(_)), "{err}");
    assert_eq!(service.repository().count().await?, 0);

    let budget = service.save(helpers::new_budget("Gala", owner)).await?;
    let now = chrono::Utc::now();
    items
        .insert(&BudgetItem {
            item_type: Some("menu".to_owned()),
            template_id: Some("menu-7".to_owned()),
            template_name: Some("Menu degustacion".to_owned()),
            quantity: Some(40),
            unit_price: Some(Decimal::new(6_250, 2)),
            total_price: Some(Decimal::new(250_000, 2)),
            is_customized: Some(false),
            version: Some(1),
            created_at: Some(now),
            updated_at: Some(now),
            budget: Some(EntityRef::from(budget.id.unwrap())),
            ..Default::default()
        })
        .await?;

    let err = service.delete(budget.id.unwrap()).await.unwrap_err();
    assert!(matches!(err, Error::Constraint(_)), "{err}");
    assert!(service.exists(budget.id.unwrap()).await?);

    Ok(())
}

#[tokio::test]
async fn test_money_is_stored_exactly() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let owner = helpers::create_owner(&pool).await?;
    let service = BudgetService::new(pool);

    let mut budget = helpers::new_budget("Exact", owner);
    budget.total_amount = Some(Decimal::new(1_234_567_891, 2));
    budget.profit_margin = Some(Decimal::new(1, 2));
    let budget = service.save(budget).await?;

    let found = service.find_one(budget.id.unwrap()).await?.unwrap();
    assert_eq!(found.total_amount, Some(Decimal::new(1_234_567_891, 2)));
    assert_eq!(found.profit_margin, Some(Decimal::new(1, 2)));
    assert_eq!(found.transport_amount, None);

    Ok(())
}
