use std::sync::Arc;

use magnus_budget::{Budget, BudgetService};
use magnus_notification::NotificationService;
use magnus_shared::{
    Crud, EntityRef,
    types::{BudgetStatus, DependencyType, TaskStatus, TaskType, UserRole},
};
use magnus_task::Query;
use magnus_workflow::{
    BudgetStatusListener, Notifications, Settings, TaskGeneration, WorkflowAutomation,
};
use rust_decimal::Decimal;
use temp_dir::TempDir;

mod helpers;

fn settings(async_processing: bool) -> Settings {
    Settings {
        task_generation: TaskGeneration {
            enabled: true,
            async_processing,
        },
        ..Default::default()
    }
}

fn reserve(budget: &Budget) -> Budget {
    Budget {
        status: Some(BudgetStatus::Reserva),
        ..budget.clone()
    }
}

#[tokio::test]
async fn test_workflow_creates_tasks_dependencies_and_notifications() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let owner = helpers::create_owner(&pool).await?;
    let budgets = BudgetService::new(pool.clone());
    let automation = WorkflowAutomation::new(pool.clone(), settings(false));

    let budget = budgets
        .save(Budget {
            transport_amount: Some(Decimal::new(40_000, 2)),
            ..helpers::new_budget("Boda Marta", owner)
        })
        .await?;
    let budget_id = budget.id.unwrap();

    let outcome = automation.trigger_workflow_for_budget(&budget).await?;
    assert_eq!(outcome.tasks.len(), 5);
    assert_eq!(outcome.dependencies, 2);
    assert_eq!(outcome.notifications, 2);

    let query = Query(pool.clone());
    let tasks = query.tasks_by_budget(budget_id).await?;
    let kinds: Vec<_> = tasks.iter().filter_map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TaskType::Shopping,
            TaskType::Cooking,
            TaskType::Delivery,
            TaskType::Setup,
            TaskType::Delivery
        ]
    );
    assert!(tasks.iter().all(|t| t.created_by == Some(owner.0)));
    assert_eq!(tasks[1].estimated_duration, Some(370));
    assert_eq!(tasks[1].status, Some(TaskStatus::Blocked));

    let shopping = tasks[0].id.unwrap();
    let cooking = tasks[1].id.unwrap();
    let delivery = tasks[2].id.unwrap();
    let setup = tasks[3].id.unwrap();

    let blocking_cooking = query.dependencies_by_dependent(cooking).await?;
    assert_eq!(blocking_cooking.len(), 1);
    assert_eq!(
        blocking_cooking[0].prerequisite_task,
        Some(EntityRef::from(shopping))
    );
    assert_eq!(
        blocking_cooking[0].dependency_type,
        Some(DependencyType::Blocks)
    );
    assert_eq!(
        blocking_cooking[0].notes.as_deref(),
        Some("Auto-generated workflow dependency")
    );

    let after_delivery = query.dependencies_by_prerequisite(delivery).await?;
    assert_eq!(after_delivery.len(), 1);
    assert_eq!(after_delivery[0].dependent_task, Some(EntityRef::from(setup)));

    let notifications = NotificationService::new(pool);
    let logistics = notifications
        .find_by_target_role(UserRole::Logistics)
        .await?;
    assert_eq!(logistics.len(), 1);
    assert_eq!(
        logistics[0].message.as_deref(),
        Some("New event approved: Boda Marta (4 new tasks assigned)")
    );
    assert_eq!(
        logistics[0].related_entity_id,
        Some(budget_id.to_string())
    );
    assert_eq!(logistics[0].created_by, Some(owner.0));

    let cook = notifications.find_by_target_role(UserRole::Cook).await?;
    assert_eq!(cook.len(), 1);
    assert_eq!(
        cook[0].message.as_deref(),
        Some("New event approved: Boda Marta (1 new tasks assigned)")
    );
    assert!(notifications.find_by_target_role(UserRole::Sales).await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_notifications_can_be_disabled() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let owner = helpers::create_owner(&pool).await?;
    let budgets = BudgetService::new(pool.clone());
    let automation = WorkflowAutomation::new(
        pool.clone(),
        Settings {
            notifications: Notifications { enabled: false },
            ..settings(false)
        },
    );

    let budget = budgets.save(helpers::new_budget("Gala", owner)).await?;
    let outcome = automation.trigger_workflow_for_budget(&budget).await?;

    assert_eq!(outcome.tasks.len(), 4);
    assert_eq!(outcome.notifications, 0);

    let notifications = NotificationService::new(pool);
    assert!(notifications.find_by_target_role(UserRole::Logistics).await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_inline_listener_runs_on_reserva() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let owner = helpers::create_owner(&pool).await?;
    let automation = Arc::new(WorkflowAutomation::new(pool.clone(), settings(false)));
    let (listener, handle) = BudgetStatusListener::start(automation);
    let budgets = BudgetService::new(pool.clone()).subscribe(listener);
    let query = Query(pool);

    let budget = budgets.save(helpers::new_budget("Comunion", owner)).await?;
    let budget_id = budget.id.unwrap();

    let pending = budgets
        .update(Budget {
            status: Some(BudgetStatus::Pending),
            ..budget
        })
        .await?;
    assert!(query.tasks_by_budget(budget_id).await?.is_empty());

    let reserved = budgets.update(reserve(&pending)).await?;
    assert_eq!(reserved.workflow_triggered, Some(true));
    assert_eq!(query.tasks_by_budget(budget_id).await?.len(), 4);

    budgets
        .update(Budget {
            name: Some("Comunion Pablo".to_owned()),
            ..reserved
        })
        .await?;
    assert_eq!(query.tasks_by_budget(budget_id).await?.len(), 4);

    handle.shutdown_and_wait().await?;

    Ok(())
}

#[tokio::test]
async fn test_queued_listener_drains_on_shutdown() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let owner = helpers::create_owner(&pool).await?;
    let automation = Arc::new(WorkflowAutomation::new(pool.clone(), settings(true)));
    let (listener, handle) = BudgetStatusListener::start(automation);
    let budgets = BudgetService::new(pool.clone()).subscribe(listener);

    let first = budgets.save(helpers::new_budget("Bautizo", owner)).await?;
    let second = budgets.save(helpers::new_budget("Cumpleanos", owner)).await?;

    budgets.update(reserve(&first)).await?;
    budgets
        .update_budget_status(second.id.unwrap(), BudgetStatus::Reserva)
        .await?;

    handle.shutdown_and_wait().await?;

    let query = Query(pool);
    assert_eq!(query.tasks_by_budget(first.id.unwrap()).await?.len(), 4);
    assert_eq!(query.tasks_by_budget(second.id.unwrap()).await?.len(), 4);

    Ok(())
}

#[tokio::test]
async fn test_disabled_task_generation_skips_workflow() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let owner = helpers::create_owner(&pool).await?;
    let automation = Arc::new(WorkflowAutomation::new(
        pool.clone(),
        Settings {
            task_generation: TaskGeneration {
                enabled: false,
                async_processing: false,
            },
            ..Default::default()
        },
    ));
    let budgets = BudgetService::new(pool.clone()).subscribe(BudgetStatusListener::inline(automation));

    let budget = budgets.save(helpers::new_budget("Aniversario", owner)).await?;
    let reserved = budgets.update(reserve(&budget)).await?;

    assert_eq!(reserved.workflow_triggered, Some(true));
    assert!(Query(pool).tasks_by_budget(budget.id.unwrap()).await?.is_empty());

    Ok(())
}
