use chrono::{NaiveTime, Utc};
use magnus_shared::{EntityRef, types::DependencyType};
use magnus_task::{Query, TaskDependency, TaskDependencyRepository, TaskRepository};
use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn test_tasks_by_budget() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let boda = helpers::create_fixture(&pool, "Boda").await?;
    let gala = helpers::create_fixture(&pool, "Gala").await?;
    let tasks = TaskRepository::new(pool.clone());
    let query = Query(pool);

    tasks.insert(&helpers::new_task("Flores", &boda)).await?;
    tasks.insert(&helpers::new_task("Musica", &gala)).await?;
    tasks.insert(&helpers::new_task("Mesas", &boda)).await?;

    let found = query.tasks_by_budget(boda.budget.id).await?;
    let titles: Vec<_> = found.iter().filter_map(|t| t.title.as_deref()).collect();
    assert_eq!(titles, vec!["Flores", "Mesas"]);
    assert!(found.iter().all(|t| t.related_budget == Some(boda.budget)));
    assert_eq!(found[0].due_time, NaiveTime::from_hms_opt(9, 30, 0));

    assert!(query.tasks_by_budget(9999).await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_dependencies_by_task() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let fixture = helpers::create_fixture(&pool, "Cena").await?;
    let tasks = TaskRepository::new(pool.clone());
    let dependencies = TaskDependencyRepository::new(pool.clone());
    let query = Query(pool);

    let shopping = tasks.insert(&helpers::new_task("Compra", &fixture)).await?;
    let cooking = tasks.insert(&helpers::new_task("Cocina", &fixture)).await?;
    let serving = tasks.insert(&helpers::new_task("Servicio", &fixture)).await?;

    for (prerequisite, dependent) in [(&shopping, &cooking), (&cooking, &serving)] {
        dependencies
            .insert(&TaskDependency {
                dependency_type: Some(DependencyType::Blocks),
                is_active: Some(true),
                created_at: Some(Utc::now()),
                prerequisite_task: prerequisite.id.map(EntityRef::from),
                dependent_task: dependent.id.map(EntityRef::from),
                ..Default::default()
            })
            .await?;
    }

    let blocking = query
        .dependencies_by_dependent(cooking.id.unwrap())
        .await?;
    assert_eq!(blocking.len(), 1);
    assert_eq!(blocking[0].prerequisite_task, shopping.id.map(EntityRef::from));

    let blocked = query
        .dependencies_by_prerequisite(cooking.id.unwrap())
        .await?;
    assert_eq!(blocked.len(), 1);
    assert_eq!(blocked[0].dependent_task, serving.id.map(EntityRef::from));

    assert!(
        query
            .dependencies_by_prerequisite(serving.id.unwrap())
            .await?
            .is_empty()
    );

    Ok(())
}
