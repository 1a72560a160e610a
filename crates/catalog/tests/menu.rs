use magnus_catalog::{FoodItemRepository, MenuService};
use magnus_shared::{Crud, EntityRef, Error, Pageable, merge_patch};
use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn test_menu_keeps_food_items() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let items = helpers::create_food_items(&pool, ["paella", "gazpacho", "flan"]).await?;
    let service = MenuService::new(pool);

    let menu = service
        .save(helpers::new_menu(
            "Mediterraneo",
            vec![items[2], items[0], items[2]],
        ))
        .await?;
    assert_eq!(menu.included_food_items, Some(vec![items[0], items[2]]));

    let found = service.find_one(menu.id.unwrap()).await?.unwrap();
    assert_eq!(found.included_food_items, Some(vec![items[0], items[2]]));

    let other = service.save(helpers::new_menu("Vacio", vec![])).await?;
    let page = service.find_all(&Pageable::default()).await?;
    assert_eq!(page.total, 2);
    assert_eq!(page.content[0].id, menu.id);
    assert_eq!(page.content[0].included_food_items.as_ref().unwrap().len(), 2);
    assert_eq!(page.content[1].id, other.id);
    assert_eq!(page.content[1].included_food_items, Some(vec![]));

    Ok(())
}

#[tokio::test]
async fn test_update_replaces_food_items() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let items = helpers::create_food_items(&pool, ["tortilla", "croquetas"]).await?;
    let service = MenuService::new(pool);

    let menu = service
        .save(helpers::new_menu("Tapas", vec![items[0]]))
        .await?;

    let patched = merge_patch(&menu, serde_json::json!({ "name": "Tapas variadas" }))?;
    let stored = service.update(patched).await?;
    assert_eq!(stored.included_food_items, Some(vec![items[0]]));

    let patched = merge_patch(
        &stored,
        serde_json::json!({ "includedFoodItems": [{ "id": items[1].id }] }),
    )?;
    service.update(patched).await?;

    let found = service.find_one(menu.id.unwrap()).await?.unwrap();
    assert_eq!(found.name.as_deref(), Some("Tapas variadas"));
    assert_eq!(found.included_food_items, Some(vec![items[1]]));

    Ok(())
}

#[tokio::test]
async fn test_unknown_food_item_stores_nothing() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let service = MenuService::new(pool);

    let err = service
        .save(helpers::new_menu("Fantasma", vec![EntityRef::from(77)]))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Constraint(_)), "{err}");
    assert_eq!(service.find_all(&Pageable::default()).await?.total, 0);

    Ok(())
}

#[tokio::test]
async fn test_delete_menu_and_linked_food_item() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let items = helpers::create_food_items(&pool, ["jamon", "queso"]).await?;
    let food_items = FoodItemRepository::new(pool.clone());
    let service = MenuService::new(pool);

    let menu = service
        .save(helpers::new_menu("Ibérico", vec![items[0]]))
        .await?;

    let err = food_items.delete(items[0].id).await.unwrap_err();
    assert!(matches!(err, Error::Constraint(_)), "{err}");
    food_items.delete(items[1].id).await?;

    service.delete(menu.id.unwrap()).await?;
    assert!(service.find_one(menu.id.unwrap()).await?.is_none());

    food_items.delete(items[0].id).await?;
    assert_eq!(food_items.count().await?, 0);

    Ok(())
}
