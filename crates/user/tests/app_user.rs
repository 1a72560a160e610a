use magnus_shared::{Error, Pageable, types::UserRole};
use magnus_user::AppUserRepository;
use temp_dir::TempDir;
use validator::Validate;

mod helpers;

#[tokio::test]
async fn test_create_and_find() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let repository = AppUserRepository::new(pool);

    let saved = repository
        .insert(&helpers::new_user("chef", UserRole::Cook))
        .await?;
    let id = saved.id.unwrap();

    let found = repository.find_one(id).await?.unwrap();
    assert_eq!(found.login.as_deref(), Some("chef"));
    assert_eq!(found.role, Some(UserRole::Cook));
    assert_eq!(found.email.as_deref(), Some("chef@magnus.localhost"));
    assert_eq!(repository.count().await?, 1);

    Ok(())
}

#[tokio::test]
async fn test_login_is_unique() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let repository = AppUserRepository::new(pool);

    repository
        .insert(&helpers::new_user("sales", UserRole::Sales))
        .await?;

    let mut duplicate = helpers::new_user("sales", UserRole::Admin);
    duplicate.email = Some("other@magnus.localhost".to_owned());

    let err = repository.insert(&duplicate).await.unwrap_err();
    assert!(matches!(err, Error::Constraint(_)), "{err}");
    assert_eq!(repository.count().await?, 1);

    Ok(())
}

#[tokio::test]
async fn test_sort_by_login_desc() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let repository = AppUserRepository::new(pool);

    for login in ["bruno", "alice", "carla"] {
        repository
            .insert(&helpers::new_user(login, UserRole::Logistics))
            .await?;
    }

    let pageable = Pageable::new(None, Some(2), &["login,desc".to_owned()])?;
    let page = repository.find_all(&pageable).await?;
    let logins: Vec<_> = page
        .content
        .iter()
        .filter_map(|u| u.login.as_deref())
        .collect();

    assert_eq!(logins, vec!["carla", "bruno"]);
    assert_eq!(page.total, 3);
    assert_eq!(page.total_pages(), 2);

    Ok(())
}

#[test]
fn test_validation() {
    let mut user = helpers::new_user("white space", UserRole::Admin);
    let errors = user.validate().unwrap_err();
    assert!(errors.field_errors().contains_key("login"));

    user.login = Some("ok".to_owned());
    user.email = Some("not-an-email".to_owned());
    let errors = user.validate().unwrap_err();
    assert!(errors.field_errors().contains_key("email"));

    user.email = Some("ok@magnus.localhost".to_owned());
    user.role = None;
    let errors = user.validate().unwrap_err();
    assert!(errors.field_errors().contains_key("role"));
}

#[test]
fn test_json_shape() {
    let mut user = helpers::new_user("admin", UserRole::Admin);
    user.id = Some(4);

    let value = serde_json::to_value(&user).unwrap();
    assert_eq!(value["login"], "admin");
    assert_eq!(value["role"], "ADMIN");
    assert_eq!(value["isActive"], true);
    assert!(value["lastLoginAt"].is_null());
}
