mod helpers;

use axum::http::StatusCode;
use helpers::{TestApp, budget};
use magnus_workflow::Settings;
use serde_json::{Value, json};
use temp_dir::TempDir;

fn task_id(tasks: &Value, kind: &str) -> i64 {
    tasks
        .as_array()
        .unwrap()
        .iter()
        .find(|task| task["type"] == kind)
        .and_then(|task| task["id"].as_i64())
        .unwrap()
}

#[tokio::test]
async fn test_approve_budget_generates_workflow() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let app = TestApp::new(dir.child("db.sqlite3")).await?;
    let owner = app.create_owner().await?;
    let id = app.create("budgets", budget("Boda Marta", owner)).await?;

    let approved = app
        .post(&format!("/api/workflow/approve-budget/{id}"), &json!({}))
        .await?;
    assert_eq!(approved.status, StatusCode::OK);
    assert_eq!(
        approved.headers["x-magnusapp-alert"],
        "Budget approved and workflow triggered"
    );
    assert_eq!(approved.body["status"], "RESERVA");
    assert_eq!(approved.body["workflowTriggered"], true);
    assert!(approved.body["reservedAt"].is_string());

    let tasks = app.get(&format!("/api/tasks/budget/{id}")).await?;
    assert_eq!(tasks.status, StatusCode::OK);
    assert_eq!(tasks.body.as_array().unwrap().len(), 4);

    let shopping = task_id(&tasks.body, "SHOPPING");
    let cooking = task_id(&tasks.body, "COOKING");

    let blocking = app
        .get(&format!("/api/task-dependencies/dependent/{cooking}"))
        .await?;
    assert_eq!(blocking.body.as_array().unwrap().len(), 1);
    assert_eq!(blocking.body[0]["prerequisiteTask"], json!({ "id": shopping }));
    assert_eq!(blocking.body[0]["dependencyType"], "BLOCKS");

    let unlocks = app
        .get(&format!("/api/task-dependencies/prerequisite/{shopping}"))
        .await?;
    assert_eq!(unlocks.body[0]["dependentTask"], json!({ "id": cooking }));

    let logistics = app.get("/api/notifications/role/LOGISTICS").await?;
    assert_eq!(logistics.body.as_array().unwrap().len(), 1);
    assert_eq!(
        logistics.body[0]["message"],
        "New event approved: Boda Marta (3 new tasks assigned)"
    );

    let unread = app.get("/api/notifications/role/COOK/unread").await?;
    assert_eq!(
        unread.body[0]["message"],
        "New event approved: Boda Marta (1 new tasks assigned)"
    );

    let sales = app.get("/api/notifications/role/SALES").await?;
    assert_eq!(sales.body, json!([]));

    let status = app.get(&format!("/api/workflow/budget-status/{id}")).await?;
    assert_eq!(status.body["budgetId"], id);
    assert_eq!(status.body["status"], "RESERVA");
    assert_eq!(status.body["workflowTriggered"], true);
    assert!(status.body["lastWorkflowExecution"].is_string());

    Ok(())
}

#[tokio::test]
async fn test_approve_budget_errors() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let app = TestApp::new(dir.child("db.sqlite3")).await?;
    let owner = app.create_owner().await?;
    let id = app.create("budgets", budget("Boda Marta", owner)).await?;

    let missing = app
        .post("/api/workflow/approve-budget/999", &json!({}))
        .await?;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);
    assert_eq!(missing.body["errorKey"], "budgetnotfound");
    assert_eq!(missing.body["entityName"], "workflow");

    app.post(&format!("/api/workflow/approve-budget/{id}"), &json!({}))
        .await?;
    let twice = app
        .post(&format!("/api/workflow/approve-budget/{id}"), &json!({}))
        .await?;
    assert_eq!(twice.status, StatusCode::BAD_REQUEST);
    assert_eq!(twice.body["errorKey"], "alreadyapproved");

    let tasks = app.get(&format!("/api/tasks/budget/{id}")).await?;
    assert_eq!(tasks.body.as_array().unwrap().len(), 4);

    Ok(())
}

#[tokio::test]
async fn test_trigger_tasks_requires_reserva() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let app = TestApp::new(dir.child("db.sqlite3")).await?;
    let owner = app.create_owner().await?;
    let id = app.create("budgets", budget("Cena de empresa", owner)).await?;

    let draft = app
        .post(&format!("/api/workflow/trigger-tasks/{id}"), &json!({}))
        .await?;
    assert_eq!(draft.status, StatusCode::BAD_REQUEST);
    assert_eq!(draft.body["errorKey"], "invalidstatus");

    let missing = app
        .post("/api/workflow/trigger-tasks/999", &json!({}))
        .await?;
    assert_eq!(missing.body["errorKey"], "budgetnotfound");

    app.post(&format!("/api/workflow/approve-budget/{id}"), &json!({}))
        .await?;

    let triggered = app
        .post(&format!("/api/workflow/trigger-tasks/{id}"), &json!({}))
        .await?;
    assert_eq!(triggered.status, StatusCode::OK);
    assert_eq!(
        triggered.headers["x-magnusapp-alert"],
        format!("Workflow triggered successfully for budget {id}")
    );
    assert_eq!(triggered.body, Value::Null);

    let tasks = app.get(&format!("/api/tasks/budget/{id}")).await?;
    assert_eq!(tasks.body.as_array().unwrap().len(), 8);

    Ok(())
}

#[tokio::test]
async fn test_patch_budget_status() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let app = TestApp::new(dir.child("db.sqlite3")).await?;
    let owner = app.create_owner().await?;
    let id = app.create("budgets", budget("Congreso", owner)).await?;

    let pending = app
        .patch(
            &format!("/api/workflow/budget-status/{id}"),
            &json!({ "status": "PENDING", "notes": "waiting for deposit" }),
        )
        .await?;
    assert_eq!(pending.status, StatusCode::OK);
    assert_eq!(pending.headers["x-magnusapp-alert"], "magnusApp.budget.updated");
    assert_eq!(pending.body["status"], "PENDING");
    assert_eq!(pending.body["workflowTriggered"], false);

    let tasks = app.get(&format!("/api/tasks/budget/{id}")).await?;
    assert_eq!(tasks.body, json!([]));

    let reserved = app
        .patch(
            &format!("/api/workflow/budget-status/{id}"),
            &json!({ "status": "RESERVA" }),
        )
        .await?;
    assert_eq!(reserved.body["workflowTriggered"], true);

    let tasks = app.get(&format!("/api/tasks/budget/{id}")).await?;
    assert_eq!(tasks.body.as_array().unwrap().len(), 4);

    let empty = app
        .patch(&format!("/api/workflow/budget-status/{id}"), &json!({}))
        .await?;
    assert_eq!(empty.status, StatusCode::BAD_REQUEST);
    assert_eq!(empty.body["message"], "error.validation");

    let missing = app
        .patch(
            "/api/workflow/budget-status/999",
            &json!({ "status": "APPROVED" }),
        )
        .await?;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);
    assert_eq!(missing.body["errorKey"], "statusupdateerror");

    Ok(())
}

#[tokio::test]
async fn test_budget_put_to_reserva_runs_workflow_once() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let app = TestApp::new(dir.child("db.sqlite3")).await?;
    let owner = app.create_owner().await?;
    let id = app.create("budgets", budget("Boda Marta", owner)).await?;

    let mut reserved = budget("Boda Marta", owner);
    reserved["id"] = json!(id);
    reserved["status"] = json!("RESERVA");

    let response = app.put(&format!("/api/budgets/{id}"), &reserved).await?;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["workflowTriggered"], true);

    let response = app
        .patch(&format!("/api/budgets/{id}"), &json!({ "id": id, "guestCount": 80 }))
        .await?;
    assert_eq!(response.status, StatusCode::OK);

    let tasks = app.get(&format!("/api/tasks/budget/{id}")).await?;
    assert_eq!(tasks.body.as_array().unwrap().len(), 4);

    Ok(())
}

#[tokio::test]
async fn test_disabled_task_generation() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let mut settings = Settings::default();
    settings.task_generation.enabled = false;
    let app = TestApp::with_settings(dir.child("db.sqlite3"), settings).await?;
    let owner = app.create_owner().await?;
    let id = app.create("budgets", budget("Boda Marta", owner)).await?;

    let approved = app
        .post(&format!("/api/workflow/approve-budget/{id}"), &json!({}))
        .await?;
    assert_eq!(approved.status, StatusCode::OK);

    let tasks = app.get(&format!("/api/tasks/budget/{id}")).await?;
    assert_eq!(tasks.body, json!([]));

    Ok(())
}

#[tokio::test]
async fn test_unknown_role_is_rejected() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let app = TestApp::new(dir.child("db.sqlite3")).await?;

    let response = app.get("/api/notifications/role/CHEF").await?;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    Ok(())
}
