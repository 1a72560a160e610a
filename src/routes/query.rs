use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use magnus_notification::{Notification, NotificationService};
use magnus_shared::types::UserRole;
use magnus_task::{Query, Task, TaskDependency};

use crate::error::{ApiError, ResultExt};

pub fn notification_routes(service: NotificationService) -> Router {
    Router::new()
        .route("/api/notifications/role/{role}", get(notifications_by_role))
        .route(
            "/api/notifications/role/{role}/unread",
            get(unread_notifications_by_role),
        )
        .with_state(service)
}

pub fn task_routes(query: Query) -> Router {
    Router::new()
        .route("/api/tasks/budget/{budget_id}", get(tasks_by_budget))
        .route(
            "/api/task-dependencies/dependent/{task_id}",
            get(dependencies_by_dependent),
        )
        .route(
            "/api/task-dependencies/prerequisite/{task_id}",
            get(dependencies_by_prerequisite),
        )
        .with_state(query)
}

async fn notifications_by_role(
    State(service): State<NotificationService>,
    Path(role): Path<UserRole>,
) -> Result<Json<Vec<Notification>>, ApiError> {
    let notifications = service
        .find_by_target_role(role)
        .await
        .entity("notification")?;

    Ok(Json(notifications))
}

async fn unread_notifications_by_role(
    State(service): State<NotificationService>,
    Path(role): Path<UserRole>,
) -> Result<Json<Vec<Notification>>, ApiError> {
    let notifications = service
        .find_unread_by_target_role(role)
        .await
        .entity("notification")?;

    Ok(Json(notifications))
}

async fn tasks_by_budget(
    State(query): State<Query>,
    Path(budget_id): Path<i64>,
) -> Result<Json<Vec<Task>>, ApiError> {
    Ok(Json(query.tasks_by_budget(budget_id).await.entity("task")?))
}

async fn dependencies_by_dependent(
    State(query): State<Query>,
    Path(task_id): Path<i64>,
) -> Result<Json<Vec<TaskDependency>>, ApiError> {
    let dependencies = query
        .dependencies_by_dependent(task_id)
        .await
        .entity("taskDependency")?;

    Ok(Json(dependencies))
}

async fn dependencies_by_prerequisite(
    State(query): State<Query>,
    Path(task_id): Path<i64>,
) -> Result<Json<Vec<TaskDependency>>, ApiError> {
    let dependencies = query
        .dependencies_by_prerequisite(task_id)
        .await
        .entity("taskDependency")?;

    Ok(Json(dependencies))
}
