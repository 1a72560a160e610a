use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{DateTime, Utc};
use magnus_budget::{Budget, BudgetService};
use magnus_shared::types::BudgetStatus;
use magnus_workflow::WorkflowAutomation;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    error::{APP_NAME, ApiError, ResultExt},
    routes::resource::alert_headers,
};

const ENTITY_NAME: &str = "workflow";

#[derive(Clone)]
pub struct WorkflowState {
    pub budgets: BudgetService,
    pub automation: Arc<WorkflowAutomation>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct StatusUpdate {
    #[validate(required)]
    pub status: Option<BudgetStatus>,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowStatus {
    pub budget_id: Option<i64>,
    pub status: Option<BudgetStatus>,
    pub workflow_triggered: Option<bool>,
    pub last_workflow_execution: Option<DateTime<Utc>>,
}

pub fn routes(state: WorkflowState) -> Router {
    Router::new()
        .route(
            "/api/workflow/trigger-tasks/{budget_id}",
            post(trigger_tasks),
        )
        .route(
            "/api/workflow/budget-status/{budget_id}",
            get(budget_status).patch(update_budget_status),
        )
        .route(
            "/api/workflow/approve-budget/{budget_id}",
            post(approve_budget),
        )
        .with_state(state)
}

async fn find_budget(state: &WorkflowState, budget_id: i64) -> Result<Budget, ApiError> {
    state
        .budgets
        .repository()
        .find_one(budget_id)
        .await
        .entity(ENTITY_NAME)?
        .ok_or_else(|| ApiError::bad_request(ENTITY_NAME, "budgetnotfound", "Budget not found"))
}

/// Runs the workflow for a reserved budget and waits for it.
#[tracing::instrument(skip(state))]
async fn trigger_tasks(
    State(state): State<WorkflowState>,
    Path(budget_id): Path<i64>,
) -> Result<Response, ApiError> {
    let budget = find_budget(&state, budget_id).await?;

    if budget.status != Some(BudgetStatus::Reserva) {
        return Err(ApiError::bad_request(
            ENTITY_NAME,
            "invalidstatus",
            "Budget must be in RESERVA status to trigger workflow",
        ));
    }

    if let Err(err) = state.automation.trigger_workflow_for_budget(&budget).await {
        tracing::error!("Error triggering workflow for budget {budget_id}: {err}");
        return Err(ApiError::bad_request(
            ENTITY_NAME,
            "workflowerror",
            format!("Failed to trigger workflow: {err}"),
        ));
    }

    let headers = alert_headers(
        &format!("Workflow triggered successfully for budget {budget_id}"),
        &budget_id.to_string(),
    );

    Ok((StatusCode::OK, headers).into_response())
}

#[tracing::instrument(skip(state, body))]
async fn update_budget_status(
    State(state): State<WorkflowState>,
    Path(budget_id): Path<i64>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let request: StatusUpdate = serde_json::from_slice(&body).entity(ENTITY_NAME)?;
    request.validate().entity(ENTITY_NAME)?;

    let Some(status) = request.status else {
        return Err(ApiError::bad_request(ENTITY_NAME, "statusnull", "Status is required"));
    };

    tracing::info!(%status, notes = ?request.notes, "Updating budget status");

    let budget = state
        .budgets
        .update_budget_status(budget_id, status)
        .await
        .map_err(|err| {
            tracing::error!("Error updating budget status {budget_id}: {err}");
            ApiError::bad_request(
                ENTITY_NAME,
                "statusupdateerror",
                format!("Failed to update budget status: {err}"),
            )
        })?;

    let headers = alert_headers(&format!("{APP_NAME}.budget.updated"), &budget_id.to_string());

    Ok((headers, Json(budget)).into_response())
}

#[tracing::instrument(skip(state))]
async fn approve_budget(
    State(state): State<WorkflowState>,
    Path(budget_id): Path<i64>,
) -> Result<Response, ApiError> {
    let budget = find_budget(&state, budget_id).await?;

    if budget.status == Some(BudgetStatus::Reserva) {
        return Err(ApiError::bad_request(
            ENTITY_NAME,
            "alreadyapproved",
            "Budget is already approved",
        ));
    }

    let approved = state
        .budgets
        .update_budget_status(budget_id, BudgetStatus::Reserva)
        .await
        .map_err(|err| {
            tracing::error!("Error approving budget {budget_id}: {err}");
            ApiError::bad_request(
                ENTITY_NAME,
                "approvalerror",
                format!("Failed to approve budget: {err}"),
            )
        })?;

    let headers = alert_headers(
        "Budget approved and workflow triggered",
        &budget_id.to_string(),
    );

    Ok((headers, Json(approved)).into_response())
}

async fn budget_status(
    State(state): State<WorkflowState>,
    Path(budget_id): Path<i64>,
) -> Result<Json<WorkflowStatus>, ApiError> {
    let budget = find_budget(&state, budget_id).await?;

    Ok(Json(WorkflowStatus {
        budget_id: budget.id,
        status: budget.status,
        workflow_triggered: budget.workflow_triggered,
        last_workflow_execution: budget.last_workflow_execution,
    }))
}
