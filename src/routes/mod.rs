use std::sync::Arc;

use axum::{Router, routing::get};
use magnus_budget::BudgetService;
use magnus_catalog::MenuService;
use magnus_notification::NotificationService;
use magnus_workflow::WorkflowAutomation;
use sqlx::SqlitePool;

mod health;
mod query;
pub mod resource;
mod workflow;

pub use workflow::{StatusUpdate, WorkflowStatus};

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    /// Budget storage with the workflow listener subscribed.
    pub budgets: BudgetService,
    pub automation: Arc<WorkflowAutomation>,
}

pub fn router(app_state: AppState) -> Router {
    let pool = app_state.pool.clone();

    Router::new()
        .route("/management/health", get(health::health))
        .route("/management/ready", get(health::ready))
        .with_state(pool.clone())
        .merge(resource::routes(
            "app-users",
            magnus_user::AppUserRepository::new(pool.clone()),
        ))
        .merge(resource::routes(
            "clients",
            magnus_budget::ClientRepository::new(pool.clone()),
        ))
        .merge(resource::routes("budgets", app_state.budgets.clone()))
        .merge(resource::routes(
            "budget-items",
            magnus_budget::BudgetItemRepository::new(pool.clone()),
        ))
        .merge(resource::routes(
            "budget-templates",
            magnus_budget::BudgetTemplateRepository::new(pool.clone()),
        ))
        .merge(resource::routes(
            "payments",
            magnus_budget::PaymentRepository::new(pool.clone()),
        ))
        .merge(resource::routes(
            "accommodations",
            magnus_catalog::AccommodationRepository::new(pool.clone()),
        ))
        .merge(resource::routes(
            "activities",
            magnus_catalog::ActivityRepository::new(pool.clone()),
        ))
        .merge(resource::routes(
            "food-items",
            magnus_catalog::FoodItemRepository::new(pool.clone()),
        ))
        .merge(resource::routes("menus", MenuService::new(pool.clone())))
        .merge(resource::routes(
            "menu-items",
            magnus_catalog::MenuItemRepository::new(pool.clone()),
        ))
        .merge(resource::routes(
            "transports",
            magnus_catalog::TransportRepository::new(pool.clone()),
        ))
        .merge(resource::routes(
            "transport-assignments",
            magnus_catalog::TransportAssignmentRepository::new(pool.clone()),
        ))
        .merge(resource::routes(
            "products",
            magnus_catalog::ProductRepository::new(pool.clone()),
        ))
        .merge(resource::routes(
            "tasks",
            magnus_task::TaskRepository::new(pool.clone()),
        ))
        .merge(resource::routes(
            "task-dependencies",
            magnus_task::TaskDependencyRepository::new(pool.clone()),
        ))
        .merge(resource::routes(
            "needs",
            magnus_task::NeedRepository::new(pool.clone()),
        ))
        .merge(query::task_routes(magnus_task::Query(pool.clone())))
        .merge(resource::routes(
            "cooking-schedules",
            magnus_kitchen::CookingScheduleRepository::new(pool.clone()),
        ))
        .merge(resource::routes(
            "cooking-ingredients",
            magnus_kitchen::CookingIngredientRepository::new(pool.clone()),
        ))
        .merge(resource::routes(
            "product-requirements",
            magnus_kitchen::ProductRequirementRepository::new(pool.clone()),
        ))
        .merge(resource::routes(
            "weekly-plans",
            magnus_shopping::WeeklyPlanRepository::new(pool.clone()),
        ))
        .merge(resource::routes(
            "shopping-items",
            magnus_shopping::ShoppingItemRepository::new(pool.clone()),
        ))
        .merge(resource::routes(
            "notifications",
            magnus_notification::NotificationRepository::new(pool.clone()),
        ))
        .merge(query::notification_routes(NotificationService::new(pool.clone())))
        .merge(resource::routes(
            "workflow-triggers",
            magnus_workflow::WorkflowTriggerRepository::new(pool.clone()),
        ))
        .merge(resource::routes(
            "system-configs",
            magnus_admin::SystemConfigRepository::new(pool.clone()),
        ))
        .merge(resource::routes(
            "audit-logs",
            magnus_admin::AuditLogRepository::new(pool.clone()),
        ))
        .merge(resource::routes(
            "conflict-resolutions",
            magnus_admin::ConflictResolutionRepository::new(pool),
        ))
        .merge(workflow::routes(workflow::WorkflowState {
            budgets: app_state.budgets,
            automation: app_state.automation,
        }))
}
