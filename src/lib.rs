pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod migrate;
pub mod observability;
pub mod routes;

use std::sync::Arc;

use magnus_budget::BudgetService;
use magnus_workflow::{BudgetStatusListener, ListenerHandle, Settings, WorkflowAutomation};

pub use config::Config;
pub use routes::{AppState, router};

/// Application state wired the way `serve` does it.
///
/// The returned handle owns the background listener when
/// `settings.task_generation.async_processing` is set.
pub fn create_state(pool: sqlx::SqlitePool, settings: Settings) -> (AppState, ListenerHandle) {
    let automation = Arc::new(WorkflowAutomation::new(pool.clone(), settings));
    let (listener, handle) = BudgetStatusListener::start(automation.clone());
    let budgets = BudgetService::new(pool.clone()).subscribe(listener);

    let state = AppState {
        pool,
        budgets,
        automation,
    };

    (state, handle)
}

/// Router over `pool` with the status listener running inline, for tests.
pub fn create_app(pool: sqlx::SqlitePool, settings: Settings) -> axum::Router {
    let automation = Arc::new(WorkflowAutomation::new(pool.clone(), settings));
    let budgets = BudgetService::new(pool.clone())
        .subscribe(BudgetStatusListener::inline(automation.clone()));

    router(AppState {
        pool,
        budgets,
        automation,
    })
}
