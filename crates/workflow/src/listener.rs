use std::sync::Arc;

use magnus_budget::{BudgetStatusChanged, StatusChangeSubscriber};
use tokio::{
    sync::{mpsc, oneshot},
    task::JoinHandle,
};

use crate::WorkflowAutomation;

enum Dispatch {
    Inline,
    Queue(mpsc::UnboundedSender<BudgetStatusChanged>),
}

/// Starts the workflow when a budget enters `RESERVA`.
pub struct BudgetStatusListener {
    automation: Arc<WorkflowAutomation>,
    dispatch: Dispatch,
}

/// Background worker of a queued listener.
pub struct ListenerHandle {
    worker: Option<(oneshot::Sender<()>, JoinHandle<()>)>,
}

impl BudgetStatusListener {
    /// Events are handled before `on_status_changed` returns.
    pub fn inline(automation: Arc<WorkflowAutomation>) -> Arc<Self> {
        Arc::new(Self {
            automation,
            dispatch: Dispatch::Inline,
        })
    }

    /// Events are queued and handled by a spawned worker.
    pub fn queued(automation: Arc<WorkflowAutomation>) -> (Arc<Self>, ListenerHandle) {
        let (tx, mut rx) = mpsc::unbounded_channel::<BudgetStatusChanged>();
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();
        let worker_automation = automation.clone();

        let worker = tokio::spawn(async move {
            loop {
                tokio::select! {
                    Some(event) = rx.recv() => handle(&worker_automation, event).await,
                    _ = &mut shutdown_rx => break,
                    else => break,
                }
            }

            rx.close();
            while let Ok(event) = rx.try_recv() {
                handle(&worker_automation, event).await;
            }

            tracing::info!("Budget status listener stopped");
        });

        let listener = Arc::new(Self {
            automation,
            dispatch: Dispatch::Queue(tx),
        });

        (
            listener,
            ListenerHandle {
                worker: Some((shutdown_tx, worker)),
            },
        )
    }

    /// Queued when `async_processing` is enabled, inline otherwise.
    pub fn start(automation: Arc<WorkflowAutomation>) -> (Arc<Self>, ListenerHandle) {
        if automation.settings().task_generation.async_processing {
            Self::queued(automation)
        } else {
            (Self::inline(automation), ListenerHandle { worker: None })
        }
    }
}

impl ListenerHandle {
    /// Stops accepting new work and waits for queued events to finish.
    pub async fn shutdown_and_wait(mut self) -> Result<(), tokio::task::JoinError> {
        let Some((shutdown, worker)) = self.worker.take() else {
            return Ok(());
        };

        let _ = shutdown.send(());
        worker.await
    }
}

async fn handle(automation: &WorkflowAutomation, event: BudgetStatusChanged) {
    let budget_id = event.budget.id;

    if !event.is_workflow_trigger() {
        tracing::debug!(
            budget_id,
            old_status = %event.old_status,
            new_status = %event.new_status,
            "Status change does not start the workflow"
        );
        return;
    }

    if !automation.settings().task_generation.enabled {
        tracing::debug!(budget_id, "Task generation disabled, skipping workflow");
        return;
    }

    if let Err(err) = automation.trigger_workflow_for_budget(&event.budget).await {
        tracing::error!(budget_id, "Workflow automation failed: {err}");
    }
}

#[async_trait::async_trait]
impl StatusChangeSubscriber for BudgetStatusListener {
    async fn on_status_changed(&self, event: BudgetStatusChanged) {
        match &self.dispatch {
            Dispatch::Inline => handle(&self.automation, event).await,
            Dispatch::Queue(tx) => {
                if let Err(err) = tx.send(event) {
                    tracing::error!(
                        budget_id = err.0.budget.id,
                        "Budget status listener is stopped, dropping event"
                    );
                }
            }
        }
    }
}
