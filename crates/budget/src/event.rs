use magnus_shared::types::BudgetStatus;

use crate::Budget;

/// Published once a budget update that changed its status is stored.
#[derive(Debug, Clone)]
pub struct BudgetStatusChanged {
    pub budget: Budget,
    pub old_status: BudgetStatus,
    pub new_status: BudgetStatus,
    pub changed_by: String,
}

impl BudgetStatusChanged {
    pub fn is_workflow_trigger(&self) -> bool {
        is_workflow_trigger(Some(self.old_status), self.new_status)
    }
}

/// Entering `RESERVA` from any other status starts the workflow.
pub fn is_workflow_trigger(old: Option<BudgetStatus>, new: BudgetStatus) -> bool {
    new == BudgetStatus::Reserva && old != Some(BudgetStatus::Reserva)
}

#[async_trait::async_trait]
pub trait StatusChangeSubscriber: Send + Sync + 'static {
    async fn on_status_changed(&self, event: BudgetStatusChanged);
}
