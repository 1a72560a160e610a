use std::sync::Arc;

use chrono::Utc;
use magnus_shared::{Crud, Error, Page, Pageable, Repository, Result, types::BudgetStatus};

use crate::{Budget, BudgetStatusChanged, StatusChangeSubscriber, is_workflow_trigger};

/// Acting user recorded on status changes while requests are unauthenticated.
pub const SYSTEM_USER: &str = "system";

/// Budget storage that tracks status transitions.
#[derive(Clone)]
pub struct BudgetService {
    repository: Repository<Budget>,
    subscribers: Vec<Arc<dyn StatusChangeSubscriber>>,
}

impl BudgetService {
    pub fn new(pool: sqlx::SqlitePool) -> Self {
        Self {
            repository: Repository::new(pool),
            subscribers: vec![],
        }
    }

    pub fn subscribe(mut self, subscriber: Arc<dyn StatusChangeSubscriber>) -> Self {
        self.subscribers.push(subscriber);
        self
    }

    pub fn repository(&self) -> &Repository<Budget> {
        &self.repository
    }

    #[tracing::instrument(skip(self))]
    pub async fn update_budget_status(&self, budget_id: i64, status: BudgetStatus) -> Result<Budget> {
        let Some(mut budget) = self.repository.find_one(budget_id).await? else {
            return Err(Error::NotFound { entity: "budget" });
        };

        budget.status = Some(status);

        Crud::update(self, budget).await
    }

    async fn publish(&self, event: BudgetStatusChanged) {
        tracing::info!(
            budget_id = event.budget.id,
            old_status = %event.old_status,
            new_status = %event.new_status,
            changed_by = %event.changed_by,
            "Publishing budget status change"
        );

        for subscriber in &self.subscribers {
            subscriber.on_status_changed(event.clone()).await;
        }
    }
}

#[async_trait::async_trait]
impl Crud for BudgetService {
    type Dto = Budget;

    #[tracing::instrument(skip_all)]
    async fn save(&self, dto: Budget) -> Result<Budget> {
        self.repository.insert(&dto).await
    }

    #[tracing::instrument(skip_all, fields(id = dto.id))]
    async fn update(&self, mut dto: Budget) -> Result<Budget> {
        let Some(id) = dto.id else {
            return Err(Error::bad_request("budget", "idnull", "Invalid id"));
        };

        let old_status = self
            .repository
            .find_one(id)
            .await?
            .and_then(|existing| existing.status);

        if let Some(new_status) = dto.status
            && is_workflow_trigger(old_status, new_status)
        {
            let now = Utc::now();
            dto.workflow_triggered = Some(true);
            dto.last_workflow_execution = Some(now);
            dto.reserved_at = Some(now);
        }

        let stored = self.repository.update(&dto).await?;

        if let (Some(old_status), Some(new_status)) = (old_status, stored.status)
            && old_status != new_status
        {
            self.publish(BudgetStatusChanged {
                budget: stored.clone(),
                old_status,
                new_status,
                changed_by: SYSTEM_USER.to_owned(),
            })
            .await;
        }

        Ok(stored)
    }

    async fn find_all(&self, pageable: &Pageable) -> Result<Page<Budget>> {
        self.repository.find_all(pageable).await
    }

    async fn find_one(&self, id: i64) -> Result<Option<Budget>> {
        self.repository.find_one(id).await
    }

    async fn exists(&self, id: i64) -> Result<bool> {
        self.repository.exists(id).await
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<()> {
        self.repository.delete(id).await
    }
}
