use chrono::Utc;
use magnus_db::table;
use magnus_shared::{
    EntityRef, Repository, Result,
    types::{NotificationType, TaskPriority, UserRole},
};
use sea_query::{Cond, Expr, ExprTrait, Order};
use sqlx::SqlitePool;

use crate::Notification;

/// Message addressed to every user of a role about a budget.
#[derive(Debug, Clone)]
pub struct RoleNotification {
    pub target_role: UserRole,
    pub title: String,
    pub message: String,
    pub budget_id: Option<i64>,
    pub created_by: Option<EntityRef>,
}

#[derive(Clone)]
pub struct NotificationService {
    repository: Repository<Notification>,
}

impl NotificationService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: Repository::new(pool),
        }
    }

    pub fn repository(&self) -> &Repository<Notification> {
        &self.repository
    }

    /// Notifications targeted at `role`, plus global ones.
    pub async fn find_by_target_role(&self, role: UserRole) -> Result<Vec<Notification>> {
        let statement = Repository::<Notification>::query()
            .cond_where(role_or_global(role))
            .order_by(table::Notification::Id, Order::Asc)
            .to_owned();

        self.repository.fetch(statement).await
    }

    pub async fn find_unread_by_target_role(&self, role: UserRole) -> Result<Vec<Notification>> {
        let statement = Repository::<Notification>::query()
            .cond_where(
                Cond::all()
                    .add(Expr::col(table::Notification::IsRead).eq(false))
                    .add(role_or_global(role)),
            )
            .order_by(table::Notification::Id, Order::Asc)
            .to_owned();

        self.repository.fetch(statement).await
    }

    #[tracing::instrument(skip_all, fields(role = %input.target_role, title = %input.title))]
    pub async fn send_role_notification(&self, input: RoleNotification) -> Result<Notification> {
        let notification = Notification {
            title: Some(input.title),
            message: Some(input.message),
            kind: Some(NotificationType::Info),
            target_role: Some(input.target_role),
            related_entity_type: Some("Budget".to_owned()),
            related_entity_id: input.budget_id.map(|id| id.to_string()),
            is_read: Some(false),
            is_global: Some(false),
            action_required: Some(false),
            priority: Some(TaskPriority::Medium),
            created_at: Some(Utc::now()),
            created_by: input.created_by,
            ..Default::default()
        };

        let stored = self.repository.insert(&notification).await?;
        tracing::info!("Workflow notification sent");

        Ok(stored)
    }
}

fn role_or_global(role: UserRole) -> Cond {
    Cond::any()
        .add(Expr::col(table::Notification::TargetRole).eq(role.as_ref()))
        .add(Expr::col(table::Notification::IsGlobal).eq(true))
}
