use chrono::{DateTime, Days, NaiveDate, NaiveTime, TimeDelta, Utc};
use magnus_budget::Budget;
use magnus_notification::{NotificationService, RoleNotification};
use magnus_shared::{
    EntityRef, Repository, Result, bail,
    types::{ConflictStatus, DependencyType, TaskPriority, TaskStatus, TaskType, UserRole},
};
use magnus_task::{Task, TaskDependency};
use rust_decimal::Decimal;
use sqlx::SqlitePool;
use strum::VariantArray;

use crate::{Scheduling, Settings};

const DEPENDENCY_NOTES: &str = "Auto-generated workflow dependency";

/// What a single workflow run stored.
#[derive(Debug, Clone)]
pub struct WorkflowOutcome {
    pub tasks: Vec<Task>,
    pub dependencies: usize,
    pub notifications: usize,
}

/// Turns a reserved budget into scheduled tasks, links them and notifies the
/// roles they are assigned to.
#[derive(Clone)]
pub struct WorkflowAutomation {
    tasks: Repository<Task>,
    dependencies: Repository<TaskDependency>,
    notifications: NotificationService,
    settings: Settings,
}

impl WorkflowAutomation {
    pub fn new(pool: SqlitePool, settings: Settings) -> Self {
        Self {
            tasks: Repository::new(pool.clone()),
            dependencies: Repository::new(pool.clone()),
            notifications: NotificationService::new(pool),
            settings,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[tracing::instrument(skip_all, fields(budget_id = budget.id))]
    pub async fn trigger_workflow_for_budget(&self, budget: &Budget) -> Result<WorkflowOutcome> {
        tracing::info!(name = ?budget.name, "Triggering workflow automation");

        let tasks = self.generate_tasks(budget).await?;
        let dependencies = self.create_dependencies(&tasks).await;
        let notifications = if self.settings.notifications.enabled {
            self.notify_roles(budget, &tasks).await
        } else {
            0
        };

        tracing::info!(
            tasks = tasks.len(),
            dependencies,
            notifications,
            "Workflow automation completed"
        );

        Ok(WorkflowOutcome {
            tasks,
            dependencies,
            notifications,
        })
    }

    async fn generate_tasks(&self, budget: &Budget) -> Result<Vec<Task>> {
        let planned = plan_tasks(budget, &self.settings.scheduling, Utc::now())?;
        let mut tx = self.tasks.pool().begin().await?;
        let mut stored = Vec::with_capacity(planned.len());

        for task in &planned {
            stored.push(Repository::<Task>::insert_with(&mut tx, task).await?);
        }

        tx.commit().await?;
        tracing::debug!(count = stored.len(), "Generated tasks");

        Ok(stored)
    }

    async fn create_dependencies(&self, tasks: &[Task]) -> usize {
        let first = |kind: TaskType| {
            tasks
                .iter()
                .find(|task| task.kind == Some(kind))
                .and_then(|task| task.id)
        };

        let links = [
            (TaskType::Cooking, TaskType::Shopping),
            (TaskType::Setup, TaskType::Delivery),
        ];

        let mut created = 0;
        for (dependent, prerequisite) in links {
            let (Some(dependent), Some(prerequisite)) = (first(dependent), first(prerequisite))
            else {
                continue;
            };

            let dependency = TaskDependency {
                dependency_type: Some(DependencyType::Blocks),
                notes: Some(DEPENDENCY_NOTES.to_owned()),
                is_active: Some(true),
                created_at: Some(Utc::now()),
                prerequisite_task: Some(EntityRef::from(prerequisite)),
                dependent_task: Some(EntityRef::from(dependent)),
                ..Default::default()
            };

            match self.dependencies.insert(&dependency).await {
                Ok(_) => created += 1,
                Err(err) => {
                    tracing::error!(dependent, prerequisite, "Failed to create task dependency: {err}")
                }
            }
        }

        created
    }

    async fn notify_roles(&self, budget: &Budget, tasks: &[Task]) -> usize {
        let name = budget.name.as_deref().unwrap_or_default();
        let mut sent = 0;

        for role in UserRole::VARIANTS {
            let assigned = tasks
                .iter()
                .filter(|task| task.assigned_to_role == Some(*role))
                .count();

            if assigned == 0 {
                continue;
            }

            let notification = RoleNotification {
                target_role: *role,
                title: "New Event Assignment".to_owned(),
                message: format!("New event approved: {name} ({assigned} new tasks assigned)"),
                budget_id: budget.id,
                created_by: budget.created_by,
            };

            match self.notifications.send_role_notification(notification).await {
                Ok(_) => sent += 1,
                Err(err) => tracing::error!(%role, "Failed to send workflow notification: {err}"),
            }
        }

        sent
    }
}

/// Minutes of cooking for an event, growing with the guest count.
pub fn cooking_duration(guests: i32) -> i32 {
    (120 + (guests - 10).max(0) * 5).min(480)
}

/// Tasks a budget needs, in creation order. Nothing is stored.
pub fn plan_tasks(budget: &Budget, scheduling: &Scheduling, now: DateTime<Utc>) -> Result<Vec<Task>> {
    let Some(event_date) = budget.event_date else {
        bail!("Budget {:?} has no event date", budget.id);
    };

    let name = budget.name.as_deref().unwrap_or_default();
    let guests = budget.guest_count.unwrap_or_default();
    let venue = budget.event_location.clone().unwrap_or_default();

    let template = Task {
        auto_scheduled: Some(true),
        is_recurring: Some(false),
        version: Some(1),
        conflict_status: Some(ConflictStatus::None),
        created_at: Some(now),
        updated_at: Some(now),
        created_by: budget.created_by,
        related_budget: budget.id.map(EntityRef::from),
        ..Default::default()
    };

    let planned = |kind, title: String, priority, status, due_date, due_time, duration| Task {
        title: Some(title),
        kind: Some(kind),
        priority: Some(priority),
        status: Some(status),
        assigned_to_role: Some(UserRole::Logistics),
        due_date: Some(due_date),
        due_time: Some(due_time),
        estimated_duration: Some(duration),
        ..template.clone()
    };

    let mut tasks = Vec::new();

    if is_positive(budget.meals_amount) {
        tasks.push(Task {
            description: Some(format!(
                "Procure all ingredients and supplies for {name} (Event Date: {event_date}, Guests: {guests})"
            )),
            location: Some("Suppliers/Markets".to_owned()),
            requirements: Some("Check shopping list for complete ingredient requirements".to_owned()),
            ..planned(
                TaskType::Shopping,
                format!("Shopping - {name}"),
                TaskPriority::High,
                TaskStatus::Todo,
                days_before(event_date, scheduling.shopping_days_before)?,
                at(17),
                240,
            )
        });

        tasks.push(Task {
            description: Some(format!("Prepare all meals for {name} (Guests: {guests})")),
            assigned_to_role: Some(UserRole::Cook),
            location: Some("Kitchen/Cooking Facility".to_owned()),
            requirements: Some("All ingredients must be available and prepared".to_owned()),
            ..planned(
                TaskType::Cooking,
                format!("Cooking - {name}"),
                TaskPriority::Urgent,
                TaskStatus::Blocked,
                event_date,
                cooking_time(scheduling.cooking_hours_before),
                cooking_duration(guests),
            )
        });
    }

    tasks.push(Task {
        description: Some(format!("Deliver equipment and supplies to {venue}")),
        location: budget.event_location.clone(),
        requirements: Some("Coordinate delivery timing with event schedule".to_owned()),
        ..planned(
            TaskType::Delivery,
            format!("Delivery & Equipment - {name}"),
            TaskPriority::High,
            TaskStatus::Todo,
            days_before(event_date, scheduling.delivery_days_before)?,
            at(8),
            120,
        )
    });

    tasks.push(Task {
        description: Some(format!("Setup venue and equipment for {name}")),
        location: budget.event_location.clone(),
        requirements: Some("All equipment must be delivered before setup".to_owned()),
        ..planned(
            TaskType::Setup,
            format!("Event Setup - {name}"),
            TaskPriority::High,
            TaskStatus::Blocked,
            event_date,
            at(10),
            180,
        )
    });

    if is_positive(budget.activities_amount) {
        tasks.push(Task {
            description: Some(format!("Coordinate and manage activities for {name}")),
            location: budget.event_location.clone(),
            requirements: Some("Confirm activity schedules and requirements".to_owned()),
            ..planned(
                TaskType::Preparation,
                format!("Activities Coordination - {name}"),
                TaskPriority::Medium,
                TaskStatus::Todo,
                event_date,
                at(14),
                120,
            )
        });
    }

    if is_positive(budget.transport_amount) {
        tasks.push(Task {
            description: Some(format!("Coordinate transportation for {guests} guests")),
            location: Some("Transport Hub".to_owned()),
            requirements: Some("Confirm transport schedules and capacity".to_owned()),
            ..planned(
                TaskType::Delivery,
                format!("Transport Coordination - {name}"),
                TaskPriority::Medium,
                TaskStatus::Todo,
                days_before(event_date, scheduling.preparation_days_before)?,
                at(16),
                60,
            )
        });
    }

    Ok(tasks)
}

fn is_positive(amount: Option<Decimal>) -> bool {
    amount.is_some_and(|amount| amount > Decimal::ZERO)
}

fn at(hour: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or_default()
}

fn cooking_time(hours_before: u32) -> NaiveTime {
    at(18)
        .overflowing_sub_signed(TimeDelta::hours(i64::from(hours_before)))
        .0
}

fn days_before(date: NaiveDate, days: u32) -> Result<NaiveDate> {
    match date.checked_sub_days(Days::new(u64::from(days))) {
        Some(date) => Ok(date),
        None => bail!("Cannot schedule {days} days before {date}"),
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use super::*;

    fn budget() -> Budget {
        Budget {
            id: Some(7),
            name: Some("Boda Ruiz".to_owned()),
            event_date: Some(NaiveDate::from_ymd_opt(2026, 6, 20).unwrap()),
            event_location: Some("Finca El Olivar".to_owned()),
            guest_count: Some(50),
            created_by: Some(EntityRef::from(3)),
            ..Default::default()
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 5, 1, 9, 30, 0).unwrap()
    }

    fn kinds(tasks: &[Task]) -> Vec<TaskType> {
        tasks.iter().filter_map(|t| t.kind).collect()
    }

    #[test]
    fn cooking_duration_grows_with_guests_up_to_eight_hours() {
        assert_eq!(cooking_duration(0), 120);
        assert_eq!(cooking_duration(10), 120);
        assert_eq!(cooking_duration(11), 125);
        assert_eq!(cooking_duration(50), 320);
        assert_eq!(cooking_duration(82), 480);
        assert_eq!(cooking_duration(1000), 480);
    }

    #[test]
    fn budget_without_extras_gets_delivery_and_setup() {
        let tasks = plan_tasks(&budget(), &Scheduling::default(), now()).unwrap();

        assert_eq!(kinds(&tasks), vec![TaskType::Delivery, TaskType::Setup]);

        let setup = &tasks[1];
        assert_eq!(setup.title.as_deref(), Some("Event Setup - Boda Ruiz"));
        assert_eq!(setup.status, Some(TaskStatus::Blocked));
        assert_eq!(setup.location.as_deref(), Some("Finca El Olivar"));
        assert_eq!(setup.due_time, NaiveTime::from_hms_opt(10, 0, 0));
        assert_eq!(setup.related_budget, Some(EntityRef::from(7)));
        assert_eq!(setup.created_by, Some(EntityRef::from(3)));
        assert_eq!(setup.auto_scheduled, Some(true));
        assert_eq!(setup.version, Some(1));
        assert_eq!(setup.created_at, Some(now()));
    }

    #[test]
    fn meals_add_shopping_and_cooking_first() {
        let budget = Budget {
            meals_amount: Some(Decimal::new(250000, 2)),
            ..budget()
        };

        let tasks = plan_tasks(&budget, &Scheduling::default(), now()).unwrap();

        assert_eq!(
            kinds(&tasks),
            vec![
                TaskType::Shopping,
                TaskType::Cooking,
                TaskType::Delivery,
                TaskType::Setup
            ]
        );

        let shopping = &tasks[0];
        assert_eq!(shopping.due_date, NaiveDate::from_ymd_opt(2026, 6, 17));
        assert_eq!(shopping.due_time, NaiveTime::from_hms_opt(17, 0, 0));
        assert_eq!(shopping.estimated_duration, Some(240));
        assert_eq!(
            shopping.description.as_deref(),
            Some("Procure all ingredients and supplies for Boda Ruiz (Event Date: 2026-06-20, Guests: 50)")
        );

        let cooking = &tasks[1];
        assert_eq!(cooking.assigned_to_role, Some(UserRole::Cook));
        assert_eq!(cooking.priority, Some(TaskPriority::Urgent));
        assert_eq!(cooking.due_date, NaiveDate::from_ymd_opt(2026, 6, 20));
        assert_eq!(cooking.due_time, NaiveTime::from_hms_opt(14, 0, 0));
        assert_eq!(cooking.estimated_duration, Some(320));
    }

    #[test]
    fn activities_and_transport_are_scheduled_from_settings() {
        let budget = Budget {
            activities_amount: Some(Decimal::from(300)),
            transport_amount: Some(Decimal::new(15050, 2)),
            meals_amount: Some(Decimal::ZERO),
            ..budget()
        };
        let scheduling = Scheduling {
            shopping_days_before: 5,
            preparation_days_before: 2,
            delivery_days_before: 1,
            cooking_hours_before: 6,
        };

        let tasks = plan_tasks(&budget, &scheduling, now()).unwrap();

        assert_eq!(
            kinds(&tasks),
            vec![
                TaskType::Delivery,
                TaskType::Setup,
                TaskType::Preparation,
                TaskType::Delivery
            ]
        );
        assert_eq!(tasks[0].due_date, NaiveDate::from_ymd_opt(2026, 6, 19));
        assert_eq!(tasks[2].due_time, NaiveTime::from_hms_opt(14, 0, 0));

        let transport = &tasks[3];
        assert_eq!(
            transport.title.as_deref(),
            Some("Transport Coordination - Boda Ruiz")
        );
        assert_eq!(transport.due_date, NaiveDate::from_ymd_opt(2026, 6, 18));
        assert_eq!(transport.location.as_deref(), Some("Transport Hub"));
        assert_eq!(
            transport.description.as_deref(),
            Some("Coordinate transportation for 50 guests")
        );
    }

    #[test]
    fn cooking_time_counts_back_from_six_pm() {
        assert_eq!(cooking_time(4), NaiveTime::from_hms_opt(14, 0, 0).unwrap());
        assert_eq!(cooking_time(0), NaiveTime::from_hms_opt(18, 0, 0).unwrap());
        assert_eq!(cooking_time(20), NaiveTime::from_hms_opt(22, 0, 0).unwrap());
    }

    #[test]
    fn missing_event_date_is_an_error() {
        let budget = Budget {
            event_date: None,
            ..budget()
        };

        assert!(plan_tasks(&budget, &Scheduling::default(), now()).is_err());
    }
}
