use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub task_generation: TaskGeneration,
    pub notifications: Notifications,
    pub scheduling: Scheduling,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TaskGeneration {
    pub enabled: bool,
    /// Run the workflow on a background worker instead of inside the request.
    pub async_processing: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Notifications {
    pub enabled: bool,
}

/// Offsets used to place generated tasks around the event date.
#[derive(Debug, Clone, Deserialize)]
pub struct Scheduling {
    pub shopping_days_before: u32,
    pub preparation_days_before: u32,
    pub delivery_days_before: u32,
    pub cooking_hours_before: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            task_generation: TaskGeneration {
                enabled: true,
                async_processing: true,
            },
            notifications: Notifications { enabled: true },
            scheduling: Scheduling::default(),
        }
    }
}

impl Default for Scheduling {
    fn default() -> Self {
        Self {
            shopping_days_before: 3,
            preparation_days_before: 1,
            delivery_days_before: 0,
            cooking_hours_before: 4,
        }
    }
}
