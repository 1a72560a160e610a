mod need;
mod query;
mod task;
mod task_dependency;

pub use need::*;
pub use query::*;
pub use task::*;
pub use task_dependency::*;

pub type TaskRepository = magnus_shared::Repository<Task>;
pub type TaskDependencyRepository = magnus_shared::Repository<TaskDependency>;
pub type NeedRepository = magnus_shared::Repository<Need>;
