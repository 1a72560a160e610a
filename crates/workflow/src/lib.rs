mod automation;
mod listener;
mod settings;
mod workflow_trigger;

pub use automation::*;
pub use listener::*;
pub use settings::*;
pub use workflow_trigger::*;

pub type WorkflowTriggerRepository = magnus_shared::Repository<WorkflowTrigger>;
