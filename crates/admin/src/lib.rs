mod audit_log;
mod conflict_resolution;
mod system_config;

pub use audit_log::*;
pub use conflict_resolution::*;
pub use system_config::*;

pub type AuditLogRepository = magnus_shared::Repository<AuditLog>;
pub type SystemConfigRepository = magnus_shared::Repository<SystemConfig>;
pub type ConflictResolutionRepository = magnus_shared::Repository<ConflictResolution>;
