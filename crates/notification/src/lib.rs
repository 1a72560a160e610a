mod notification;
mod service;

pub use notification::*;
pub use service::*;

pub type NotificationRepository = magnus_shared::Repository<Notification>;
