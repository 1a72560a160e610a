mod app_user;

pub use app_user::*;

pub type AppUserRepository = magnus_shared::Repository<AppUser>;
