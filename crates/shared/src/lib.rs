mod command;
mod entity;
mod page;
mod repository;
mod resource;
pub mod sql;
pub mod types;
pub mod validate;

pub use command::*;
pub use entity::*;
pub use page::*;
pub use repository::*;
pub use resource::*;
