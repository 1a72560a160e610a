mod budget;
mod budget_item;
mod budget_template;
mod client;
mod event;
mod payment;
mod service;

pub use budget::*;
pub use budget_item::*;
pub use budget_template::*;
pub use client::*;
pub use event::*;
pub use payment::*;
pub use service::*;

pub type ClientRepository = magnus_shared::Repository<Client>;
pub type BudgetItemRepository = magnus_shared::Repository<BudgetItem>;
pub type BudgetTemplateRepository = magnus_shared::Repository<BudgetTemplate>;
pub type PaymentRepository = magnus_shared::Repository<Payment>;
