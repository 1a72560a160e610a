mod shopping_item;
mod weekly_plan;

pub use shopping_item::*;
pub use weekly_plan::*;

pub type WeeklyPlanRepository = magnus_shared::Repository<WeeklyPlan>;
pub type ShoppingItemRepository = magnus_shared::Repository<ShoppingItem>;
