mod cooking_ingredient;
mod cooking_schedule;
mod product_requirement;

pub use cooking_ingredient::*;
pub use cooking_schedule::*;
pub use product_requirement::*;

pub type CookingScheduleRepository = magnus_shared::Repository<CookingSchedule>;
pub type CookingIngredientRepository = magnus_shared::Repository<CookingIngredient>;
pub type ProductRequirementRepository = magnus_shared::Repository<ProductRequirement>;
