mod accommodation;
mod activity;
mod food_item;
mod menu;
mod menu_item;
mod product;
mod service;
mod transport;
mod transport_assignment;

pub use accommodation::*;
pub use activity::*;
pub use food_item::*;
pub use menu::*;
pub use menu_item::*;
pub use product::*;
pub use service::*;
pub use transport::*;
pub use transport_assignment::*;

pub type AccommodationRepository = magnus_shared::Repository<Accommodation>;
pub type ActivityRepository = magnus_shared::Repository<Activity>;
pub type FoodItemRepository = magnus_shared::Repository<FoodItem>;
pub type MenuItemRepository = magnus_shared::Repository<MenuItem>;
pub type ProductRepository = magnus_shared::Repository<Product>;
pub type TransportRepository = magnus_shared::Repository<Transport>;
pub type TransportAssignmentRepository = magnus_shared::Repository<TransportAssignment>;
