//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod kit_repo;
pub mod production_order_repo;
pub mod raw_material_repo;
pub mod recipe_repo;
pub mod user_repo;

pub use kit_repo::KitRepo;
pub use production_order_repo::ProductionOrderRepo;
pub use raw_material_repo::RawMaterialRepo;
pub use recipe_repo::{RecipeCreateError, RecipeRepo};
pub use user_repo::UserRepo;
