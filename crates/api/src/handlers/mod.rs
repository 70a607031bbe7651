//! HTTP handlers, one module per resource.

pub mod auth;
pub mod kits;
pub mod production_orders;
pub mod raw_materials;
pub mod recipes;
