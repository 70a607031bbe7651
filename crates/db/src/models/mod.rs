//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//!
//! Column names are English in the schema; serde renames keep the wire
//! format on the original Portuguese field names.

pub mod kit;
pub mod production_order;
pub mod raw_material;
pub mod recipe;
pub mod user;
