//! Domain layer for the bakery production backend.
//!
//! Pure types and logic only: the error taxonomy, role vocabulary, and the
//! recipe composition model (ingredient targets, payload validation, cycle
//! detection). No I/O lives here; persistence is `padoca-db`'s job.

pub mod error;
pub mod recipe;
pub mod roles;
pub mod types;
