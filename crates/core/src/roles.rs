//! Well-known role name constants.
//!
//! These must match the CHECK constraint on `users.role` in
//! `20260810000001_create_users_table.sql`.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_PRODUCAO: &str = "producao";
pub const ROLE_PRE_PESAGEM: &str = "pre_pesagem";
pub const ROLE_CONSULTA: &str = "consulta";

/// All roles accepted at registration time.
pub const ALL_ROLES: [&str; 4] = [ROLE_ADMIN, ROLE_PRODUCAO, ROLE_PRE_PESAGEM, ROLE_CONSULTA];

/// Whether `role` is part of the fixed role vocabulary.
pub fn is_valid_role(role: &str) -> bool {
    ALL_ROLES.contains(&role)
}
