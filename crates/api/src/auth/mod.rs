//! Authentication building blocks: JWT issuance/validation and password
//! hashing.

pub mod jwt;
pub mod password;
