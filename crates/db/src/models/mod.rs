//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A safe `Serialize` response struct where the row carries secrets
//! - Create / update DTOs for inserts and patches

pub mod session;
pub mod user;
