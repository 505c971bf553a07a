//! HTTP handler modules, one per resource.

pub mod auth;
pub mod users;
