//! Middleware modules.

pub mod error;
pub mod not_found;
