//! # Blogly Core
//!
//! The domain layer of Blogly: users, the posts they write, and the
//! derived values shown when listing them.
//! This crate contains pure business logic with zero infrastructure dependencies.

pub mod display;
pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::{DomainError, RepoError};
pub use service::BlogService;
