//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the corresponding repository in `cantina_db` and
//! map errors via [`crate::error::AppError`].

pub mod auth;
pub mod dashboard;
pub mod vivino;
pub mod wines;
