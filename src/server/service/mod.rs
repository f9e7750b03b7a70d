//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer that implements business logic and coordinates
//! between repositories. Services validate incoming payloads, hash passwords, issue and
//! resolve authentication tokens, and scope ingredient access to the owning user.

pub mod auth;
pub mod ingredient;
pub mod user;

use sea_orm::{DbErr, SqlErr};

/// Returns `true` when the database rejected a write because of a unique constraint
///
/// Used to turn races between an existence check and the insert into validation errors.
pub(crate) fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
