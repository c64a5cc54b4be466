//! Database repository layer.
//!
//! Repositories handle all database operations (CRUD) and return domain models so SeaORM
//! entity models stay inside this layer.

pub mod notification;

#[cfg(test)]
mod test;

use sea_orm::{DbErr, SqlErr};

/// Whether a database error is a unique constraint violation.
///
/// Used to turn a racing duplicate insert into a domain error instead of an internal one.
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
