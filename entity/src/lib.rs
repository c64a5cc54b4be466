//! SeaORM entity definitions for the notifier database.

pub mod prelude;

pub mod notification_mapping;
