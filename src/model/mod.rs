//! Domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary so SeaORM
//! types never leak into the service, scheduler or bot layers.

pub mod feed;
pub mod notification;
