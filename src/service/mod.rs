//! Business logic between the bot/scheduler and the data layer.
//!
//! - `notification` - setup, remove and list of notification mappings (admin commands)
//! - `poller` - per-cycle feed check and stale mapping cleanup
//! - `feed` - YouTube feed fetching and parsing
//! - `dispatch` - posting notifications to Discord
//! - `template` - message template rendering
//! - `clock` - injectable time source

pub mod clock;
pub mod dispatch;
pub mod feed;
pub mod notification;
pub mod poller;
pub mod template;

#[cfg(test)]
pub mod test;
