pub mod feed_check;
pub mod guard;
