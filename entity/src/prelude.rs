pub use super::notification_mapping::Entity as NotificationMapping;
