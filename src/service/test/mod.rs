
mod cleanup;

use crate::{
    config::NotifierSettings,
    error::{notification::NotificationError, AppError},
    model::notification::{CreateNotificationParam, MappingKey},
    service::{clock::SystemClock, notification::NotificationService, poller::FeedPoller},
};
use chrono::{Duration, Utc};
use fakes::{feed_with, FakeFeedSource, ManualClock, RecordingSink};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory::notification_mapping::NotificationMappingFactory};
