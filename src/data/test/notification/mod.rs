use crate::{
    data::notification::NotificationMappingRepository,
    model::notification::{
        CreateNotificationMappingParam, MappingFilter, UpdateNotificationMappingParam,
    },
};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{self, notification_mapping::NotificationMappingFactory},
};

mod create;
mod delete;
mod find;
mod update;
