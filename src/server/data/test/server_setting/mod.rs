use crate::server::{
    data::server_setting::ServerSettingRepository, error::AppError,
    model::server_setting::UpsertServerSettingParam,
};
use test_utils::{builder::TestBuilder, factory};

mod get_event_channel;
mod upsert;
