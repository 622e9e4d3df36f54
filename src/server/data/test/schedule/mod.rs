use crate::server::{
    data::schedule::ScheduleRepository,
    error::AppError,
    model::schedule::{CreateScheduleParam, EventHost, ScheduleFilter},
};
use chrono::{Duration, TimeZone, Utc};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_message_id;
mod get_due;
mod get_ended_with_attendees;
mod get_paginated;
mod get_starting_from;
mod update;

fn create_param(guild_id: u64, role_id: u64) -> CreateScheduleParam {
    let start = Utc::now() + Duration::hours(2);
    CreateScheduleParam {
        guild_id,
        title: "Movie Night".to_string(),
        description: "Watching something together".to_string(),
        start_time: start,
        end_time: start + Duration::hours(2),
        host: Some(EventHost {
            user_id: 42,
            name: "Host".to_string(),
        }),
        host_url: "https://vrchat.com/home/user/usr_42".to_string(),
        world_link: None,
        image_url: None,
        role_id,
    }
}
