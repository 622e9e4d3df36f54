use crate::server::{
    data::attendance::AttendanceRepository, error::AppError,
    model::attendance::CreateAttendanceParam,
};
use test_utils::{builder::TestBuilder, factory};

mod count_by_schedule;
mod get_by_schedule;
mod sign_up;
mod withdraw;
