//! Data transfer objects shared by the web API and its documentation.

pub mod api;
pub mod event;
