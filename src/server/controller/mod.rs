//! HTTP request handlers for the read-only web API.

pub mod event;
