//! Bot, web API and the layers they share.
//!
//! # Architecture
//!
//! - **Bot** (`bot/`) - Slash commands, button presses and ticket thread logging
//! - **Controller Layer** (`controller/`) - HTTP handlers for the read-only events API
//! - **Service Layer** (`service/`) - Validation and orchestration of database writes and Discord calls
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types, command replies and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **Logging** (`logging`) - Console and rolling file output
//! - **State** (`state`) - Shared web application state
//! - **Startup** (`startup`) - Database connection, migrations and HTTP client setup
//! - **Router** (`router`) - Axum routes, CORS and API documentation
//! - **Scheduler** (`scheduler/`) - Cron job moving events through their lifecycle
//! - **Util** (`util/`) - Input parsing and text cleanup helpers

pub mod bot;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod logging;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
