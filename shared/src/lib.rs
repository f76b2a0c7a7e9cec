//! Types and screen logic shared by the flow tracker frontend.
//!
//! Nothing here touches the browser: wire types, date handling, form
//! validation and the per-screen state machines are all plain Rust.

pub mod config;
pub mod dates;
pub mod error;
pub mod forms;
pub mod modal;
pub mod models;
pub mod outbox;
pub mod screens;
pub mod table;

pub use config::{AppConfig, LogLevel};
pub use error::{ApiError, CategoryLimitReached, FormError, InvalidEnumValue};
pub use models::*;
pub use screens::ScreenState;
