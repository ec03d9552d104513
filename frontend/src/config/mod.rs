//! Configuration Module
//!
//! Loads `create_room.conf` (window size, safe area, logging).

mod app_config;

pub use app_config::AppConfig;
