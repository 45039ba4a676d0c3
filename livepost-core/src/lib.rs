// src/lib.rs

pub mod config;
pub mod db;
pub mod lock;
pub mod platforms;
pub mod repositories;
pub mod services;

pub use config::AppConfig;
pub use db::Database;
pub use livepost_common::error::Error;
