pub mod app_service;
pub mod app_state;
pub mod commands;
pub mod config;
pub mod error;
pub mod storage;
pub mod ui;

pub use error::{HotelError, Result};
