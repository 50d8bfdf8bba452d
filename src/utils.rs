//! Utility functions

use crate::constants::{APP_DIR_NAME, FOOTER_SINCE_YEAR};
use chrono::Datelike;
use std::path::PathBuf;

/// Get the app data directory path
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Footer copyright line for the given year
pub fn copyright_line(year: i32) -> String {
    format!("© {} - {} All rights reserved", FOOTER_SINCE_YEAR, year)
}
