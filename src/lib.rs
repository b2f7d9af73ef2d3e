#![forbid(unsafe_code)]

pub mod cli;
pub mod course;
pub mod disclaimer;
pub mod error;
pub mod export;
pub mod formats;
pub mod logging;
pub mod menu;
pub mod show;
pub mod validate;
