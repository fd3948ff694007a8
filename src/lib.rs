//! Agent tool for submitting quiz answers over HTTP and relaying the
//! server's verdict back to the caller.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod tool;
pub mod utils;
