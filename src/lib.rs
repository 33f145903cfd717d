//! Shortcut bar share strings
//!
//! This crate encodes bars, shortcuts and condition sets into compact,
//! clipboard-friendly share strings and decodes them again, including
//! strings produced by older generations of the format.

pub mod clean;
pub mod cli;
pub mod codec;
pub mod config;
pub mod error;
pub mod export;
pub mod format;
pub mod import;
pub mod logging;
pub mod model;
pub mod walk;
