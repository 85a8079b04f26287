//! # Domain Models
//!
//! This crate contains pure domain types with minimal dependencies (`serde`).
//! Keep it lean: no I/O, networking, or heavy logic, only data and simple helpers.

pub mod config;
pub mod license;

pub use crate::config::ConfigAccessor;
pub use crate::license::{COPYRIGHT_PLACEHOLDER, License, fold_alias};
