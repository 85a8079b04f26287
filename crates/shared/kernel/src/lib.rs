//! Kernel utilities shared across slices.
//! Keep this crate lightweight; today it owns configuration loading and exposes it through the
//! domain's [`ConfigAccessor`](preface_domain::ConfigAccessor) seam.
//!
//! ## Config loading
//! ```rust,no_run
//! use preface_kernel::config::{Settings, SettingsSource};
//!
//! let settings = Settings::load(SettingsSource::new().file(".preface.toml")).unwrap();
//! ```
pub mod config;

pub use preface_domain as domain;
