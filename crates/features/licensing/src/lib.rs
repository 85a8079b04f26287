//! # Licensing System
//!
//! This crate decides which software license a generated project or source file carries.
//!
//! ## Architecture
//!
//! The system is divided into two primary parts:
//!
//! 1.  **Registry ([`registry`]):** A fixed catalog of built-in licenses keyed by canonical name,
//!     with a case-insensitive alias index. Built once per process via [`registry::initialize`].
//! 2.  **Resolution ([`resolver`]):** A fixed priority order over an explicit user choice, custom
//!     license content, a configured preset name and the "no license" default.
//!
//! ## Example
//!
//! ```rust
//! use preface_licensing::{LicenseResolver, registry};
//! use std::collections::HashMap;
//!
//! let registry = registry::initialize().unwrap();
//! let config: HashMap<String, String> = HashMap::new();
//!
//! let license = LicenseResolver::new(registry).resolve("MIT", &config).unwrap();
//! assert_eq!(license.name, "MIT License");
//! ```

mod catalog;
mod error;
pub mod registry;
pub mod resolver;

pub use crate::error::{LicenseError, LicenseErrorExt, Result};
pub use crate::registry::{LicenseRegistry, NONE_KEY, RegistryBuilder};
pub use crate::resolver::{
    LicenseResolver, LicenseSource, Resolution, copyright_line, copyright_line_at,
};
pub use preface_domain::License;
