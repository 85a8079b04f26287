//! # License Resolution
//!
//! Turns a possibly-empty user choice plus configuration into exactly one [`License`].
//!
//! ## Priority
//! The first rule that applies wins:
//! 1. **Flag**: a non-empty explicit name must match an alias, otherwise resolution fails.
//! 2. **Custom**: `license.header` or `license.text` is set; the license is built from them.
//! 3. **Config**: `license` is set; its value is matched like an explicit name.
//! 4. **Default**: the registry's `none` license.

use crate::error::{LicenseError, Result};
use crate::registry::LicenseRegistry;
use chrono::{Datelike, Local};
use preface_domain::License;
use preface_domain::config::{ConfigAccessor, keys};
use strum_macros::{AsRefStr, Display};
use tracing::{debug, warn};

/// Which rule produced a resolved license.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum LicenseSource {
    /// Explicit name given on the command line.
    Flag,
    /// `license.header` / `license.text` from configuration.
    Custom,
    /// Preset name under the `license` configuration key.
    Config,
    /// Nothing was requested.
    Default,
}

/// A resolved license together with the rule that selected it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub license: License,
    pub source: LicenseSource,
}

/// Applies the resolution priority against a registry.
#[derive(Debug, Clone, Copy)]
pub struct LicenseResolver<'a> {
    registry: &'a LicenseRegistry,
}

impl<'a> LicenseResolver<'a> {
    #[must_use]
    pub const fn new(registry: &'a LicenseRegistry) -> Self {
        Self { registry }
    }

    /// Resolves the license to apply.
    ///
    /// # Errors
    /// Returns [`LicenseError::UnknownLicense`] when `explicit` (or, without one, the configured
    /// `license` value) matches no alias.
    pub fn resolve(&self, explicit: &str, config: &impl ConfigAccessor) -> Result<License> {
        self.resolution(explicit, config).map(|r| r.license)
    }

    /// Same as [`LicenseResolver::resolve`], also reporting which rule fired.
    ///
    /// # Errors
    /// Returns [`LicenseError::UnknownLicense`] when an explicitly requested name is unknown.
    pub fn resolution(&self, explicit: &str, config: &impl ConfigAccessor) -> Result<Resolution> {
        let resolution = self.select(explicit, config)?;
        debug!(source = %resolution.source, license = %resolution.license.name, "License resolved");
        Ok(resolution)
    }

    fn select(&self, explicit: &str, config: &impl ConfigAccessor) -> Result<Resolution> {
        if !explicit.is_empty() {
            return Ok(Resolution { license: self.find(explicit)?, source: LicenseSource::Flag });
        }

        if config.is_set(keys::LICENSE_HEADER) || config.is_set(keys::LICENSE_TEXT) {
            let license = License::custom(
                config.get_string_or_default(keys::LICENSE_HEADER),
                config.get_string_or_default(keys::LICENSE_TEXT),
            );
            return Ok(Resolution { license, source: LicenseSource::Custom });
        }

        if config.is_set(keys::LICENSE) {
            let name = config.get_string(keys::LICENSE).unwrap_or_else(|| {
                warn!(key = keys::LICENSE, "Configured license is not a string value");
                String::new()
            });
            return Ok(Resolution { license: self.find(&name)?, source: LicenseSource::Config });
        }

        Ok(Resolution { license: self.registry.none().clone(), source: LicenseSource::Default })
    }

    /// Finds a built-in license by alias, ignoring case.
    ///
    /// # Errors
    /// Returns [`LicenseError::UnknownLicense`] naming `name` if no alias matches.
    pub fn find(&self, name: &str) -> Result<License> {
        self.registry
            .match_alias(name)
            .and_then(|key| self.registry.lookup(key))
            .cloned()
            .ok_or_else(|| LicenseError::UnknownLicense { requested: name.to_owned(), context: None })
    }
}

/// Builds `Copyright © <year> <author>` from configuration, defaulting to the current year.
#[must_use]
pub fn copyright_line(config: &impl ConfigAccessor) -> String {
    copyright_line_at(config, Local::now().year())
}

/// Like [`copyright_line`], with `current_year` used when `year` is unset or empty.
#[must_use]
pub fn copyright_line_at(config: &impl ConfigAccessor, current_year: i32) -> String {
    let author = config.get_string_or_default(keys::AUTHOR);
    let year = config
        .get_string(keys::YEAR)
        .filter(|year| !year.is_empty())
        .unwrap_or_else(|| format!("{current_year:04}"));

    format!("Copyright © {year} {author}")
}
