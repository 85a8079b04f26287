//! Read-only configuration seam.
//!
//! Loading and parsing belong to the kernel; consumers only need to ask whether a dotted key is
//! set and read it as a string.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Configuration keys consumed by license resolution and copyright stamping.
pub mod keys {
    /// Preset license name (alias of a built-in license).
    pub const LICENSE: &str = "license";
    /// Custom source-file header.
    pub const LICENSE_HEADER: &str = "license.header";
    /// Custom full license text.
    pub const LICENSE_TEXT: &str = "license.text";
    /// Copyright holder.
    pub const AUTHOR: &str = "author";
    /// Copyright year; the current year is used when unset or empty.
    pub const YEAR: &str = "year";
}

/// Lookup over already-loaded configuration, addressed by dotted keys.
pub trait ConfigAccessor {
    /// Returns the value under `key` as a string, or `None` if absent or not a scalar.
    fn get_string(&self, key: &str) -> Option<String>;

    /// Returns `true` if `key` holds any value, even an empty one.
    fn is_set(&self, key: &str) -> bool {
        self.get_string(key).is_some()
    }

    /// Like [`ConfigAccessor::get_string`], with an empty string for missing keys.
    fn get_string_or_default(&self, key: &str) -> String {
        self.get_string(key).unwrap_or_default()
    }
}

impl<T: ConfigAccessor + ?Sized> ConfigAccessor for &T {
    fn get_string(&self, key: &str) -> Option<String> {
        (**self).get_string(key)
    }

    fn is_set(&self, key: &str) -> bool {
        (**self).is_set(key)
    }
}

impl<S: BuildHasher> ConfigAccessor for HashMap<String, String, S> {
    fn get_string(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl ConfigAccessor for BTreeMap<String, String> {
    fn get_string(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}
