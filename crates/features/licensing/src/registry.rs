//! # License Registry
//!
//! A read-only catalog mapping canonical keys (`mit`, `gpl3`, ...) to [`License`] records, with a
//! case-folded alias index built once at construction.
//!
//! ## Lifecycle
//! The process-wide instance is created by [`initialize`] and lives for the rest of the process.
//! Nothing mutates it afterwards, so concurrent readers need no locking. Resolution never reaches
//! for the global implicitly: callers hand a `&LicenseRegistry` to the resolver, which keeps tests
//! free to build their own registries.

use crate::catalog;
use crate::error::{LicenseError, Result};
use fxhash::FxHashMap;
use preface_domain::{License, fold_alias};
use std::borrow::Cow;
use std::sync::OnceLock;
use tracing::debug;

/// Reserved key of the "no license" entry.
pub const NONE_KEY: &str = "none";

static REGISTRY: OnceLock<LicenseRegistry> = OnceLock::new();

/// Builds the built-in registry on first call and returns the shared instance afterwards.
///
/// # Errors
/// Returns a [`LicenseError`] if the compiled-in catalog violates a registry invariant.
pub fn initialize() -> Result<&'static LicenseRegistry> {
    if let Some(registry) = REGISTRY.get() {
        return Ok(registry);
    }
    let registry = LicenseRegistry::builtin()?;
    Ok(REGISTRY.get_or_init(|| registry))
}

/// Returns the process-wide registry if [`initialize`] has already run.
#[must_use]
pub fn global() -> Option<&'static LicenseRegistry> {
    REGISTRY.get()
}

#[derive(Debug, Clone)]
struct Entry {
    key: Cow<'static, str>,
    license: License,
}

/// Catalog of known licenses, iterated in insertion order.
#[derive(Debug, Clone)]
pub struct LicenseRegistry {
    entries: Vec<Entry>,
    keys: FxHashMap<Cow<'static, str>, usize>,
    aliases: FxHashMap<String, usize>,
    none: usize,
}

impl LicenseRegistry {
    /// Returns an empty [`RegistryBuilder`].
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Builds a registry holding the compiled-in catalog.
    ///
    /// # Errors
    /// Returns a [`LicenseError`] if the catalog violates a registry invariant.
    pub fn builtin() -> Result<Self> {
        catalog::builtin().fold(Self::builder(), |b, (key, license)| b.license(key, license)).build()
    }

    /// Returns the license stored under an exact canonical key.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<&License> {
        self.keys.get(key).map(|&idx| &self.entries[idx].license)
    }

    /// Returns the canonical key of the license that lists `name` as an alias, ignoring case.
    ///
    /// Empty input never matches.
    #[must_use]
    pub fn match_alias(&self, name: &str) -> Option<&str> {
        if name.is_empty() {
            return None;
        }
        self.aliases.get(&fold_alias(name)).map(|&idx| self.entries[idx].key.as_ref())
    }

    /// The reserved "no license" entry.
    #[must_use]
    pub fn none(&self) -> &License {
        &self.entries[self.none].license
    }

    /// Iterates `(key, license)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &License)> {
        self.entries.iter().map(|e| (e.key.as_ref(), &e.license))
    }

    /// Iterates canonical keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_ref())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Collects licenses and validates them into a [`LicenseRegistry`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    entries: Vec<Entry>,
}

impl RegistryBuilder {
    /// Adds a license under a canonical key.
    #[must_use = "The builder must be built before it can be used for lookups."]
    pub fn license(mut self, key: impl Into<Cow<'static, str>>, license: License) -> Self {
        self.entries.push(Entry { key: key.into(), license });
        self
    }

    /// Validates the collected licenses and builds the alias index.
    ///
    /// # Errors
    /// * [`LicenseError::DuplicateKey`] if two licenses share a key.
    /// * [`LicenseError::EmptyAliases`] if a license declares no aliases.
    /// * [`LicenseError::KeyNotAliased`] if a key is not among its own license's aliases.
    /// * [`LicenseError::AliasCollision`] if two licenses claim the same alias (ignoring case).
    /// * [`LicenseError::MissingNone`] if the reserved [`NONE_KEY`] entry is absent.
    pub fn build(self) -> Result<LicenseRegistry> {
        let mut keys = FxHashMap::default();
        let mut aliases: FxHashMap<String, usize> = FxHashMap::default();

        for (idx, entry) in self.entries.iter().enumerate() {
            if keys.insert(entry.key.clone(), idx).is_some() {
                return Err(LicenseError::DuplicateKey { key: entry.key.clone(), context: None });
            }
            if entry.license.possible_matches.is_empty() {
                return Err(LicenseError::EmptyAliases { key: entry.key.clone(), context: None });
            }
            if !entry.license.matches(&entry.key) {
                return Err(LicenseError::KeyNotAliased { key: entry.key.clone(), context: None });
            }

            for alias in &entry.license.possible_matches {
                let folded = fold_alias(alias);
                match aliases.get(&folded) {
                    Some(&owner) if owner != idx => {
                        return Err(LicenseError::AliasCollision {
                            alias: folded,
                            first: self.entries[owner].key.clone(),
                            second: entry.key.clone(),
                            context: None,
                        });
                    },
                    Some(_) => {},
                    None => {
                        aliases.insert(folded, idx);
                    },
                }
            }
        }

        let none = *keys.get(NONE_KEY).ok_or(LicenseError::MissingNone { context: None })?;

        debug!(licenses = self.entries.len(), aliases = aliases.len(), "License registry built");

        Ok(LicenseRegistry { entries: self.entries, keys, aliases, none })
    }
}
