use preface_licensing::{License, LicenseError, LicenseRegistry, NONE_KEY, registry};

fn builtin() -> LicenseRegistry {
    LicenseRegistry::builtin().expect("built-in catalog must be valid")
}

fn none() -> License {
    License::new("None", ["none", "false"], "", "")
}

#[test]
fn builtin_catalog_keeps_insertion_order() {
    let registry = builtin();
    let keys: Vec<&str> = registry.keys().collect();
    assert_eq!(keys, ["none", "apache", "mit", "bsd", "freebsd", "gpl2", "gpl3", "lgpl", "agpl"]);
    assert_eq!(registry.len(), 9);
}

#[test]
fn none_entry_is_reserved_and_empty() {
    let registry = builtin();
    let none = registry.none();
    assert_eq!(none.name, "None");
    assert!(none.text.is_empty());
    assert!(none.header.is_empty());
    assert_eq!(registry.match_alias("none"), Some(NONE_KEY));
    assert_eq!(registry.match_alias("FALSE"), Some(NONE_KEY));
}

#[test]
fn spdx_identifiers_are_recognized() {
    let registry = builtin();
    let expected = [
        ("Apache-2.0", "apache"),
        ("MIT", "mit"),
        ("BSD-3-Clause", "bsd"),
        ("BSD-2-Clause", "freebsd"),
        ("GPL-2.0", "gpl2"),
        ("GPL-3.0", "gpl3"),
        ("LGPL-3.0", "lgpl"),
        ("AGPL-3.0", "agpl"),
    ];
    for (spdx, key) in expected {
        assert_eq!(registry.match_alias(spdx), Some(key), "{spdx}");
    }
}

#[test]
fn every_alias_maps_back_to_its_own_key() {
    let registry = builtin();
    for (key, license) in registry.iter() {
        assert!(license.matches(key), "{key} must be one of its own aliases");
        for alias in &license.possible_matches {
            assert_eq!(registry.match_alias(alias), Some(key));
            assert_eq!(registry.match_alias(&alias.to_uppercase()), Some(key));
            assert_eq!(registry.match_alias(&alias.to_lowercase()), Some(key));
        }
    }
}

#[test]
fn builtin_licenses_carry_text_and_header() {
    let registry = builtin();
    for (key, license) in registry.iter().filter(|(key, _)| *key != NONE_KEY) {
        assert!(!license.name.is_empty(), "{key} has no name");
        assert!(!license.text.trim().is_empty(), "{key} has no text");
        assert!(license.header.starts_with("{copyright}"), "{key} header lacks copyright line");
    }

    let mit = registry.lookup("mit").expect("mit is built in");
    assert!(mit.text.starts_with("The MIT License (MIT)"));
    let agpl = registry.lookup("agpl").expect("agpl is built in");
    assert!(agpl.text.contains("GNU AFFERO GENERAL PUBLIC LICENSE"));
}

#[test]
fn lookup_is_exact_and_match_alias_rejects_empty() {
    let registry = builtin();
    assert!(registry.lookup("mit").is_some());
    assert!(registry.lookup("MIT").is_none());
    assert!(registry.lookup("Apache-2.0").is_none());
    assert_eq!(registry.match_alias(""), None);
    assert_eq!(registry.match_alias("zzz-not-a-license"), None);
}

#[test]
fn alias_collision_is_a_construction_error() {
    let err = LicenseRegistry::builder()
        .license(NONE_KEY, none())
        .license("a", License::new("A", ["a", "Shared"], "a", ""))
        .license("b", License::new("B", ["b", "shared"], "b", ""))
        .build()
        .expect_err("overlapping aliases must be rejected");

    match err {
        LicenseError::AliasCollision { alias, first, second, .. } => {
            assert_eq!(alias, "shared");
            assert_eq!(first, "a");
            assert_eq!(second, "b");
        },
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn repeated_alias_within_one_license_is_allowed() {
    let registry = LicenseRegistry::builder()
        .license(NONE_KEY, none())
        .license("mit", License::new("MIT", ["MIT", "mit"], "text", ""))
        .build()
        .expect("same license may list an alias in several casings");
    assert_eq!(registry.match_alias("Mit"), Some("mit"));
}

#[test]
fn invalid_registries_are_rejected() {
    let duplicate = LicenseRegistry::builder()
        .license(NONE_KEY, none())
        .license(NONE_KEY, none())
        .build()
        .expect_err("duplicate key");
    assert!(matches!(duplicate, LicenseError::DuplicateKey { .. }));

    let empty = LicenseRegistry::builder()
        .license(NONE_KEY, none())
        .license("x", License::new("X", Vec::<&'static str>::new(), "x", ""))
        .build()
        .expect_err("empty aliases");
    assert!(matches!(empty, LicenseError::EmptyAliases { .. }));

    let unaliased = LicenseRegistry::builder()
        .license(NONE_KEY, none())
        .license("x", License::new("X", ["y"], "x", ""))
        .build()
        .expect_err("key not aliased");
    assert!(matches!(unaliased, LicenseError::KeyNotAliased { .. }));

    let missing = LicenseRegistry::builder()
        .license("mit", License::new("MIT", ["mit"], "text", ""))
        .build()
        .expect_err("missing none");
    assert!(matches!(missing, LicenseError::MissingNone { .. }));
}

#[test]
fn initialize_returns_one_shared_instance() {
    let first = registry::initialize().expect("first init");
    let second = registry::initialize().expect("second init");
    assert!(std::ptr::eq(first, second));
    assert!(registry::global().is_some_and(|global| std::ptr::eq(global, first)));
}
