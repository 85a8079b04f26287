use preface_licensing::{LicenseError, LicenseResolver, registry};
use proptest::prelude::*;
use proptest::sample::Index;
use std::collections::HashMap;

proptest! {
    #[test]
    fn alias_matching_ignores_case(idx in any::<Index>(), mask in prop::collection::vec(any::<bool>(), 64)) {
        let registry = registry::initialize().unwrap();
        let aliases: Vec<(&str, &str)> = registry
            .iter()
            .flat_map(|(key, license)| license.possible_matches.iter().map(move |a| (key, &**a)))
            .collect();
        let (key, alias) = aliases[idx.index(aliases.len())];

        let cased: String = alias
            .chars()
            .zip(mask.iter().cycle())
            .map(|(c, &upper)| if upper { c.to_ascii_uppercase() } else { c.to_ascii_lowercase() })
            .collect();

        prop_assert_eq!(registry.match_alias(&cased), Some(key));
    }

    #[test]
    fn unknown_names_are_reported_verbatim(name in "[a-z]{12,20}") {
        let registry = registry::initialize().unwrap();
        let config: HashMap<String, String> = HashMap::new();

        match LicenseResolver::new(registry).resolve(&name, &config) {
            Err(LicenseError::UnknownLicense { requested, .. }) => prop_assert_eq!(requested, name),
            other => prop_assert!(false, "unexpected result: {:?}", other),
        }
    }
}
