//! The ten resources managed by the admin client.

mod catalog;
mod geography;
mod parties;
mod trade;

pub use catalog::{CATEGORIES, PRODUCTS, TRANSPORT};
pub use geography::{COUNTRIES, PORTS};
pub use parties::{CLIENTS, SUPPLIERS};
pub use trade::{DETAILS, INSPECTIONS, OPERATIONS};

use crate::resource::ResourceConfig;

static ALL: [&ResourceConfig; 10] = [
    &COUNTRIES,
    &CLIENTS,
    &SUPPLIERS,
    &PORTS,
    &TRANSPORT,
    &CATEGORIES,
    &PRODUCTS,
    &OPERATIONS,
    &DETAILS,
    &INSPECTIONS,
];

/// Every resource, in menu order.
pub fn all() -> &'static [&'static ResourceConfig] {
    &ALL
}

/// Look a resource up by its command-line key or its REST path.
pub fn find(name: &str) -> Option<&'static ResourceConfig> {
    let name = name.trim().trim_matches('/');
    ALL.iter()
        .copied()
        .find(|r| r.key.eq_ignore_ascii_case(name) || r.path.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_and_paths_are_unique() {
        let keys: HashSet<_> = all().iter().map(|r| r.key).collect();
        let paths: HashSet<_> = all().iter().map(|r| r.path).collect();
        assert_eq!(keys.len(), all().len());
        assert_eq!(paths.len(), all().len());
    }

    #[test]
    fn test_find_by_key_or_path() {
        assert_eq!(find("countries").map(|r| r.path), Some("paises"));
        assert_eq!(find("/paises/").map(|r| r.key), Some("countries"));
        assert_eq!(find("Transport").map(|r| r.path), Some("medios-transporte"));
        assert!(find("planets").is_none());
    }

    #[test]
    fn test_declarations_are_consistent() {
        for resource in all() {
            assert_eq!(
                resource.columns.first().map(|c| c.header),
                Some("ID"),
                "{} should lead with the id column",
                resource.key
            );
            for name in resource.searchable {
                assert!(
                    *name == "id" || resource.field(name).is_some(),
                    "{}: searchable field {name} is not declared",
                    resource.key
                );
            }
            assert!(
                resource.fields.iter().any(|f| f.required),
                "{} declares no required field",
                resource.key
            );
        }
    }
}
