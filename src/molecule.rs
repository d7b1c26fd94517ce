//! # Molecule Module
//!
//! The caller-facing handle for resolved molecules. A [`Molecule`] is
//! constructed against a [`MoleculeCache`]; construction validates the name
//! eagerly, so a handle that exists always answers every query without
//! failing.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::core::compound::ChemicalCompound;
use crate::core::nuclide::Nuclide;
use crate::resolve::cache::MoleculeCache;
use crate::resolve::error::ResolveError;
use crate::resolve::record::ResolvedMolecule;

/// A molecule, identified by a free-form name such as `"water"`, `"h2o"` or
/// `"hydroxychloroquine"`.
///
/// Construction resolves the name through the given cache immediately: the
/// first handle for a distinct name pays for the external lookup, every later
/// one (and every clone) shares the same cached record. Names that denote a
/// bare element or isotope are rejected — those belong to the nuclide API.
///
/// Two handles compare equal when they carry the same resolved record, however
/// they were constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct Molecule {
    info: Arc<ResolvedMolecule>,
}

impl Molecule {
    /// Resolves `name` through `cache` and wraps the shared record.
    ///
    /// # Errors
    ///
    /// Fails fast with the underlying [`ResolveError`] — a nuclide name or an
    /// unavailable external lookup surfaces here, at construction, never later
    /// from an accessor.
    pub fn new(name: &str, cache: &MoleculeCache) -> Result<Self, ResolveError> {
        Ok(Self {
            info: cache.resolve(name)?,
        })
    }

    /// The name this molecule was requested under.
    pub fn name(&self) -> &str {
        self.info.name()
    }

    /// The chemical formula, e.g. `"H2O"`.
    pub fn formula(&self) -> &str {
        self.info.formula()
    }

    /// Whether the resolution produced a usable composition; see
    /// [`ResolvedMolecule::is_valid`].
    pub fn is_valid(&self) -> bool {
        self.info.is_valid()
    }

    /// The standard InChI key.
    pub fn inchi_key(&self) -> &str {
        self.info.inchi_key()
    }

    /// The contained nuclides, including their multiplicities.
    pub fn composition(&self) -> &HashMap<Nuclide, u32> {
        self.info.composition()
    }

    /// The official IUPAC name; may be empty when the service has none.
    pub fn iupac_name(&self) -> &str {
        self.info.iupac_name()
    }

    /// Alternative names, in service order, duplicates kept.
    pub fn synonyms(&self) -> &[String] {
        self.info.synonyms()
    }

    /// The full resolved record backing this handle.
    pub fn record(&self) -> &ResolvedMolecule {
        &self.info
    }
}

impl ChemicalCompound for Molecule {
    /// The average mass in Dalton: the sum of the nuclide masses, neglecting
    /// binding energy. NaN when the composition is empty.
    fn mass(&self) -> f64 {
        self.info.mass()
    }

    fn nuclides(&self) -> HashSet<Nuclide> {
        self.info.nuclides()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::element::Element;
    use crate::resolve::client::{LookupClient, LookupError};

    struct FixedLookup;

    impl LookupClient for FixedLookup {
        fn formula(&self, name: &str) -> Result<String, LookupError> {
            match name {
                "water" | "h2o" => Ok("H2O".to_string()),
                "dihydrogen" => Ok("H2".to_string()),
                _ => Err(LookupError::Status {
                    url: format!("http://resolver.invalid/{name}/formula"),
                    status: 404,
                }),
            }
        }

        fn inchi_key(&self, _name: &str) -> Result<String, LookupError> {
            Ok("XLYOFNOQVPJJNP-UHFFFAOYSA-N".to_string())
        }

        fn iupac_name(&self, _key: &str) -> Result<String, LookupError> {
            Ok("oxidane".to_string())
        }

        fn synonyms(&self, _key: &str) -> Result<Vec<String>, LookupError> {
            Ok(vec!["water".to_string(), "aqua".to_string()])
        }
    }

    #[test]
    fn construction_resolves_eagerly_and_accessors_cannot_fail() {
        let cache = MoleculeCache::new(FixedLookup);
        let water = Molecule::new("water", &cache).unwrap();

        assert_eq!(water.name(), "water");
        assert_eq!(water.formula(), "H2O");
        assert!(water.is_valid());
        assert_eq!(water.inchi_key(), "XLYOFNOQVPJJNP-UHFFFAOYSA-N");
        assert_eq!(water.iupac_name(), "oxidane");
        assert_eq!(water.synonyms(), ["water", "aqua"]);
        assert!((water.mass() - 18.01528).abs() < 1e-9);
        assert_eq!(
            water.nuclides(),
            HashSet::from([Nuclide::Element(Element::H), Nuclide::Element(Element::O)])
        );
    }

    #[test]
    fn masses_match_reference_values() {
        let cache = MoleculeCache::new(FixedLookup);
        let water = Molecule::new("water", &cache).unwrap();
        let dihydrogen = Molecule::new("dihydrogen", &cache).unwrap();
        assert!((water.mass() - 18.01528).abs() < 1e-9);
        assert!((dihydrogen.mass() - 2.01588).abs() < 1e-9);
    }

    #[test]
    fn nuclide_names_fail_at_construction() {
        let cache = MoleculeCache::new(FixedLookup);
        for name in ["hydrogen", "nitrogen"] {
            let err = Molecule::new(name, &cache).unwrap_err();
            assert!(matches!(err, ResolveError::NameIsNuclide { .. }), "{name}");
        }
    }

    #[test]
    fn unknown_names_fail_at_construction() {
        let cache = MoleculeCache::new(FixedLookup);
        for name in ["no molecule", "wader"] {
            let err = Molecule::new(name, &cache).unwrap_err();
            assert!(
                matches!(err, ResolveError::LookupUnavailable { .. }),
                "{name}"
            );
        }
    }

    #[test]
    fn handles_for_the_same_name_share_the_record_and_compare_equal() {
        let cache = MoleculeCache::new(FixedLookup);
        let first = Molecule::new("water", &cache).unwrap();
        let second = Molecule::new("water", &cache).unwrap();

        assert!(Arc::ptr_eq(&first.info, &second.info));
        assert_eq!(first, second);
        assert_eq!(first, first.clone());

        // Distinct names resolve to distinct records, even with equal formulas.
        let alias = Molecule::new("h2o", &cache).unwrap();
        assert_ne!(first, alias);
    }
}
