use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Serialize, Serializer};

use crate::core::nuclide::Nuclide;

/// Everything known about a successfully resolved molecule name.
///
/// A record is immutable once constructed; the cache hands the same shared
/// instance to every caller asking for its name, so all fields are reads with
/// no interior mutability anywhere.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedMolecule {
    name: String,
    formula: String,
    valid: bool,
    inchi_key: String,
    #[serde(serialize_with = "serialize_composition")]
    composition: HashMap<Nuclide, u32>,
    mass: f64,
    iupac_name: String,
    synonyms: Vec<String>,
}

impl ResolvedMolecule {
    /// Assembles a record from the external lookup results and the parsed
    /// composition.
    ///
    /// The mass is the composition-weighted sum of nuclide masses — binding
    /// energy is neglected. A formula that parsed to nothing (possible, since
    /// external formulas are handled leniently) yields an empty composition,
    /// NaN mass and `valid == false`; such a record is still cacheable, the
    /// defect is in the external data, not in the request.
    pub(crate) fn new(
        name: impl Into<String>,
        formula: impl Into<String>,
        inchi_key: impl Into<String>,
        iupac_name: impl Into<String>,
        synonyms: Vec<String>,
        composition: HashMap<Nuclide, u32>,
    ) -> Self {
        let mass = aggregate_mass(&composition);
        Self {
            name: name.into(),
            formula: formula.into(),
            valid: !composition.is_empty(),
            inchi_key: inchi_key.into(),
            composition,
            mass,
            iupac_name: iupac_name.into(),
            synonyms,
        }
    }

    /// The original input name this record was resolved for (the cache key).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The canonical formula string as returned by the external lookup.
    pub fn formula(&self) -> &str {
        &self.formula
    }

    /// Whether the resolution produced a usable composition. Always paired:
    /// `valid` records have a non-empty composition and a finite mass, invalid
    /// ones an empty composition and NaN mass.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The standard InChI key, the external cross-reference identifier.
    pub fn inchi_key(&self) -> &str {
        &self.inchi_key
    }

    /// The contained nuclides and their multiplicities.
    pub fn composition(&self) -> &HashMap<Nuclide, u32> {
        &self.composition
    }

    /// The set of nuclides occurring in the molecule.
    pub fn nuclides(&self) -> HashSet<Nuclide> {
        self.composition.keys().copied().collect()
    }

    /// The average mass in Dalton, or NaN for an empty composition.
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// The official IUPAC name; may be empty when the service has none.
    pub fn iupac_name(&self) -> &str {
        &self.iupac_name
    }

    /// Alternative names for the molecule, in service order, duplicates kept.
    pub fn synonyms(&self) -> &[String] {
        &self.synonyms
    }
}

fn aggregate_mass(composition: &HashMap<Nuclide, u32>) -> f64 {
    if composition.is_empty() {
        return f64::NAN;
    }
    composition
        .iter()
        .map(|(nuclide, &count)| nuclide.mass() * count as f64)
        .sum()
}

// Nuclide keys serialize as their display tokens, ordered, so compositions
// round-trip through plain string-keyed JSON maps.
fn serialize_composition<S>(
    composition: &HashMap<Nuclide, u32>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let ordered: BTreeMap<String, u32> = composition
        .iter()
        .map(|(nuclide, &count)| (nuclide.name(), count))
        .collect();
    ordered.serialize(serializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::element::Element;
    use crate::core::formula::parse_formula;

    fn water() -> ResolvedMolecule {
        ResolvedMolecule::new(
            "water",
            "H2O",
            "XLYOFNOQVPJJNP-UHFFFAOYSA-N",
            "oxidane",
            vec!["water".to_string(), "dihydrogen oxide".to_string()],
            parse_formula("H2O"),
        )
    }

    #[test]
    fn mass_is_the_weighted_sum_of_nuclide_masses() {
        assert!((water().mass() - 18.01528).abs() < 1e-9);

        let dihydrogen =
            ResolvedMolecule::new("dihydrogen", "H2", "", "", vec![], parse_formula("H2"));
        assert!((dihydrogen.mass() - 2.01588).abs() < 1e-9);
    }

    #[test]
    fn valid_records_have_nonempty_composition_and_finite_mass() {
        let record = water();
        assert!(record.is_valid());
        assert!(!record.composition().is_empty());
        assert!(record.mass().is_finite() && record.mass() > 0.0);
        assert_eq!(
            record.nuclides(),
            HashSet::from([Nuclide::Element(Element::H), Nuclide::Element(Element::O)])
        );
    }

    #[test]
    fn unparsable_formula_yields_an_invalid_record_with_nan_mass() {
        let record = ResolvedMolecule::new("oddity", "??", "KEY", "", vec![], parse_formula("??"));
        assert!(!record.is_valid());
        assert!(record.composition().is_empty());
        assert!(record.mass().is_nan());
        assert!(record.nuclides().is_empty());
    }

    #[test]
    fn accessors_expose_the_lookup_results_untouched() {
        let record = water();
        assert_eq!(record.name(), "water");
        assert_eq!(record.formula(), "H2O");
        assert_eq!(record.inchi_key(), "XLYOFNOQVPJJNP-UHFFFAOYSA-N");
        assert_eq!(record.iupac_name(), "oxidane");
        assert_eq!(record.synonyms(), ["water", "dihydrogen oxide"]);
    }

    #[test]
    fn serializes_with_token_keyed_composition() {
        let json = serde_json::to_value(water()).unwrap();
        assert_eq!(json["name"], "water");
        assert_eq!(json["composition"]["H"], 2);
        assert_eq!(json["composition"]["O"], 1);
        assert_eq!(json["valid"], true);
    }
}
