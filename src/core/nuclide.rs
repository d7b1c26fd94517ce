use std::fmt;

use super::element::Element;
use super::isotope::Isotope;

/// An atomic-level identity: either an element or a specific isotope of one.
///
/// This is the closed union over the two nuclide kinds, so consumers can match
/// exhaustively instead of probing with runtime checks. Every nuclide has a
/// unique display token across the whole table (element symbols, full names and
/// isotope tokens never collide), which is what makes name resolution and
/// formula parsing unambiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nuclide {
    /// An element, standing for its natural isotopic mixture.
    Element(Element),
    /// A single isotope with a definite mass number.
    Isotope(Isotope),
}

impl Nuclide {
    /// Gets the element this nuclide belongs to; an element is its own owner.
    pub fn element(self) -> Element {
        match self {
            Nuclide::Element(element) => element,
            Nuclide::Isotope(isotope) => isotope.element(),
        }
    }

    /// Returns whether this nuclide is an isotope rather than an element.
    pub fn is_isotope(self) -> bool {
        matches!(self, Nuclide::Isotope(_))
    }

    /// Gets the mass in Dalton: the average atomic mass for an element, the
    /// isotopic mass for an isotope.
    pub fn mass(self) -> f64 {
        match self {
            Nuclide::Element(element) => element.mass(),
            Nuclide::Isotope(isotope) => isotope.mass(),
        }
    }

    /// Gets the display token: the symbol for an element (`"He"`), the isotope
    /// token for an isotope (`"He3"`, `"D"`).
    pub fn name(self) -> String {
        match self {
            Nuclide::Element(element) => element.symbol().to_string(),
            Nuclide::Isotope(isotope) => isotope.name(),
        }
    }

    /// Resolves a free-text token to a nuclide, e.g. `"C"`, `"carbon"` or
    /// `"He3"`.
    ///
    /// Elements are tried first (exact-case symbol, then case-insensitive full
    /// name including the accepted alternative spellings), then isotope tokens.
    pub fn from_name(name: &str) -> Option<Nuclide> {
        if let Some(element) = Element::from_symbol(name).or_else(|| Element::from_name(name)) {
            return Some(Nuclide::Element(element));
        }
        Isotope::from_name(name).map(Nuclide::Isotope)
    }

    /// Returns whether `name` denotes a bare nuclide rather than a molecule.
    ///
    /// This is the check the molecule resolution path uses to turn down
    /// requests that belong to the nuclide API.
    pub fn is_nuclide(name: &str) -> bool {
        Nuclide::from_name(name).is_some()
    }
}

impl From<Element> for Nuclide {
    fn from(element: Element) -> Self {
        Nuclide::Element(element)
    }
}

impl From<Isotope> for Nuclide {
    fn from(isotope: Isotope) -> Self {
        Nuclide::Isotope(isotope)
    }
}

impl fmt::Display for Nuclide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn from_name_resolves_elements_before_isotopes() {
        assert_eq!(Nuclide::from_name("H"), Some(Nuclide::Element(Element::H)));
        assert_eq!(
            Nuclide::from_name("hydrogen"),
            Some(Nuclide::Element(Element::H))
        );
        assert_eq!(
            Nuclide::from_name("He3"),
            Isotope::new(Element::He, 3).map(Nuclide::Isotope)
        );
        assert_eq!(
            Nuclide::from_name("deuterium"),
            Isotope::new(Element::H, 2).map(Nuclide::Isotope)
        );
    }

    #[test]
    fn is_nuclide_accepts_symbols_names_aliases_and_isotope_tokens() {
        for name in ["H", "Co", "nitrogen", "Sulphur", "aluminum", "cesium", "He3", "u238", "D", "tritium"] {
            assert!(Nuclide::is_nuclide(name), "{name} should be a nuclide");
        }
    }

    #[test]
    fn is_nuclide_rejects_molecule_names() {
        for name in ["water", "h2o", "no molecule", "wader", "hydroxychloroquine", ""] {
            assert!(!Nuclide::is_nuclide(name), "{name} should not be a nuclide");
        }
    }

    #[test]
    fn element_and_isotope_accessors_agree() {
        let he3 = Nuclide::from_name("He3").unwrap();
        assert!(he3.is_isotope());
        assert_eq!(he3.element(), Element::He);
        assert!((he3.mass() - 3.01602932).abs() < 1e-6);

        let helium = Nuclide::from_name("He").unwrap();
        assert!(!helium.is_isotope());
        assert_eq!(helium.element(), Element::He);
        assert_eq!(helium.mass(), Element::He.mass());
    }

    #[test]
    fn display_tokens_match_name() {
        assert_eq!(Nuclide::from_name("He").unwrap().to_string(), "He");
        assert_eq!(Nuclide::from_name("he3").unwrap().to_string(), "He3");
        assert_eq!(Nuclide::from_name("deuterium").unwrap().to_string(), "D");
    }

    // The tie-break in formula parsing and the element-before-isotope order in
    // from_name are only sound if no token is claimed twice across the whole
    // table.
    #[test]
    fn no_display_token_is_ambiguous() {
        let mut tokens = HashSet::new();
        let mut count = 0usize;

        for element in Element::iter() {
            assert!(tokens.insert(element.symbol().to_ascii_lowercase()));
            assert!(tokens.insert(element.name().to_ascii_lowercase()));
            count += 2;
            for isotope in element.isotopes() {
                assert!(
                    tokens.insert(isotope.name().to_ascii_lowercase()),
                    "duplicate isotope token {}",
                    isotope.name()
                );
                count += 1;
            }
        }

        for alias in ["aluminum", "sulphur", "cesium", "deuterium", "tritium"] {
            assert!(tokens.insert(alias.to_string()), "alias {alias} collides");
            count += 1;
        }

        assert_eq!(tokens.len(), count);
    }
}
