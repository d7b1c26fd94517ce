use std::fmt;

use super::element::Element;
use super::isotope_data::ISOTOPES;

/// A specific isotope of an element.
///
/// An `Isotope` is a validated handle into the generated isotope mass table: it
/// can only be constructed for `(element, mass number)` pairs that actually
/// appear in the NIST data, so every instance has a well-defined mass.
///
/// Display tokens are `symbol + mass number` (`"He3"`, `"U238"`), except for
/// hydrogen-2 and hydrogen-3 which carry their historical names and display as
/// `"D"` and `"T"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Isotope(u16);

impl Isotope {
    fn row(self) -> (u8, u16, f64) {
        ISOTOPES[self.0 as usize]
    }

    /// Gets the isotope of `element` with the given mass number, if the NIST
    /// table knows it.
    pub fn new(element: Element, mass_number: u16) -> Option<Isotope> {
        let key = (element.atomic_number(), mass_number);
        ISOTOPES
            .binary_search_by_key(&key, |&(z, a, _)| (z, a))
            .ok()
            .map(|index| Isotope(index as u16))
    }

    /// Gets the element this isotope belongs to.
    pub fn element(self) -> Element {
        Element::ALL[(self.row().0 - 1) as usize]
    }

    /// Gets the mass number, i.e. the total count of protons and neutrons.
    pub fn mass_number(self) -> u16 {
        self.row().1
    }

    /// Gets the atomic mass in Dalton.
    pub fn mass(self) -> f64 {
        self.row().2
    }

    /// Gets the display token, e.g. `"He3"` (or `"D"`/`"T"` for the heavy
    /// hydrogen isotopes).
    pub fn name(self) -> String {
        let (z, a, _) = self.row();
        match (z, a) {
            (1, 2) => "D".to_string(),
            (1, 3) => "T".to_string(),
            _ => format!("{}{}", self.element().symbol(), a),
        }
    }

    /// Gets all known isotopes of `element`, in mass-number order.
    ///
    /// This is a range scan over the table, which is sorted by atomic number
    /// first; no per-element state is kept.
    pub fn of_element(element: Element) -> Vec<Isotope> {
        let z = element.atomic_number();
        let start = ISOTOPES.partition_point(|&(rz, _, _)| rz < z);
        let end = ISOTOPES.partition_point(|&(rz, _, _)| rz <= z);
        (start..end).map(|index| Isotope(index as u16)).collect()
    }

    /// Parses a display token into an isotope.
    ///
    /// Matching is case-insensitive (`"he3"`, `"U238"`, `"d"`) and accepts the
    /// full names `"deuterium"` and `"tritium"`. Hydrogen-2 and hydrogen-3 are
    /// only addressable through their `D`/`T` tokens, never as `"H2"`/`"H3"`.
    pub fn from_name(name: &str) -> Option<Isotope> {
        if name.eq_ignore_ascii_case("D") || name.eq_ignore_ascii_case("deuterium") {
            return Isotope::new(Element::H, 2);
        }
        if name.eq_ignore_ascii_case("T") || name.eq_ignore_ascii_case("tritium") {
            return Isotope::new(Element::H, 3);
        }

        let digits_start = name.find(|c: char| c.is_ascii_digit())?;
        let (symbol, digits) = name.split_at(digits_start);
        let mass_number: u16 = digits.parse().ok()?;
        let element = Element::iter().find(|e| e.symbol().eq_ignore_ascii_case(symbol))?;
        if element == Element::H && (mass_number == 2 || mass_number == 3) {
            return None;
        }
        Isotope::new(element, mass_number)
    }
}

impl fmt::Display for Isotope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_only_tabulated_isotopes() {
        assert!(Isotope::new(Element::He, 3).is_some());
        assert!(Isotope::new(Element::U, 238).is_some());
        assert!(Isotope::new(Element::He, 2).is_none());
        assert!(Isotope::new(Element::H, 1).is_none());
        assert!(Isotope::new(Element::Og, 1000).is_none());
    }

    #[test]
    fn accessors_return_table_values() {
        let he3 = Isotope::new(Element::He, 3).unwrap();
        assert_eq!(he3.element(), Element::He);
        assert_eq!(he3.mass_number(), 3);
        assert!((he3.mass() - 3.01602932).abs() < 1e-6);

        let deuterium = Isotope::new(Element::H, 2).unwrap();
        assert!((deuterium.mass() - 2.01410177812).abs() < 1e-9);
    }

    #[test]
    fn heavy_hydrogen_isotopes_display_as_d_and_t() {
        assert_eq!(Isotope::new(Element::H, 2).unwrap().name(), "D");
        assert_eq!(Isotope::new(Element::H, 3).unwrap().name(), "T");
        assert_eq!(Isotope::new(Element::H, 4).unwrap().name(), "H4");
        assert_eq!(Isotope::new(Element::He, 3).unwrap().to_string(), "He3");
    }

    #[test]
    fn from_name_is_case_insensitive() {
        let he3 = Isotope::new(Element::He, 3).unwrap();
        assert_eq!(Isotope::from_name("He3"), Some(he3));
        assert_eq!(Isotope::from_name("he3"), Some(he3));
        assert_eq!(Isotope::from_name("HE3"), Some(he3));
        assert_eq!(Isotope::from_name("u238"), Isotope::new(Element::U, 238));
    }

    #[test]
    fn from_name_resolves_deuterium_and_tritium() {
        let d = Isotope::new(Element::H, 2).unwrap();
        let t = Isotope::new(Element::H, 3).unwrap();
        assert_eq!(Isotope::from_name("D"), Some(d));
        assert_eq!(Isotope::from_name("d"), Some(d));
        assert_eq!(Isotope::from_name("deuterium"), Some(d));
        assert_eq!(Isotope::from_name("Tritium"), Some(t));
    }

    #[test]
    fn from_name_rejects_h2_and_h3_spellings() {
        assert_eq!(Isotope::from_name("H2"), None);
        assert_eq!(Isotope::from_name("h3"), None);
        assert_eq!(Isotope::from_name("H4"), Isotope::new(Element::H, 4));
    }

    #[test]
    fn from_name_rejects_garbage() {
        assert_eq!(Isotope::from_name(""), None);
        assert_eq!(Isotope::from_name("He"), None);
        assert_eq!(Isotope::from_name("238"), None);
        assert_eq!(Isotope::from_name("He3x"), None);
        assert_eq!(Isotope::from_name("Xx7"), None);
    }

    #[test]
    fn of_element_returns_all_isotopes_in_order() {
        let hydrogen = Isotope::of_element(Element::H);
        let mass_numbers: Vec<u16> = hydrogen.iter().map(|i| i.mass_number()).collect();
        assert_eq!(mass_numbers, vec![2, 3, 4, 5, 6, 7]);
        assert!(hydrogen.iter().all(|i| i.element() == Element::H));

        assert_eq!(Isotope::of_element(Element::Og).len(), 2);
    }

    #[test]
    fn isotope_masses_track_their_elements_average_mass() {
        for element in Element::iter() {
            let isotopes = Isotope::of_element(element);
            // Rounding of the average leaves at most about one Dalton per
            // known isotope between any single isotope and the average.
            let tolerance = isotopes.len() as f64 + 0.5;
            for isotope in isotopes {
                assert!(
                    (isotope.mass() - element.mass()).abs() <= tolerance,
                    "{} mass {} too far from {} average {}",
                    isotope.name(),
                    isotope.mass(),
                    element.name(),
                    element.mass()
                );
            }
        }
    }
}
