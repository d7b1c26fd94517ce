use std::collections::HashSet;

use super::element::Element;
use super::isotope::Isotope;
use super::nuclide::Nuclide;

/// Anything with a mass and a nuclide decomposition: elements, isotopes and
/// resolved molecules.
pub trait ChemicalCompound {
    /// Gets the average mass in Dalton (unified atomic mass units). Binding
    /// energy effects are neglected throughout: a compound's mass is just the
    /// sum of its nuclide masses.
    fn mass(&self) -> f64;

    /// Gets the set of nuclides occurring in the compound.
    fn nuclides(&self) -> HashSet<Nuclide>;
}

impl ChemicalCompound for Element {
    fn mass(&self) -> f64 {
        Element::mass(*self)
    }

    fn nuclides(&self) -> HashSet<Nuclide> {
        HashSet::from([Nuclide::Element(*self)])
    }
}

impl ChemicalCompound for Isotope {
    fn mass(&self) -> f64 {
        Isotope::mass(*self)
    }

    fn nuclides(&self) -> HashSet<Nuclide> {
        HashSet::from([Nuclide::Isotope(*self)])
    }
}

impl ChemicalCompound for Nuclide {
    fn mass(&self) -> f64 {
        Nuclide::mass(*self)
    }

    fn nuclides(&self) -> HashSet<Nuclide> {
        HashSet::from([*self])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nuclides_of_a_nuclide_is_itself() {
        let element = Element::Fe;
        assert_eq!(
            ChemicalCompound::nuclides(&element),
            HashSet::from([Nuclide::Element(Element::Fe)])
        );

        let isotope = Isotope::new(Element::He, 3).unwrap();
        assert_eq!(
            ChemicalCompound::nuclides(&isotope),
            HashSet::from([Nuclide::Isotope(isotope)])
        );
    }

    #[test]
    fn trait_mass_agrees_with_inherent_mass() {
        let element = Element::O;
        assert_eq!(ChemicalCompound::mass(&element), Element::O.mass());

        let nuclide = Nuclide::Element(Element::O);
        assert_eq!(ChemicalCompound::mass(&nuclide), Element::O.mass());
    }
}
