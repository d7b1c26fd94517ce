use phf::{Map, phf_map};
use serde::Serialize;
use std::fmt;

use super::isotope::Isotope;

/// Broad chemical classification of an element.
///
/// The categories follow the usual coloring of the periodic table; they are
/// useful for coarse filtering (e.g. "all noble gases") without consulting the
/// per-element data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ElementCategory {
    /// Highly reactive, soft metals that readily form +1 cations (group 1).
    AlkaliMetal,
    /// Reactive, silvery metals that readily form +2 cations (group 2).
    AlkalineEarthMetal,
    /// The rare-earth series chemically similar to lanthanum.
    Lanthanoid,
    /// The uniformly radioactive series chemically similar to actinium.
    Actinoid,
    /// Elements with an incomplete d sub-shell, or forming cations with one.
    TransitionMetal,
    /// Metals located between the transition metals and the metalloids.
    PostTransitionMetal,
    /// Elements with properties between those of metals and nonmetals.
    Metalloid,
    /// Relatively strongly oxidizing nonmetals.
    ReactiveNonmetal,
    /// Gases with a full valence shell and correspondingly low reactivity.
    NobleGas,
    /// Chemical properties not yet determined experimentally.
    Unknown,
}

impl ElementCategory {
    /// Returns whether elements of this category behave as metals.
    pub fn is_metal(self) -> bool {
        matches!(
            self,
            Self::AlkaliMetal
                | Self::AlkalineEarthMetal
                | Self::Lanthanoid
                | Self::Actinoid
                | Self::TransitionMetal
                | Self::PostTransitionMetal
        )
    }

    /// Returns whether elements of this category behave as metalloids.
    pub fn is_metalloid(self) -> bool {
        matches!(self, Self::Metalloid)
    }

    /// Returns whether elements of this category behave as nonmetals.
    pub fn is_nonmetal(self) -> bool {
        matches!(self, Self::ReactiveNonmetal | Self::NobleGas)
    }

    /// Returns whether the chemical behavior is unknown.
    pub fn is_unknown(self) -> bool {
        matches!(self, Self::Unknown)
    }
}

/// How an element occurs in nature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NaturalOccurrence {
    /// Already present in the interstellar medium the solar system formed from;
    /// stable (or nearly stable) nuclides that survived to the present day.
    Primordial,
    /// Short-lived relative to the age of Earth, occurring naturally only
    /// because decaying parent nuclides replenish it.
    FromDecay,
    /// Does not occur naturally on Earth and can only be created artificially.
    Synthetic,
}

/// All elements currently known to man, in atomic-number order.
///
/// The variant name is the canonical symbol. Reference data (mass, radii,
/// electronegativity, classification) is available through the accessors; the
/// numeric fields use NaN where no measured value exists, which for the
/// heaviest synthetic elements is most of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[rustfmt::skip]
pub enum Element {
    H, He, Li, Be, B, C, N, O, F, Ne,
    Na, Mg, Al, Si, P, S, Cl, Ar, K, Ca,
    Sc, Ti, V, Cr, Mn, Fe, Co, Ni, Cu, Zn,
    Ga, Ge, As, Se, Br, Kr, Rb, Sr, Y, Zr,
    Nb, Mo, Tc, Ru, Rh, Pd, Ag, Cd, In, Sn,
    Sb, Te, I, Xe, Cs, Ba, La, Ce, Pr, Nd,
    Pm, Sm, Eu, Gd, Tb, Dy, Ho, Er, Tm, Yb,
    Lu, Hf, Ta, W, Re, Os, Ir, Pt, Au, Hg,
    Tl, Pb, Bi, Po, At, Rn, Fr, Ra, Ac, Th,
    Pa, U, Np, Pu, Am, Cm, Bk, Cf, Es, Fm,
    Md, No, Lr, Rf, Db, Sg, Bh, Hs, Mt, Ds,
    Rg, Cn, Nh, Fl, Mc, Lv, Ts, Og,
}

struct ElementData {
    symbol: &'static str,
    name: &'static str,
    group: f64,
    period: u8,
    mass: f64,
    covalent_radius: f64,
    vdw_radius: f64,
    electronegativity: f64,
    category: ElementCategory,
    occurrence: NaturalOccurrence,
}

// Regenerated offline from the NIST/IUPAC reference data; indexed by atomic
// number minus one.
static DATA: [ElementData; 118] = [
    ElementData { symbol: "H", name: "hydrogen", group: 1.0, period: 1, mass: 1.00794, covalent_radius: 31.0, vdw_radius: 120.0, electronegativity: 2.1, category: ElementCategory::ReactiveNonmetal, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "He", name: "helium", group: 18.0, period: 1, mass: 4.0026, covalent_radius: 28.0, vdw_radius: 140.0, electronegativity: 0.0, category: ElementCategory::NobleGas, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Li", name: "lithium", group: 1.0, period: 2, mass: 6.941, covalent_radius: 128.0, vdw_radius: 182.0, electronegativity: 0.98, category: ElementCategory::AlkaliMetal, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Be", name: "beryllium", group: 2.0, period: 2, mass: 9.01218, covalent_radius: 96.0, vdw_radius: 153.0, electronegativity: 1.57, category: ElementCategory::AlkalineEarthMetal, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "B", name: "boron", group: 13.0, period: 2, mass: 10.811, covalent_radius: 84.0, vdw_radius: 192.0, electronegativity: 2.04, category: ElementCategory::Metalloid, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "C", name: "carbon", group: 14.0, period: 2, mass: 12.011, covalent_radius: 76.0, vdw_radius: 170.0, electronegativity: 2.55, category: ElementCategory::ReactiveNonmetal, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "N", name: "nitrogen", group: 15.0, period: 2, mass: 14.0067, covalent_radius: 71.0, vdw_radius: 155.0, electronegativity: 3.04, category: ElementCategory::ReactiveNonmetal, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "O", name: "oxygen", group: 16.0, period: 2, mass: 15.9994, covalent_radius: 66.0, vdw_radius: 152.0, electronegativity: 3.44, category: ElementCategory::ReactiveNonmetal, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "F", name: "fluorine", group: 17.0, period: 2, mass: 18.9984, covalent_radius: 57.0, vdw_radius: 147.0, electronegativity: 3.98, category: ElementCategory::ReactiveNonmetal, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Ne", name: "neon", group: 18.0, period: 2, mass: 20.1797, covalent_radius: 58.0, vdw_radius: 154.0, electronegativity: 0.0, category: ElementCategory::NobleGas, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Na", name: "sodium", group: 1.0, period: 3, mass: 22.98977, covalent_radius: 166.0, vdw_radius: 227.0, electronegativity: 0.93, category: ElementCategory::AlkaliMetal, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Mg", name: "magnesium", group: 2.0, period: 3, mass: 24.305, covalent_radius: 141.0, vdw_radius: 173.0, electronegativity: 1.31, category: ElementCategory::AlkalineEarthMetal, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Al", name: "aluminium", group: 13.0, period: 3, mass: 26.9815384, covalent_radius: 121.0, vdw_radius: 184.0, electronegativity: 1.61, category: ElementCategory::PostTransitionMetal, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Si", name: "silicon", group: 14.0, period: 3, mass: 28.0855, covalent_radius: 111.0, vdw_radius: 210.0, electronegativity: 1.9, category: ElementCategory::Metalloid, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "P", name: "phosphorus", group: 15.0, period: 3, mass: 30.97376, covalent_radius: 107.0, vdw_radius: 180.0, electronegativity: 2.19, category: ElementCategory::ReactiveNonmetal, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "S", name: "sulfur", group: 16.0, period: 3, mass: 32.066, covalent_radius: 105.0, vdw_radius: 180.0, electronegativity: 2.58, category: ElementCategory::ReactiveNonmetal, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Cl", name: "chlorine", group: 17.0, period: 3, mass: 35.4527, covalent_radius: 102.0, vdw_radius: 175.0, electronegativity: 3.16, category: ElementCategory::ReactiveNonmetal, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Ar", name: "argon", group: 18.0, period: 3, mass: 39.948, covalent_radius: 106.0, vdw_radius: 188.0, electronegativity: 0.0, category: ElementCategory::NobleGas, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "K", name: "potassium", group: 1.0, period: 4, mass: 39.0983, covalent_radius: 203.0, vdw_radius: 275.0, electronegativity: 0.82, category: ElementCategory::AlkaliMetal, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Ca", name: "calcium", group: 2.0, period: 4, mass: 40.078, covalent_radius: 176.0, vdw_radius: 231.0, electronegativity: 1.0, category: ElementCategory::AlkalineEarthMetal, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Sc", name: "scandium", group: 3.0, period: 4, mass: 44.9559, covalent_radius: 170.0, vdw_radius: 211.0, electronegativity: 1.36, category: ElementCategory::TransitionMetal, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Ti", name: "titanium", group: 4.0, period: 4, mass: 47.88, covalent_radius: 160.0, vdw_radius: f64::NAN, electronegativity: 1.54, category: ElementCategory::TransitionMetal, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "V", name: "vanadium", group: 5.0, period: 4, mass: 50.9415, covalent_radius: 153.0, vdw_radius: f64::NAN, electronegativity: 1.63, category: ElementCategory::TransitionMetal, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Cr", name: "chromium", group: 6.0, period: 4, mass: 51.996, covalent_radius: 139.0, vdw_radius: f64::NAN, electronegativity: 1.66, category: ElementCategory::TransitionMetal, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Mn", name: "manganese", group: 7.0, period: 4, mass: 54.938043, covalent_radius: 139.0, vdw_radius: f64::NAN, electronegativity: 1.55, category: ElementCategory::TransitionMetal, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Fe", name: "iron", group: 8.0, period: 4, mass: 55.847, covalent_radius: 132.0, vdw_radius: f64::NAN, electronegativity: 1.83, category: ElementCategory::TransitionMetal, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Co", name: "cobalt", group: 9.0, period: 4, mass: 58.933194, covalent_radius: 126.0, vdw_radius: f64::NAN, electronegativity: 1.88, category: ElementCategory::TransitionMetal, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Ni", name: "nickel", group: 10.0, period: 4, mass: 58.6934, covalent_radius: 124.0, vdw_radius: 163.0, electronegativity: 1.91, category: ElementCategory::TransitionMetal, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Cu", name: "copper", group: 11.0, period: 4, mass: 63.546, covalent_radius: 132.0, vdw_radius: 140.0, electronegativity: 1.9, category: ElementCategory::TransitionMetal, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Zn", name: "zinc", group: 12.0, period: 4, mass: 65.39, covalent_radius: 122.0, vdw_radius: 139.0, electronegativity: 1.65, category: ElementCategory::PostTransitionMetal, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Ga", name: "gallium", group: 13.0, period: 4, mass: 69.723, covalent_radius: 122.0, vdw_radius: 187.0, electronegativity: 1.81, category: ElementCategory::PostTransitionMetal, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Ge", name: "germanium", group: 14.0, period: 4, mass: 72.61, covalent_radius: 120.0, vdw_radius: 211.0, electronegativity: 2.01, category: ElementCategory::Metalloid, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "As", name: "arsenic", group: 15.0, period: 4, mass: 74.9216, covalent_radius: 119.0, vdw_radius: 185.0, electronegativity: 2.18, category: ElementCategory::Metalloid, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Se", name: "selenium", group: 16.0, period: 4, mass: 78.96, covalent_radius: 120.0, vdw_radius: 190.0, electronegativity: 2.55, category: ElementCategory::ReactiveNonmetal, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Br", name: "bromine", group: 17.0, period: 4, mass: 79.904, covalent_radius: 120.0, vdw_radius: 185.0, electronegativity: 2.96, category: ElementCategory::ReactiveNonmetal, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Kr", name: "krypton", group: 18.0, period: 4, mass: 83.8, covalent_radius: 116.0, vdw_radius: 202.0, electronegativity: 0.0, category: ElementCategory::NobleGas, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Rb", name: "rubidium", group: 1.0, period: 5, mass: 85.4678, covalent_radius: 220.0, vdw_radius: 303.0, electronegativity: 0.82, category: ElementCategory::AlkaliMetal, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Sr", name: "strontium", group: 2.0, period: 5, mass: 87.62, covalent_radius: 195.0, vdw_radius: 249.0, electronegativity: 0.95, category: ElementCategory::AlkalineEarthMetal, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Y", name: "yttrium", group: 3.0, period: 5, mass: 88.9059, covalent_radius: 190.0, vdw_radius: f64::NAN, electronegativity: 1.22, category: ElementCategory::TransitionMetal, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Zr", name: "zirconium", group: 4.0, period: 5, mass: 91.224, covalent_radius: 175.0, vdw_radius: f64::NAN, electronegativity: 1.33, category: ElementCategory::TransitionMetal, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Nb", name: "niobium", group: 5.0, period: 5, mass: 92.90637, covalent_radius: 164.0, vdw_radius: f64::NAN, electronegativity: 1.6, category: ElementCategory::TransitionMetal, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Mo", name: "molybdenum", group: 6.0, period: 5, mass: 95.94, covalent_radius: 154.0, vdw_radius: f64::NAN, electronegativity: 2.16, category: ElementCategory::TransitionMetal, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Tc", name: "technetium", group: 7.0, period: 5, mass: 98.0, covalent_radius: 147.0, vdw_radius: f64::NAN, electronegativity: 1.9, category: ElementCategory::TransitionMetal, occurrence: NaturalOccurrence::FromDecay },
    ElementData { symbol: "Ru", name: "ruthenium", group: 8.0, period: 5, mass: 101.07, covalent_radius: 146.0, vdw_radius: f64::NAN, electronegativity: 2.2, category: ElementCategory::TransitionMetal, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Rh", name: "rhodium", group: 9.0, period: 5, mass: 102.9055, covalent_radius: 142.0, vdw_radius: f64::NAN, electronegativity: 2.28, category: ElementCategory::TransitionMetal, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Pd", name: "palladium", group: 10.0, period: 5, mass: 106.42, covalent_radius: 139.0, vdw_radius: 163.0, electronegativity: 2.2, category: ElementCategory::TransitionMetal, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Ag", name: "silver", group: 11.0, period: 5, mass: 107.868, covalent_radius: 145.0, vdw_radius: 172.0, electronegativity: 1.93, category: ElementCategory::TransitionMetal, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Cd", name: "cadmium", group: 12.0, period: 5, mass: 112.41, covalent_radius: 144.0, vdw_radius: 158.0, electronegativity: 1.69, category: ElementCategory::PostTransitionMetal, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "In", name: "indium", group: 13.0, period: 5, mass: 114.82, covalent_radius: 142.0, vdw_radius: 193.0, electronegativity: 1.78, category: ElementCategory::PostTransitionMetal, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Sn", name: "tin", group: 14.0, period: 5, mass: 118.71, covalent_radius: 139.0, vdw_radius: 217.0, electronegativity: 1.96, category: ElementCategory::PostTransitionMetal, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Sb", name: "antimony", group: 15.0, period: 5, mass: 121.757, covalent_radius: 139.0, vdw_radius: 206.0, electronegativity: 2.05, category: ElementCategory::Metalloid, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Te", name: "tellurium", group: 16.0, period: 5, mass: 127.6, covalent_radius: 138.0, vdw_radius: 206.0, electronegativity: 2.1, category: ElementCategory::Metalloid, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "I", name: "iodine", group: 17.0, period: 5, mass: 126.9045, covalent_radius: 139.0, vdw_radius: 198.0, electronegativity: 2.66, category: ElementCategory::ReactiveNonmetal, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Xe", name: "xenon", group: 18.0, period: 5, mass: 131.29, covalent_radius: 140.0, vdw_radius: 216.0, electronegativity: 2.6, category: ElementCategory::NobleGas, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Cs", name: "caesium", group: 1.0, period: 6, mass: 132.9054, covalent_radius: 244.0, vdw_radius: 343.0, electronegativity: 0.79, category: ElementCategory::AlkaliMetal, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Ba", name: "barium", group: 2.0, period: 6, mass: 137.33, covalent_radius: 215.0, vdw_radius: 268.0, electronegativity: 0.89, category: ElementCategory::AlkalineEarthMetal, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "La", name: "lanthanum", group: 3.0, period: 6, mass: 138.9055, covalent_radius: 207.0, vdw_radius: f64::NAN, electronegativity: 1.1, category: ElementCategory::Lanthanoid, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Ce", name: "cerium", group: f64::NAN, period: 6, mass: 140.12, covalent_radius: 204.0, vdw_radius: f64::NAN, electronegativity: 1.12, category: ElementCategory::Lanthanoid, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Pr", name: "praseodymium", group: f64::NAN, period: 6, mass: 140.9077, covalent_radius: 203.0, vdw_radius: f64::NAN, electronegativity: 1.13, category: ElementCategory::Lanthanoid, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Nd", name: "neodymium", group: f64::NAN, period: 6, mass: 144.24, covalent_radius: 201.0, vdw_radius: f64::NAN, electronegativity: 1.14, category: ElementCategory::Lanthanoid, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Pm", name: "promethium", group: f64::NAN, period: 6, mass: 145.0, covalent_radius: 199.0, vdw_radius: f64::NAN, electronegativity: 1.13, category: ElementCategory::Lanthanoid, occurrence: NaturalOccurrence::FromDecay },
    ElementData { symbol: "Sm", name: "samarium", group: f64::NAN, period: 6, mass: 150.36, covalent_radius: 198.0, vdw_radius: f64::NAN, electronegativity: 1.17, category: ElementCategory::Lanthanoid, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Eu", name: "europium", group: f64::NAN, period: 6, mass: 151.965, covalent_radius: 198.0, vdw_radius: f64::NAN, electronegativity: 1.2, category: ElementCategory::Lanthanoid, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Gd", name: "gadolinium", group: f64::NAN, period: 6, mass: 157.25, covalent_radius: 196.0, vdw_radius: f64::NAN, electronegativity: 1.2, category: ElementCategory::Lanthanoid, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Tb", name: "terbium", group: f64::NAN, period: 6, mass: 158.9253, covalent_radius: 194.0, vdw_radius: f64::NAN, electronegativity: 1.1, category: ElementCategory::Lanthanoid, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Dy", name: "dysprosium", group: f64::NAN, period: 6, mass: 162.5, covalent_radius: 192.0, vdw_radius: f64::NAN, electronegativity: 1.22, category: ElementCategory::Lanthanoid, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Ho", name: "holmium", group: f64::NAN, period: 6, mass: 164.930328, covalent_radius: 192.0, vdw_radius: f64::NAN, electronegativity: 1.23, category: ElementCategory::Lanthanoid, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Er", name: "erbium", group: f64::NAN, period: 6, mass: 167.26, covalent_radius: 189.0, vdw_radius: f64::NAN, electronegativity: 1.24, category: ElementCategory::Lanthanoid, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Tm", name: "thulium", group: f64::NAN, period: 6, mass: 168.9342, covalent_radius: 190.0, vdw_radius: f64::NAN, electronegativity: 1.25, category: ElementCategory::Lanthanoid, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Yb", name: "ytterbium", group: f64::NAN, period: 6, mass: 173.04, covalent_radius: 187.0, vdw_radius: f64::NAN, electronegativity: 1.1, category: ElementCategory::Lanthanoid, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Lu", name: "lutetium", group: f64::NAN, period: 6, mass: 174.967, covalent_radius: 175.0, vdw_radius: f64::NAN, electronegativity: 1.27, category: ElementCategory::Lanthanoid, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Hf", name: "hafnium", group: 4.0, period: 6, mass: 178.49, covalent_radius: 187.0, vdw_radius: f64::NAN, electronegativity: 1.3, category: ElementCategory::TransitionMetal, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Ta", name: "tantalum", group: 5.0, period: 6, mass: 180.9479, covalent_radius: 170.0, vdw_radius: f64::NAN, electronegativity: 1.5, category: ElementCategory::TransitionMetal, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "W", name: "tungsten", group: 6.0, period: 6, mass: 183.85, covalent_radius: 162.0, vdw_radius: f64::NAN, electronegativity: 2.36, category: ElementCategory::TransitionMetal, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Re", name: "rhenium", group: 7.0, period: 6, mass: 186.207, covalent_radius: 151.0, vdw_radius: f64::NAN, electronegativity: 1.9, category: ElementCategory::TransitionMetal, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Os", name: "osmium", group: 8.0, period: 6, mass: 190.2, covalent_radius: 144.0, vdw_radius: f64::NAN, electronegativity: 2.2, category: ElementCategory::TransitionMetal, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Ir", name: "iridium", group: 9.0, period: 6, mass: 192.217, covalent_radius: 141.0, vdw_radius: f64::NAN, electronegativity: 2.2, category: ElementCategory::TransitionMetal, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Pt", name: "platinum", group: 10.0, period: 6, mass: 195.08, covalent_radius: 136.0, vdw_radius: 175.0, electronegativity: 2.28, category: ElementCategory::TransitionMetal, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Au", name: "gold", group: 11.0, period: 6, mass: 196.966570, covalent_radius: 136.0, vdw_radius: 166.0, electronegativity: 2.54, category: ElementCategory::TransitionMetal, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Hg", name: "mercury", group: 12.0, period: 6, mass: 200.59, covalent_radius: 132.0, vdw_radius: 155.0, electronegativity: 2.0, category: ElementCategory::PostTransitionMetal, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Tl", name: "thallium", group: 13.0, period: 6, mass: 204.383, covalent_radius: 145.0, vdw_radius: 196.0, electronegativity: 2.04, category: ElementCategory::PostTransitionMetal, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Pb", name: "lead", group: 14.0, period: 6, mass: 207.2, covalent_radius: 146.0, vdw_radius: 202.0, electronegativity: 2.33, category: ElementCategory::PostTransitionMetal, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Bi", name: "bismuth", group: 15.0, period: 6, mass: 208.9804, covalent_radius: 148.0, vdw_radius: 207.0, electronegativity: 2.02, category: ElementCategory::PostTransitionMetal, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Po", name: "polonium", group: 16.0, period: 6, mass: 209.0, covalent_radius: 140.0, vdw_radius: 197.0, electronegativity: 2.0, category: ElementCategory::PostTransitionMetal, occurrence: NaturalOccurrence::FromDecay },
    ElementData { symbol: "At", name: "astatine", group: 17.0, period: 6, mass: 210.0, covalent_radius: 150.0, vdw_radius: 202.0, electronegativity: 2.2, category: ElementCategory::Metalloid, occurrence: NaturalOccurrence::FromDecay },
    ElementData { symbol: "Rn", name: "radon", group: 18.0, period: 6, mass: 222.0, covalent_radius: 150.0, vdw_radius: 220.0, electronegativity: 0.0, category: ElementCategory::NobleGas, occurrence: NaturalOccurrence::FromDecay },
    ElementData { symbol: "Fr", name: "francium", group: 1.0, period: 7, mass: 223.0, covalent_radius: 260.0, vdw_radius: 348.0, electronegativity: 0.7, category: ElementCategory::AlkaliMetal, occurrence: NaturalOccurrence::FromDecay },
    ElementData { symbol: "Ra", name: "radium", group: 2.0, period: 7, mass: 226.0254, covalent_radius: 221.0, vdw_radius: 283.0, electronegativity: 0.89, category: ElementCategory::AlkalineEarthMetal, occurrence: NaturalOccurrence::FromDecay },
    ElementData { symbol: "Ac", name: "actinium", group: 3.0, period: 7, mass: 227.0, covalent_radius: 215.0, vdw_radius: f64::NAN, electronegativity: 1.1, category: ElementCategory::Actinoid, occurrence: NaturalOccurrence::FromDecay },
    ElementData { symbol: "Th", name: "thorium", group: f64::NAN, period: 7, mass: 232.0381, covalent_radius: 206.0, vdw_radius: f64::NAN, electronegativity: 1.3, category: ElementCategory::Actinoid, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Pa", name: "protactinium", group: f64::NAN, period: 7, mass: 231.0359, covalent_radius: 200.0, vdw_radius: f64::NAN, electronegativity: 1.5, category: ElementCategory::Actinoid, occurrence: NaturalOccurrence::FromDecay },
    ElementData { symbol: "U", name: "uranium", group: f64::NAN, period: 7, mass: 238.029, covalent_radius: 196.0, vdw_radius: 186.0, electronegativity: 1.38, category: ElementCategory::Actinoid, occurrence: NaturalOccurrence::Primordial },
    ElementData { symbol: "Np", name: "neptunium", group: f64::NAN, period: 7, mass: 237.0482, covalent_radius: 190.0, vdw_radius: f64::NAN, electronegativity: 1.36, category: ElementCategory::Actinoid, occurrence: NaturalOccurrence::FromDecay },
    ElementData { symbol: "Pu", name: "plutonium", group: f64::NAN, period: 7, mass: 244.0, covalent_radius: 187.0, vdw_radius: f64::NAN, electronegativity: 1.28, category: ElementCategory::Actinoid, occurrence: NaturalOccurrence::FromDecay },
    ElementData { symbol: "Am", name: "americium", group: f64::NAN, period: 7, mass: 243.0, covalent_radius: 180.0, vdw_radius: f64::NAN, electronegativity: 1.3, category: ElementCategory::Actinoid, occurrence: NaturalOccurrence::Synthetic },
    ElementData { symbol: "Cm", name: "curium", group: f64::NAN, period: 7, mass: 247.0, covalent_radius: 169.0, vdw_radius: f64::NAN, electronegativity: 1.3, category: ElementCategory::Actinoid, occurrence: NaturalOccurrence::Synthetic },
    ElementData { symbol: "Bk", name: "berkelium", group: f64::NAN, period: 7, mass: 247.0, covalent_radius: f64::NAN, vdw_radius: f64::NAN, electronegativity: 1.3, category: ElementCategory::Actinoid, occurrence: NaturalOccurrence::Synthetic },
    ElementData { symbol: "Cf", name: "californium", group: f64::NAN, period: 7, mass: 251.0, covalent_radius: f64::NAN, vdw_radius: f64::NAN, electronegativity: 1.3, category: ElementCategory::Actinoid, occurrence: NaturalOccurrence::Synthetic },
    ElementData { symbol: "Es", name: "einsteinium", group: f64::NAN, period: 7, mass: 252.0, covalent_radius: f64::NAN, vdw_radius: f64::NAN, electronegativity: 1.3, category: ElementCategory::Actinoid, occurrence: NaturalOccurrence::Synthetic },
    ElementData { symbol: "Fm", name: "fermium", group: f64::NAN, period: 7, mass: 257.0, covalent_radius: f64::NAN, vdw_radius: f64::NAN, electronegativity: 1.3, category: ElementCategory::Actinoid, occurrence: NaturalOccurrence::Synthetic },
    ElementData { symbol: "Md", name: "mendelevium", group: f64::NAN, period: 7, mass: 258.0, covalent_radius: f64::NAN, vdw_radius: f64::NAN, electronegativity: 1.3, category: ElementCategory::Actinoid, occurrence: NaturalOccurrence::Synthetic },
    ElementData { symbol: "No", name: "nobelium", group: f64::NAN, period: 7, mass: 259.0, covalent_radius: f64::NAN, vdw_radius: f64::NAN, electronegativity: 1.3, category: ElementCategory::Actinoid, occurrence: NaturalOccurrence::Synthetic },
    ElementData { symbol: "Lr", name: "lawrencium", group: f64::NAN, period: 7, mass: 266.0, covalent_radius: f64::NAN, vdw_radius: f64::NAN, electronegativity: f64::NAN, category: ElementCategory::Actinoid, occurrence: NaturalOccurrence::Synthetic },
    ElementData { symbol: "Rf", name: "rutherfordium", group: 4.0, period: 7, mass: 267.0, covalent_radius: f64::NAN, vdw_radius: f64::NAN, electronegativity: f64::NAN, category: ElementCategory::TransitionMetal, occurrence: NaturalOccurrence::Synthetic },
    ElementData { symbol: "Db", name: "dubnium", group: 5.0, period: 7, mass: 268.0, covalent_radius: f64::NAN, vdw_radius: f64::NAN, electronegativity: f64::NAN, category: ElementCategory::TransitionMetal, occurrence: NaturalOccurrence::Synthetic },
    ElementData { symbol: "Sg", name: "seaborgium", group: 6.0, period: 7, mass: 269.0, covalent_radius: f64::NAN, vdw_radius: f64::NAN, electronegativity: f64::NAN, category: ElementCategory::TransitionMetal, occurrence: NaturalOccurrence::Synthetic },
    ElementData { symbol: "Bh", name: "bohrium", group: 7.0, period: 7, mass: 270.0, covalent_radius: f64::NAN, vdw_radius: f64::NAN, electronegativity: f64::NAN, category: ElementCategory::TransitionMetal, occurrence: NaturalOccurrence::Synthetic },
    ElementData { symbol: "Hs", name: "hassium", group: 8.0, period: 7, mass: 270.0, covalent_radius: f64::NAN, vdw_radius: f64::NAN, electronegativity: f64::NAN, category: ElementCategory::TransitionMetal, occurrence: NaturalOccurrence::Synthetic },
    ElementData { symbol: "Mt", name: "meitnerium", group: 9.0, period: 7, mass: 278.0, covalent_radius: f64::NAN, vdw_radius: f64::NAN, electronegativity: f64::NAN, category: ElementCategory::Unknown, occurrence: NaturalOccurrence::Synthetic },
    ElementData { symbol: "Ds", name: "darmstadtium", group: 10.0, period: 7, mass: 281.0, covalent_radius: f64::NAN, vdw_radius: f64::NAN, electronegativity: f64::NAN, category: ElementCategory::Unknown, occurrence: NaturalOccurrence::Synthetic },
    ElementData { symbol: "Rg", name: "roentgenium", group: 11.0, period: 7, mass: 282.0, covalent_radius: f64::NAN, vdw_radius: f64::NAN, electronegativity: f64::NAN, category: ElementCategory::Unknown, occurrence: NaturalOccurrence::Synthetic },
    ElementData { symbol: "Cn", name: "copernicium", group: 12.0, period: 7, mass: 285.0, covalent_radius: f64::NAN, vdw_radius: f64::NAN, electronegativity: f64::NAN, category: ElementCategory::Unknown, occurrence: NaturalOccurrence::Synthetic },
    ElementData { symbol: "Nh", name: "nihonium", group: 13.0, period: 7, mass: 286.0, covalent_radius: f64::NAN, vdw_radius: f64::NAN, electronegativity: f64::NAN, category: ElementCategory::Unknown, occurrence: NaturalOccurrence::Synthetic },
    ElementData { symbol: "Fl", name: "flerovium", group: 14.0, period: 7, mass: 289.0, covalent_radius: f64::NAN, vdw_radius: f64::NAN, electronegativity: f64::NAN, category: ElementCategory::Unknown, occurrence: NaturalOccurrence::Synthetic },
    ElementData { symbol: "Mc", name: "moscovium", group: 15.0, period: 7, mass: 290.0, covalent_radius: f64::NAN, vdw_radius: f64::NAN, electronegativity: f64::NAN, category: ElementCategory::Unknown, occurrence: NaturalOccurrence::Synthetic },
    ElementData { symbol: "Lv", name: "livermorium", group: 16.0, period: 7, mass: 293.0, covalent_radius: f64::NAN, vdw_radius: f64::NAN, electronegativity: f64::NAN, category: ElementCategory::Unknown, occurrence: NaturalOccurrence::Synthetic },
    ElementData { symbol: "Ts", name: "tennessine", group: 17.0, period: 7, mass: 294.0, covalent_radius: f64::NAN, vdw_radius: f64::NAN, electronegativity: f64::NAN, category: ElementCategory::Unknown, occurrence: NaturalOccurrence::Synthetic },
    ElementData { symbol: "Og", name: "oganesson", group: 18.0, period: 7, mass: 294.0, covalent_radius: f64::NAN, vdw_radius: f64::NAN, electronegativity: f64::NAN, category: ElementCategory::Unknown, occurrence: NaturalOccurrence::Synthetic },
];

static BY_SYMBOL: Map<&'static str, Element> = phf_map! {
    "H" => Element::H,
    "He" => Element::He,
    "Li" => Element::Li,
    "Be" => Element::Be,
    "B" => Element::B,
    "C" => Element::C,
    "N" => Element::N,
    "O" => Element::O,
    "F" => Element::F,
    "Ne" => Element::Ne,
    "Na" => Element::Na,
    "Mg" => Element::Mg,
    "Al" => Element::Al,
    "Si" => Element::Si,
    "P" => Element::P,
    "S" => Element::S,
    "Cl" => Element::Cl,
    "Ar" => Element::Ar,
    "K" => Element::K,
    "Ca" => Element::Ca,
    "Sc" => Element::Sc,
    "Ti" => Element::Ti,
    "V" => Element::V,
    "Cr" => Element::Cr,
    "Mn" => Element::Mn,
    "Fe" => Element::Fe,
    "Co" => Element::Co,
    "Ni" => Element::Ni,
    "Cu" => Element::Cu,
    "Zn" => Element::Zn,
    "Ga" => Element::Ga,
    "Ge" => Element::Ge,
    "As" => Element::As,
    "Se" => Element::Se,
    "Br" => Element::Br,
    "Kr" => Element::Kr,
    "Rb" => Element::Rb,
    "Sr" => Element::Sr,
    "Y" => Element::Y,
    "Zr" => Element::Zr,
    "Nb" => Element::Nb,
    "Mo" => Element::Mo,
    "Tc" => Element::Tc,
    "Ru" => Element::Ru,
    "Rh" => Element::Rh,
    "Pd" => Element::Pd,
    "Ag" => Element::Ag,
    "Cd" => Element::Cd,
    "In" => Element::In,
    "Sn" => Element::Sn,
    "Sb" => Element::Sb,
    "Te" => Element::Te,
    "I" => Element::I,
    "Xe" => Element::Xe,
    "Cs" => Element::Cs,
    "Ba" => Element::Ba,
    "La" => Element::La,
    "Ce" => Element::Ce,
    "Pr" => Element::Pr,
    "Nd" => Element::Nd,
    "Pm" => Element::Pm,
    "Sm" => Element::Sm,
    "Eu" => Element::Eu,
    "Gd" => Element::Gd,
    "Tb" => Element::Tb,
    "Dy" => Element::Dy,
    "Ho" => Element::Ho,
    "Er" => Element::Er,
    "Tm" => Element::Tm,
    "Yb" => Element::Yb,
    "Lu" => Element::Lu,
    "Hf" => Element::Hf,
    "Ta" => Element::Ta,
    "W" => Element::W,
    "Re" => Element::Re,
    "Os" => Element::Os,
    "Ir" => Element::Ir,
    "Pt" => Element::Pt,
    "Au" => Element::Au,
    "Hg" => Element::Hg,
    "Tl" => Element::Tl,
    "Pb" => Element::Pb,
    "Bi" => Element::Bi,
    "Po" => Element::Po,
    "At" => Element::At,
    "Rn" => Element::Rn,
    "Fr" => Element::Fr,
    "Ra" => Element::Ra,
    "Ac" => Element::Ac,
    "Th" => Element::Th,
    "Pa" => Element::Pa,
    "U" => Element::U,
    "Np" => Element::Np,
    "Pu" => Element::Pu,
    "Am" => Element::Am,
    "Cm" => Element::Cm,
    "Bk" => Element::Bk,
    "Cf" => Element::Cf,
    "Es" => Element::Es,
    "Fm" => Element::Fm,
    "Md" => Element::Md,
    "No" => Element::No,
    "Lr" => Element::Lr,
    "Rf" => Element::Rf,
    "Db" => Element::Db,
    "Sg" => Element::Sg,
    "Bh" => Element::Bh,
    "Hs" => Element::Hs,
    "Mt" => Element::Mt,
    "Ds" => Element::Ds,
    "Rg" => Element::Rg,
    "Cn" => Element::Cn,
    "Nh" => Element::Nh,
    "Fl" => Element::Fl,
    "Mc" => Element::Mc,
    "Lv" => Element::Lv,
    "Ts" => Element::Ts,
    "Og" => Element::Og,
};

// Keys are the lowercased IUPAC names plus accepted alternative spellings.
static BY_NAME: Map<&'static str, Element> = phf_map! {
    "hydrogen" => Element::H,
    "helium" => Element::He,
    "lithium" => Element::Li,
    "beryllium" => Element::Be,
    "boron" => Element::B,
    "carbon" => Element::C,
    "nitrogen" => Element::N,
    "oxygen" => Element::O,
    "fluorine" => Element::F,
    "neon" => Element::Ne,
    "sodium" => Element::Na,
    "magnesium" => Element::Mg,
    "aluminium" => Element::Al,
    "silicon" => Element::Si,
    "phosphorus" => Element::P,
    "sulfur" => Element::S,
    "chlorine" => Element::Cl,
    "argon" => Element::Ar,
    "potassium" => Element::K,
    "calcium" => Element::Ca,
    "scandium" => Element::Sc,
    "titanium" => Element::Ti,
    "vanadium" => Element::V,
    "chromium" => Element::Cr,
    "manganese" => Element::Mn,
    "iron" => Element::Fe,
    "cobalt" => Element::Co,
    "nickel" => Element::Ni,
    "copper" => Element::Cu,
    "zinc" => Element::Zn,
    "gallium" => Element::Ga,
    "germanium" => Element::Ge,
    "arsenic" => Element::As,
    "selenium" => Element::Se,
    "bromine" => Element::Br,
    "krypton" => Element::Kr,
    "rubidium" => Element::Rb,
    "strontium" => Element::Sr,
    "yttrium" => Element::Y,
    "zirconium" => Element::Zr,
    "niobium" => Element::Nb,
    "molybdenum" => Element::Mo,
    "technetium" => Element::Tc,
    "ruthenium" => Element::Ru,
    "rhodium" => Element::Rh,
    "palladium" => Element::Pd,
    "silver" => Element::Ag,
    "cadmium" => Element::Cd,
    "indium" => Element::In,
    "tin" => Element::Sn,
    "antimony" => Element::Sb,
    "tellurium" => Element::Te,
    "iodine" => Element::I,
    "xenon" => Element::Xe,
    "caesium" => Element::Cs,
    "barium" => Element::Ba,
    "lanthanum" => Element::La,
    "cerium" => Element::Ce,
    "praseodymium" => Element::Pr,
    "neodymium" => Element::Nd,
    "promethium" => Element::Pm,
    "samarium" => Element::Sm,
    "europium" => Element::Eu,
    "gadolinium" => Element::Gd,
    "terbium" => Element::Tb,
    "dysprosium" => Element::Dy,
    "holmium" => Element::Ho,
    "erbium" => Element::Er,
    "thulium" => Element::Tm,
    "ytterbium" => Element::Yb,
    "lutetium" => Element::Lu,
    "hafnium" => Element::Hf,
    "tantalum" => Element::Ta,
    "tungsten" => Element::W,
    "rhenium" => Element::Re,
    "osmium" => Element::Os,
    "iridium" => Element::Ir,
    "platinum" => Element::Pt,
    "gold" => Element::Au,
    "mercury" => Element::Hg,
    "thallium" => Element::Tl,
    "lead" => Element::Pb,
    "bismuth" => Element::Bi,
    "polonium" => Element::Po,
    "astatine" => Element::At,
    "radon" => Element::Rn,
    "francium" => Element::Fr,
    "radium" => Element::Ra,
    "actinium" => Element::Ac,
    "thorium" => Element::Th,
    "protactinium" => Element::Pa,
    "uranium" => Element::U,
    "neptunium" => Element::Np,
    "plutonium" => Element::Pu,
    "americium" => Element::Am,
    "curium" => Element::Cm,
    "berkelium" => Element::Bk,
    "californium" => Element::Cf,
    "einsteinium" => Element::Es,
    "fermium" => Element::Fm,
    "mendelevium" => Element::Md,
    "nobelium" => Element::No,
    "lawrencium" => Element::Lr,
    "rutherfordium" => Element::Rf,
    "dubnium" => Element::Db,
    "seaborgium" => Element::Sg,
    "bohrium" => Element::Bh,
    "hassium" => Element::Hs,
    "meitnerium" => Element::Mt,
    "darmstadtium" => Element::Ds,
    "roentgenium" => Element::Rg,
    "copernicium" => Element::Cn,
    "nihonium" => Element::Nh,
    "flerovium" => Element::Fl,
    "moscovium" => Element::Mc,
    "livermorium" => Element::Lv,
    "tennessine" => Element::Ts,
    "oganesson" => Element::Og,
    "aluminum" => Element::Al,
    "sulphur" => Element::S,
    "cesium" => Element::Cs,
};

impl Element {
    /// Every known element, in atomic-number order.
    #[rustfmt::skip]
    pub const ALL: [Element; 118] = [
        Element::H, Element::He, Element::Li, Element::Be, Element::B, Element::C, Element::N, Element::O,
        Element::F, Element::Ne, Element::Na, Element::Mg, Element::Al, Element::Si, Element::P, Element::S,
        Element::Cl, Element::Ar, Element::K, Element::Ca, Element::Sc, Element::Ti, Element::V, Element::Cr,
        Element::Mn, Element::Fe, Element::Co, Element::Ni, Element::Cu, Element::Zn, Element::Ga, Element::Ge,
        Element::As, Element::Se, Element::Br, Element::Kr, Element::Rb, Element::Sr, Element::Y, Element::Zr,
        Element::Nb, Element::Mo, Element::Tc, Element::Ru, Element::Rh, Element::Pd, Element::Ag, Element::Cd,
        Element::In, Element::Sn, Element::Sb, Element::Te, Element::I, Element::Xe, Element::Cs, Element::Ba,
        Element::La, Element::Ce, Element::Pr, Element::Nd, Element::Pm, Element::Sm, Element::Eu, Element::Gd,
        Element::Tb, Element::Dy, Element::Ho, Element::Er, Element::Tm, Element::Yb, Element::Lu, Element::Hf,
        Element::Ta, Element::W, Element::Re, Element::Os, Element::Ir, Element::Pt, Element::Au, Element::Hg,
        Element::Tl, Element::Pb, Element::Bi, Element::Po, Element::At, Element::Rn, Element::Fr, Element::Ra,
        Element::Ac, Element::Th, Element::Pa, Element::U, Element::Np, Element::Pu, Element::Am, Element::Cm,
        Element::Bk, Element::Cf, Element::Es, Element::Fm, Element::Md, Element::No, Element::Lr, Element::Rf,
        Element::Db, Element::Sg, Element::Bh, Element::Hs, Element::Mt, Element::Ds, Element::Rg, Element::Cn,
        Element::Nh, Element::Fl, Element::Mc, Element::Lv, Element::Ts, Element::Og,
    ];

    fn data(self) -> &'static ElementData {
        &DATA[self as usize]
    }

    /// Gets the canonical symbol, e.g. `"He"`.
    pub fn symbol(self) -> &'static str {
        self.data().symbol
    }

    /// Gets the full IUPAC name in lower case, e.g. `"helium"`.
    pub fn name(self) -> &'static str {
        self.data().name
    }

    /// Gets the atomic number, e.g. 6 for carbon.
    pub fn atomic_number(self) -> u8 {
        self as u8 + 1
    }

    /// Gets the IUPAC group number.
    ///
    /// Elements that sit in no group (the inner lanthanoids and actinoids)
    /// return NaN.
    pub fn group(self) -> f64 {
        self.data().group
    }

    /// Gets the period, i.e. the row of the periodic table the element resides in.
    pub fn period(self) -> u8 {
        self.data().period
    }

    /// Gets the average atomic mass in Dalton.
    ///
    /// For the heaviest elements, where no meaningful natural abundance exists,
    /// this is the mass of the most stable known isotope.
    pub fn mass(self) -> f64 {
        self.data().mass
    }

    /// Gets the covalent radius in picometre, or NaN if unknown.
    pub fn covalent_radius(self) -> f64 {
        self.data().covalent_radius
    }

    /// Gets the experimental van der Waals radius in picometre, or NaN if unknown.
    pub fn van_der_waals_radius(self) -> f64 {
        self.data().vdw_radius
    }

    /// Gets the Pauling electronegativity, or NaN if unknown.
    pub fn electronegativity(self) -> f64 {
        self.data().electronegativity
    }

    /// Gets the chemical classification of the element.
    pub fn category(self) -> ElementCategory {
        self.data().category
    }

    /// Gets how the element occurs in nature.
    pub fn occurrence(self) -> NaturalOccurrence {
        self.data().occurrence
    }

    /// Gets all known isotopes of this element, in mass-number order.
    pub fn isotopes(self) -> Vec<Isotope> {
        Isotope::of_element(self)
    }

    /// Gets the element with the given atomic number, if one is known.
    pub fn from_atomic_number(atomic_number: u8) -> Option<Element> {
        let index = atomic_number.checked_sub(1)? as usize;
        Self::ALL.get(index).copied()
    }

    /// Looks an element up by its symbol, e.g. `"Co"`.
    ///
    /// Symbol matching is exact-case: `"co"` is not a symbol, and treating it
    /// as one would make name resolution ambiguous against full names.
    pub fn from_symbol(symbol: &str) -> Option<Element> {
        BY_SYMBOL.get(symbol).copied()
    }

    /// Looks an element up by its full name, e.g. `"cobalt"`.
    ///
    /// Full-name matching is case-insensitive and accepts the alternative
    /// spellings `"aluminum"`, `"sulphur"` and `"cesium"`.
    pub fn from_name(name: &str) -> Option<Element> {
        BY_NAME.get(name.to_ascii_lowercase().as_str()).copied()
    }

    /// Iterates over all known elements in atomic-number order.
    pub fn iter() -> impl Iterator<Item = Element> {
        Self::ALL.into_iter()
    }

    /// Gets all elements of the given category, in atomic-number order.
    pub fn of_category(category: ElementCategory) -> Vec<Element> {
        Self::iter().filter(|e| e.category() == category).collect()
    }

    /// Gets all elements with the given natural occurrence, in atomic-number order.
    pub fn of_occurrence(occurrence: NaturalOccurrence) -> Vec<Element> {
        Self::iter().filter(|e| e.occurrence() == occurrence).collect()
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atomic_numbers_are_contiguous_from_one() {
        assert_eq!(Element::H.atomic_number(), 1);
        assert_eq!(Element::C.atomic_number(), 6);
        assert_eq!(Element::Og.atomic_number(), 118);
        for (index, element) in Element::iter().enumerate() {
            assert_eq!(element.atomic_number() as usize, index + 1);
        }
    }

    #[test]
    fn from_atomic_number_roundtrips() {
        for element in Element::iter() {
            assert_eq!(Element::from_atomic_number(element.atomic_number()), Some(element));
        }
        assert_eq!(Element::from_atomic_number(0), None);
        assert_eq!(Element::from_atomic_number(119), None);
    }

    #[test]
    fn symbol_lookup_is_exact_case() {
        assert_eq!(Element::from_symbol("H"), Some(Element::H));
        assert_eq!(Element::from_symbol("He"), Some(Element::He));
        assert_eq!(Element::from_symbol("h"), None);
        assert_eq!(Element::from_symbol("HE"), None);
        assert_eq!(Element::from_symbol("Xx"), None);
    }

    #[test]
    fn name_lookup_is_case_insensitive() {
        assert_eq!(Element::from_name("hydrogen"), Some(Element::H));
        assert_eq!(Element::from_name("Hydrogen"), Some(Element::H));
        assert_eq!(Element::from_name("TUNGSTEN"), Some(Element::W));
        assert_eq!(Element::from_name("unobtainium"), None);
    }

    #[test]
    fn name_lookup_accepts_alternative_spellings() {
        assert_eq!(Element::from_name("aluminum"), Some(Element::Al));
        assert_eq!(Element::from_name("aluminium"), Some(Element::Al));
        assert_eq!(Element::from_name("Sulphur"), Some(Element::S));
        assert_eq!(Element::from_name("cesium"), Some(Element::Cs));
        assert_eq!(Element::from_name("caesium"), Some(Element::Cs));
    }

    #[test]
    fn reference_data_matches_known_values() {
        assert_eq!(Element::H.mass(), 1.00794);
        assert_eq!(Element::O.mass(), 15.9994);
        assert_eq!(Element::Fe.period(), 4);
        assert_eq!(Element::Na.group(), 1.0);
        assert!(Element::Ce.group().is_nan());
        assert_eq!(Element::He.category(), ElementCategory::NobleGas);
        assert_eq!(Element::Tc.occurrence(), NaturalOccurrence::FromDecay);
        assert_eq!(Element::Og.occurrence(), NaturalOccurrence::Synthetic);
    }

    #[test]
    fn categories_classify_as_expected() {
        assert!(ElementCategory::AlkaliMetal.is_metal());
        assert!(ElementCategory::Lanthanoid.is_metal());
        assert!(ElementCategory::Metalloid.is_metalloid());
        assert!(ElementCategory::NobleGas.is_nonmetal());
        assert!(ElementCategory::Unknown.is_unknown());
        assert!(!ElementCategory::NobleGas.is_metal());
    }

    #[test]
    fn category_and_occurrence_filters_are_consistent() {
        let noble = Element::of_category(ElementCategory::NobleGas);
        assert_eq!(
            noble,
            vec![Element::He, Element::Ne, Element::Ar, Element::Kr, Element::Xe, Element::Rn, Element::Og]
        );
        let synthetic = Element::of_occurrence(NaturalOccurrence::Synthetic);
        assert!(synthetic.contains(&Element::Ts));
        assert!(!synthetic.contains(&Element::H));
    }

    #[test]
    fn display_uses_the_symbol() {
        assert_eq!(Element::W.to_string(), "W");
        assert_eq!(format!("{}", Element::He), "He");
    }
}
