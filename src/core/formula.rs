use std::collections::HashMap;

use tracing::warn;

use super::element::Element;
use super::nuclide::Nuclide;

/// Parses a chemical formula string into nuclide multiplicities.
///
/// The scan runs left to right. At each non-digit position the longest element
/// symbol is matched first (two letters before one), then the digit run that
/// immediately follows is consumed as the multiplicity; a missing run, or the
/// literal run `"0"`, counts as 1. Counts accumulate, so an element appearing
/// in two disjoint places sums rather than overwrites.
///
/// Formulas come from an external service and are trusted but not exhaustively
/// validated: digit runs that follow no symbol and unrecognized characters are
/// skipped rather than rejected. A formula without any recognizable symbol
/// therefore parses to an empty map.
///
/// ```
/// use chemistry::core::element::Element;
/// use chemistry::core::formula::parse_formula;
/// use chemistry::core::nuclide::Nuclide;
///
/// let water = parse_formula("H2O");
/// assert_eq!(water[&Nuclide::Element(Element::H)], 2);
/// assert_eq!(water[&Nuclide::Element(Element::O)], 1);
/// ```
pub fn parse_formula(formula: &str) -> HashMap<Nuclide, u32> {
    let mut composition = HashMap::new();
    let bytes = formula.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        // A digit here follows no symbol; it cannot start a token.
        if bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }

        let matched = [2, 1].into_iter().find_map(|width| {
            formula
                .get(i..i + width)
                .and_then(Element::from_symbol)
                .map(|element| (element, width))
        });

        let Some((element, width)) = matched else {
            match formula[i..].chars().next() {
                Some(c) => {
                    warn!(formula, position = i, "skipping unrecognized formula character {c:?}");
                    i += c.len_utf8();
                }
                None => break,
            }
            continue;
        };

        i += width;
        let digits_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        let count = formula[digits_start..i]
            .parse::<u32>()
            .ok()
            .filter(|&n| n > 0)
            .unwrap_or(1);

        *composition.entry(Nuclide::Element(element)).or_insert(0) += count;
    }

    composition
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(composition: &HashMap<Nuclide, u32>, element: Element) -> u32 {
        composition
            .get(&Nuclide::Element(element))
            .copied()
            .unwrap_or(0)
    }

    #[test]
    fn parses_simple_formulas() {
        let water = parse_formula("H2O");
        assert_eq!(water.len(), 2);
        assert_eq!(count(&water, Element::H), 2);
        assert_eq!(count(&water, Element::O), 1);

        let methane = parse_formula("CH4");
        assert_eq!(methane.len(), 2);
        assert_eq!(count(&methane, Element::C), 1);
        assert_eq!(count(&methane, Element::H), 4);
    }

    #[test]
    fn two_letter_symbols_win_over_one_letter_prefixes() {
        let cobalt = parse_formula("Co");
        assert_eq!(cobalt.len(), 1);
        assert_eq!(count(&cobalt, Element::Co), 1);

        // Upper-case "CO" has no two-letter match and falls back to C + O.
        let carbon_monoxide = parse_formula("CO");
        assert_eq!(carbon_monoxide.len(), 2);
        assert_eq!(count(&carbon_monoxide, Element::C), 1);
        assert_eq!(count(&carbon_monoxide, Element::O), 1);

        let cobalt_chloride = parse_formula("CoCl2");
        assert_eq!(count(&cobalt_chloride, Element::Co), 1);
        assert_eq!(count(&cobalt_chloride, Element::Cl), 2);
    }

    #[test]
    fn repeated_elements_accumulate() {
        // Acetic acid: C appears twice, H in two disjoint runs.
        let acetic_acid = parse_formula("CH3COOH");
        assert_eq!(count(&acetic_acid, Element::C), 2);
        assert_eq!(count(&acetic_acid, Element::H), 4);
        assert_eq!(count(&acetic_acid, Element::O), 2);
    }

    #[test]
    fn multi_digit_counts_are_consumed_greedily() {
        let composition = parse_formula("C60H120");
        assert_eq!(count(&composition, Element::C), 60);
        assert_eq!(count(&composition, Element::H), 120);
    }

    #[test]
    fn zero_count_is_treated_as_one() {
        let composition = parse_formula("H0O");
        assert_eq!(count(&composition, Element::H), 1);
        assert_eq!(count(&composition, Element::O), 1);
    }

    #[test]
    fn orphan_digits_and_unknown_characters_are_skipped() {
        let hydrate = parse_formula("2(H2O)");
        assert_eq!(hydrate.len(), 2);
        assert_eq!(count(&hydrate, Element::H), 2);
        assert_eq!(count(&hydrate, Element::O), 1);

        let charged = parse_formula("H3O+");
        assert_eq!(count(&charged, Element::H), 3);
        assert_eq!(count(&charged, Element::O), 1);

        assert!(parse_formula("??*!").is_empty());
        assert!(parse_formula("").is_empty());
    }

    #[test]
    fn non_ascii_input_is_skipped_without_panicking() {
        let composition = parse_formula("H₂O");
        // The subscript two is not an ASCII digit; both H and O still count once.
        assert_eq!(count(&composition, Element::H), 1);
        assert_eq!(count(&composition, Element::O), 1);
    }

    #[test]
    fn lower_case_letters_are_not_symbols() {
        assert!(parse_formula("h2o").is_empty());
    }
}
