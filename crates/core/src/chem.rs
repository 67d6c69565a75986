//! Chemical formula parsing and molecular weight.
//!
//! The parser handles element symbols, integer counts, and nested
//! parenthesized groups with multipliers, such as `Fe2(SO4)3`.

use std::collections::BTreeMap;

use crate::error::{CalcError, CalcResult};
use crate::units::{convert_linear, MassUnit};

/// Standard atomic weight in g/mol for the elements the parser knows.
pub fn atomic_weight(symbol: &str) -> Option<f64> {
    Some(match symbol {
        "H" => 1.00794,
        "He" => 4.002602,
        "Li" => 6.941,
        "Be" => 9.012182,
        "B" => 10.811,
        "C" => 12.0107,
        "N" => 14.0067,
        "O" => 15.9994,
        "F" => 18.9984032,
        "Ne" => 20.1797,
        "Na" => 22.98976928,
        "Mg" => 24.3050,
        "Al" => 26.9815386,
        "Si" => 28.0855,
        "P" => 30.973762,
        "S" => 32.065,
        "Cl" => 35.453,
        "K" => 39.0983,
        "Ar" => 39.948,
        "Ca" => 40.078,
        "Sc" => 44.955912,
        "Ti" => 47.867,
        "V" => 50.9415,
        "Cr" => 51.9961,
        "Mn" => 54.938045,
        "Fe" => 55.845,
        "Co" => 58.933195,
        "Ni" => 58.6934,
        "Cu" => 63.546,
        "Zn" => 65.38,
        "Ga" => 69.723,
        "Ge" => 72.64,
        "As" => 74.92160,
        "Se" => 78.96,
        "Br" => 79.904,
        "Kr" => 83.798,
        "Rb" => 85.4678,
        "Sr" => 87.62,
        "Y" => 88.90585,
        "Zr" => 91.224,
        "Nb" => 92.90638,
        "Mo" => 95.96,
        "Ru" => 101.07,
        "Rh" => 102.90550,
        "Pd" => 106.42,
        "Ag" => 107.8682,
        "Cd" => 112.411,
        "In" => 114.818,
        "Sn" => 118.710,
        "Sb" => 121.760,
        "Te" => 127.60,
        "I" => 126.90447,
        "Xe" => 131.293,
        "Cs" => 132.9054519,
        "Ba" => 137.327,
        "La" => 138.90547,
        "Ce" => 140.116,
        _ => return None,
    })
}

struct Parser<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(formula: &'a str) -> Self {
        Self {
            bytes: formula.as_bytes(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn parse_group(&mut self) -> CalcResult<BTreeMap<String, u32>> {
        let mut counts = BTreeMap::new();
        while let Some(ch) = self.peek() {
            match ch {
                b'(' => {
                    self.pos += 1;
                    let inner = self.parse_group()?;
                    if self.peek() != Some(b')') {
                        return Err(CalcError::InvalidSyntax("mismatched parentheses".to_string()));
                    }
                    self.pos += 1;
                    let mult = self.read_number()?.unwrap_or(1);
                    for (symbol, count) in inner {
                        let scaled = count
                            .checked_mul(mult)
                            .ok_or_else(|| CalcError::InvalidSyntax("element count overflow".to_string()))?;
                        add_count(&mut counts, symbol, scaled)?;
                    }
                }
                b')' => break,
                _ => {
                    let symbol = self.read_element()?;
                    let qty = self.read_number()?.unwrap_or(1);
                    add_count(&mut counts, symbol, qty)?;
                }
            }
        }
        Ok(counts)
    }

    fn read_element(&mut self) -> CalcResult<String> {
        let first = self.peek().ok_or_else(|| {
            CalcError::InvalidSyntax("unexpected end of formula".to_string())
        })?;
        if !first.is_ascii_uppercase() {
            return Err(CalcError::InvalidSyntax(format!(
                "expected element symbol at position {}",
                self.pos + 1
            )));
        }
        self.pos += 1;
        let mut symbol = String::from(first as char);
        if let Some(next) = self.peek() {
            if next.is_ascii_lowercase() {
                symbol.push(next as char);
                self.pos += 1;
            }
        }
        if atomic_weight(&symbol).is_none() {
            return Err(CalcError::UnknownElement(symbol));
        }
        Ok(symbol)
    }

    fn read_number(&mut self) -> CalcResult<Option<u32>> {
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }
        if self.pos == start {
            return Ok(None);
        }
        let text = std::str::from_utf8(&self.bytes[start..self.pos])
            .map_err(|_| CalcError::InvalidSyntax("invalid quantity".to_string()))?;
        let n: u32 = text
            .parse()
            .map_err(|_| CalcError::InvalidSyntax(format!("quantity too large: {text}")))?;
        if n == 0 {
            return Err(CalcError::InvalidSyntax("zero quantity in formula".to_string()));
        }
        Ok(Some(n))
    }
}

fn add_count(counts: &mut BTreeMap<String, u32>, symbol: String, qty: u32) -> CalcResult<()> {
    let slot = counts.entry(symbol).or_insert(0);
    *slot = slot
        .checked_add(qty)
        .ok_or_else(|| CalcError::InvalidSyntax("element count overflow".to_string()))?;
    Ok(())
}

/// Parse a formula into element counts, such as `H2O` into `{H: 2, O: 1}`.
pub fn parse_formula(formula: &str) -> CalcResult<BTreeMap<String, u32>> {
    let trimmed = formula.trim();
    if trimmed.is_empty() {
        return Err(CalcError::InvalidSyntax("empty formula".to_string()));
    }
    if !trimmed.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'(' || b == b')') {
        return Err(CalcError::InvalidSyntax(format!("invalid characters in formula: {formula}")));
    }
    let mut parser = Parser::new(trimmed);
    let counts = parser.parse_group()?;
    if parser.pos != parser.bytes.len() {
        return Err(CalcError::InvalidSyntax("mismatched parentheses".to_string()));
    }
    if counts.is_empty() {
        return Err(CalcError::InvalidSyntax("empty formula".to_string()));
    }
    Ok(counts)
}

/// Molecular weight of a formula in g/mol.
pub fn molecular_weight(formula: &str) -> CalcResult<f64> {
    let counts = parse_formula(formula)?;
    let mut total = 0.0;
    for (symbol, count) in counts {
        let weight =
            atomic_weight(&symbol).ok_or_else(|| CalcError::UnknownElement(symbol.clone()))?;
        total += weight * f64::from(count);
    }
    Ok(total)
}

/// Moles of a substance given a sample mass.
pub fn moles_from_mass(formula: &str, mass: f64, mass_unit: MassUnit) -> CalcResult<f64> {
    let grams = convert_linear(mass, mass_unit, MassUnit::Gram)?;
    Ok(grams / molecular_weight(formula)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn water() {
        assert_relative_eq!(molecular_weight("H2O").unwrap(), 18.01528, max_relative = 1e-9);
    }

    #[test]
    fn nested_groups_with_multipliers() {
        let counts = parse_formula("Fe2(SO4)3").unwrap();
        assert_eq!(counts["Fe"], 2);
        assert_eq!(counts["S"], 3);
        assert_eq!(counts["O"], 12);
        assert_relative_eq!(molecular_weight("Fe2(SO4)3").unwrap(), 399.8778, max_relative = 1e-4);
    }

    #[test]
    fn deeply_nested() {
        let counts = parse_formula("Ca(C2H3O2)2").unwrap();
        assert_eq!(counts["Ca"], 1);
        assert_eq!(counts["C"], 4);
        assert_eq!(counts["H"], 6);
        assert_eq!(counts["O"], 4);
    }

    #[test]
    fn implicit_one_and_repeated_elements() {
        let counts = parse_formula("CH3COOH").unwrap();
        assert_eq!(counts["C"], 2);
        assert_eq!(counts["H"], 4);
        assert_eq!(counts["O"], 2);
    }

    #[test]
    fn rejects_unknown_elements() {
        assert!(matches!(parse_formula("Xx2"), Err(CalcError::UnknownElement(_))));
    }

    #[test]
    fn rejects_bad_syntax() {
        assert!(parse_formula("").is_err());
        assert!(parse_formula("H2O)").is_err());
        assert!(parse_formula("(H2O").is_err());
        assert!(parse_formula("H2 O").is_err());
        assert!(parse_formula("h2o").is_err());
        assert!(parse_formula("H0").is_err());
    }

    #[test]
    fn overflow_guarded() {
        assert!(parse_formula("H4294967295(H2)2").is_err());
    }

    #[test]
    fn moles_of_water_sample() {
        let moles = moles_from_mass("H2O", 36.03056, MassUnit::Gram).unwrap();
        assert_relative_eq!(moles, 2.0, max_relative = 1e-6);
    }
}
