use super::FormulaError;
use crate::core::elements::get_by_symbol;
use crate::core::particles::Composition;
use std::iter::Peekable;
use std::str::Chars;

/// Parses a plain formula such as `Al2(SO4)3` or `K3[Fe(CN)6]` into its composition.
///
/// Elements keep the order of their first appearance. Charges are not accepted here; see
/// [`split_ion_string`].
pub fn composition_of(formula: &str) -> Result<Composition, FormulaError> {
    let mut chars = formula.trim().chars().peekable();
    let composition = parse_sequence(formula, &mut chars, None)?;
    if chars.peek().is_some() {
        return Err(invalid(formula, "unbalanced closing bracket"));
    }
    if composition.is_empty() {
        return Err(invalid(formula, "no elements found"));
    }
    Ok(composition)
}

/// Splits `Na(1)` into `("Na", 1)` and `Al(OH)2(1)` into `("Al(OH)2", 1)`.
pub fn split_ion_string(formula: &str) -> Result<(&str, i32), FormulaError> {
    let trimmed = formula.trim();
    let (body, charge) = trimmed
        .strip_suffix(')')
        .and_then(|rest| rest.rsplit_once('('))
        .ok_or_else(|| invalid(formula, "an ion must end with its charge, e.g. 'O(-2)'"))?;
    let charge = charge
        .trim()
        .parse::<i32>()
        .map_err(|_| invalid(formula, "the charge is not an integer"))?;
    if body.is_empty() {
        return Err(invalid(formula, "the ion has no body"));
    }
    Ok((body, charge))
}

fn parse_sequence(
    formula: &str,
    chars: &mut Peekable<Chars<'_>>,
    closing: Option<char>,
) -> Result<Composition, FormulaError> {
    let mut composition = Composition::new();
    while let Some(&c) = chars.peek() {
        match c {
            'A'..='Z' => {
                chars.next();
                let mut symbol = String::from(c);
                while let Some(&l) = chars.peek() {
                    if !l.is_ascii_lowercase() {
                        break;
                    }
                    symbol.push(l);
                    chars.next();
                }
                let element = get_by_symbol(&symbol).map_err(|_| FormulaError::UnknownElement {
                    formula: formula.to_string(),
                    symbol: symbol.clone(),
                })?;
                let count = parse_count(formula, chars)?;
                composition
                    .try_add(element, count)
                    .ok_or_else(|| invalid(formula, "an element count overflows"))?;
            }
            '(' | '[' => {
                chars.next();
                let close = if c == '(' { ')' } else { ']' };
                let inner = parse_sequence(formula, chars, Some(close))?;
                if chars.next() != Some(close) {
                    return Err(invalid(formula, "unclosed bracket"));
                }
                let count = parse_count(formula, chars)?;
                composition = inner
                    .checked_scaled(count)
                    .and_then(|group| composition.checked_merged(&group))
                    .ok_or_else(|| invalid(formula, "an element count overflows"))?;
            }
            ')' | ']' if closing == Some(c) => return Ok(composition),
            _ => {
                return Err(FormulaError::UnexpectedCharacter {
                    formula: formula.to_string(),
                    character: c,
                });
            }
        }
    }
    if closing.is_some() {
        return Err(invalid(formula, "unclosed bracket"));
    }
    Ok(composition)
}

fn parse_count(formula: &str, chars: &mut Peekable<Chars<'_>>) -> Result<u32, FormulaError> {
    let mut digits = String::new();
    while let Some(&d) = chars.peek() {
        if !d.is_ascii_digit() {
            break;
        }
        digits.push(d);
        chars.next();
    }
    if digits.is_empty() {
        return Ok(1);
    }
    match digits.parse::<u32>() {
        Ok(0) | Err(_) => Err(invalid(formula, "counts must be positive integers")),
        Ok(n) => Ok(n),
    }
}

fn invalid(formula: &str, reason: &'static str) -> FormulaError {
    FormulaError::InvalidFormula {
        formula: formula.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(formula: &str) -> Vec<(&'static str, u32)> {
        composition_of(formula)
            .unwrap()
            .iter()
            .map(|(e, c)| (e.symbol(), c))
            .collect()
    }

    #[test]
    fn composition_of_handles_nested_groups_and_multi_digit_counts() {
        assert_eq!(counts("H2O"), vec![("H", 2), ("O", 1)]);
        assert_eq!(counts("Al2(SO4)3"), vec![("Al", 2), ("S", 3), ("O", 12)]);
        assert_eq!(counts("K3[Fe(CN)6]"), vec![("K", 3), ("Fe", 1), ("C", 6), ("N", 6)]);
        assert_eq!(counts("C12H22O11"), vec![("C", 12), ("H", 22), ("O", 11)]);
        assert_eq!(counts("OH"), vec![("O", 1), ("H", 1)]);
    }

    #[test]
    fn composition_of_rejects_malformed_formulas() {
        assert!(matches!(
            composition_of("Xq2"),
            Err(FormulaError::UnknownElement { .. })
        ));
        assert!(matches!(
            composition_of("Na+"),
            Err(FormulaError::UnexpectedCharacter { character: '+', .. })
        ));
        assert!(matches!(
            composition_of("Ca(OH2"),
            Err(FormulaError::InvalidFormula { .. })
        ));
        assert!(matches!(
            composition_of("H0"),
            Err(FormulaError::InvalidFormula { .. })
        ));
        assert!(composition_of("").is_err());
        assert!(composition_of("H2)").is_err());
    }

    #[test]
    fn composition_of_rejects_counts_that_overflow() {
        assert!(matches!(
            composition_of("(H65536)65536"),
            Err(FormulaError::InvalidFormula { .. })
        ));
        assert!(matches!(
            composition_of("H4294967295H"),
            Err(FormulaError::InvalidFormula { .. })
        ));
        assert_eq!(counts("(H65536)2"), vec![("H", 131072)]);
    }

    #[test]
    fn split_ion_string_separates_body_and_charge() {
        assert_eq!(split_ion_string("O(-2)").unwrap(), ("O", -2));
        assert_eq!(split_ion_string("Na(1)").unwrap(), ("Na", 1));
        assert_eq!(split_ion_string("Al(OH)2(1)").unwrap(), ("Al(OH)2", 1));
        assert!(split_ion_string("O").is_err());
        assert!(split_ion_string("O(x)").is_err());
    }
}
