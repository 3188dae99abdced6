//! Symbol substitution
//!
//! Identifiers are read as whole runs of letters, digits and underscores
//! starting with a letter or underscore, and each run is looked up as a
//! unit. `A` therefore never matches inside `AB`, and a longer symbol is
//! never clipped by a shorter symbol that is its prefix, whatever order the
//! bindings arrive in.
//!
//! A symbol must stand apart from number literals: `2A` or `A.B` would
//! otherwise splice values into a different number, so they are rejected.

use crate::FormulaError;
use qualimetry_domain::VariableBinding;
use std::collections::HashMap;

/// Build the symbol table, rejecting duplicate and non-finite bindings
pub(crate) fn binding_table(
    variables: &[VariableBinding],
) -> Result<HashMap<&str, f64>, FormulaError> {
    let mut table = HashMap::with_capacity(variables.len());
    for binding in variables {
        if !binding.value.is_finite() {
            return Err(FormulaError::NonFiniteVariable(binding.symbol.clone()));
        }
        if table.insert(binding.symbol.as_str(), binding.value).is_some() {
            return Err(FormulaError::DuplicateVariable(binding.symbol.clone()));
        }
    }
    Ok(table)
}

/// Replace every bound symbol in `formula` with its numeric literal
pub(crate) fn substitute(
    formula: &str,
    table: &HashMap<&str, f64>,
) -> Result<String, FormulaError> {
    let mut out = String::with_capacity(formula.len() * 2);
    let mut chars = formula.char_indices().peekable();

    let mut previous = None;

    while let Some((start, c)) = chars.next() {
        if !(c.is_alphabetic() || c == '_') {
            out.push(c);
            previous = Some(c);
            continue;
        }
        if matches!(previous, Some(p) if p.is_ascii_digit() || p == '.') {
            return Err(FormulaError::UnexpectedToken { found: c, position: start });
        }

        let mut end = start + c.len_utf8();
        while let Some(&(i, next)) = chars.peek() {
            if next.is_alphanumeric() || next == '_' {
                end = i + next.len_utf8();
                chars.next();
            } else {
                break;
            }
        }

        if let Some(&(i, '.')) = chars.peek() {
            return Err(FormulaError::UnexpectedToken { found: '.', position: i });
        }

        let symbol = &formula[start..end];
        let value = table
            .get(symbol)
            .ok_or_else(|| FormulaError::UnboundVariable(symbol.to_string()))?;
        out.push_str(&literal(*value));
    }

    Ok(out)
}

/// Negative values are parenthesized so `A*B` with `B = -2` stays well formed
fn literal(value: f64) -> String {
    if value < 0.0 {
        format!("({})", value)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, f64)]) -> Vec<VariableBinding> {
        pairs.iter().map(|(s, v)| VariableBinding::new(*s, *v)).collect()
    }

    #[test]
    fn test_whole_token_matching() {
        let v = vars(&[("a", 1.0), ("ab", 10.0), ("abc", 100.0)]);
        let table = binding_table(&v).unwrap();
        assert_eq!(substitute("abc + ab + a", &table).unwrap(), "100 + 10 + 1");
    }

    #[test]
    fn test_order_of_bindings_is_irrelevant() {
        let v = vars(&[("abc", 100.0), ("a", 1.0), ("ab", 10.0)]);
        let table = binding_table(&v).unwrap();
        assert_eq!(substitute("a+abc", &table).unwrap(), "1+100");
    }

    #[test]
    fn test_case_sensitive() {
        let v = vars(&[("A", 2.0)]);
        let table = binding_table(&v).unwrap();
        assert_eq!(
            substitute("a", &table),
            Err(FormulaError::UnboundVariable("a".to_string()))
        );
    }

    #[test]
    fn test_unbound_longer_symbol() {
        let v = vars(&[("A", 2.0), ("B", 3.0)]);
        let table = binding_table(&v).unwrap();
        assert_eq!(
            substitute("AB", &table),
            Err(FormulaError::UnboundVariable("AB".to_string()))
        );
    }

    #[test]
    fn test_negative_values_are_parenthesized() {
        let v = vars(&[("A", 3.0), ("B", -2.5)]);
        let table = binding_table(&v).unwrap();
        assert_eq!(substitute("A*B", &table).unwrap(), "3*(-2.5)");
    }

    #[test]
    fn test_symbols_with_digits_and_underscores() {
        let v = vars(&[("T_1", 4.0), ("T2", 6.0)]);
        let table = binding_table(&v).unwrap();
        assert_eq!(substitute("T_1+T2", &table).unwrap(), "4+6");
    }

    #[test]
    fn test_symbol_after_number_is_rejected() {
        let v = vars(&[("A", 3.0), ("B", 5.0)]);
        let table = binding_table(&v).unwrap();
        assert_eq!(
            substitute("2A", &table),
            Err(FormulaError::UnexpectedToken { found: 'A', position: 1 })
        );
        assert_eq!(
            substitute("1.A", &table),
            Err(FormulaError::UnexpectedToken { found: 'A', position: 2 })
        );
    }

    #[test]
    fn test_symbol_before_dot_is_rejected() {
        let v = vars(&[("A", 3.0), ("B", 5.0)]);
        let table = binding_table(&v).unwrap();
        assert_eq!(
            substitute("A.B", &table),
            Err(FormulaError::UnexpectedToken { found: '.', position: 1 })
        );
    }

    #[test]
    fn test_separated_symbols_still_substitute() {
        let v = vars(&[("A", 3.0), ("B", 5.0)]);
        let table = binding_table(&v).unwrap();
        assert_eq!(substitute("2 * A + B", &table).unwrap(), "2 * 3 + 5");
        assert_eq!(substitute("(A)(B)", &table).unwrap(), "(3)(5)");
    }

    #[test]
    fn test_duplicate_binding() {
        let v = vars(&[("A", 1.0), ("A", 2.0)]);
        assert_eq!(
            binding_table(&v),
            Err(FormulaError::DuplicateVariable("A".to_string()))
        );
    }

    #[test]
    fn test_non_finite_binding() {
        let v = vars(&[("A", f64::NAN)]);
        assert_eq!(
            binding_table(&v),
            Err(FormulaError::NonFiniteVariable("A".to_string()))
        );
    }
}
