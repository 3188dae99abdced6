//! Rejection of text that has no place in an arithmetic formula
//!
//! Formulas are free text from the persistence layer. Statement separators,
//! quotes, braces and SQL keywords are refused before any substitution runs.

use crate::FormulaError;
use regex::Regex;
use std::sync::LazyLock;

const FORBIDDEN_CHARS: &[char] = &[';', '\'', '"', '`', '{', '}'];

static SQL_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(select|insert|update|delete|drop|truncate|alter|create|union|exec|execute|grant|revoke|merge)\b",
    )
    .expect("SQL keyword pattern is valid")
});

const ALLOWED_AFTER_SUBSTITUTION: &str = "0123456789.()+-*/";

/// Reject empty formulas and formulas containing forbidden tokens
pub(crate) fn check_forbidden(formula: &str) -> Result<(), FormulaError> {
    if formula.trim().is_empty() {
        return Err(FormulaError::Empty);
    }

    if let Some(c) = formula.chars().find(|c| FORBIDDEN_CHARS.contains(c)) {
        return Err(FormulaError::ForbiddenToken(c.to_string()));
    }

    if let Some(m) = SQL_KEYWORD.find(formula) {
        return Err(FormulaError::ForbiddenToken(m.as_str().to_string()));
    }

    Ok(())
}

/// Ensure only numeric and operator characters survived substitution
pub(crate) fn check_charset(expression: &str) -> Result<(), FormulaError> {
    for c in expression.chars() {
        if c.is_whitespace() || ALLOWED_AFTER_SUBSTITUTION.contains(c) {
            continue;
        }
        if c.is_alphabetic() {
            return Err(FormulaError::UnboundVariable(c.to_string()));
        }
        return Err(FormulaError::DisallowedCharacter(c));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_formula() {
        assert_eq!(check_forbidden("   "), Err(FormulaError::Empty));
    }

    #[test]
    fn test_statement_separator() {
        assert_eq!(
            check_forbidden("A; B"),
            Err(FormulaError::ForbiddenToken(";".to_string()))
        );
    }

    #[test]
    fn test_quotes_and_braces() {
        assert!(check_forbidden("'A'").is_err());
        assert!(check_forbidden("\"A\"").is_err());
        assert!(check_forbidden("{A}").is_err());
    }

    #[test]
    fn test_sql_keyword_any_case() {
        assert_eq!(
            check_forbidden("A + Drop"),
            Err(FormulaError::ForbiddenToken("Drop".to_string()))
        );
        assert!(check_forbidden("select * A").is_err());
    }

    #[test]
    fn test_keyword_inside_symbol_is_allowed() {
        // whole-word match only
        assert!(check_forbidden("DROPS + A").is_ok());
        assert!(check_forbidden("(A/B)*100").is_ok());
    }

    #[test]
    fn test_charset_rejects_leftovers() {
        assert!(check_charset("(10/2)*100").is_ok());
        assert_eq!(check_charset("10 % 2"), Err(FormulaError::DisallowedCharacter('%')));
        assert_eq!(
            check_charset("10 + x"),
            Err(FormulaError::UnboundVariable("x".to_string()))
        );
    }
}
