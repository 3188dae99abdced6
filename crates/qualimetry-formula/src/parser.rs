//! Recursive-descent parser and evaluator for substituted expressions

use crate::FormulaError;

/// Parses and evaluates a purely numeric expression in a single pass
pub(crate) struct Parser<'a> {
    input: &'a [u8],
    pos: usize,
    depth: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(expression: &'a str, max_depth: usize) -> Self {
        Self {
            input: expression.as_bytes(),
            pos: 0,
            depth: 0,
            max_depth,
        }
    }

    /// Evaluate the whole input; trailing tokens are an error
    pub(crate) fn evaluate(mut self) -> Result<f64, FormulaError> {
        let value = self.expression()?;
        self.skip_whitespace();
        match self.peek() {
            None => Ok(value),
            Some(b')') => Err(FormulaError::UnbalancedParentheses),
            Some(c) => Err(self.unexpected(c)),
        }
    }

    fn expression(&mut self) -> Result<f64, FormulaError> {
        let mut value = self.term()?;
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some(b'+') => {
                    self.pos += 1;
                    value = finite(value + self.term()?)?;
                }
                Some(b'-') => {
                    self.pos += 1;
                    value = finite(value - self.term()?)?;
                }
                _ => return Ok(value),
            }
        }
    }

    fn term(&mut self) -> Result<f64, FormulaError> {
        let mut value = self.factor()?;
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some(b'*') => {
                    self.pos += 1;
                    value = finite(value * self.factor()?)?;
                }
                Some(b'/') => {
                    self.pos += 1;
                    let divisor = self.factor()?;
                    if divisor == 0.0 {
                        return Err(FormulaError::DivisionByZero);
                    }
                    value = finite(value / divisor)?;
                }
                _ => return Ok(value),
            }
        }
    }

    fn factor(&mut self) -> Result<f64, FormulaError> {
        self.skip_whitespace();
        let Some(c) = self.peek() else {
            return Err(FormulaError::UnexpectedEnd);
        };

        match c {
            b'+' | b'-' => {
                self.pos += 1;
                self.descend()?;
                let operand = self.factor()?;
                self.depth -= 1;
                Ok(if c == b'-' { -operand } else { operand })
            }
            b'(' => {
                self.pos += 1;
                self.descend()?;
                let value = self.expression()?;
                self.skip_whitespace();
                match self.peek() {
                    Some(b')') => self.pos += 1,
                    None => return Err(FormulaError::UnbalancedParentheses),
                    Some(other) => return Err(self.unexpected(other)),
                }
                self.depth -= 1;
                Ok(value)
            }
            b'0'..=b'9' | b'.' => self.number(),
            other => Err(self.unexpected(other)),
        }
    }

    fn number(&mut self) -> Result<f64, FormulaError> {
        let start = self.pos;
        while let Some(b'0'..=b'9' | b'.') = self.peek() {
            self.pos += 1;
        }
        // The slice holds only ASCII digits and dots
        let text = std::str::from_utf8(&self.input[start..self.pos]).unwrap_or_default();
        if text.matches('.').count() > 1 || text == "." {
            return Err(FormulaError::MalformedNumber(text.to_string()));
        }
        text.parse::<f64>()
            .map_err(|_| FormulaError::MalformedNumber(text.to_string()))
    }

    fn descend(&mut self) -> Result<(), FormulaError> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(FormulaError::NestingTooDeep(self.max_depth));
        }
        Ok(())
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_ascii_whitespace() {
                break;
            }
            self.pos += 1;
        }
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn unexpected(&self, c: u8) -> FormulaError {
        FormulaError::UnexpectedToken {
            found: c as char,
            position: self.pos,
        }
    }
}

fn finite(value: f64) -> Result<f64, FormulaError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FormulaError::NonFiniteResult)
    }
}
