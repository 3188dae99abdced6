//! Parsed threshold strings

use crate::ThresholdError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

static THRESHOLD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?ix)
        ^
        (?P<op> >= | <= | > | < | = )?
        \s*
        (?:
            (?P<num> [-+]? (?: \d+ (?: \. \d* )? | \. \d+ ) )
            \s* / \s*
            (?P<den> [-+]? (?: \d+ (?: \. \d* )? | \. \d+ ) )
          |
            (?P<val> [-+]? (?: \d+ (?: \. \d* )? | \. \d+ ) )
        )
        \s*
        (?P<unit> min | seg | % )?
        $",
    )
    .expect("threshold pattern is valid")
});

/// Comparison operator leading a threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    /// `>=`
    GreaterOrEqual,
    /// `<=`
    LessOrEqual,
    /// `>`
    Greater,
    /// `<`
    Less,
    /// `=`
    Equal,
}

impl Comparison {
    /// Operator as written in a threshold
    pub fn symbol(&self) -> &'static str {
        match self {
            Comparison::GreaterOrEqual => ">=",
            Comparison::LessOrEqual => "<=",
            Comparison::Greater => ">",
            Comparison::Less => "<",
            Comparison::Equal => "=",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            ">=" => Some(Comparison::GreaterOrEqual),
            "<=" => Some(Comparison::LessOrEqual),
            ">" => Some(Comparison::Greater),
            "<" => Some(Comparison::Less),
            "=" => Some(Comparison::Equal),
            _ => None,
        }
    }
}

/// Unit suffix of a threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    /// `min`
    Minutes,
    /// `seg`
    Seconds,
    /// `%`
    Percent,
}

impl Unit {
    /// Unit as written in a threshold
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Minutes => "min",
            Unit::Seconds => "seg",
            Unit::Percent => "%",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "min" => Some(Unit::Minutes),
            "seg" => Some(Unit::Seconds),
            "%" => Some(Unit::Percent),
            _ => None,
        }
    }
}

/// One parsed threshold string
///
/// For a ratio `N/M`, `value` is `N / M` and `numerator`/`denominator` keep
/// the parts. For a plain number, `value` is the number itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdSpec {
    /// Leading comparison operator
    pub operator: Option<Comparison>,

    /// Numeric value of the threshold
    pub value: f64,

    /// Ratio numerator
    pub numerator: Option<f64>,

    /// Ratio denominator
    pub denominator: Option<f64>,

    /// Trailing unit
    pub unit: Option<Unit>,
}

impl ThresholdSpec {
    /// Parse a threshold string
    ///
    /// ```
    /// use qualimetry_threshold::{Comparison, ThresholdSpec, Unit};
    ///
    /// let spec = ThresholdSpec::parse(">= 10 / 20 min").unwrap();
    /// assert_eq!(spec.operator, Some(Comparison::GreaterOrEqual));
    /// assert_eq!(spec.numerator, Some(10.0));
    /// assert_eq!(spec.value, 0.5);
    /// assert_eq!(spec.unit, Some(Unit::Minutes));
    /// ```
    pub fn parse(input: &str) -> Result<Self, ThresholdError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ThresholdError::Empty);
        }

        let caps = THRESHOLD
            .captures(trimmed)
            .ok_or_else(|| ThresholdError::Malformed(trimmed.to_string()))?;

        let number = |name: &str| -> Result<Option<f64>, ThresholdError> {
            caps.name(name)
                .map(|m| {
                    m.as_str()
                        .parse::<f64>()
                        .map_err(|_| ThresholdError::Malformed(trimmed.to_string()))
                })
                .transpose()
        };

        let operator = caps.name("op").and_then(|m| Comparison::parse(m.as_str()));
        let unit = caps.name("unit").and_then(|m| Unit::parse(m.as_str()));
        let numerator = number("num")?;
        let denominator = number("den")?;

        let value = match (numerator, denominator) {
            (Some(n), Some(d)) => {
                if d == 0.0 {
                    return Err(ThresholdError::ZeroDenominator(trimmed.to_string()));
                }
                n / d
            }
            _ => number("val")?.ok_or_else(|| ThresholdError::Malformed(trimmed.to_string()))?,
        };

        Ok(Self {
            operator,
            value,
            numerator,
            denominator,
            unit,
        })
    }

    /// Whether the threshold is written as a ratio
    pub fn is_ratio(&self) -> bool {
        self.numerator.is_some()
    }

    /// Whether the threshold has a comparison operator
    pub fn has_operator(&self) -> bool {
        self.operator.is_some()
    }

    /// Numerator for a ratio, otherwise the plain value
    ///
    /// This is the quantity the scoring formulas compare against.
    pub fn magnitude(&self) -> f64 {
        self.numerator.unwrap_or(self.value)
    }

    /// Whether the magnitude is exactly zero
    pub fn is_zero(&self) -> bool {
        self.magnitude() == 0.0
    }
}

impl std::str::FromStr for ThresholdSpec {
    type Err = ThresholdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ThresholdSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(op) = self.operator {
            f.write_str(op.symbol())?;
        }
        match (self.numerator, self.denominator) {
            (Some(n), Some(d)) => write!(f, "{}/{}", n, d)?,
            _ => write!(f, "{}", self.value)?,
        }
        if let Some(unit) = self.unit {
            f.write_str(unit.as_str())?;
        }
        Ok(())
    }
}
