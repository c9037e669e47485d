use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use winnow::ascii::digit1;
use winnow::combinator::{alt, opt};
use winnow::prelude::*;

/// Size of the graph container, e.g. `100%`, `750px` or `80vh`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Length {
    pub value: f64,
    pub unit: Unit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Percent,
    Px,
    Em,
    Rem,
    Vh,
    Vw,
}

impl Unit {
    pub fn as_str(self) -> &'static str {
        match self {
            Unit::Percent => "%",
            Unit::Px => "px",
            Unit::Em => "em",
            Unit::Rem => "rem",
            Unit::Vh => "vh",
            Unit::Vw => "vw",
        }
    }
}

impl Length {
    pub const fn percent(value: f64) -> Self {
        Length {
            value,
            unit: Unit::Percent,
        }
    }
}

pub fn parse_length(input: &str) -> Result<Length, String> {
    let mut rest = input.trim();
    match length(&mut rest) {
        Ok(l) if rest.is_empty() => Ok(l),
        _ => Err(format!("unrecognized length `{input}`")),
    }
}

fn length(input: &mut &str) -> winnow::Result<Length> {
    let value = number.parse_next(input)?;
    let unit = unit.parse_next(input)?;
    Ok(Length { value, unit })
}

fn number(input: &mut &str) -> winnow::Result<f64> {
    (digit1, opt((".", digit1)))
        .take()
        .try_map(|s: &str| s.parse::<f64>())
        .parse_next(input)
}

fn unit(input: &mut &str) -> winnow::Result<Unit> {
    alt((
        "%".value(Unit::Percent),
        "px".value(Unit::Px),
        "rem".value(Unit::Rem),
        "em".value(Unit::Em),
        "vh".value(Unit::Vh),
        "vw".value(Unit::Vw),
    ))
    .parse_next(input)
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.as_str())
    }
}

impl FromStr for Length {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_length(s)
    }
}

impl TryFrom<String> for Length {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_length(&value)
    }
}

impl From<Length> for String {
    fn from(value: Length) -> Self {
        value.to_string()
    }
}
