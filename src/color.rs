use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use winnow::prelude::*;
use winnow::ascii::{dec_uint, float, space0};
use winnow::token::take_while;

/// A CSS color as understood by vis-network: `#rgb`, `#rrggbb`, `rgb(..)` or `rgba(..)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Color {
    Rgb(u8, u8, u8),
    Rgba(u8, u8, u8, f64),
}

impl Color {
    pub const fn hex(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb(r, g, b)
    }
}

pub fn parse_color(input: &str) -> Result<Color, String> {
    let mut rest = input.trim();
    match color(&mut rest) {
        Ok(c) if rest.is_empty() => Ok(c),
        _ => Err(format!("unrecognized color `{input}`")),
    }
}

fn color(input: &mut &str) -> winnow::Result<Color> {
    winnow::combinator::alt((hex_color, rgba_color, rgb_color)).parse_next(input)
}

fn hex_color(input: &mut &str) -> winnow::Result<Color> {
    "#".parse_next(input)?;
    let digits = take_while(3..=6, |c: char| c.is_ascii_hexdigit()).parse_next(input)?;
    let channels: Vec<u8> = match digits.len() {
        3 => digits
            .chars()
            .filter_map(|c| c.to_digit(16))
            .map(|d| (d * 17) as u8)
            .collect(),
        6 => (0..3)
            .filter_map(|i| u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16).ok())
            .collect(),
        _ => Vec::new(),
    };
    if channels.len() != 3 {
        return Err(winnow::error::ParserError::from_input(input));
    }
    Ok(Color::Rgb(channels[0], channels[1], channels[2]))
}

fn rgb_color(input: &mut &str) -> winnow::Result<Color> {
    "rgb(".parse_next(input)?;
    space0.parse_next(input)?;
    let r = channel.parse_next(input)?;
    comma.parse_next(input)?;
    let g = channel.parse_next(input)?;
    comma.parse_next(input)?;
    let b = channel.parse_next(input)?;
    space0.parse_next(input)?;
    ")".parse_next(input)?;
    Ok(Color::Rgb(r, g, b))
}

fn rgba_color(input: &mut &str) -> winnow::Result<Color> {
    "rgba(".parse_next(input)?;
    space0.parse_next(input)?;
    let r = channel.parse_next(input)?;
    comma.parse_next(input)?;
    let g = channel.parse_next(input)?;
    comma.parse_next(input)?;
    let b = channel.parse_next(input)?;
    comma.parse_next(input)?;
    let a = alpha.parse_next(input)?;
    space0.parse_next(input)?;
    ")".parse_next(input)?;
    Ok(Color::Rgba(r, g, b, a))
}

fn channel(input: &mut &str) -> winnow::Result<u8> {
    dec_uint.parse_next(input)
}

fn alpha(input: &mut &str) -> winnow::Result<f64> {
    float
        .verify(|a: &f64| (0.0..=1.0).contains(a))
        .parse_next(input)
}

fn comma(input: &mut &str) -> winnow::Result<()> {
    (space0, ",", space0).void().parse_next(input)
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Color::Rgb(r, g, b) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
            Color::Rgba(r, g, b, a) => write!(f, "rgba({r},{g},{b},{a})"),
        }
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_color(&value)
    }
}

impl From<Color> for String {
    fn from(value: Color) -> Self {
        value.to_string()
    }
}
