use std::{
    fmt::{Display, Formatter},
    ops::{Add, Mul, Sub},
    str::FromStr,
};

use serde::{
    de::{Error, SeqAccess, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};
use thiserror::Error;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

pub const BLACK: Color = Color::new(0, 0, 0);
pub const RED: Color = Color::new(255, 0, 0);
pub const GREEN: Color = Color::new(0, 255, 0);
pub const BLUE: Color = Color::new(0, 0, 255);
pub const WHITE: Color = Color::new(255, 255, 255);

#[derive(Error, Debug, PartialEq)]
pub enum ColorError {
    #[error("Invalid color format: {0}")]
    InvalidFormat(Box<str>),
    #[error("Bias must be in range [0, 1], but was {0}")]
    BiasOutOfRange(f32),
}

impl Color {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    pub const fn from_hexcode(hex: u32) -> Self {
        Self {
            red: (hex >> 16) as u8,
            green: (hex >> 8) as u8,
            blue: hex as u8,
        }
    }

    pub const fn to_hexcode(&self) -> u32 {
        ((self.red as u32) << 16) | ((self.green as u32) << 8) | self.blue as u32
    }

    /// Mixes this color with `other`; `bias` is the weight of `self`.
    pub fn blend(&self, other: &Color, bias: f32) -> Result<Color, ColorError> {
        if !(0.0..=1.0).contains(&bias) {
            return Err(ColorError::BiasOutOfRange(bias));
        }
        let other_bias = 1.0 - bias;
        let mix = |this: u8, other: u8| (this as f32 * bias + other as f32 * other_bias) as u8;
        Ok(Color {
            red: mix(self.red, other.red),
            green: mix(self.green, other.green),
            blue: mix(self.blue, other.blue),
        })
    }
}

impl Add for Color {
    type Output = Color;

    fn add(self, rhs: Self) -> Self::Output {
        Color {
            red: self.red.saturating_add(rhs.red),
            green: self.green.saturating_add(rhs.green),
            blue: self.blue.saturating_add(rhs.blue),
        }
    }
}

impl Sub for Color {
    type Output = Color;

    fn sub(self, rhs: Self) -> Self::Output {
        Color {
            red: self.red.saturating_sub(rhs.red),
            green: self.green.saturating_sub(rhs.green),
            blue: self.blue.saturating_sub(rhs.blue),
        }
    }
}

impl Mul<f32> for Color {
    type Output = Color;

    fn mul(self, coeff: f32) -> Self::Output {
        // `as u8` saturates, so this clamps to [0, 255]
        let scale = |v: u8| (v as f32 * coeff) as u8;
        Color {
            red: scale(self.red),
            green: scale(self.green),
            blue: scale(self.blue),
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:06x}", self.to_hexcode())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix('#')
            .or_else(|| s.strip_prefix("0x"))
            .unwrap_or(s);
        // from_str_radix would accept a leading sign
        if digits.len() != 6 || digits.starts_with(['+', '-']) {
            return Err(ColorError::InvalidFormat(s.into()));
        }
        let hex = u32::from_str_radix(digits, 16)
            .map_err(|_| ColorError::InvalidFormat(s.into()))?;
        Ok(Color::from_hexcode(hex))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

struct ColorVisitor;

impl<'de> Visitor<'de> for ColorVisitor {
    type Value = Color;

    fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
        formatter.write_str("a hex color string, a 24 bit integer or a list of [r, g, b]")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Color::from_str(v).map_err(|error| E::custom(format!("Cannot parse {v} as color: {error}")))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: Error,
    {
        if v > 0xffffff {
            return Err(E::custom(format!("Hex code {v:#x} exceeds 24 bits")));
        }
        Ok(Color::from_hexcode(v as u32))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: Error,
    {
        let v = u64::try_from(v).map_err(|_| E::custom(format!("Negative hex code {v}")))?;
        self.visit_u64(v)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut channel = |idx: usize| -> Result<u8, A::Error> {
            seq.next_element()?
                .ok_or_else(|| A::Error::invalid_length(idx, &self))
        };
        let color = Color {
            red: channel(0)?,
            green: channel(1)?,
            blue: channel(2)?,
        };
        if seq.next_element::<u8>()?.is_some() {
            return Err(A::Error::invalid_length(4, &self));
        }
        Ok(color)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ColorVisitor)
    }
}
