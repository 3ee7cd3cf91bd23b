//! Number value type
//!
//! Integers and floats share one type so that pronunciation and extraction
//! can report which kind they saw.

use std::fmt;

/// A parsed or to-be-pronounced number
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Whole number (i128 covers everything below 10^24)
    Int(i128),
    /// Number with a fractional part
    Float(f64),
}

impl Number {
    /// Build from a float, collapsing integral values into `Int`
    pub fn from_f64(value: f64) -> Self {
        if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e30 {
            Number::Int(value as i128)
        } else {
            Number::Float(value)
        }
    }

    pub fn is_negative(&self) -> bool {
        match *self {
            Number::Int(n) => n < 0,
            Number::Float(f) => f < 0.0,
        }
    }

    pub fn is_zero(&self) -> bool {
        match *self {
            Number::Int(n) => n == 0,
            Number::Float(f) => f == 0.0,
        }
    }

    pub fn abs(&self) -> Self {
        match *self {
            Number::Int(n) => Number::Int(n.abs()),
            Number::Float(f) => Number::Float(f.abs()),
        }
    }

    /// True when the value has no fractional part
    pub fn is_integral(&self) -> bool {
        match *self {
            Number::Int(_) => true,
            Number::Float(f) => f.is_finite() && f.fract() == 0.0,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{}", n),
            Number::Float(v) => write!(f, "{}", v),
        }
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Number {
                fn from(value: $t) -> Self {
                    Number::Int(value as i128)
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64, usize);

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(value as f64)
    }
}
