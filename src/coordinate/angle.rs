//! Angle unit conversions
//!
//! Stateless conversions between radians, decimal degrees and
//! sexagesimal (degrees, minutes, seconds) angles.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;
use crate::errors::GeoError;

/// Degrees to radians
const DD2R: f64 = PI / 180.0;

/// Seconds this close to 60 are carried into the next minute
const SECONDS_CARRY: f64 = 1e-9;

/// Units in which angles are read or written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleUnit {
    /// Radians
    #[default]
    Radians,
    /// Decimal degrees
    DecimalDegrees,
    /// Degrees, minutes and seconds
    Sexagesimal,
}

impl FromStr for AngleUnit {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "r" | "rad" | "radians" => Ok(AngleUnit::Radians),
            "d" | "deg" | "degrees" => Ok(AngleUnit::DecimalDegrees),
            "h" | "dms" | "sexagesimal" => Ok(AngleUnit::Sexagesimal),
            _ => Err(GeoError::InvalidUnit(s.to_string())),
        }
    }
}

impl fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AngleUnit::Radians => "radians",
            AngleUnit::DecimalDegrees => "decimal degrees",
            AngleUnit::Sexagesimal => "sexagesimal degrees",
        };
        write!(f, "{}", name)
    }
}

/// An angle split into degrees, minutes and seconds
///
/// The sign is kept apart from the components so that angles smaller
/// than one degree keep it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sexagesimal {
    /// Whether the angle is negative
    pub negative: bool,
    /// Whole degrees
    pub degrees: u32,
    /// Whole minutes, [0, 60)
    pub minutes: u32,
    /// Seconds, [0, 60)
    pub seconds: f64,
}

impl Sexagesimal {
    pub fn new(negative: bool, degrees: u32, minutes: u32, seconds: f64) -> Self {
        Sexagesimal { negative, degrees, minutes, seconds }
    }

    /// The angle in radians
    pub fn to_radians(&self) -> f64 {
        let magnitude = (self.seconds / 3600.0 + self.minutes as f64 / 60.0 + self.degrees as f64) * DD2R;
        if self.negative { -magnitude } else { magnitude }
    }

    /// Round the seconds to `decimals` places, carrying a rounded 60″
    /// into the minutes and degrees
    pub fn rounded(&self, decimals: i32) -> Sexagesimal {
        let scale = 10f64.powi(decimals);
        let mut rounded = Sexagesimal {
            seconds: (self.seconds * scale).round() / scale,
            ..*self
        };
        if rounded.seconds >= 60.0 {
            rounded.carry_minute();
        }
        rounded
    }

    fn carry_minute(&mut self) {
        self.seconds = 0.0;
        self.minutes += 1;
        if self.minutes == 60 {
            self.minutes = 0;
            self.degrees += 1;
        }
    }
}

/// Convert radians to decimal degrees
pub fn radians_to_decimal_degrees(radians: f64) -> f64 {
    radians * (180.0 / PI)
}

/// Convert decimal degrees to radians
pub fn decimal_degrees_to_radians(degrees: f64) -> f64 {
    degrees * DD2R
}

/// Split an angle in radians into degrees, minutes and seconds
pub fn radians_to_sexagesimal(radians: f64) -> Sexagesimal {
    let negative = radians < 0.0;
    let decimal = radians_to_decimal_degrees(radians.abs());

    let whole_degrees = decimal.trunc();
    let total_minutes = (decimal - whole_degrees) * 60.0;
    let whole_minutes = total_minutes.trunc();
    let seconds = (total_minutes - whole_minutes) * 60.0;

    let mut angle = Sexagesimal::new(negative, whole_degrees as u32, whole_minutes as u32, seconds);
    if 60.0 - seconds < SECONDS_CARRY {
        angle.carry_minute();
    }
    angle
}

/// Combine degrees, minutes and seconds into radians
///
/// The sign is taken from `degrees`; `minutes` and `seconds` are
/// magnitudes. A negative angle above -1° cannot be expressed here;
/// build a [`Sexagesimal`] with `negative` set instead.
pub fn sexagesimal_to_radians(degrees: i32, minutes: u32, seconds: f64) -> f64 {
    Sexagesimal::new(degrees < 0, degrees.unsigned_abs(), minutes, seconds).to_radians()
}
