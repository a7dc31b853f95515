//! Reading points from whitespace-delimited text
//!
//! Each line holds one point, optionally preceded by a name. Empty lines
//! and lines starting with `#` are skipped.
//!
//! Accepted layouts:
//! * cartesian: `[NAME] x y z`
//! * geodetic, radians or decimal degrees: `[NAME] lat lon h`
//! * geodetic, sexagesimal: `[NAME] deg min sec deg min sec h`

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use log::{debug, info, warn};

use crate::coordinate::{AngleUnit, CartesianPoint, GeodeticPoint, Sexagesimal, decimal_degrees_to_radians};
use crate::errors::{GeoError, GeoResult};

/// Open a file for reading, or stdin when no path is given
pub fn open_input(path: Option<&str>) -> GeoResult<Box<dyn BufRead>> {
    match path {
        Some(path) => {
            let file = File::open(path).map_err(|e| {
                GeoError::GenericError(format!("Could not open file {}: {}", path, e))
            })?;
            info!("Reading points from {}", path);
            Ok(Box::new(BufReader::new(file)))
        },
        None => {
            info!("Reading points from stdin");
            Ok(Box::new(BufReader::new(io::stdin())))
        },
    }
}

/// Reader for a stream of point lines
pub struct PointReader<R: BufRead> {
    reader: R,
}

impl<R: BufRead> PointReader<R> {
    pub fn new(reader: R) -> Self {
        PointReader { reader }
    }

    /// Read all cartesian points, skipping malformed lines
    pub fn read_cartesian(self) -> GeoResult<Vec<CartesianPoint>> {
        self.read_with(parse_cartesian_line)
    }

    /// Read all geodetic points in the given angle unit, skipping malformed lines
    ///
    /// Angles of the returned points are in radians.
    pub fn read_geodetic(self, unit: AngleUnit) -> GeoResult<Vec<GeodeticPoint>> {
        self.read_with(|line| parse_geodetic_line(line, unit))
    }

    fn read_with<T, F>(self, parse: F) -> GeoResult<Vec<T>>
    where
        F: Fn(&str) -> GeoResult<Option<T>>,
    {
        let mut points = Vec::new();
        let mut skipped = 0usize;

        for (index, bytes) in self.reader.split(b'\n').enumerate() {
            let bytes = bytes?;
            let parsed = match std::str::from_utf8(&bytes) {
                Ok(line) => parse(line.trim_end_matches('\r')),
                Err(_) => Err(malformed(&String::from_utf8_lossy(&bytes), "not valid UTF-8".to_string())),
            };
            match parsed {
                Ok(Some(point)) => points.push(point),
                Ok(None) => {},
                Err(e) => {
                    warn!("Line {}: {}", index + 1, e);
                    skipped += 1;
                },
            }
        }

        debug!("Read {} points, skipped {} malformed lines", points.len(), skipped);
        Ok(points)
    }
}

/// Parse one line as `[NAME] x y z`
///
/// Returns `Ok(None)` for empty and comment lines.
pub fn parse_cartesian_line(line: &str) -> GeoResult<Option<CartesianPoint>> {
    let tokens = match split_tokens(line) {
        Some(tokens) => tokens,
        None => return Ok(None),
    };

    let (label, values) = split_label(line, &tokens, 3)?;

    let point = CartesianPoint {
        x: parse_number(line, values[0])?,
        y: parse_number(line, values[1])?,
        z: parse_number(line, values[2])?,
        label,
    };

    Ok(Some(point))
}

/// Parse one line as a geodetic point in the given angle unit
///
/// Returns `Ok(None)` for empty and comment lines.
pub fn parse_geodetic_line(line: &str, unit: AngleUnit) -> GeoResult<Option<GeodeticPoint>> {
    let tokens = match split_tokens(line) {
        Some(tokens) => tokens,
        None => return Ok(None),
    };

    let point = match unit {
        AngleUnit::Radians | AngleUnit::DecimalDegrees => {
            let (label, values) = split_label(line, &tokens, 3)?;
            let mut latitude = parse_number(line, values[0])?;
            let mut longitude = parse_number(line, values[1])?;
            if unit == AngleUnit::DecimalDegrees {
                latitude = decimal_degrees_to_radians(latitude);
                longitude = decimal_degrees_to_radians(longitude);
            }
            GeodeticPoint {
                latitude,
                longitude,
                height: parse_number(line, values[2])?,
                label,
            }
        },
        AngleUnit::Sexagesimal => {
            let (label, values) = split_label(line, &tokens, 7)?;
            GeodeticPoint {
                latitude: parse_sexagesimal(line, &values[0..3])?.to_radians(),
                longitude: parse_sexagesimal(line, &values[3..6])?.to_radians(),
                height: parse_number(line, values[6])?,
                label,
            }
        },
    };

    Ok(Some(point))
}

/// Whitespace tokens of a line, or `None` if the line carries no point
fn split_tokens(line: &str) -> Option<Vec<&str>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.first() {
        None => None,
        Some(first) if first.starts_with('#') => None,
        Some(_) => Some(tokens),
    }
}

/// Separate an optional leading name from `count` value tokens
fn split_label<'t>(line: &str, tokens: &[&'t str], count: usize) -> GeoResult<(Option<String>, Vec<&'t str>)> {
    if tokens.len() == count {
        Ok((None, tokens.to_vec()))
    } else if tokens.len() == count + 1 {
        Ok((Some(tokens[0].to_string()), tokens[1..].to_vec()))
    } else {
        Err(malformed(line, format!(
            "expected {} or {} fields, found {}", count, count + 1, tokens.len()
        )))
    }
}

fn parse_number(line: &str, token: &str) -> GeoResult<f64> {
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(malformed(line, format!("invalid number '{}'", token))),
    }
}

/// Parse `deg min sec`; a leading `-` on the degrees makes the angle negative
fn parse_sexagesimal(line: &str, tokens: &[&str]) -> GeoResult<Sexagesimal> {
    let degrees_token = tokens[0];
    let negative = degrees_token.starts_with('-');

    let degrees = degrees_token.parse::<i64>()
        .ok()
        .and_then(|d| u32::try_from(d.unsigned_abs()).ok())
        .ok_or_else(|| malformed(line, format!("invalid degrees '{}'", degrees_token)))?;

    let minutes = tokens[1].parse::<u32>()
        .ok()
        .filter(|m| *m < 60)
        .ok_or_else(|| malformed(line, format!("invalid minutes '{}'", tokens[1])))?;

    let seconds = parse_number(line, tokens[2])?;
    if !(0.0..60.0).contains(&seconds) {
        return Err(malformed(line, format!("invalid seconds '{}'", tokens[2])));
    }

    Ok(Sexagesimal::new(negative, degrees, minutes, seconds))
}

fn malformed(line: &str, reason: String) -> GeoError {
    GeoError::MalformedLine {
        line: line.trim().to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_cartesian_line_with_and_without_label() {
        let point = parse_cartesian_line("4075579.496 931853.192 4801569.002").unwrap().unwrap();
        assert_eq!(point, CartesianPoint::new(4075579.496, 931853.192, 4801569.002));

        let point = parse_cartesian_line("  WTZR 4075579.496\t931853.192 4801569.002 ").unwrap().unwrap();
        assert_eq!(point.label.as_deref(), Some("WTZR"));
        assert_eq!(point.z, 4801569.002);
    }

    #[test]
    fn test_comments_and_blank_lines_are_skipped() {
        assert!(parse_cartesian_line("").unwrap().is_none());
        assert!(parse_cartesian_line("   ").unwrap().is_none());
        assert!(parse_cartesian_line("# x y z").unwrap().is_none());
        assert!(parse_geodetic_line("#comment", AngleUnit::Sexagesimal).unwrap().is_none());
    }

    #[test]
    fn test_malformed_lines() {
        assert!(matches!(parse_cartesian_line("1 2"), Err(GeoError::MalformedLine { .. })));
        assert!(matches!(parse_cartesian_line("a b c d e"), Err(GeoError::MalformedLine { .. })));
        assert!(matches!(parse_cartesian_line("1 two 3"), Err(GeoError::MalformedLine { .. })));
        assert!(matches!(parse_cartesian_line("1 2 NaN"), Err(GeoError::MalformedLine { .. })));
        assert!(matches!(
            parse_geodetic_line("38 61 0 23 0 0 100", AngleUnit::Sexagesimal),
            Err(GeoError::MalformedLine { .. })
        ));
    }

    #[test]
    fn test_geodetic_decimal_degrees() {
        let point = parse_geodetic_line("P1 45.0 -90.0 12.5", AngleUnit::DecimalDegrees).unwrap().unwrap();
        assert_eq!(point.label.as_deref(), Some("P1"));
        assert_abs_diff_eq!(point.latitude, std::f64::consts::FRAC_PI_4, epsilon = 1e-15);
        assert_abs_diff_eq!(point.longitude, -std::f64::consts::FRAC_PI_2, epsilon = 1e-15);
        assert_eq!(point.height, 12.5);

        let point = parse_geodetic_line("0.5 0.25 -3", AngleUnit::Radians).unwrap().unwrap();
        assert_eq!(point, GeodeticPoint::new(0.5, 0.25, -3.0));
    }

    #[test]
    fn test_geodetic_sexagesimal_keeps_negative_zero_degrees() {
        let point = parse_geodetic_line("-0 30 0 -12 15 0 100", AngleUnit::Sexagesimal).unwrap().unwrap();
        assert_abs_diff_eq!(point.latitude, (-0.5_f64).to_radians(), epsilon = 1e-15);
        assert_abs_diff_eq!(point.longitude, (-12.25_f64).to_radians(), epsilon = 1e-15);
        assert_eq!(point.height, 100.0);
        assert!(point.label.is_none());

        let point = parse_geodetic_line("NOA1 38 3 0.0 23 51 50 500.25", AngleUnit::Sexagesimal).unwrap().unwrap();
        assert_eq!(point.label.as_deref(), Some("NOA1"));
        assert_eq!(point.height, 500.25);
    }

    #[test]
    fn test_reader_skips_bad_lines() {
        let input = "# header\nA 1 2 3\n\nbroken line\n4 5 6\n";
        let points = PointReader::new(Cursor::new(input)).read_cartesian().unwrap();

        assert_eq!(points.len(), 2);
        assert_eq!(points[0].label.as_deref(), Some("A"));
        assert_eq!(points[1], CartesianPoint::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_reader_skips_lines_with_invalid_utf8() {
        let input: &[u8] = b"A 1 2 3\nB \xff 1 2\r\nC 4 5 6\r\n";
        let points = PointReader::new(Cursor::new(input)).read_cartesian().unwrap();

        assert_eq!(points.len(), 2);
        assert_eq!(points[0].label.as_deref(), Some("A"));
        assert_eq!(points[1], CartesianPoint::new(4.0, 5.0, 6.0).with_label("C"));
    }
}
