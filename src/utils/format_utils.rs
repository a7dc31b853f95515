//! Output formatting utilities
//!
//! Fixed-width text layouts for transformed points, one point per line.

use crate::coordinate::{
    AngleUnit, CartesianPoint, GeodeticPoint, Sexagesimal, radians_to_decimal_degrees, radians_to_sexagesimal,
};

/// Decimal places of printed sexagesimal seconds
const SECONDS_DECIMALS: i32 = 5;

/// Format a geodetic point with angles in the given unit
pub fn format_geodetic(point: &GeodeticPoint, unit: AngleUnit) -> String {
    let body = match unit {
        AngleUnit::Radians => format!(
            "{:+15.12} {:+15.12} {:+10.4}",
            point.latitude, point.longitude, point.height
        ),
        AngleUnit::DecimalDegrees => format!(
            "{:+15.10} {:+15.10} {:+10.4}",
            radians_to_decimal_degrees(point.latitude),
            radians_to_decimal_degrees(point.longitude),
            point.height
        ),
        AngleUnit::Sexagesimal => format!(
            "{} {} {:+10.4}",
            format_sexagesimal(&radians_to_sexagesimal(point.latitude)),
            format_sexagesimal(&radians_to_sexagesimal(point.longitude)),
            point.height
        ),
    };

    with_label(point.label.as_deref(), body)
}

/// Format a cartesian point
pub fn format_cartesian(point: &CartesianPoint) -> String {
    let body = format!("{:+15.4} {:+15.4} {:+15.4}", point.x, point.y, point.z);
    with_label(point.label.as_deref(), body)
}

/// Format an angle as `±DDD MM SS.SSSSS`
///
/// The sign is always printed, also for angles above -1°. Seconds that
/// round to 60 at the printed precision roll over into the minutes.
pub fn format_sexagesimal(angle: &Sexagesimal) -> String {
    let angle = angle.rounded(SECONDS_DECIMALS);
    let sign = if angle.negative { '-' } else { '+' };
    format!(
        "{:>3} {:>2} {:8.5}",
        format!("{}{}", sign, angle.degrees),
        angle.minutes,
        angle.seconds
    )
}

fn with_label(label: Option<&str>, body: String) -> String {
    match label {
        Some(label) => format!("{:>10} {}", label, body),
        None => body,
    }
}
