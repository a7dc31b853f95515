//! Transformation options collected from the command line

use clap::ArgMatches;
use log::{debug, warn};

use crate::coordinate::AngleUnit;
use crate::ellipsoid::Ellipsoid;
use crate::errors::{GeoError, GeoResult};

/// Everything a transformation run needs, passed explicitly to commands
#[derive(Debug, Clone, Default)]
pub struct TransformOptions {
    /// Reference ellipsoid for all points
    pub ellipsoid: Ellipsoid,
    /// Angle unit of geodetic input (inverse transformation)
    pub input_unit: AngleUnit,
    /// Angle unit of geodetic output (forward transformation)
    pub output_unit: AngleUnit,
    /// Transform geodetic to cartesian instead of cartesian to geodetic
    pub inverse: bool,
    /// Input file; stdin when absent
    pub input: Option<String>,
}

impl TransformOptions {
    /// Build options from parsed CLI arguments
    pub fn from_args(args: &ArgMatches) -> GeoResult<Self> {
        let inverse = args.get_flag("inverse");

        let input_unit = Self::unit_arg(args, "input-unit")?;
        let output_unit = Self::unit_arg(args, "output-unit")?;

        if inverse && output_unit.is_some() {
            warn!("Output unit only applies to the cartesian to geodetic transformation; ignored");
        }
        if !inverse && input_unit.is_some() {
            warn!("Input unit only applies to the geodetic to cartesian transformation; ignored");
        }

        let ellipsoid = Self::ellipsoid_arg(args)?;
        debug!("Using ellipsoid {} (a={}, f={})", ellipsoid, ellipsoid.semi_major_axis(), ellipsoid.flattening());

        Ok(TransformOptions {
            ellipsoid,
            input_unit: input_unit.unwrap_or_default(),
            output_unit: output_unit.unwrap_or_default(),
            inverse,
            input: args.get_one::<String>("input").cloned(),
        })
    }

    fn unit_arg(args: &ArgMatches, name: &str) -> GeoResult<Option<AngleUnit>> {
        args.get_one::<String>(name)
            .map(|value| value.parse::<AngleUnit>())
            .transpose()
    }

    /// Resolve the ellipsoid from either a catalog name or explicit parameters
    fn ellipsoid_arg(args: &ArgMatches) -> GeoResult<Ellipsoid> {
        let semi_major = args.get_one::<String>("semi-major");
        let flattening = args.get_one::<String>("flattening");

        match (semi_major, flattening) {
            (Some(a), Some(f)) => {
                let a = a.parse::<f64>()
                    .map_err(|_| GeoError::GenericError(format!("Invalid semi-major axis: {}", a)))?;
                let f = f.parse::<f64>()
                    .map_err(|_| GeoError::GenericError(format!("Invalid flattening: {}", f)))?;
                user_defined_ellipsoid(a, f)
            },
            (None, None) => match args.get_one::<String>("ellipsoid") {
                Some(name) => Ellipsoid::try_from_name(name),
                None => Ok(Ellipsoid::default()),
            },
            _ => Err(GeoError::GenericError(
                "Both --semi-major and --flattening are needed for a user-defined ellipsoid".to_string(),
            )),
        }
    }
}

/// Build a user-defined ellipsoid, checking `a > 0` and `0 <= f < 1`
pub fn user_defined_ellipsoid(semi_major_axis: f64, flattening: f64) -> GeoResult<Ellipsoid> {
    if !semi_major_axis.is_finite() || semi_major_axis <= 0.0 {
        return Err(GeoError::GenericError(format!(
            "Semi-major axis must be positive, got {}", semi_major_axis
        )));
    }
    if !(0.0..1.0).contains(&flattening) {
        return Err(GeoError::GenericError(format!(
            "Flattening must be in [0, 1), got {}", flattening
        )));
    }
    Ok(Ellipsoid::from_parameters(semi_major_axis, flattening))
}
