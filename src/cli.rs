//! Command-line interface definition

use clap::{Arg, ArgAction, Command as ClapCommand};
use crate::ellipsoid::available_ellipsoids;

/// Build the clap command for the `xyz2flh` binary
pub fn build_cli() -> ClapCommand {
    let after_help = format!(
        "Known ellipsoids: {}\n\nInput lines are '[NAME] x y z' (or '[NAME] lat lon h' with --inverse);\n\
         sexagesimal input is '[NAME] deg min sec deg min sec h'. Lines starting with '#' are skipped.\n\n\
         Exit status: 0 -> OK, 1 -> ERROR",
        available_ellipsoids().join(", ")
    );

    ClapCommand::new("xyz2flh")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Transform geocentric cartesian coordinates to geodetic coordinates, or vice versa")
        .after_help(after_help)
        .disable_version_flag(true)
        .arg(
            Arg::new("input")
                .help("Input file with one point per line; stdin if omitted")
                .value_name("POINTS")
                .required(false)
                .index(1),
        )
        .arg(
            Arg::new("output-unit")
                .short('u')
                .long("output-unit")
                .help("Angle unit of geodetic output: r (radians), d (decimal degrees), h (sexagesimal)")
                .value_name("UNIT")
                .required(false),
        )
        .arg(
            Arg::new("input-unit")
                .short('t')
                .long("input-unit")
                .help("Angle unit of geodetic input with --inverse: r, d or h")
                .value_name("UNIT")
                .required(false),
        )
        .arg(
            Arg::new("inverse")
                .short('i')
                .long("inverse")
                .help("Transform geodetic to geocentric cartesian coordinates")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("ellipsoid")
                .short('e')
                .long("ellipsoid")
                .help("Reference ellipsoid (default GRS80)")
                .value_name("NAME")
                .conflicts_with_all(["semi-major", "flattening"])
                .required(false),
        )
        .arg(
            Arg::new("semi-major")
                .long("semi-major")
                .help("Semi-major axis in meters of a user-defined ellipsoid")
                .value_name("METERS")
                .requires("flattening")
                .allow_negative_numbers(true)
                .required(false),
        )
        .arg(
            Arg::new("flattening")
                .long("flattening")
                .help("Flattening of a user-defined ellipsoid")
                .value_name("F")
                .requires("semi-major")
                .allow_negative_numbers(true)
                .required(false),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Write a debug log to this file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("version")
                .short('v')
                .long("version")
                .help("Display version and exit")
                .action(ArgAction::Version),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_short_options_accept_attached_values() {
        let matches = build_cli().try_get_matches_from(["xyz2flh", "-ud", "-eWGS84", "points.txt"]).unwrap();
        assert_eq!(matches.get_one::<String>("output-unit").map(String::as_str), Some("d"));
        assert_eq!(matches.get_one::<String>("ellipsoid").map(String::as_str), Some("WGS84"));
        assert_eq!(matches.get_one::<String>("input").map(String::as_str), Some("points.txt"));
        assert!(!matches.get_flag("inverse"));
    }

    #[test]
    fn test_user_defined_parameters_come_in_pairs() {
        assert!(build_cli().try_get_matches_from(["xyz2flh", "--semi-major", "6371000"]).is_err());
        assert!(build_cli()
            .try_get_matches_from(["xyz2flh", "-e", "GRS80", "--semi-major", "6371000", "--flattening", "0"])
            .is_err());
        assert!(build_cli()
            .try_get_matches_from(["xyz2flh", "--semi-major", "6371000", "--flattening", "0"])
            .is_ok());
    }
}
