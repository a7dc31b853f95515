//! Point input handling
//!
//! This module reads points from files or stdin.

pub mod point_reader;

pub use point_reader::{open_input, parse_cartesian_line, parse_geodetic_line, PointReader};
