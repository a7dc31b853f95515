//! Geodetic to cartesian transformation command

use std::io::{self, BufRead, Write};
use log::info;

use crate::commands::command_traits::Command;
use crate::commands::options::TransformOptions;
use crate::coordinate::CoordinateTransformer;
use crate::errors::GeoResult;
use crate::io::{open_input, PointReader};
use crate::utils::format_utils::format_cartesian;

/// Command converting geodetic lines to `[NAME] x y z`
pub struct InverseCommand {
    options: TransformOptions,
    transformer: CoordinateTransformer,
}

impl InverseCommand {
    pub fn new(options: TransformOptions) -> Self {
        let transformer = CoordinateTransformer::new(options.ellipsoid.clone());
        InverseCommand { options, transformer }
    }

    /// Transform every point read from `reader` and write one line per point
    ///
    /// # Returns
    /// The number of points written
    pub fn run<R: BufRead, W: Write>(&self, reader: R, writer: &mut W) -> GeoResult<usize> {
        let points = PointReader::new(reader).read_geodetic(self.options.input_unit)?;

        for point in &points {
            let cartesian = self.transformer.to_cartesian(point);
            writeln!(writer, "{}", format_cartesian(&cartesian))?;
        }

        writer.flush()?;
        Ok(points.len())
    }
}

impl Command for InverseCommand {
    fn execute(&self) -> GeoResult<()> {
        info!("Transforming geodetic ({}) to cartesian coordinates on {}",
              self.options.input_unit, self.transformer.ellipsoid());

        let input = open_input(self.options.input.as_deref())?;
        let stdout = io::stdout();
        let mut out = stdout.lock();

        let count = self.run(input, &mut out)?;

        info!("Transformed {} points", count);
        Ok(())
    }
}
