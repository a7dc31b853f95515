//! Cartesian to geodetic transformation command

use std::io::{self, BufRead, Write};
use log::info;

use crate::commands::command_traits::Command;
use crate::commands::options::TransformOptions;
use crate::coordinate::CoordinateTransformer;
use crate::errors::GeoResult;
use crate::io::{open_input, PointReader};
use crate::utils::format_utils::format_geodetic;

/// Command converting `[NAME] x y z` lines to geodetic coordinates
pub struct ForwardCommand {
    options: TransformOptions,
    transformer: CoordinateTransformer,
}

impl ForwardCommand {
    pub fn new(options: TransformOptions) -> Self {
        let transformer = CoordinateTransformer::new(options.ellipsoid.clone());
        ForwardCommand { options, transformer }
    }

    /// Transform every point read from `reader` and write one line per point
    ///
    /// # Returns
    /// The number of points written
    pub fn run<R: BufRead, W: Write>(&self, reader: R, writer: &mut W) -> GeoResult<usize> {
        let points = PointReader::new(reader).read_cartesian()?;

        for point in &points {
            let geodetic = self.transformer.to_geodetic(point);
            writeln!(writer, "{}", format_geodetic(&geodetic, self.options.output_unit))?;
        }

        writer.flush()?;
        Ok(points.len())
    }
}

impl Command for ForwardCommand {
    fn execute(&self) -> GeoResult<()> {
        info!("Transforming cartesian to geodetic coordinates on {}, output in {}",
              self.transformer.ellipsoid(), self.options.output_unit);

        let input = open_input(self.options.input.as_deref())?;
        let stdout = io::stdout();
        let mut out = stdout.lock();

        let count = self.run(input, &mut out)?;

        info!("Transformed {} points", count);
        Ok(())
    }
}
