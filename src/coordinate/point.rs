//! Point structures for geocentric and geodetic coordinates

/// A point in geocentric cartesian coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct CartesianPoint {
    /// X coordinate in meters
    pub x: f64,
    /// Y coordinate in meters
    pub y: f64,
    /// Z coordinate in meters
    pub z: f64,
    /// Optional point name
    pub label: Option<String>,
}

impl CartesianPoint {
    /// Create a new unnamed point
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        CartesianPoint { x, y, z, label: None }
    }

    /// Attach a name to this point
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// A point in geodetic (ellipsoidal) coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct GeodeticPoint {
    /// Latitude in radians, [-π/2, π/2]
    pub latitude: f64,
    /// Longitude in radians, (-π, π]
    pub longitude: f64,
    /// Ellipsoidal height in meters
    pub height: f64,
    /// Optional point name
    pub label: Option<String>,
}

impl GeodeticPoint {
    /// Create a new unnamed point (angles in radians)
    pub fn new(latitude: f64, longitude: f64, height: f64) -> Self {
        GeodeticPoint { latitude, longitude, height, label: None }
    }

    /// Create a new unnamed point from decimal degrees
    pub fn from_degrees(latitude: f64, longitude: f64, height: f64) -> Self {
        GeodeticPoint::new(latitude.to_radians(), longitude.to_radians(), height)
    }

    /// Attach a name to this point
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}
