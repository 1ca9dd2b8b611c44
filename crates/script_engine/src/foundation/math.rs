//! Math utilities and types
//!
//! Provides the 2D math types used by scripts and canvases. Canvas space is
//! y-down with the origin at the top-left corner of the viewport.

/// 2D vector type in canvas units
pub type Vec2 = nalgebra::Vector2<f64>;

/// 2D point type in canvas units
pub type Point2 = nalgebra::Point2<f64>;

/// Axis-aligned rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Bounds {
    /// Left edge
    pub x: f64,

    /// Top edge
    pub y: f64,

    /// Width in canvas units
    pub width: f64,

    /// Height in canvas units
    pub height: f64,
}

impl Bounds {
    /// Create bounds from raw components
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Create bounds with the top-left corner at `origin`
    pub fn from_origin_size(origin: Point2, size: Vec2) -> Self {
        Self::new(origin.x, origin.y, size.x, size.y)
    }

    /// `[x, y, w, h]` layout expected by 2D rasterizers
    pub fn to_array(self) -> [f64; 4] {
        [self.x, self.y, self.width, self.height]
    }
}
