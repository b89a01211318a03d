use crate::error::Result;
use crate::models::BoundingBox;

/// Linear mapping between geographic coordinates and image pixels.
///
/// The map image is stretched to fill the bounding box on both axes, so no
/// aspect ratio is preserved. Pixel y grows downwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    bounds: BoundingBox,
    width: f64,
    height: f64,
}

impl Projection {
    pub fn new(bounds: BoundingBox, width: u32, height: u32) -> Result<Self> {
        bounds.validate_extent()?;
        Ok(Self {
            bounds,
            width: f64::from(width),
            height: f64::from(height),
        })
    }

    pub fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn to_pixel(&self, longitude: f64, latitude: f64) -> (f64, f64) {
        let x = (longitude - self.bounds.longitude_min) / self.bounds.width() * self.width;
        let y = (self.bounds.latitude_max - latitude) / self.bounds.height() * self.height;
        (x, y)
    }

    /// Inverse of [`Projection::to_pixel`], returns `(longitude, latitude)`
    pub fn to_geo(&self, x: f64, y: f64) -> (f64, f64) {
        let longitude = self.bounds.longitude_min + x / self.width * self.bounds.width();
        let latitude = self.bounds.latitude_max - y / self.height * self.bounds.height();
        (longitude, latitude)
    }

    pub fn contains_pixel(&self, x: f64, y: f64) -> bool {
        (0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
    }
}
