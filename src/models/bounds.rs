use crate::error::{ProcessingError, Result};
use crate::utils::constants::{UK_MAX_LAT, UK_MAX_LON, UK_MIN_LAT, UK_MIN_LON};
use crate::utils::coordinates::within;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Valid UK region; doubles as the map image extent.
pub const UK_BOUNDS: BoundingBox = BoundingBox {
    longitude_min: UK_MIN_LON,
    longitude_max: UK_MAX_LON,
    latitude_min: UK_MIN_LAT,
    latitude_max: UK_MAX_LAT,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct BoundingBox {
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude_min: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude_max: f64,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude_min: f64,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude_max: f64,
}

impl BoundingBox {
    pub fn new(
        longitude_min: f64,
        longitude_max: f64,
        latitude_min: f64,
        latitude_max: f64,
    ) -> Self {
        Self {
            longitude_min,
            longitude_max,
            latitude_min,
            latitude_max,
        }
    }

    /// Both bounds inclusive
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        within(latitude, self.latitude_min, self.latitude_max)
            && within(longitude, self.longitude_min, self.longitude_max)
    }

    pub fn width(&self) -> f64 {
        self.longitude_max - self.longitude_min
    }

    pub fn height(&self) -> f64 {
        self.latitude_max - self.latitude_min
    }

    /// Range-checks each edge, then requires a non-empty extent so the box
    /// can serve as an image coordinate frame.
    pub fn validate_extent(&self) -> Result<()> {
        self.validate()?;

        if self.longitude_min >= self.longitude_max {
            return Err(ProcessingError::InvalidBounds(format!(
                "longitude_min {} must be below longitude_max {}",
                self.longitude_min, self.longitude_max
            )));
        }

        if self.latitude_min >= self.latitude_max {
            return Err(ProcessingError::InvalidBounds(format!(
                "latitude_min {} must be below latitude_max {}",
                self.latitude_min, self.latitude_max
            )));
        }

        Ok(())
    }

    /// Smallest box covering every point, `None` for an empty iterator
    pub fn enclosing<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        points.into_iter().fold(None, |acc, (lat, lon)| {
            Some(match acc {
                None => Self::new(lon, lon, lat, lat),
                Some(b) => Self::new(
                    b.longitude_min.min(lon),
                    b.longitude_max.max(lon),
                    b.latitude_min.min(lat),
                    b.latitude_max.max(lat),
                ),
            })
        })
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        UK_BOUNDS
    }
}
