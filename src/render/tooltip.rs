use crate::models::{CleanedDataset, SensorRecord};
use crate::render::projection::Projection;
use crate::utils::constants::{HIT_RADIUS_PX, TOOLTIP_EXCLUDED_COLUMNS, TOOLTIP_OFFSET_PX};

/// Multi-line `column: value` label for one record, skipping display-redundant columns.
pub fn tooltip_text(dataset: &CleanedDataset, record: &SensorRecord) -> String {
    dataset
        .fields(record)
        .filter(|(column, _)| !TOOLTIP_EXCLUDED_COLUMNS.contains(column))
        .map(|(column, value)| format!("{}: {}", column, value))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, PartialEq)]
pub enum HoverEvent {
    /// Nothing to redraw
    Unchanged,
    Show {
        index: usize,
        /// Plotted position of the hovered point
        anchor: (f64, f64),
        /// Where the label box is drawn
        label_at: (f64, f64),
        text: String,
    },
    Hide,
}

/// Pointer hit-testing over plotted sensor positions.
///
/// Emits an event only when the visible tooltip has to change, mirroring an
/// idle redraw in an interactive canvas.
#[derive(Debug, Clone)]
pub struct HoverTracker {
    positions: Vec<(f64, f64)>,
    labels: Vec<String>,
    hit_radius: f64,
    plot_area: (f64, f64),
    current: Option<usize>,
}

impl HoverTracker {
    pub fn new(dataset: &CleanedDataset, projection: &Projection) -> Self {
        let positions = dataset
            .records
            .iter()
            .map(|r| projection.to_pixel(r.longitude, r.latitude))
            .collect();
        let labels = dataset
            .records
            .iter()
            .map(|r| tooltip_text(dataset, r))
            .collect();

        Self {
            positions,
            labels,
            hit_radius: HIT_RADIUS_PX,
            plot_area: (projection.width(), projection.height()),
            current: None,
        }
    }

    pub fn with_hit_radius(mut self, hit_radius: f64) -> Self {
        self.hit_radius = hit_radius;
        self
    }

    pub fn visible(&self) -> Option<usize> {
        self.current
    }

    /// First point in plot order within the hit radius
    pub fn hit_test(&self, x: f64, y: f64) -> Option<usize> {
        self.positions
            .iter()
            .position(|&(px, py)| (px - x).hypot(py - y) <= self.hit_radius)
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) -> HoverEvent {
        let (width, height) = self.plot_area;
        // Movement outside the plot area leaves the tooltip as it is.
        if !((0.0..=width).contains(&x) && (0.0..=height).contains(&y)) {
            return HoverEvent::Unchanged;
        }

        match self.hit_test(x, y) {
            Some(index) if self.current == Some(index) => HoverEvent::Unchanged,
            Some(index) => {
                self.current = Some(index);
                let anchor = self.positions[index];
                // Offset is up and to the right; pixel y grows downwards.
                let label_at = (anchor.0 + TOOLTIP_OFFSET_PX.0, anchor.1 - TOOLTIP_OFFSET_PX.1);
                HoverEvent::Show {
                    index,
                    anchor,
                    label_at,
                    text: self.labels[index].clone(),
                }
            }
            None if self.current.is_some() => {
                self.current = None;
                HoverEvent::Hide
            }
            None => HoverEvent::Unchanged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BoundingBox, SensorRecord};
    use pretty_assertions::assert_eq;

    fn dataset() -> CleanedDataset {
        let headers = ["Type", "Serial", "Longitude", "Latitude", "Code"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let record = |lon: f64, lat: f64, serial: &str| {
            SensorRecord::new(
                lat,
                lon,
                serial.to_string(),
                vec![
                    "Soil".to_string(),
                    serial.to_string(),
                    lon.to_string(),
                    lat.to_string(),
                    "X1".to_string(),
                ],
            )
        };
        CleanedDataset::new(
            headers,
            vec![record(2.0, 8.0, "PI1"), record(5.0, 5.0, "PI2")],
        )
    }

    fn projection() -> Projection {
        // 10x10 degrees onto 100x100 pixels
        Projection::new(BoundingBox::new(0.0, 10.0, 0.0, 10.0), 100, 100).unwrap()
    }

    #[test]
    fn test_tooltip_excludes_type_and_code() {
        let data = dataset();
        let text = tooltip_text(&data, &data.records[0]);
        assert_eq!(text, "Serial: PI1\nLongitude: 2\nLatitude: 8");
    }

    #[test]
    fn test_hover_shows_then_hides() {
        let data = dataset();
        let mut tracker = HoverTracker::new(&data, &projection());

        // PI1 sits at pixel (20, 20)
        match tracker.on_pointer_move(21.0, 19.0) {
            HoverEvent::Show {
                index,
                anchor,
                label_at,
                text,
            } => {
                assert_eq!(index, 0);
                assert_eq!(anchor, (20.0, 20.0));
                assert_eq!(label_at, (40.0, 0.0));
                assert!(text.starts_with("Serial: PI1"));
            }
            other => panic!("expected Show, got {:?}", other),
        }
        assert_eq!(tracker.visible(), Some(0));

        assert_eq!(tracker.on_pointer_move(20.5, 20.5), HoverEvent::Unchanged);
        assert_eq!(tracker.on_pointer_move(80.0, 80.0), HoverEvent::Hide);
        assert_eq!(tracker.on_pointer_move(81.0, 80.0), HoverEvent::Unchanged);
        assert_eq!(tracker.visible(), None);
    }

    #[test]
    fn test_moving_between_points_switches_label() {
        let data = dataset();
        let mut tracker = HoverTracker::new(&data, &projection());

        tracker.on_pointer_move(20.0, 20.0);
        match tracker.on_pointer_move(50.0, 50.0) {
            HoverEvent::Show { index, .. } => assert_eq!(index, 1),
            other => panic!("expected Show, got {:?}", other),
        }
    }

    #[test]
    fn test_pointer_outside_plot_keeps_state() {
        let data = dataset();
        let mut tracker = HoverTracker::new(&data, &projection());

        tracker.on_pointer_move(20.0, 20.0);
        assert_eq!(tracker.on_pointer_move(-5.0, 20.0), HoverEvent::Unchanged);
        assert_eq!(tracker.visible(), Some(0));
    }

    #[test]
    fn test_hit_radius() {
        let data = dataset();
        let tracker = HoverTracker::new(&data, &projection()).with_hit_radius(1.0);
        assert_eq!(tracker.hit_test(21.0, 20.0), Some(0));
        assert_eq!(tracker.hit_test(22.0, 20.0), None);
    }
}
