use crate::error::{ProcessingError, Result};
use crate::models::{BoundingBox, CleanedDataset};
use crate::render::{tooltip_text, Projection};
use crate::utils::constants::{LEGEND_LABEL, MAP_TITLE, MARKER_COLOR, MARKER_RADIUS_PX};
use askama::Template;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use url::Url;

const MARGIN_LEFT: f64 = 70.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_BOTTOM: f64 = 60.0;
const AXIS_TICKS: usize = 5;

fn px(value: f64) -> String {
    format!("{:.1}", value)
}

struct AxisTick {
    x1: String,
    y1: String,
    x2: String,
    y2: String,
    label_x: String,
    label_y: String,
    label: String,
}

struct Marker {
    cx: String,
    cy: String,
    tooltip: String,
}

#[derive(Template)]
#[template(path = "overlay.svg", escape = "html")]
struct OverlayTemplate<'a> {
    total_width: String,
    total_height: String,
    title: &'a str,
    title_x: String,
    title_y: String,
    image_href: &'a str,
    plot_x: String,
    plot_y: String,
    plot_width: String,
    plot_height: String,
    x_ticks: Vec<AxisTick>,
    y_ticks: Vec<AxisTick>,
    x_label_x: String,
    x_label_y: String,
    y_label_y: String,
    markers: Vec<Marker>,
    marker_radius: String,
    marker_color: &'a str,
    legend_x: String,
    legend_box_y: String,
    legend_y: String,
    legend_dot_x: String,
    legend_text_x: String,
    legend_text_y: String,
    legend_label: &'a str,
}

/// Writes the cleaned sensors as an SVG overlay on the map image. Each point
/// carries its tooltip as an SVG `<title>`, which browsers show on hover.
pub struct OverlayWriter {
    title: String,
    marker_color: String,
    marker_radius: f64,
}

impl OverlayWriter {
    pub fn new() -> Self {
        Self {
            title: MAP_TITLE.to_string(),
            marker_color: MARKER_COLOR.to_string(),
            marker_radius: MARKER_RADIUS_PX,
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn with_marker_radius(mut self, radius: f64) -> Result<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(ProcessingError::Render(format!(
                "Marker radius must be positive, got {}",
                radius
            )));
        }
        self.marker_radius = radius;
        Ok(self)
    }

    /// Projection for a map image, using its pixel size as the plot area
    pub fn projection_for(&self, map_image: &Path, bounds: BoundingBox) -> Result<Projection> {
        let (width, height) = image::image_dimensions(map_image)
            .map_err(|e| ProcessingError::source_read(map_image, e))?;
        debug!(width, height, "map image dimensions");
        Projection::new(bounds, width, height)
    }

    pub fn write_svg(
        &self,
        dataset: &CleanedDataset,
        bounds: BoundingBox,
        map_image: &Path,
        output: &Path,
    ) -> Result<OverlayFileInfo> {
        let projection = self.projection_for(map_image, bounds)?;
        let image_href = image_url(map_image)?;
        let svg = self.render_svg(dataset, &projection, image_href.as_str())?;

        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(output, svg.as_bytes())?;

        info!(output = %output.display(), points = dataset.len(), "wrote map overlay");

        Ok(OverlayFileInfo {
            path: output.to_path_buf(),
            points: dataset.len(),
            image_width: projection.width() as u32,
            image_height: projection.height() as u32,
            file_size: svg.len() as u64,
        })
    }

    /// Builds the SVG document. Plot-area pixels match the projection.
    pub fn render_svg(
        &self,
        dataset: &CleanedDataset,
        projection: &Projection,
        image_href: &str,
    ) -> Result<String> {
        let width = projection.width();
        let height = projection.height();
        let bounds = projection.bounds();
        let bottom = MARGIN_TOP + height;

        let markers = dataset
            .records
            .iter()
            .map(|record| {
                let (x, y) = projection.to_pixel(record.longitude, record.latitude);
                Marker {
                    cx: format!("{:.2}", x),
                    cy: format!("{:.2}", y),
                    tooltip: tooltip_text(dataset, record),
                }
            })
            .collect();

        let legend_x = MARGIN_LEFT + width - 140.0;
        let legend_y = MARGIN_TOP + 20.0;

        let template = OverlayTemplate {
            total_width: format!("{:.0}", MARGIN_LEFT + width + MARGIN_RIGHT),
            total_height: format!("{:.0}", MARGIN_TOP + height + MARGIN_BOTTOM),
            title: &self.title,
            title_x: px(MARGIN_LEFT + width / 2.0),
            title_y: px(MARGIN_TOP / 2.0 + 6.0),
            image_href,
            plot_x: px(MARGIN_LEFT),
            plot_y: px(MARGIN_TOP),
            plot_width: format!("{:.0}", width),
            plot_height: format!("{:.0}", height),
            x_ticks: longitude_ticks(bounds, width, bottom),
            y_ticks: latitude_ticks(bounds, height),
            x_label_x: px(MARGIN_LEFT + width / 2.0),
            x_label_y: px(bottom + 42.0),
            y_label_y: px(MARGIN_TOP + height / 2.0),
            markers,
            marker_radius: self.marker_radius.to_string(),
            marker_color: &self.marker_color,
            legend_x: px(legend_x),
            legend_box_y: px(legend_y - 12.0),
            legend_y: px(legend_y),
            legend_dot_x: px(legend_x + 12.0),
            legend_text_x: px(legend_x + 22.0),
            legend_text_y: px(legend_y + 4.0),
            legend_label: LEGEND_LABEL,
        };

        template
            .render()
            .map_err(|e| ProcessingError::Render(format!("SVG template failed: {}", e)))
    }
}

impl Default for OverlayWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn tick_fractions() -> impl Iterator<Item = f64> {
    (0..AXIS_TICKS).map(|i| i as f64 / (AXIS_TICKS - 1) as f64)
}

fn longitude_ticks(bounds: &BoundingBox, width: f64, bottom: f64) -> Vec<AxisTick> {
    tick_fractions()
        .map(|fraction| {
            let x = MARGIN_LEFT + fraction * width;
            AxisTick {
                x1: px(x),
                y1: px(bottom),
                x2: px(x),
                y2: px(bottom + 5.0),
                label_x: px(x),
                label_y: px(bottom + 18.0),
                label: px(bounds.longitude_min + fraction * bounds.width()),
            }
        })
        .collect()
}

fn latitude_ticks(bounds: &BoundingBox, height: f64) -> Vec<AxisTick> {
    tick_fractions()
        .map(|fraction| {
            let y = MARGIN_TOP + fraction * height;
            AxisTick {
                x1: px(MARGIN_LEFT - 5.0),
                y1: px(y),
                x2: px(MARGIN_LEFT),
                y2: px(y),
                label_x: px(MARGIN_LEFT - 8.0),
                label_y: px(y + 4.0),
                label: px(bounds.latitude_max - fraction * bounds.height()),
            }
        })
        .collect()
}

/// `file://` URL for the map image, so the SVG resolves it from any directory
/// and on any platform.
fn image_url(map_image: &Path) -> Result<Url> {
    let absolute = fs::canonicalize(map_image)
        .map_err(|e| ProcessingError::source_read(map_image, e))?;
    Url::from_file_path(&absolute)
        .map_err(|_| ProcessingError::source_read(map_image, "path cannot be expressed as a file URL"))
}

#[derive(Debug)]
pub struct OverlayFileInfo {
    pub path: PathBuf,
    pub points: usize,
    pub image_width: u32,
    pub image_height: u32,
    pub file_size: u64,
}

impl OverlayFileInfo {
    pub fn summary(&self) -> String {
        format!(
            "Overlay Summary:\n\
            - Output: {}\n\
            - Sensors plotted: {}\n\
            - Map image: {}x{} px\n\
            - File size: {:.1} KB",
            self.path.display(),
            self.points,
            self.image_width,
            self.image_height,
            self.file_size as f64 / 1024.0
        )
    }
}
