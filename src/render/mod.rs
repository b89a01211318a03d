pub mod projection;
pub mod tooltip;

pub use projection::Projection;
pub use tooltip::{tooltip_text, HoverEvent, HoverTracker};
