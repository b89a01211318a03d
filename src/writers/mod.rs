pub mod overlay_writer;

pub use overlay_writer::{OverlayFileInfo, OverlayWriter};
