/// Photo acquisition module
///
/// This module handles:
/// - Reading the selected photo into memory
/// - Detecting its format from content
/// - Generating the downscaled preview

pub mod loader;

pub use loader::{load_image, PICKER_EXTENSIONS};
