mod image_scanner;
mod path_validator;

pub use image_scanner::{ImageFileInfo, scan_image_files};
pub use path_validator::validate_directory_exists;
