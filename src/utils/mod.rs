pub mod error;
pub mod formats;
pub mod fs;

pub use error::{PadError, PadResult, PathError};
pub use formats::{PNG_EXTENSION, extract_filename, is_png_path};
pub use fs::{copy_staged, copy_staging_path, create_output_dir, list_png_files, write_staged};
