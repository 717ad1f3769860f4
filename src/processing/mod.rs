pub mod batch;
pub mod padder;
pub mod validation;

pub use batch::BatchProcessor;
pub use padder::{DecodedImage, compute_target, decode, encode, pad, pad_file};
pub use validation::{TargetKind, classify_target, validate_input_file};
