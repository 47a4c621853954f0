pub mod types;
pub mod classification;

pub use types::SmartdoError;
pub use classification::{ErrorClassification, ErrorKind};
