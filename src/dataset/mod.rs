mod dataset;
mod error;
mod loader;
mod source;

pub use dataset::Dataset;
pub use error::{DatasetErr, Result};
pub use loader::{load, try_load};
pub use source::DatasetSource;
