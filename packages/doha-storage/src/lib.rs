pub mod dataset;

mod error;

pub use dataset::{Dataset, DatasetLoader};
pub use error::{DatasetError, Error};

pub type Result<T, E = Error> = std::result::Result<T, E>;
