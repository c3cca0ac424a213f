pub mod couplet;
pub mod loose;
pub mod text;

mod error;

pub use couplet::{Couplet, CoupletId, Tag};
pub use error::ConversionError;
pub use loose::Loose;
