pub mod approaches;
pub mod entropy;
pub mod error;
pub mod traits;
pub mod utils;

pub use error::EntropyError;
pub use traits::{GlobalValue, LocalValues, OptionalLocalValues, ScaleValues};
