pub mod discrete;
pub mod template;

// Unified re-exports for common estimators so tests and users can import
// tsentropy::estimators::approaches::* ergonomically.
pub use discrete::{BinaryEntropy, BinaryWeighting, ShannonEntropy};
pub use template::{MatchBackend, MultiscaleEntropy, SampleEntropy, SampleEntropyOutcome};
