pub mod error;
pub mod types;

pub use error::AnalysisError;
pub use types::{AnalysisResult, AnimalObservation, PlantObservation};
