use serde::{Deserialize, Serialize};

/// The typed inventory produced for one analyzed image.
///
/// A result is all-or-nothing: either both lists are present (plants may be
/// empty) or the analysis attempt yielded no result at all. List order is the
/// order the model emitted the entries, kept for display determinism; two
/// entries with the same species stay distinct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub animals: Vec<AnimalObservation>,
    #[serde(default)]
    pub plants: Vec<PlantObservation>,
}

/// One detected animal species.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimalObservation {
    /// Display name as the model wrote it, any language or casing.
    pub species: String,
    /// Individuals detected in the image.
    pub count: u64,
    /// Absent when the model did not state a diet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carnivore: Option<bool>,
    /// Estimated worldwide population; absent when unknown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub world_population: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
}

/// One detected plant species.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantObservation {
    pub species: String,
    pub count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
}

impl AnalysisResult {
    /// Total number of observations across both lists.
    pub fn total_observations(&self) -> usize {
        self.animals.len() + self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animals.is_empty() && self.plants.is_empty()
    }
}
