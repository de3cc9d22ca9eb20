//! Validation and coercion of the parsed payload into domain types.
//!
//! The mandatory shape is an object with an `animals` array; everything else
//! degrades instead of failing. Elements missing a species or a count are
//! dropped with a warning, since an entry with an undefined species must
//! never reach rendering.

use serde_json::Value;
use tracing::warn;
use wildlens_core::{AnalysisError, AnalysisResult, AnimalObservation, PlantObservation};

/// Map a generic parsed value into an [`AnalysisResult`].
///
/// Fatal only when the payload is not an object or `animals` is missing or
/// not an array. `plants` of any other type (including `null`) becomes an
/// empty list; wrong-typed optional fields are treated as absent. The input
/// is never mutated.
pub fn normalize(value: &Value) -> Result<AnalysisResult, AnalysisError> {
    let obj = value
        .as_object()
        .ok_or_else(|| AnalysisError::SchemaMismatch("payload is not an object".into()))?;

    let animals_raw = match obj.get("animals") {
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(AnalysisError::SchemaMismatch(format!(
                "animals is not an array (got {})",
                type_name(other)
            )))
        }
        None => {
            return Err(AnalysisError::SchemaMismatch(
                "missing animals array".into(),
            ))
        }
    };

    let animals = animals_raw
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            let animal = animal_from_value(entry);
            if animal.is_none() {
                warn!(index, "Dropping malformed animal entry");
            }
            animal
        })
        .collect();

    let plants = match obj.get("plants") {
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| {
                let plant = plant_from_value(entry);
                if plant.is_none() {
                    warn!(index, "Dropping malformed plant entry");
                }
                plant
            })
            .collect(),
        Some(Value::Null) | None => Vec::new(),
        Some(other) => {
            warn!(got = type_name(other), "plants is not an array, treating as empty");
            Vec::new()
        }
    };

    Ok(AnalysisResult { animals, plants })
}

fn animal_from_value(entry: &Value) -> Option<AnimalObservation> {
    let obj = entry.as_object()?;
    Some(AnimalObservation {
        species: required_species(obj.get("species"))?,
        count: required_count(obj.get("count"))?,
        carnivore: obj.get("carnivore").and_then(Value::as_bool),
        world_population: obj
            .get("worldPopulation")
            .and_then(Value::as_f64)
            .filter(|n| *n >= 0.0),
        origin: optional_string(obj.get("origin")),
    })
}

fn plant_from_value(entry: &Value) -> Option<PlantObservation> {
    let obj = entry.as_object()?;
    Some(PlantObservation {
        species: required_species(obj.get("species"))?,
        count: required_count(obj.get("count"))?,
        origin: optional_string(obj.get("origin")),
    })
}

fn required_species(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(str::to_owned)
}

fn required_count(value: Option<&Value>) -> Option<u64> {
    value.and_then(Value::as_u64)
}

fn optional_string(value: Option<&Value>) -> Option<String> {
    value.and_then(Value::as_str).map(str::to_owned)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalizes_minimal_payload() {
        let value = json!({"animals": [{"species": "Lion", "count": 2}], "plants": null});
        let result = normalize(&value).unwrap();
        assert_eq!(result.animals.len(), 1);
        assert_eq!(result.animals[0].species, "Lion");
        assert_eq!(result.animals[0].count, 2);
        assert!(result.animals[0].carnivore.is_none());
        assert!(result.animals[0].world_population.is_none());
        assert!(result.animals[0].origin.is_none());
        assert!(result.plants.is_empty());
    }

    #[test]
    fn passes_optionals_through_when_well_typed() {
        let value = json!({
            "animals": [{
                "species": "Lion",
                "count": 2,
                "carnivore": true,
                "worldPopulation": 20000,
                "origin": "African savanna"
            }],
            "plants": [{"species": "Acacia", "count": 3, "origin": "Africa"}]
        });
        let result = normalize(&value).unwrap();
        assert_eq!(result.animals[0].carnivore, Some(true));
        assert_eq!(result.animals[0].world_population, Some(20000.0));
        assert_eq!(result.animals[0].origin.as_deref(), Some("African savanna"));
        assert_eq!(result.plants[0].origin.as_deref(), Some("Africa"));
    }

    #[test]
    fn drops_entry_missing_species() {
        let value = json!({"animals": [{"count": 3}, {"species": "Fox", "count": 1}]});
        let result = normalize(&value).unwrap();
        assert_eq!(result.animals.len(), 1);
        assert_eq!(result.animals[0].species, "Fox");
    }

    #[test]
    fn drops_entry_with_empty_or_blank_species() {
        let value = json!({"animals": [
            {"species": "", "count": 1},
            {"species": "   ", "count": 1}
        ]});
        assert!(normalize(&value).unwrap().animals.is_empty());
    }

    #[test]
    fn drops_entry_with_bad_count() {
        let value = json!({"animals": [
            {"species": "Crow", "count": -1},
            {"species": "Gull", "count": "two"},
            {"species": "Swan", "count": 2}
        ]});
        let result = normalize(&value).unwrap();
        assert_eq!(result.animals.len(), 1);
        assert_eq!(result.animals[0].species, "Swan");
    }

    #[test]
    fn wrong_typed_optionals_become_absent() {
        let value = json!({"animals": [{
            "species": "Wolf",
            "count": 4,
            "carnivore": "yes",
            "worldPopulation": -300,
            "origin": 7
        }]});
        let animal = &normalize(&value).unwrap().animals[0];
        assert!(animal.carnivore.is_none());
        assert!(animal.world_population.is_none());
        assert!(animal.origin.is_none());
    }

    #[test]
    fn missing_animals_is_fatal() {
        let err = normalize(&json!({"plants": []})).unwrap_err();
        assert!(matches!(err, AnalysisError::SchemaMismatch(_)));
    }

    #[test]
    fn non_array_animals_is_fatal() {
        let err = normalize(&json!({"animals": "none"})).unwrap_err();
        assert!(matches!(err, AnalysisError::SchemaMismatch(_)));
    }

    #[test]
    fn non_object_payload_is_fatal() {
        assert!(normalize(&json!([1, 2, 3])).is_err());
        assert!(normalize(&json!(42)).is_err());
    }

    #[test]
    fn wrong_typed_plants_becomes_empty() {
        let value = json!({"animals": [], "plants": "a few"});
        assert!(normalize(&value).unwrap().plants.is_empty());
    }

    #[test]
    fn duplicate_species_stay_distinct() {
        let value = json!({"animals": [
            {"species": "Sparrow", "count": 1},
            {"species": "Sparrow", "count": 3}
        ]});
        let result = normalize(&value).unwrap();
        assert_eq!(result.animals.len(), 2);
        assert_eq!(result.animals[0].count, 1);
        assert_eq!(result.animals[1].count, 3);
    }

    #[test]
    fn normalization_is_idempotent() {
        let value = json!({
            "animals": [{"species": "Lynx", "count": 1, "carnivore": true}],
            "plants": [{"species": "Fern", "count": 5}]
        });
        let first = normalize(&value).unwrap();
        let reserialized = serde_json::to_value(&first).unwrap();
        let second = normalize(&reserialized).unwrap();
        assert_eq!(first, second);
    }
}
