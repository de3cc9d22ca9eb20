//! Reply analysis pipeline: raw model text in, typed inventory out.
//!
//! Two pure stages consumed in sequence. [`extract::extract_payload`]
//! recovers a JSON value from the fenced or bare reply text, and
//! [`normalize::normalize`] coerces it into a [`wildlens_core::AnalysisResult`].
//! Neither stage holds state or does I/O, so replies can be processed
//! concurrently in batches.

pub mod extract;
pub mod normalize;

pub use extract::extract_payload;
pub use normalize::normalize;

use wildlens_core::{AnalysisError, AnalysisResult};

/// Run the full pipeline on a raw model reply.
///
/// Extraction failure maps to [`AnalysisError::MalformedReply`]; shape
/// problems surface as [`AnalysisError::SchemaMismatch`]. There is no
/// partially valid outcome.
pub fn analyze_reply(reply: &str) -> Result<AnalysisResult, AnalysisError> {
    let value = extract_payload(reply).ok_or(AnalysisError::MalformedReply)?;
    normalize(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fenced_reply_produces_typed_result() {
        let reply = r#"Sure! Here is what I found:

```json
{
  "animals": [
    {"species": "European Robin", "count": 2, "carnivore": false, "worldPopulation": 200000000},
    {"species": "Red Fox", "count": 1, "carnivore": true}
  ],
  "plants": [
    {"species": "Silver Birch", "count": 4}
  ]
}
```

Let me know if you need more detail."#;
        let result = analyze_reply(reply).unwrap();
        assert_eq!(result.animals.len(), 2);
        assert_eq!(result.plants.len(), 1);
        assert_eq!(result.total_observations(), 3);
        assert_eq!(result.animals[0].species, "European Robin");
        assert_eq!(result.animals[1].carnivore, Some(true));
    }

    #[test]
    fn bare_reply_produces_typed_result() {
        let reply = r#"{"animals": [{"species": "Mallard", "count": 5}]}"#;
        let result = analyze_reply(reply).unwrap();
        assert_eq!(result.animals[0].count, 5);
        assert!(result.plants.is_empty());
    }

    #[test]
    fn prose_reply_is_malformed() {
        let err = analyze_reply("I could not see any animals in this image.").unwrap_err();
        assert!(matches!(err, AnalysisError::MalformedReply));
    }

    #[test]
    fn fenced_non_inventory_payload_is_schema_mismatch() {
        let err = analyze_reply("```json\n{\"description\": \"a meadow\"}\n```").unwrap_err();
        assert!(matches!(err, AnalysisError::SchemaMismatch(_)));
    }
}
