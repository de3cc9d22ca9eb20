//! The instruction sent alongside every image.
//!
//! The schema named here is the contract the normalizer validates against;
//! changing a field name means changing both.

/// Prompt asking the model for a species inventory as a single JSON object.
pub fn inventory_prompt() -> &'static str {
    r#"Analyze the provided image and identify every animal and every plant that appears in it. For each detected species, determine how many individuals are present in the image. For animals, additionally provide the following when available: whether the species is a carnivore, an estimate of the worldwide population, and where the species originates from. Reply only with a JSON object following this schema:
{
  "animals": [
    {
      "species": "common name of the animal",
      "count": number of individuals detected,
      "carnivore": true/false,
      "worldPopulation": estimated number worldwide,
      "origin": "region the species comes from"
    }
  ],
  "plants": [
    {
      "species": "common name of the plant",
      "count": number of individuals detected
    }
  ]
}

Do not return any explanatory text, just the JSON. Make sure the reply is valid JSON."#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_names_every_schema_field() {
        let prompt = inventory_prompt();
        for field in ["animals", "plants", "species", "count", "carnivore", "worldPopulation"] {
            assert!(prompt.contains(field), "prompt is missing field {field}");
        }
    }
}
