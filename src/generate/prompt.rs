//! The fixed prompt template sent to the content provider.

/// Structural description of the reply shape, embedded in every prompt.
/// Field names here must stay in lockstep with the payload deserializer.
const PAYLOAD_SHAPE: &str = r#"{
  "hero": {
    "title": "string",
    "subtitle": "string",
    "primaryCta": "string",
    "secondaryCta": "string",
    "assurance": "string",
    "highlights": ["string", "string", "string"]
  },
  "metrics": [
    { "value": "string", "label": "string" }
  ],
  "testimonial": {
    "heading": "string",
    "subtitle": "string",
    "quote": "string",
    "bullets": ["string", "string", "string"],
    "attribution": "string",
    "attributionRole": "string",
    "callout": "string"
  },
  "cta": {
    "title": "string",
    "subtitle": "string",
    "primaryCta": "string",
    "secondaryCta": "string"
  }
}"#;

/// Render the one prompt this system ever sends: instructions, the payload
/// shape, and the user's description verbatim.
pub fn build_prompt(description: &str) -> String {
    format!(
        "You write landing page copy. Based on the product description below, \
         respond with a single JSON object matching this shape exactly. Every \
         field is optional; omit any field you have nothing good for. Do not \
         wrap the JSON in markdown fences or add commentary. Lists carry at \
         most 3 items. Keep titles under 8 words, metric values short \
         (like \"72%\" or \"4.9/5\"), and all copy concrete and free of \
         buzzwords.\n\nJSON shape:\n{PAYLOAD_SHAPE}\n\nProduct \
         description:\n{description}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_input_and_shape() {
        let prompt = build_prompt("An espresso subscription for offices");
        assert!(prompt.contains("An espresso subscription for offices"));
        assert!(prompt.contains("\"primaryCta\""));
        assert!(prompt.contains("\"attributionRole\""));
        assert!(prompt.contains("single JSON object"));
    }

    #[test]
    fn shape_is_valid_json() {
        let value: serde_json::Value = serde_json::from_str(PAYLOAD_SHAPE).unwrap();
        assert!(value.get("hero").is_some());
        assert!(value.get("metrics").is_some());
        assert!(value.get("testimonial").is_some());
        assert!(value.get("cta").is_some());
    }
}
