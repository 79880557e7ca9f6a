// All LLM prompt constants for the recommend module.
// Reuses cross-cutting fragments from llm_client::prompts.

use serde_json::{json, Value};

use crate::llm_client::prompts::{NO_FABRICATION_RULE, PRODUCT_NAME, SKILL_NORMALIZATION_RULE};

/// System instruction for talent matching.
pub fn match_system_instruction() -> String {
    format!(
        r#"You are the AI intelligence layer of "{PRODUCT_NAME}".
Your task: Match students from the provided list to a user's natural language search query.

RULES:
1. {NO_FABRICATION_RULE}
2. {SKILL_NORMALIZATION_RULE}
3. Be honest. If a student is missing a key skill requested, mention it in "match_reason".
4. Rank results by relevance (skill alignment, experience, availability).
5. Return a JSON array of recommendation objects.
6. Copy each student's "id" exactly as given.

FORMAT:
{{
  "id": string,
  "name": string,
  "headline": string,
  "skills": string[],
  "experience_level": string,
  "projects": string[],
  "availability": string,
  "match_reason": string
}}"#
    )
}

/// User turn for matching. Replace `{query}` and `{profiles_json}` before sending.
pub const MATCH_PROMPT_TEMPLATE: &str =
    "User Query: \"{query}\"\n\nStudent Database:\n{profiles_json}";

/// Per-item response schema, all fields required.
pub fn recommendation_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "id": { "type": "STRING" },
                "name": { "type": "STRING" },
                "headline": { "type": "STRING" },
                "skills": { "type": "ARRAY", "items": { "type": "STRING" } },
                "experience_level": { "type": "STRING" },
                "projects": { "type": "ARRAY", "items": { "type": "STRING" } },
                "availability": { "type": "STRING" },
                "match_reason": { "type": "STRING" }
            },
            "required": [
                "id",
                "name",
                "headline",
                "skills",
                "experience_level",
                "projects",
                "availability",
                "match_reason"
            ]
        }
    })
}

/// System instruction for bio normalization.
pub const SUMMARY_SYSTEM: &str =
    "You are a professional technical editor. Maintain a high-quality LinkedIn-style tone.";

/// Bio normalization prompt. Replace `{raw_text}` before sending.
pub const SUMMARY_PROMPT_TEMPLATE: &str = "Convert the following raw student bio into a \
    professional, concise, industry-standard summary for a technical collaboration platform. \
    Focus on technical clarity and punchy delivery. Do not invent new skills.\n\n\
    Raw Text: \"{raw_text}\"";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_requires_every_property() {
        let schema = recommendation_schema();
        let properties = schema["items"]["properties"].as_object().unwrap();
        let required: Vec<&str> = schema["items"]["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(properties.len(), required.len());
        for key in properties.keys() {
            assert!(required.contains(&key.as_str()), "{key} not required");
        }
    }

    #[test]
    fn test_system_instruction_carries_rules() {
        let system = match_system_instruction();
        assert!(system.contains(PRODUCT_NAME));
        assert!(system.contains("NEVER fabricate"));
        assert!(system.contains("match_reason"));
        assert!(system.contains("Rank results by relevance"));
        // format! braces escaped correctly
        assert!(system.contains("{\n  \"id\": string,"));
    }

    #[test]
    fn test_prompt_templates_have_placeholders() {
        assert!(MATCH_PROMPT_TEMPLATE.contains("{query}"));
        assert!(MATCH_PROMPT_TEMPLATE.contains("{profiles_json}"));
        assert!(SUMMARY_PROMPT_TEMPLATE.contains("{raw_text}"));
    }
}
