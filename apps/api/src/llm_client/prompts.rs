// Shared prompt constants and prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Product name the model is told it works for.
pub const PRODUCT_NAME: &str = "CampusTalent Hub";

/// Grounding rule shared by every prompt that receives student data.
pub const NO_FABRICATION_RULE: &str =
    "NEVER fabricate data. Use ONLY the profiles provided in the context.";

/// Skill normalization examples shared by matching prompts.
pub const SKILL_NORMALIZATION_RULE: &str =
    "Normalize skills (e.g., \"reactjs\" to \"React\", \"ml\" to \"Machine Learning\").";
