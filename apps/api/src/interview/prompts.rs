// LLM prompt constants for interview question generation.

/// Persona half of the system prompt; the JSON-only rules from
/// `llm_client::prompts` are appended at call time.
pub const QUESTION_PERSONA: &str =
    "You are an experienced technical interviewer preparing a mock interview.";

/// Question prompt template. Replace `{count}`, `{role}`, `{domain}`,
/// `{experience_years}` and `{skills}` before sending.
pub const QUESTION_PROMPT_TEMPLATE: &str = r#"Generate {count} interview questions for a {role} role.

Candidate context:
- Strongest skill area: {domain}
- Years of experience: {experience_years}
- Skills: {skills}

Include technical, behavioral, and scenario-based questions, pitched at the
candidate's experience level.

Return a JSON array with this EXACT schema (no extra fields):
[
  {"question": "...", "type": "technical|behavioral|scenario", "difficulty": "easy|medium|hard"}
]"#;
