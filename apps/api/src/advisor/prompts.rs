// All LLM prompt constants for the advisor module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// Role description for recommendation generation. `JSON_ONLY_SYSTEM` is appended at call time.
pub const RECOMMENDATION_SYSTEM: &str =
    "You are an experienced academic and career advisor for university students. \
    Assess how ready a student is for their desired role and recommend concrete next steps.";

/// Recommendation prompt template. Replace `{profile}` before sending.
pub const RECOMMENDATION_PROMPT_TEMPLATE: &str = r#"Analyze the following student profile and produce personalized recommendations.

STUDENT PROFILE:
{profile}

Return a JSON object with this EXACT schema (no extra fields):
{
  "readiness": {
    "score": 72,
    "summary": "Two or three sentences on how prepared the student is for the desired role."
  },
  "courses": [
    {
      "id": "CS224N",
      "title": "Natural Language Processing with Deep Learning",
      "rationale": "Why this course closes a gap for the desired role.",
      "url": "https://example.edu/cs224n"
    }
  ],
  "careerPaths": {
    "primary": {
      "title": "AI Research Scientist",
      "description": "What the role involves and why it fits the student.",
      "steps": ["Concrete step 1", "Concrete step 2"]
    },
    "alternatives": [
      {"title": "Machine Learning Engineer", "description": "Why this is a reasonable alternative."}
    ]
  },
  "universityResources": [
    {"name": "AI Research Lab", "description": "How the student can use it.", "type": "Lab"}
  ],
  "requiredSkills": ["Natural Language Processing", "TensorFlow"]
}

Rules:
- "score" is a number from 0 to 100.
- Recommend 3 to 5 courses. "url" may be omitted when unknown.
- "primary.title" is the career path that best matches the desired role.
- Give 4 to 6 ordered steps for the primary path and 1 to 3 alternatives.
- "type" is one of: Lab, Club, Service, Program, Library, Other.
- "requiredSkills" lists 5 to 10 skills the primary path needs, most important first.
  Use short canonical skill names (e.g. "React", "Statistics", "Docker").
"#;
