// Shared prompt constants and prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Renders the student profile as the context block shared by the
/// recommendation and chat prompts.
pub fn profile_context(profile: &crate::models::profile::StudentProfile) -> String {
    let mut context = format!(
        "Major: {}\nGPA: {}\nProject keywords: {}\nDesired role: {}",
        profile.major, profile.gpa, profile.project_keywords, profile.desired_role
    );
    if let Some(resume) = profile.resume_text.as_deref().filter(|r| !r.trim().is_empty()) {
        context.push_str("\nResume:\n");
        context.push_str(resume.trim());
    }
    context
}
