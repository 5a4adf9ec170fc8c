use serde::{Deserialize, Serialize};

/// The student's self-described background. Every field is free text.
///
/// Handed to the recommendation gateway and chat initializer by value, so a
/// clone taken at the moment generation is triggered is the snapshot both
/// of them see.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    pub major: String,
    pub gpa: String,
    /// Comma-separated keywords describing past projects and technologies.
    pub project_keywords: String,
    pub desired_role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_text: Option<String>,
}

/// Partial profile edit. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub major: Option<String>,
    pub gpa: Option<String>,
    pub project_keywords: Option<String>,
    pub desired_role: Option<String>,
    /// An empty string clears the stored resume text.
    pub resume_text: Option<String>,
}

impl StudentProfile {
    pub fn apply(&mut self, update: ProfileUpdate) {
        if let Some(major) = update.major {
            self.major = major;
        }
        if let Some(gpa) = update.gpa {
            self.gpa = gpa;
        }
        if let Some(keywords) = update.project_keywords {
            self.project_keywords = keywords;
        }
        if let Some(role) = update.desired_role {
            self.desired_role = role;
        }
        if let Some(resume) = update.resume_text {
            self.resume_text = if resume.trim().is_empty() {
                None
            } else {
                Some(resume)
            };
        }
    }
}
