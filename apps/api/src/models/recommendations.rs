use serde::{Deserialize, Serialize};

/// Full advisory result returned by the recommendation gateway.
///
/// Produced wholesale per generation and never edited afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    pub readiness: Readiness,
    pub courses: Vec<CourseRecommendation>,
    pub career_paths: CareerPaths,
    pub university_resources: Vec<UniversityResource>,
    /// Skills the target role needs, in the gateway's priority order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_skills: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Readiness {
    pub score: f64,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecommendation {
    pub id: String,
    pub title: String,
    pub rationale: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerPaths {
    pub primary: PrimaryCareerPath,
    #[serde(default)]
    pub alternatives: Vec<CareerPath>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerPath {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimaryCareerPath {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub steps: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniversityResource {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub resource_type: String,
}
