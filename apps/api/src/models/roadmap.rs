use serde::{Deserialize, Serialize};

/// Skill gap analysis toward the primary career goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roadmap {
    pub goal: String,
    pub skills: Vec<RoadmapSkill>,
}

/// One required skill and whether the student already covers it.
///
/// `suggestion` is present exactly when `has` is false. Build values through
/// [`RoadmapSkill::owned`] and [`RoadmapSkill::missing`] to keep it that way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapSkill {
    pub name: String,
    pub has: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl RoadmapSkill {
    pub fn owned(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            has: true,
            suggestion: None,
        }
    }

    pub fn missing(name: impl Into<String>, suggestion: String) -> Self {
        Self {
            name: name.into(),
            has: false,
            suggestion: Some(suggestion),
        }
    }
}

impl Roadmap {
    /// Skills the student still needs to pick up, in roadmap order.
    pub fn gaps(&self) -> impl Iterator<Item = &RoadmapSkill> {
        self.skills.iter().filter(|s| !s.has)
    }

    /// Fraction of required skills already covered. An empty roadmap is 0.0.
    pub fn coverage(&self) -> f32 {
        if self.skills.is_empty() {
            return 0.0;
        }
        let owned = self.skills.iter().filter(|s| s.has).count();
        owned as f32 / self.skills.len() as f32
    }
}
