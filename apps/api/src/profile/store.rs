use tokio::sync::RwLock;

use crate::models::profile::{ProfileUpdate, StudentProfile};

/// Holds the current, user-edited profile for one session.
///
/// Generation never reads the store directly: it receives a `snapshot()`
/// taken when the user triggered it.
#[derive(Debug, Default)]
pub struct ProfileStore {
    inner: RwLock<StudentProfile>,
}

impl ProfileStore {
    pub fn new(profile: StudentProfile) -> Self {
        Self {
            inner: RwLock::new(profile),
        }
    }

    pub async fn snapshot(&self) -> StudentProfile {
        self.inner.read().await.clone()
    }

    pub async fn replace(&self, profile: StudentProfile) -> StudentProfile {
        let mut current = self.inner.write().await;
        *current = profile;
        current.clone()
    }

    pub async fn update(&self, update: ProfileUpdate) -> StudentProfile {
        let mut current = self.inner.write().await;
        current.apply(update);
        current.clone()
    }

    pub async fn set_resume_text(&self, text: String) -> StudentProfile {
        let mut current = self.inner.write().await;
        current.resume_text = Some(text);
        current.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_snapshot_is_detached_from_later_edits() {
        let store = ProfileStore::default();
        store
            .update(ProfileUpdate {
                project_keywords: Some("react".to_string()),
                ..Default::default()
            })
            .await;

        let snapshot = store.snapshot().await;
        store
            .update(ProfileUpdate {
                project_keywords: Some("cobol".to_string()),
                ..Default::default()
            })
            .await;

        assert_eq!(snapshot.project_keywords, "react");
        assert_eq!(store.snapshot().await.project_keywords, "cobol");
    }

    #[tokio::test]
    async fn test_replace_overwrites_everything() {
        let store = ProfileStore::new(StudentProfile {
            major: "Biology".to_string(),
            resume_text: Some("old".to_string()),
            ..Default::default()
        });

        let replaced = store
            .replace(StudentProfile {
                major: "Chemistry".to_string(),
                ..Default::default()
            })
            .await;

        assert_eq!(replaced.major, "Chemistry");
        assert!(replaced.resume_text.is_none());
    }

    #[tokio::test]
    async fn test_set_resume_text() {
        let store = ProfileStore::default();
        let profile = store.set_resume_text("Projects: chatbot".to_string()).await;
        assert_eq!(profile.resume_text.as_deref(), Some("Projects: chatbot"));
    }
}
