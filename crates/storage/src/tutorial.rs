use std::sync::Arc;

use g3_core::model::{Checkpoints, Language};
use tracing::{debug, warn};

use crate::repository::{KeyValueRepository, StorageError};

/// Record holding the serialized checkpoint set.
pub const PROGRESS_KEY: &str = "tutorialProgress";
/// Record holding the chosen tutorial language.
pub const LANGUAGE_KEY: &str = "tutorialLanguage";

/// Typed access to the two tutorial records.
#[derive(Clone)]
pub struct TutorialProgressStore {
    records: Arc<dyn KeyValueRepository>,
}

impl TutorialProgressStore {
    #[must_use]
    pub fn new(records: Arc<dyn KeyValueRepository>) -> Self {
        Self { records }
    }

    /// Load saved progress, `None` when nothing was ever saved.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` if the record is not a JSON object
    /// of flags, or other storage errors.
    pub async fn load_checkpoints(&self) -> Result<Option<Checkpoints>, StorageError> {
        let Some(raw) = self.records.get(PROGRESS_KEY).await? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|err| StorageError::Serialization(err.to_string()))
    }

    /// Replace the saved progress with `checkpoints`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be written.
    pub async fn save_checkpoints(&self, checkpoints: &Checkpoints) -> Result<(), StorageError> {
        let raw = serde_json::to_string(checkpoints)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        self.records.put(PROGRESS_KEY, &raw).await?;
        debug!(reached = checkpoints.set_count(), "saved tutorial progress");
        Ok(())
    }

    /// Load the chosen language, `None` when none was saved.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` for an unrecognised language, or
    /// other storage errors.
    pub async fn load_language(&self) -> Result<Option<Language>, StorageError> {
        let Some(raw) = self.records.get(LANGUAGE_KEY).await? else {
            return Ok(None);
        };
        raw.parse::<Language>()
            .map(Some)
            .map_err(|err| StorageError::Serialization(err.to_string()))
    }

    /// Saved progress, or fresh progress when it is missing or unreadable.
    pub async fn load_checkpoints_or_default(&self) -> Checkpoints {
        match self.load_checkpoints().await {
            Ok(saved) => saved.unwrap_or_default(),
            Err(err) => {
                warn!(error = %err, "could not read tutorial progress, starting fresh");
                Checkpoints::default()
            }
        }
    }

    /// Saved language, or the default when it is missing or unreadable.
    pub async fn load_language_or_default(&self) -> Language {
        match self.load_language().await {
            Ok(saved) => saved.unwrap_or_default(),
            Err(err) => {
                warn!(error = %err, "could not read tutorial language, using default");
                Language::default()
            }
        }
    }

    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be written.
    pub async fn save_language(&self, language: Language) -> Result<(), StorageError> {
        self.records.put(LANGUAGE_KEY, language.as_str()).await
    }

    /// Delete both tutorial records. Both deletes are attempted even when the
    /// first one fails.
    ///
    /// # Errors
    ///
    /// Returns the first `StorageError` if either record cannot be removed.
    pub async fn clear(&self) -> Result<(), StorageError> {
        let progress = self.records.delete(PROGRESS_KEY).await;
        let language = self.records.delete(LANGUAGE_KEY).await;
        progress.and(language)?;
        debug!("cleared tutorial progress");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryRepository;
    use async_trait::async_trait;
    use g3_core::model::Checkpoint;

    /// Fails every delete of the progress record.
    struct StuckProgress(InMemoryRepository);

    #[async_trait]
    impl KeyValueRepository for StuckProgress {
        async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.0.get(key).await
        }

        async fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.0.put(key, value).await
        }

        async fn delete(&self, key: &str) -> Result<(), StorageError> {
            if key == PROGRESS_KEY {
                return Err(StorageError::Connection("disk gone".into()));
            }
            self.0.delete(key).await
        }
    }

    fn store() -> (InMemoryRepository, TutorialProgressStore) {
        let repo = InMemoryRepository::new();
        let store = TutorialProgressStore::new(Arc::new(repo.clone()));
        (repo, store)
    }

    #[tokio::test]
    async fn empty_store_has_no_progress() {
        let (_, store) = store();
        assert_eq!(store.load_checkpoints().await.unwrap(), None);
        assert_eq!(store.load_language().await.unwrap(), None);
    }

    #[tokio::test]
    async fn progress_round_trips_as_json_object() {
        let (repo, store) = store();
        let cp = Checkpoints::new()
            .with(Checkpoint::LanguageSelected)
            .with(Checkpoint::ComicOpened);
        store.save_checkpoints(&cp).await.unwrap();

        let raw = repo.get(PROGRESS_KEY).await.unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["comicOpened"], true);
        assert_eq!(json["wordClicked"], false);

        assert_eq!(store.load_checkpoints().await.unwrap(), Some(cp));
    }

    #[tokio::test]
    async fn malformed_progress_is_a_serialization_error() {
        let (repo, store) = store();
        repo.put(PROGRESS_KEY, "{not json").await.unwrap();
        let err = store.load_checkpoints().await.unwrap_err();
        assert!(matches!(err, StorageError::Serialization(_)));
    }

    #[tokio::test]
    async fn language_is_stored_as_plain_string() {
        let (repo, store) = store();
        store.save_language(Language::Telugu).await.unwrap();
        assert_eq!(
            repo.get(LANGUAGE_KEY).await.unwrap().as_deref(),
            Some("telugu")
        );
        assert_eq!(store.load_language().await.unwrap(), Some(Language::Telugu));

        repo.put(LANGUAGE_KEY, "klingon").await.unwrap();
        assert!(matches!(
            store.load_language().await,
            Err(StorageError::Serialization(_))
        ));
    }

    #[tokio::test]
    async fn clear_removes_both_records() {
        let (repo, store) = store();
        store
            .save_checkpoints(&Checkpoints::new().with(Checkpoint::LanguageSelected))
            .await
            .unwrap();
        store.save_language(Language::English).await.unwrap();

        store.clear().await.unwrap();
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn clear_still_removes_language_when_progress_delete_fails() {
        let repo = InMemoryRepository::new();
        let store = TutorialProgressStore::new(Arc::new(StuckProgress(repo.clone())));
        store
            .save_checkpoints(&Checkpoints::new().with(Checkpoint::LanguageSelected))
            .await
            .unwrap();
        store.save_language(Language::Telugu).await.unwrap();

        let err = store.clear().await.unwrap_err();
        assert!(matches!(err, StorageError::Connection(_)));
        assert_eq!(repo.get(LANGUAGE_KEY).await.unwrap(), None);
        assert!(repo.get(PROGRESS_KEY).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn unreadable_records_fall_back_to_defaults() {
        let (repo, store) = store();
        repo.put(PROGRESS_KEY, "{not json").await.unwrap();
        repo.put(LANGUAGE_KEY, "klingon").await.unwrap();

        assert_eq!(store.load_checkpoints_or_default().await, Checkpoints::default());
        assert_eq!(store.load_language_or_default().await, Language::default());
    }

    #[tokio::test]
    async fn saved_records_load_without_fallback() {
        let (_, store) = store();
        let cp = Checkpoints::new().with(Checkpoint::ComicOpened);
        store.save_checkpoints(&cp).await.unwrap();
        store.save_language(Language::Telugu).await.unwrap();

        assert_eq!(store.load_checkpoints_or_default().await, cp);
        assert_eq!(store.load_language_or_default().await, Language::Telugu);
    }
}
