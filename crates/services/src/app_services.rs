use std::sync::Arc;

use storage::TutorialProgressStore;
use storage::repository::Storage;
use tracing::info;

use crate::error::AppServicesError;
use crate::inference::{HttpInferenceClient, InferenceClient, InferenceConfig};
use crate::quiz::QuizService;
use crate::tutorial::{StepPresenter, TutorialEngine};

/// Assembles app-facing services over one storage backend.
#[derive(Clone)]
pub struct AppServices {
    progress: TutorialProgressStore,
    quiz: Arc<QuizService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// Passage generation uses the model server named by `G3_AI_BASE_URL`
    /// when it is set.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(db_url: &str) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_storage(&storage, InferenceConfig::from_env()))
    }

    /// Build services over existing storage.
    #[must_use]
    pub fn from_storage(storage: &Storage, inference: Option<InferenceConfig>) -> Self {
        let progress = TutorialProgressStore::new(Arc::clone(&storage.records));
        let inference: Option<Arc<dyn InferenceClient>> = inference.map(|config| {
            info!(base_url = %config.base_url, model = %config.model, "passage generation enabled");
            Arc::new(HttpInferenceClient::new(Some(config))) as Arc<dyn InferenceClient>
        });
        let quiz = Arc::new(QuizService::new(inference));
        Self { progress, quiz }
    }

    /// A fresh engine over the shared progress records.
    #[must_use]
    pub fn tutorial_engine<P: StepPresenter>(&self, presenter: P) -> TutorialEngine<P> {
        TutorialEngine::new(self.progress.clone(), presenter)
    }

    #[must_use]
    pub fn progress(&self) -> TutorialProgressStore {
        self.progress.clone()
    }

    #[must_use]
    pub fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }
}
