use app_state::AppSettings;
use axum::extract::FromRef;
use color_analysis::ColorClassifier;
use std::sync::Arc;

#[derive(Clone)]
pub struct ApiContext {
    /// Trained once at startup, read-only afterwards.
    pub classifier: Arc<ColorClassifier>,
    pub settings: AppSettings,
    /// Number of rows the classifier was trained on.
    pub sample_count: usize,
}

impl ApiContext {
    #[must_use]
    pub fn new(classifier: ColorClassifier, settings: AppSettings, sample_count: usize) -> Self {
        Self {
            classifier: Arc::new(classifier),
            settings,
            sample_count,
        }
    }
}

impl FromRef<ApiContext> for Arc<ColorClassifier> {
    fn from_ref(state: &ApiContext) -> Self {
        state.classifier.clone()
    }
}

impl FromRef<ApiContext> for AppSettings {
    fn from_ref(state: &ApiContext) -> Self {
        state.settings.clone()
    }
}
