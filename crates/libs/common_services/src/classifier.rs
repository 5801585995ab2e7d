use app_state::ClassifierSettings;
use color_analysis::{ColorClassifier, ColorSample, ColorSampleStore, TrainOptions};
use color_eyre::eyre::{Context, Result};
use std::time::Instant;
use tracing::{info, warn};

/// Loads the training CSV named in the settings.
pub fn load_samples(settings: &ClassifierSettings) -> Result<ColorSampleStore> {
    let store = ColorSampleStore::load(&settings.samples_path).wrap_err_with(|| {
        format!(
            "Cannot load color samples from {}",
            settings.samples_path.display()
        )
    })?;
    if store.dropped_rows() > 0 {
        warn!(
            "Dropped {} incomplete rows from {}",
            store.dropped_rows(),
            settings.samples_path.display()
        );
    }
    Ok(store)
}

/// Fits a classifier and logs how it went.
pub fn train_classifier(samples: &[ColorSample], options: &TrainOptions) -> Result<ColorClassifier> {
    let now = Instant::now();
    let classifier = ColorClassifier::train(samples, options).wrap_err("Cannot train color classifier")?;
    info!(
        "Trained color classifier on {} samples in {:?}: {} labels, depth {}, {} leaves",
        samples.len(),
        now.elapsed(),
        classifier.labels().len(),
        classifier.depth(),
        classifier.leaf_count()
    );
    Ok(classifier)
}

/// Loads the configured samples and trains on all of them.
pub fn load_classifier(settings: &ClassifierSettings) -> Result<(ColorClassifier, usize)> {
    let store = load_samples(settings)?;
    let classifier = train_classifier(store.samples(), &settings.train_options())?;
    Ok((classifier, store.len()))
}
