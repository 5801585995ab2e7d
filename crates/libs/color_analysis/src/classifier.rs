use crate::error::{ColorError, Result};
use crate::samples::ColorSample;
use crate::tree::DecisionTree;
use common_types::RgbColor;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Hyperparameters for one training pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainOptions {
    /// Deepest level a leaf may sit at; the root is depth 0.
    pub max_depth: usize,
    /// Seeds the channel order tried at every split.
    pub seed: u64,
    /// Nodes with fewer samples than this become leaves.
    pub min_samples_split: usize,
}

impl Default for TrainOptions {
    fn default() -> Self {
        Self {
            max_depth: 8,
            seed: 20_251_025,
            min_samples_split: 2,
        }
    }
}

/// A frozen color-name classifier. Labels are kept in sorted order, which is
/// also the order used to break ties between equally likely names.
#[derive(Debug, Clone)]
pub struct ColorClassifier {
    labels: Vec<String>,
    tree: DecisionTree,
    options: TrainOptions,
}

impl ColorClassifier {
    /// Fits a decision tree on every sample, labelled by its name.
    ///
    /// # Errors
    ///
    /// Returns `InsufficientData` when fewer than two distinct names are present.
    pub fn train(samples: &[ColorSample], options: &TrainOptions) -> Result<Self> {
        let mut label_ids: BTreeMap<&str, usize> = samples
            .iter()
            .map(|sample| (sample.name.as_str(), 0))
            .collect();
        if label_ids.len() < 2 {
            return Err(ColorError::InsufficientData {
                found: label_ids.len(),
            });
        }
        for (id, slot) in label_ids.values_mut().enumerate() {
            *slot = id;
        }

        let features: Vec<[u8; 3]> = samples.iter().map(|s| s.rgb().channels()).collect();
        let targets: Vec<usize> = samples
            .iter()
            .map(|s| label_ids[s.name.as_str()])
            .collect();
        let tree = DecisionTree::fit(&features, &targets, label_ids.len(), options);
        let labels = label_ids.into_keys().map(str::to_owned).collect();

        Ok(Self {
            labels,
            tree,
            options: *options,
        })
    }

    /// Predicts the color name for any RGB triple. Always one of the training labels.
    #[must_use]
    pub fn predict(&self, rgb: RgbColor) -> &str {
        &self.labels[self.tree.predict(rgb.channels())]
    }

    /// Fraction of `samples` whose name is predicted correctly, `None` for an empty set.
    #[must_use]
    pub fn accuracy(&self, samples: &[ColorSample]) -> Option<f64> {
        if samples.is_empty() {
            return None;
        }
        let correct = samples
            .iter()
            .filter(|sample| self.predict(sample.rgb()) == sample.name)
            .count();
        Some(correct as f64 / samples.len() as f64)
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub const fn depth(&self) -> usize {
        self.tree.depth()
    }

    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.tree.leaf_count()
    }

    #[must_use]
    pub const fn options(&self) -> &TrainOptions {
        &self.options
    }
}

/// Shuffles `samples` with `seed` and splits off a held-out test set.
///
/// The training set gets `floor(train_fraction * n)` samples, the test set the rest.
#[must_use]
pub fn train_test_split(
    samples: &[ColorSample],
    train_fraction: f64,
    seed: u64,
) -> (Vec<ColorSample>, Vec<ColorSample>) {
    let mut shuffled = samples.to_vec();
    fastrand::Rng::with_seed(seed).shuffle(&mut shuffled);

    let n_train = ((shuffled.len() as f64) * train_fraction.clamp(0.0, 1.0)).floor() as usize;
    let test = shuffled.split_off(n_train.min(shuffled.len()));
    (shuffled, test)
}
