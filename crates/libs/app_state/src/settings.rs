use crate::{ApiSettings, LoggingSettings, RawSettings};
use color_analysis::TrainOptions;
use color_eyre::eyre::{Context, Report, Result};
use std::net::SocketAddr;
use std::path::{PathBuf, absolute};

#[derive(Debug, Clone)]
pub struct AppSettings {
    pub logging: LoggingSettings,
    pub api: ApiSettings,
    pub classifier: ClassifierSettings,
}

/// Where the training data lives and how the classifier is fitted.
#[derive(Debug, Clone)]
pub struct ClassifierSettings {
    /// Absolute path of the training CSV.
    pub samples_path: PathBuf,
    pub max_depth: usize,
    pub seed: u64,
    pub min_samples_split: usize,
}

impl TryFrom<RawSettings> for AppSettings {
    type Error = Report;

    fn try_from(raw: RawSettings) -> Result<Self> {
        let samples_path = absolute(&raw.classifier.samples_path).wrap_err_with(|| {
            format!(
                "Invalid classifier.samples_path: {}",
                raw.classifier.samples_path.display()
            )
        })?;
        let classifier = ClassifierSettings {
            samples_path,
            max_depth: raw.classifier.max_depth,
            seed: raw.classifier.seed,
            min_samples_split: raw.classifier.min_samples_split,
        };

        Ok(Self {
            logging: raw.logging,
            api: raw.api,
            classifier,
        })
    }
}

impl ClassifierSettings {
    #[must_use]
    pub const fn train_options(&self) -> TrainOptions {
        TrainOptions {
            max_depth: self.max_depth,
            seed: self.seed,
            min_samples_split: self.min_samples_split,
        }
    }
}

impl ApiSettings {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .wrap_err_with(|| format!("Invalid address: {}:{}", self.host, self.port))
    }

    #[must_use]
    pub const fn body_limit_bytes(&self) -> usize {
        self.body_limit_mb * 1024 * 1024
    }

    #[must_use]
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|origin| origin == "*")
    }
}
