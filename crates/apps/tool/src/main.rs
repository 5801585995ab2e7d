mod commands;

use crate::commands::{evaluate, extract, parse_bbox, predict};
use app_state::{DEFAULT_SETTINGS_PATH, load_settings_from_path};
use clap::{Parser, Subcommand};
use color_eyre::Result;
use common_types::{BoundingBox, PredictionResult, RgbColor};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Offline color detection tools", long_about = None)]
struct Args {
    /// Settings file, environment overrides still apply.
    #[clap(long, default_value = DEFAULT_SETTINGS_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Predict the name of an RGB color.
    Predict {
        red: u8,
        green: u8,
        blue: u8,
        #[clap(long)]
        language: Option<String>,
    },
    /// Average the color of an image, or part of it, and predict its name.
    Extract {
        image: PathBuf,
        /// Region as `x,y,width,height` fractions of the image size.
        #[clap(long, value_parser = parse_bbox)]
        bbox: Option<BoundingBox>,
        #[clap(long)]
        language: Option<String>,
    },
    /// Train on part of the samples and report accuracy on the rest.
    Evaluate {
        #[clap(long, default_value_t = 0.8)]
        train_fraction: f64,
        /// Shuffle seed, defaults to the configured classifier seed.
        #[clap(long)]
        seed: Option<u64>,
    },
}

fn print_prediction(result: &PredictionResult) {
    match &result.localized {
        Some(localized) => println!("{} ({localized}) {}", result.prediction, result.rgb),
        None => println!("{} {}", result.prediction, result.rgb),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tool=info,common_services=info".into()),
        )
        .init();
    color_eyre::install()?;

    let args = Args::parse();
    let settings = load_settings_from_path(&args.config, true)?;

    match args.command {
        Command::Predict {
            red,
            green,
            blue,
            language,
        } => {
            let result = predict(&settings, RgbColor::new(red, green, blue), language.as_deref())?;
            print_prediction(&result);
        }
        Command::Extract {
            image,
            bbox,
            language,
        } => {
            let result = extract(&settings, &image, bbox, language.as_deref())?;
            print_prediction(&result);
        }
        Command::Evaluate {
            train_fraction,
            seed,
        } => {
            let seed = seed.unwrap_or(settings.classifier.seed);
            let evaluation = evaluate(&settings, train_fraction, seed)?;
            println!(
                "Accuracy: {:.4} ({} train, {} test, seed {seed})",
                evaluation.accuracy, evaluation.train_samples, evaluation.test_samples
            );
        }
    }

    Ok(())
}
