use color_eyre::Result;
use colored::Colorize;
use std::future::Future;
use std::time::Instant;
use tracing_subscriber::{EnvFilter, fmt};

#[macro_export]
macro_rules! run_test {
    ($call:expr) => {
        $crate::runner::orchestration_utils::run_test_impl(stringify!($call), $call)
    };
}

/// Runs every listed test against the context, then prints a summary.
///
/// A failing test does not stop the suite. The suite returns an error naming
/// all failed tests.
#[macro_export]
macro_rules! execute_suite {
    ($context:expr, [ $($test_fn:ident),* $(,)? ]) => {{
        let mut summary = $crate::runner::orchestration_utils::SuiteSummary::start();
        $(
            let outcome = run_test!($test_fn($context)).await;
            summary.record(stringify!($test_fn), outcome.is_ok());
        )*
        summary.finish()?;
    }};
}

pub struct SuiteSummary {
    started: Instant,
    passed: usize,
    failed: Vec<&'static str>,
}

impl SuiteSummary {
    #[must_use]
    pub fn start() -> Self {
        println!();
        Self {
            started: Instant::now(),
            passed: 0,
            failed: Vec::new(),
        }
    }

    pub fn record(&mut self, name: &'static str, passed: bool) {
        if passed {
            self.passed += 1;
        } else {
            self.failed.push(name);
        }
    }

    pub fn finish(self) -> Result<()> {
        let total = self.passed + self.failed.len();
        println!("{}", "─".repeat(60).truecolor(80, 80, 80));
        println!(
            "{} {}/{} tests passed in {:.2?}.",
            " SUMMARY ".on_purple().black().bold(),
            self.passed,
            total,
            self.started.elapsed()
        );
        for name in &self.failed {
            println!("{} {}", " FAILED ".on_red().black().bold(), name.red());
        }
        println!("{}", "─".repeat(60).truecolor(80, 80, 80));
        println!();

        if self.failed.is_empty() {
            Ok(())
        } else {
            Err(color_eyre::eyre::eyre!("Failed tests: {}", self.failed.join(", ")))
        }
    }
}

/// Runs one test with a colored banner and its timing.
pub async fn run_test_impl<Fut>(raw_name: &str, test: Fut) -> Result<()>
where
    Fut: Future<Output = Result<()>>,
{
    let pretty_name = raw_name.split('(').next().unwrap_or(raw_name).trim();

    println!("{}", "─".repeat(60).truecolor(80, 80, 80));
    println!(
        "{} {}",
        " RUNNING ".on_cyan().black().bold(),
        pretty_name.cyan().bold()
    );

    let start_time = Instant::now();
    let result = test.await;
    let elapsed = start_time.elapsed();

    match &result {
        Ok(()) => println!(
            "{} {} ({:.2?})",
            " PASSED ".on_green().black().bold(),
            pretty_name.green(),
            elapsed
        ),
        Err(e) => {
            println!(
                "{} {} ({:.2?})",
                " FAILED ".on_red().black().bold(),
                pretty_name.red(),
                elapsed
            );
            println!("\n{e:?}");
        }
    }

    result
}

pub fn setup_tracing_and_panic_handling() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,api=debug,common_services=debug,hyper=error,reqwest=error".into());

    fmt()
        .with_env_filter(filter)
        .compact()
        .with_target(false)
        .with_test_writer()
        .init();

    color_eyre::install().expect("Failed to install color_eyre");
}
