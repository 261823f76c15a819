use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pulsefolio_core::snapshot::snapshots_from_json;
use pulsefolio_core::{AnalyticsSettings, BenchmarkKey, Period, PerformanceService, PerformanceView};

const USAGE: &str = "usage: pulsefolio <snapshots.json> [period] [benchmark]";

pub fn init_tracing() {
    let log_format =
        std::env::var("PULSEFOLIO_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false).with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    pub snapshots: PathBuf,
    pub period: Option<Period>,
    pub benchmark: Option<BenchmarkKey>,
}

impl Args {
    pub fn parse<I>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let Some(snapshots) = args.next() else {
            bail!(USAGE);
        };
        let period = args
            .next()
            .map(|raw| raw.parse::<Period>())
            .transpose()
            .context("invalid period")?;
        let benchmark = args
            .next()
            .map(|raw| raw.parse::<BenchmarkKey>())
            .transpose()
            .context("invalid benchmark")?;
        if args.next().is_some() {
            bail!(USAGE);
        }

        Ok(Self {
            snapshots: PathBuf::from(snapshots),
            period,
            benchmark,
        })
    }
}

/// Settings from `PULSEFOLIO_SETTINGS` when set, else environment overrides.
pub fn load_settings() -> anyhow::Result<AnalyticsSettings> {
    match std::env::var("PULSEFOLIO_SETTINGS") {
        Ok(path) => {
            tracing::info!("Loading settings from {}", path);
            AnalyticsSettings::from_json_file(&path)
                .with_context(|| format!("failed to load settings from {}", path))
        }
        Err(_) => AnalyticsSettings::from_env().context("invalid PULSEFOLIO_* settings"),
    }
}

pub fn read_snapshots(path: &Path) -> anyhow::Result<Vec<pulsefolio_core::Snapshot>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    snapshots_from_json(&raw).with_context(|| format!("invalid snapshots in {}", path.display()))
}

pub fn run(args: &Args, settings: &AnalyticsSettings) -> anyhow::Result<PerformanceView> {
    let snapshots = read_snapshots(&args.snapshots)?;
    let period = args.period.unwrap_or(settings.default_period);
    let benchmark = args.benchmark.unwrap_or(settings.default_benchmark);
    tracing::info!(
        "Building {} view against {} from {} snapshots",
        period,
        benchmark,
        snapshots.len()
    );

    let service = PerformanceService::new(settings);
    Ok(service.build_view_today(&snapshots, period, benchmark))
}
