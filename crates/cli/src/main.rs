use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cardrank_core::aggregate::Aggregator;
use cardrank_core::domain::ApplicantProfile;

#[derive(Debug, Parser)]
#[command(name = "cardrank_cli", about = "Rank credit-card offers for one applicant")]
struct Args {
    /// JSON file holding the applicant profile. Overrides the individual flags.
    #[arg(long)]
    profile: Option<PathBuf>,

    #[arg(long, required_unless_present = "profile")]
    first_name: Option<String>,

    #[arg(long, required_unless_present = "profile")]
    last_name: Option<String>,

    /// Date of birth, forwarded as-is (e.g. 1991/04/18).
    #[arg(long)]
    dob: Option<String>,

    #[arg(long, required_unless_present = "profile")]
    credit_score: Option<i64>,

    /// e.g. FULL_TIME
    #[arg(long)]
    employment_status: Option<String>,

    #[arg(long, required_unless_present = "profile")]
    salary: Option<i64>,
}

impl Args {
    fn into_profile(self) -> anyhow::Result<ApplicantProfile> {
        if let Some(path) = self.profile {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            return serde_json::from_str(&raw)
                .with_context(|| format!("{} is not a valid applicant profile", path.display()));
        }

        Ok(ApplicantProfile {
            first_name: self.first_name.context("--first-name is required")?,
            last_name: self.last_name.context("--last-name is required")?,
            dob: self.dob,
            credit_score: self.credit_score.context("--credit-score is required")?,
            employment_status: self.employment_status,
            salary: self.salary.context("--salary is required")?,
        })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = cardrank_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer())
        .init();

    let profile = Args::parse().into_profile()?;
    let aggregator = Aggregator::from_settings(&settings)?;

    match aggregator.rank(&profile).await {
        Ok(offers) => {
            tracing::info!(offers = offers.len(), "ranking complete");
            println!("{}", serde_json::to_string_pretty(&offers)?);
            Ok(())
        }
        Err(err) => {
            let err = anyhow::Error::new(err);
            sentry_anyhow::capture_anyhow(&err);
            tracing::error!(error = %err, "ranking failed");
            Err(err)
        }
    }
}

fn init_sentry(settings: &cardrank_core::config::Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}
