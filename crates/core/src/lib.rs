pub mod aggregate;
pub mod domain;
pub mod providers;
pub mod scoring;

#[cfg(test)]
pub(crate) mod test_support;

pub mod config {
    use anyhow::Context;

    const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 30;

    #[derive(Debug, Clone)]
    pub struct Settings {
        pub cscards_endpoint: Option<String>,
        pub scoredcards_endpoint: Option<String>,
        pub provider_timeout_secs: u64,
        pub sentry_dsn: Option<String>,
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            let provider_timeout_secs = match std::env::var("PROVIDER_TIMEOUT_SECS") {
                Ok(raw) => raw
                    .trim()
                    .parse::<u64>()
                    .with_context(|| format!("PROVIDER_TIMEOUT_SECS is not a number: {raw}"))?,
                Err(_) => DEFAULT_PROVIDER_TIMEOUT_SECS,
            };

            Ok(Self {
                cscards_endpoint: non_empty_var("CSCARDS_ENDPOINT"),
                scoredcards_endpoint: non_empty_var("SCOREDCARDS_ENDPOINT"),
                provider_timeout_secs,
                sentry_dsn: non_empty_var("SENTRY_DSN"),
            })
        }

        pub fn require_cscards_endpoint(&self) -> anyhow::Result<&str> {
            self.cscards_endpoint
                .as_deref()
                .context("CSCARDS_ENDPOINT is required")
        }

        pub fn require_scoredcards_endpoint(&self) -> anyhow::Result<&str> {
            self.scoredcards_endpoint
                .as_deref()
                .context("SCOREDCARDS_ENDPOINT is required")
        }
    }

    fn non_empty_var(key: &str) -> Option<String> {
        std::env::var(key)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

}
