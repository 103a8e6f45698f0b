use crate::domain::ProviderId;
use crate::providers::error::ProviderError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

pub(crate) fn build_client(timeout_secs: u64) -> anyhow::Result<reqwest::Client> {
    use anyhow::Context;

    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .context("failed to build provider http client")
}

/// Single POST exchange with a provider. Transport failures are
/// `Unreachable`; anything that answers but is not a JSON array of `R` is
/// `ResponseInvalid`. No retries.
pub(crate) async fn post_for_records<B, R>(
    http: &reqwest::Client,
    provider: ProviderId,
    endpoint: &str,
    body: &B,
) -> Result<Vec<R>, ProviderError>
where
    B: Serialize + ?Sized,
    R: DeserializeOwned,
{
    let res = http
        .post(endpoint)
        .json(body)
        .send()
        .await
        .map_err(|e| ProviderError::unreachable(provider, format!("request failed: {e}")))?;

    let status = res.status();
    let text = res.text().await.map_err(|e| {
        ProviderError::unreachable(provider, format!("failed to read response body: {e}"))
    })?;

    if !status.is_success() {
        return Err(ProviderError::response_invalid(
            provider,
            format!("status={status} body={text}"),
        ));
    }

    serde_json::from_str::<Vec<R>>(&text).map_err(|e| {
        ProviderError::response_invalid(provider, format!("unexpected response body ({e}): {text}"))
    })
}
