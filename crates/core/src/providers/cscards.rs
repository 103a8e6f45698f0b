use crate::config::Settings;
use crate::domain::{ApplicantProfile, Offer, ProviderId};
use crate::providers::error::ProviderError;
use crate::providers::http::{build_client, post_for_records};
use crate::providers::OfferProvider;
use crate::scoring::eligibility_score;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CsCardsRequest {
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    pub credit_score: i64,
}

impl From<&ApplicantProfile> for CsCardsRequest {
    fn from(profile: &ApplicantProfile) -> Self {
        Self {
            full_name: profile.full_name(),
            date_of_birth: profile.dob.clone(),
            credit_score: profile.credit_score,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CsCardsRecord {
    pub card_name: String,
    pub url: String,
    pub apr: f64,
    pub eligibility: f64,
    #[serde(default)]
    pub features: Option<Vec<String>>,
}

impl CsCardsRecord {
    pub fn into_offer(self) -> Offer {
        Offer {
            provider: ProviderId::CSCards,
            card_score: eligibility_score(self.eligibility, self.apr),
            name: self.card_name,
            apply_url: self.url,
            apr: self.apr,
            features: self.features.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CsCardsProvider {
    http: reqwest::Client,
    endpoint: String,
}

impl CsCardsProvider {
    pub fn new(http: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let endpoint = settings.require_cscards_endpoint()?;
        let http = build_client(settings.provider_timeout_secs)?;
        Ok(Self::new(http, endpoint))
    }
}

#[async_trait::async_trait]
impl OfferProvider for CsCardsProvider {
    fn provider(&self) -> ProviderId {
        ProviderId::CSCards
    }

    async fn fetch_offers(&self, profile: &ApplicantProfile) -> Result<Vec<Offer>, ProviderError> {
        let request = CsCardsRequest::from(profile);
        let records: Vec<CsCardsRecord> =
            post_for_records(&self.http, self.provider(), &self.endpoint, &request).await?;

        tracing::debug!(provider = %self.provider(), records = records.len(), "provider answered");
        Ok(records.into_iter().map(CsCardsRecord::into_offer).collect())
    }
}
