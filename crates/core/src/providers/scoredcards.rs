use crate::config::Settings;
use crate::domain::{ApplicantProfile, Offer, ProviderId};
use crate::providers::error::ProviderError;
use crate::providers::http::{build_client, post_for_records};
use crate::providers::OfferProvider;
use crate::scoring::approval_score;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ScoredCardsRequest {
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    pub score: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_status: Option<String>,
    pub salary: i64,
}

impl From<&ApplicantProfile> for ScoredCardsRequest {
    fn from(profile: &ApplicantProfile) -> Self {
        Self {
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
            date_of_birth: profile.dob.clone(),
            score: profile.credit_score,
            employment_status: profile.employment_status.clone(),
            salary: profile.salary,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ScoredCardsRecord {
    pub card: String,
    pub apply_url: String,
    #[serde(rename = "annual-percentage-rate")]
    pub apr: f64,
    pub approval_rating: f64,
    #[serde(default)]
    pub attributes: Option<Vec<String>>,
    #[serde(default)]
    pub introductory_offers: Option<Vec<String>>,
}

impl ScoredCardsRecord {
    pub fn into_offer(self) -> Offer {
        // Attributes first, then intro offers; each keeps its own order.
        let features = self
            .attributes
            .into_iter()
            .flatten()
            .chain(self.introductory_offers.into_iter().flatten())
            .collect();

        Offer {
            provider: ProviderId::ScoredCards,
            card_score: approval_score(self.approval_rating, self.apr),
            name: self.card,
            apply_url: self.apply_url,
            apr: self.apr,
            features,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScoredCardsProvider {
    http: reqwest::Client,
    endpoint: String,
}

impl ScoredCardsProvider {
    pub fn new(http: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let endpoint = settings.require_scoredcards_endpoint()?;
        let http = build_client(settings.provider_timeout_secs)?;
        Ok(Self::new(http, endpoint))
    }
}

#[async_trait::async_trait]
impl OfferProvider for ScoredCardsProvider {
    fn provider(&self) -> ProviderId {
        ProviderId::ScoredCards
    }

    async fn fetch_offers(&self, profile: &ApplicantProfile) -> Result<Vec<Offer>, ProviderError> {
        let request = ScoredCardsRequest::from(profile);
        let records: Vec<ScoredCardsRecord> =
            post_for_records(&self.http, self.provider(), &self.endpoint, &request).await?;

        tracing::debug!(provider = %self.provider(), records = records.len(), "provider answered");
        Ok(records.into_iter().map(ScoredCardsRecord::into_offer).collect())
    }
}
