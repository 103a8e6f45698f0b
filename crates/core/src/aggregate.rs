use crate::config::Settings;
use crate::domain::{ApplicantProfile, Offer};
use crate::providers::{CsCardsProvider, OfferProvider, ProviderError, ScoredCardsProvider};
use futures::future::try_join_all;
use std::sync::Arc;

/// Fans a profile out to every provider and merges the answers into one
/// ranking. Provider order is the tie-break order.
#[derive(Clone)]
pub struct Aggregator {
    providers: Vec<Arc<dyn OfferProvider>>,
}

impl Aggregator {
    pub fn new(providers: Vec<Arc<dyn OfferProvider>>) -> Self {
        Self { providers }
    }

    /// CSCards first, then ScoredCards.
    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let cscards = CsCardsProvider::from_settings(settings)?;
        let scoredcards = ScoredCardsProvider::from_settings(settings)?;
        Ok(Self::new(vec![Arc::new(cscards), Arc::new(scoredcards)]))
    }

    /// All-or-nothing: the first provider failure fails the whole call and no
    /// offers are returned.
    pub async fn rank(&self, profile: &ApplicantProfile) -> Result<Vec<Offer>, ProviderError> {
        let fetches = self.providers.iter().map(|provider| async move {
            provider.fetch_offers(profile).await.map_err(|err| {
                tracing::warn!(
                    provider = %err.provider,
                    kind = err.kind.as_str(),
                    error = %err,
                    "provider fetch failed"
                );
                err
            })
        });

        // One result slot per provider, in provider order.
        let per_provider = try_join_all(fetches).await?;

        let total: usize = per_provider.iter().map(Vec::len).sum();
        let mut offers = Vec::with_capacity(total);
        for (provider, batch) in self.providers.iter().zip(per_provider) {
            tracing::debug!(provider = %provider.provider(), offers = batch.len(), "collected offers");
            offers.extend(batch);
        }

        let ranked = rank_offers(offers);
        tracing::info!(offers = ranked.len(), "ranked offers");
        Ok(ranked)
    }
}

/// Best score first. The sort is stable, so equal scores keep their incoming
/// order.
pub fn rank_offers(mut offers: Vec<Offer>) -> Vec<Offer> {
    offers.sort_by(|a, b| b.card_score.total_cmp(&a.card_score));
    offers
}
