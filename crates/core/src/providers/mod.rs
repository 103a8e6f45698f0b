use crate::domain::{ApplicantProfile, Offer, ProviderId};

pub mod cscards;
pub mod error;
mod http;
pub mod scoredcards;

pub use cscards::CsCardsProvider;
pub use error::{ProviderError, ProviderErrorKind};
pub use scoredcards::ScoredCardsProvider;

/// One upstream card provider: builds its own request from the profile and
/// normalizes whatever it returns into [`Offer`]s, preserving response order.
#[async_trait::async_trait]
pub trait OfferProvider: Send + Sync {
    fn provider(&self) -> ProviderId;

    async fn fetch_offers(&self, profile: &ApplicantProfile) -> Result<Vec<Offer>, ProviderError>;
}
