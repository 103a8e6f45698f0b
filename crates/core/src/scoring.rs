//! Rank score shared by every provider.
//!
//! `score = floor(metric * (1 / apr)^2 * weight * 1000) / 1000`
//!
//! The weight lifts each provider's metric onto a common scale: CSCards reports
//! a raw eligibility value, ScoredCards an approval fraction in `[0, 1]`.
//!
//! An APR of exactly zero has no defined score (the result is not finite).
//! Providers are expected never to send one and the value is not guarded.

pub const CSCARDS_WEIGHT: f64 = 10.0;
pub const SCOREDCARDS_WEIGHT: f64 = 100.0;

const PRECISION: f64 = 1000.0;

pub fn score(metric: f64, apr: f64, weight: f64) -> f64 {
    let apr_factor = (1.0 / apr).powi(2);
    (metric * apr_factor * weight * PRECISION).floor() / PRECISION
}

pub fn eligibility_score(eligibility: f64, apr: f64) -> f64 {
    score(eligibility, apr, CSCARDS_WEIGHT)
}

pub fn approval_score(approval_rating: f64, apr: f64) -> f64 {
    score(approval_rating, apr, SCOREDCARDS_WEIGHT)
}
