pub mod applicant;
pub mod offer;

pub use applicant::ApplicantProfile;
pub use offer::{Offer, ProviderId};
