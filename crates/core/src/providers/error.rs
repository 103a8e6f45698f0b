use crate::domain::ProviderId;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderErrorKind {
    /// Connection failed, timed out, or the body could not be read.
    Unreachable,
    /// The provider answered, but not with a decodable list of offers.
    ResponseInvalid,
}

impl ProviderErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderErrorKind::Unreachable => "unreachable",
            ProviderErrorKind::ResponseInvalid => "response_invalid",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProviderError {
    pub provider: ProviderId,
    pub kind: ProviderErrorKind,
    pub detail: String,
}

impl ProviderError {
    pub fn unreachable(provider: ProviderId, detail: impl Into<String>) -> Self {
        Self {
            provider,
            kind: ProviderErrorKind::Unreachable,
            detail: detail.into(),
        }
    }

    pub fn response_invalid(provider: ProviderId, detail: impl Into<String>) -> Self {
        Self {
            provider,
            kind: ProviderErrorKind::ResponseInvalid,
            detail: detail.into(),
        }
    }
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unable to retrieve {} (kind={}): {}",
            self.provider,
            self.kind.as_str(),
            self.detail
        )
    }
}

impl std::error::Error for ProviderError {}
