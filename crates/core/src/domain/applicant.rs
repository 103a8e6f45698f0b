use serde::{Deserialize, Serialize};

/// Applicant details as received from the caller. Values are forwarded to the
/// providers untouched; `dob` and `employment_status` stay optional so that a
/// missing value reaches the provider as a missing field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantProfile {
    #[serde(rename = "firstname")]
    pub first_name: String,
    #[serde(rename = "lastname")]
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
    #[serde(rename = "credit-score")]
    pub credit_score: i64,
    #[serde(
        rename = "employment-status",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub employment_status: Option<String>,
    pub salary: i64,
}

impl ApplicantProfile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
