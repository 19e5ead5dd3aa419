use std::fmt::Display;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChecksStatusError {
    /// Unknown check status.
    #[error("Unknown check status: {}", status)]
    UnknownChecksStatus { status: String },
}

/// Aggregated status of the check runs of a commit.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "snake_case")]
pub enum ChecksStatus {
    /// Every check run completed successfully.
    Success,
    /// At least one check run failed.
    Failure,
    /// No signal yet.
    #[default]
    Pending,
}

impl ChecksStatus {
    /// Convert check status to static str.
    pub fn to_str(self) -> &'static str {
        self.into()
    }
}

impl Display for ChecksStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_str())
    }
}

impl TryFrom<&str> for ChecksStatus {
    type Error = ChecksStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "success" => Ok(Self::Success),
            "failure" => Ok(Self::Failure),
            "pending" => Ok(Self::Pending),
            e => Err(ChecksStatusError::UnknownChecksStatus {
                status: e.to_string(),
            }),
        }
    }
}

impl From<ChecksStatus> for &'static str {
    fn from(check_status: ChecksStatus) -> Self {
        match check_status {
            ChecksStatus::Success => "success",
            ChecksStatus::Failure => "failure",
            ChecksStatus::Pending => "pending",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn str_conversions() {
        assert_eq!(ChecksStatus::Success.to_str(), "success");
        assert_eq!(ChecksStatus::Failure.to_string(), "failure");
        assert_eq!(ChecksStatus::default(), ChecksStatus::Pending);
        assert_eq!(
            ChecksStatus::try_from("pending").unwrap(),
            ChecksStatus::Pending
        );
        assert!(ChecksStatus::try_from("waiting").is_err());
    }
}
